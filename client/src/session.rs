//! Session controller.
//!
//! Owns the wallet connection lifecycle and mediates every contract call,
//! so the local cache only ever reflects confirmed on-chain state.

use parking_lot::{Mutex, RwLock};
use tracing::{debug, error, info, warn};

use crate::cache::{CachedProfile, ProfileCache};
use crate::draft::DraftProfile;
use crate::error::{Result, SessionError};
use crate::ledger::{AccountAddress, LedgerClient, ProfileData};

/// Wallet connection state.
///
/// A session starts `Disconnected` and becomes `Connected` once the user
/// authorizes an account. There is no disconnect transition; `Connected`
/// lasts for the rest of the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Disconnected,
    Connected { account: AccountAddress },
}

impl SessionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected { .. })
    }

    pub fn account(&self) -> Option<&AccountAddress> {
        match self {
            Self::Connected { account } => Some(account),
            Self::Disconnected => None,
        }
    }
}

/// Tuning knobs for a session.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Serialize mutating calls through a single in-flight slot.
    ///
    /// Off by default: two rapid mutations are both submitted and the
    /// ledger's own execution order decides what lands.
    pub single_flight: bool,
}

/// Mediates every contract call for one wallet session.
///
/// All methods take `&self`; mutating calls may overlap unless
/// [`SessionConfig::single_flight`] is set. Interior locks guard plain
/// data and are never held across an await point; only the optional
/// single-flight gate spans a full submit-and-confirm round trip.
pub struct SessionController<L> {
    ledger: L,
    state: RwLock<SessionState>,
    cache: Mutex<ProfileCache>,
    mutation_gate: tokio::sync::Mutex<()>,
    config: SessionConfig,
}

impl<L: LedgerClient> SessionController<L> {
    /// Create a disconnected session over a bound ledger client.
    ///
    /// The client is bound to its signer at construction and is the one
    /// handle every subsequent call goes through.
    pub fn new(ledger: L) -> Self {
        Self::with_config(ledger, SessionConfig::default())
    }

    pub fn with_config(ledger: L, config: SessionConfig) -> Self {
        Self {
            ledger,
            state: RwLock::new(SessionState::Disconnected),
            cache: Mutex::new(ProfileCache::new()),
            mutation_gate: tokio::sync::Mutex::new(()),
            config,
        }
    }

    /// Request wallet authorization and bind the first granted account.
    ///
    /// Leaves the session untouched on failure; calling again is the only
    /// retry path. On an already-connected session this is a no-op that
    /// returns the active account.
    pub async fn connect(&self) -> Result<AccountAddress> {
        if let Some(account) = self.active_account() {
            debug!(%account, "connect on an already-connected session");
            return Ok(account);
        }

        let accounts = self.ledger.request_accounts().await.map_err(|e| {
            error!(error = %e, "wallet connection failed");
            e
        })?;

        let account = accounts.into_iter().next().ok_or_else(|| {
            SessionError::AuthorizationFailed("wallet granted no accounts".to_string())
        })?;

        *self.state.write() = SessionState::Connected {
            account: account.clone(),
        };
        info!(%account, "wallet connected");
        Ok(account)
    }

    /// True once a wallet account has been authorized.
    pub fn is_connected(&self) -> bool {
        self.state.read().is_connected()
    }

    /// The authorized account, if any.
    pub fn active_account(&self) -> Option<AccountAddress> {
        self.state.read().account().cloned()
    }

    /// Snapshot of the locally tracked profiles, oldest first.
    pub fn profiles(&self) -> Vec<CachedProfile> {
        self.cache.lock().entries().to_vec()
    }

    /// Number of locally tracked profiles.
    pub fn profile_count(&self) -> usize {
        self.cache.lock().len()
    }

    /// Submit the draft as a new on-chain profile.
    ///
    /// The composed bio, privacy flag, and username go to the ledger; the
    /// picture stays local. The cache picks up the entry only after the
    /// ledger confirms the call, so any failure leaves it untouched.
    pub async fn create_profile(&self, draft: &DraftProfile) -> Result<()> {
        let account = self.require_connected()?;
        let _gate = self.acquire_gate().await;

        let bio = draft.compose_bio();
        debug!(%account, username = %draft.username, "submitting create-profile");
        let tx = self
            .ledger
            .submit_create_profile(&draft.username, &bio, draft.is_private)
            .await
            .map_err(|e| {
                error!(error = %e, "create-profile submission failed");
                e
            })?;

        self.ledger.await_confirmation(&tx).await.map_err(|e| {
            error!(tx = %tx.id, error = %e, "create-profile did not confirm");
            e
        })?;

        let mut cache = self.cache.lock();
        cache.push(CachedProfile {
            username: draft.username.clone(),
            bio,
            is_private: draft.is_private,
            picture: draft.picture.clone(),
        });
        info!(%account, username = %draft.username, tracked = cache.len(), "profile created");
        Ok(())
    }

    /// Delete the caller's on-chain profile and drop one cache entry.
    ///
    /// `index` selects which local mirror entry to drop; the contract call
    /// itself always deletes the signer's single profile. The index is
    /// checked before any ledger traffic.
    pub async fn delete_profile(&self, index: usize) -> Result<()> {
        let account = self.require_connected()?;

        let len = self.cache.lock().len();
        if index >= len {
            return Err(SessionError::InvalidCacheIndex { index, len });
        }

        let _gate = self.acquire_gate().await;

        debug!(%account, index, "submitting delete-profile");
        let tx = self.ledger.submit_delete_profile().await.map_err(|e| {
            error!(error = %e, "delete-profile submission failed");
            e
        })?;

        self.ledger.await_confirmation(&tx).await.map_err(|e| {
            error!(tx = %tx.id, error = %e, "delete-profile did not confirm");
            e
        })?;

        let mut cache = self.cache.lock();
        match cache.remove(index) {
            Some(dropped) => {
                info!(%account, index, username = %dropped.username, tracked = cache.len(), "profile deleted");
            }
            None => {
                // A racing delete can shrink the cache between the index
                // check and confirmation. The on-chain delete still went
                // through; only the mirror entry is already gone.
                warn!(%account, index, "confirmed delete had no cache entry to drop");
            }
        }
        Ok(())
    }

    /// Update the privacy flag on the caller's on-chain profile.
    ///
    /// The cache is left alone: entries mirror what was submitted at
    /// creation time, and nothing reads the flag back into them.
    pub async fn set_privacy(&self, is_private: bool) -> Result<()> {
        let account = self.require_connected()?;
        let _gate = self.acquire_gate().await;

        debug!(%account, is_private, "submitting set-privacy");
        let tx = self.ledger.submit_set_privacy(is_private).await.map_err(|e| {
            error!(error = %e, "set-privacy submission failed");
            e
        })?;

        self.ledger.await_confirmation(&tx).await.map_err(|e| {
            error!(tx = %tx.id, error = %e, "set-privacy did not confirm");
            e
        })?;

        info!(%account, is_private, "privacy updated on-chain");
        Ok(())
    }

    /// Read the profile stored for any address.
    ///
    /// Needs only the provider, not a connected account.
    pub async fn read_profile(&self, address: &str) -> Result<ProfileData> {
        self.ledger.get_profile(address).await
    }

    fn require_connected(&self) -> Result<AccountAddress> {
        self.active_account().ok_or_else(|| {
            SessionError::WalletUnavailable("no wallet account connected".to_string())
        })
    }

    async fn acquire_gate(&self) -> Option<tokio::sync::MutexGuard<'_, ()>> {
        if self.config.single_flight {
            Some(self.mutation_gate.lock().await)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_state_accessors() {
        let disconnected = SessionState::Disconnected;
        assert!(!disconnected.is_connected());
        assert!(disconnected.account().is_none());

        let connected = SessionState::Connected {
            account: "GACCT".to_string(),
        };
        assert!(connected.is_connected());
        assert_eq!(connected.account().map(String::as_str), Some("GACCT"));
    }

    #[test]
    fn test_default_config_allows_racing() {
        assert!(!SessionConfig::default().single_flight);
    }
}
