//! Ledger client port.
//!
//! The trait in this module is the boundary between the session layer and
//! the wallet-provided ledger connection. The wallet popup, signing UI,
//! and RPC transport all live behind this seam.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

/// Ledger account address, as returned by the wallet.
pub type AccountAddress = String;

/// A submitted-but-unconfirmed mutating call.
///
/// Returned by the submit methods and consumed by
/// [`LedgerClient::await_confirmation`]. Local state must not change while
/// a call is still pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTransaction {
    /// Opaque transaction identifier assigned by the ledger.
    pub id: String,
}

/// On-chain profile record, as read back from the contract.
///
/// Addresses with no stored profile read back as the empty record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileData {
    pub username: String,
    pub bio: String,
    pub is_private: bool,
}

impl ProfileData {
    /// True for the record the contract returns when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.username.is_empty() && self.bio.is_empty() && !self.is_private
    }
}

/// Connection to a wallet-backed ledger, bound to one signer.
///
/// Mutating calls are two-phase: `submit_*` resolves once the wallet has
/// signed and broadcast the call, [`await_confirmation`] resolves once the
/// ledger has finalized it. Profile pictures never cross this boundary.
///
/// [`await_confirmation`]: LedgerClient::await_confirmation
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Prompt the wallet for account authorization.
    async fn request_accounts(&self) -> Result<Vec<AccountAddress>>;

    /// Submit a create-profile call for the bound signer.
    async fn submit_create_profile(
        &self,
        username: &str,
        bio: &str,
        is_private: bool,
    ) -> Result<PendingTransaction>;

    /// Submit a set-privacy call for the bound signer.
    async fn submit_set_privacy(&self, is_private: bool) -> Result<PendingTransaction>;

    /// Submit a delete-profile call. Always targets the signer's own
    /// profile.
    async fn submit_delete_profile(&self) -> Result<PendingTransaction>;

    /// Wait until a submitted call is final on the ledger.
    async fn await_confirmation(&self, tx: &PendingTransaction) -> Result<()>;

    /// Read the profile stored for an address.
    async fn get_profile(&self, address: &str) -> Result<ProfileData>;
}

#[async_trait]
impl<T: LedgerClient + ?Sized> LedgerClient for Arc<T> {
    async fn request_accounts(&self) -> Result<Vec<AccountAddress>> {
        (**self).request_accounts().await
    }

    async fn submit_create_profile(
        &self,
        username: &str,
        bio: &str,
        is_private: bool,
    ) -> Result<PendingTransaction> {
        (**self)
            .submit_create_profile(username, bio, is_private)
            .await
    }

    async fn submit_set_privacy(&self, is_private: bool) -> Result<PendingTransaction> {
        (**self).submit_set_privacy(is_private).await
    }

    async fn submit_delete_profile(&self) -> Result<PendingTransaction> {
        (**self).submit_delete_profile().await
    }

    async fn await_confirmation(&self, tx: &PendingTransaction) -> Result<()> {
        (**self).await_confirmation(tx).await
    }

    async fn get_profile(&self, address: &str) -> Result<ProfileData> {
        (**self).get_profile(address).await
    }
}
