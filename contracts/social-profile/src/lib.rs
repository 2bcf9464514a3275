//! # Soroban Social Profile
//!
//! On-chain social media profile contract for the Soroban blockchain.
//!
//! Each address owns at most one profile: a username, a free-form bio, and
//! a privacy flag. The contract exposes four operations:
//!
//! - Create (or replace) the caller's profile
//! - Read any address's profile
//! - Update the caller's privacy flag
//! - Delete the caller's profile
//!
//! ## Usage
//!
//! ```rust,ignore
//! // Create a profile
//! client.create_profile(&caller, &username, &bio, &false);
//!
//! // Query by address
//! let profile = client.get_profile(&address);
//!
//! // Remove it
//! client.delete_profile(&caller);
//! ```

#![no_std]

mod events;
mod profile;
mod storage;

pub use profile::ProfileData;
pub use storage::DataKey;

use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, String};

use crate::events::*;
use crate::storage::{PROFILE_TTL_EXTEND, PROFILE_TTL_THRESHOLD};

/// Error codes for the social profile contract.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ProfileError {
    /// Caller has no profile.
    ProfileNotFound = 1,
}

impl From<ProfileError> for soroban_sdk::Error {
    fn from(e: ProfileError) -> Self {
        soroban_sdk::Error::from_contract_error(e as u32)
    }
}

#[contract]
pub struct SocialProfileContract;

#[contractimpl]
impl SocialProfileContract {
    /// Store a profile for the caller.
    ///
    /// An address holds one profile. Creating again replaces the previous
    /// record wholesale, last write wins.
    ///
    /// # Arguments
    /// * `caller` - Address the profile belongs to (must authorize)
    /// * `username` - Free-form username
    /// * `bio` - Free-form biography text
    /// * `is_private` - Whether the profile is private
    pub fn create_profile(
        env: Env,
        caller: Address,
        username: String,
        bio: String,
        is_private: bool,
    ) {
        caller.require_auth();

        let profile = ProfileData::new(username, bio, is_private);

        env.storage()
            .persistent()
            .set(&DataKey::Profile(caller.clone()), &profile);

        env.storage().persistent().extend_ttl(
            &DataKey::Profile(caller.clone()),
            PROFILE_TTL_THRESHOLD,
            PROFILE_TTL_EXTEND,
        );

        emit_profile_created(&env, &caller);
    }

    /// Get the profile stored for an address.
    ///
    /// Returns the empty record (blank strings, public) when the address
    /// has none, matching ledger default-value semantics.
    pub fn get_profile(env: Env, user: Address) -> ProfileData {
        env.storage()
            .persistent()
            .get(&DataKey::Profile(user))
            .unwrap_or_else(|| ProfileData::empty(&env))
    }

    /// Update the privacy flag on the caller's profile.
    ///
    /// # Panics
    /// - If the caller has no profile
    pub fn set_privacy(env: Env, caller: Address, is_private: bool) {
        caller.require_auth();

        let mut profile: ProfileData = env
            .storage()
            .persistent()
            .get(&DataKey::Profile(caller.clone()))
            .unwrap_or_else(|| panic_with_error!(&env, ProfileError::ProfileNotFound));

        profile.is_private = is_private;

        env.storage()
            .persistent()
            .set(&DataKey::Profile(caller.clone()), &profile);

        env.storage().persistent().extend_ttl(
            &DataKey::Profile(caller.clone()),
            PROFILE_TTL_THRESHOLD,
            PROFILE_TTL_EXTEND,
        );

        emit_privacy_changed(&env, &caller, is_private);
    }

    /// Delete the caller's profile.
    ///
    /// Always targets the caller's own entry; there is no way to delete
    /// another address's profile.
    ///
    /// # Panics
    /// - If the caller has no profile
    pub fn delete_profile(env: Env, caller: Address) {
        caller.require_auth();

        if !env
            .storage()
            .persistent()
            .has(&DataKey::Profile(caller.clone()))
        {
            panic_with_error!(&env, ProfileError::ProfileNotFound);
        }

        env.storage()
            .persistent()
            .remove(&DataKey::Profile(caller.clone()));

        emit_profile_deleted(&env, &caller);
    }
}
