//! Storage key definitions for the social profile contract.

use soroban_sdk::{contracttype, Address};

/// Storage keys for the social profile contract.
#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    /// Maps Address to ProfileData. One profile per address.
    Profile(Address),
}

/// Time-to-live for profile data in ledger entries.
pub const PROFILE_TTL_THRESHOLD: u32 = 518400; // ~30 days
pub const PROFILE_TTL_EXTEND: u32 = 2592000; // ~150 days
