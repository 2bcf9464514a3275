//! Profile struct and related types.

use soroban_sdk::{contracttype, Env, String};

/// Stored profile record.
///
/// One record per address. The bio is a single opaque string; clients that
/// collect it from several form fields flatten them before submission.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProfileData {
    /// Free-form username.
    pub username: String,

    /// Free-form biography text.
    pub bio: String,

    /// Whether the profile is hidden from public listings.
    pub is_private: bool,
}

impl ProfileData {
    /// Create a new profile record.
    pub fn new(username: String, bio: String, is_private: bool) -> Self {
        Self {
            username,
            bio,
            is_private,
        }
    }

    /// The record returned for addresses with no stored profile.
    pub fn empty(env: &Env) -> Self {
        Self {
            username: String::from_str(env, ""),
            bio: String::from_str(env, ""),
            is_private: false,
        }
    }

    /// Check whether this is the placeholder for a missing profile.
    pub fn is_empty(&self) -> bool {
        self.username.len() == 0 && self.bio.len() == 0 && !self.is_private
    }
}
