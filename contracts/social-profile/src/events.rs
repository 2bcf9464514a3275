//! Event emission helpers for the social profile contract.

use soroban_sdk::{Address, Env, Symbol};

/// Emit an event when a profile is created or replaced.
pub fn emit_profile_created(env: &Env, address: &Address) {
    let topics = (Symbol::new(env, "profile_created"),);
    env.events().publish(topics, address.clone());
}

/// Emit an event when a profile's privacy flag changes.
pub fn emit_privacy_changed(env: &Env, address: &Address, is_private: bool) {
    let topics = (Symbol::new(env, "privacy_changed"),);
    env.events().publish(topics, (address.clone(), is_private));
}

/// Emit an event when a profile is deleted.
pub fn emit_profile_deleted(env: &Env, address: &Address) {
    let topics = (Symbol::new(env, "profile_deleted"),);
    env.events().publish(topics, address.clone());
}
