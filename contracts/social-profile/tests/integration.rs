//! Integration tests for the social profile contract.

#![cfg(feature = "testutils")]

use soroban_sdk::{testutils::Address as _, Address, Env, String};
use soroban_social_profile::{ProfileData, SocialProfileContract, SocialProfileContractClient};

fn setup() -> (Env, SocialProfileContractClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(SocialProfileContract, ());
    let client = SocialProfileContractClient::new(&env, &contract_id);

    (env, client)
}

#[test]
fn test_create_profile() {
    let (env, client) = setup();
    let user = Address::generate(&env);
    let username = String::from_str(&env, "alice");
    let bio = String::from_str(&env, "Hello, I am Alice!");

    client.create_profile(&user, &username, &bio, &false);

    let profile = client.get_profile(&user);
    assert_eq!(profile.username, username);
    assert_eq!(profile.bio, bio);
    assert!(!profile.is_private);
}

#[test]
fn test_get_missing_profile_returns_empty() {
    let (env, client) = setup();
    let user = Address::generate(&env);

    let profile = client.get_profile(&user);
    assert_eq!(profile, ProfileData::empty(&env));
    assert!(profile.is_empty());
}

#[test]
fn test_create_again_replaces_profile() {
    let (env, client) = setup();
    let user = Address::generate(&env);

    client.create_profile(
        &user,
        &String::from_str(&env, "alice"),
        &String::from_str(&env, "first bio"),
        &false,
    );
    client.create_profile(
        &user,
        &String::from_str(&env, "alice2"),
        &String::from_str(&env, "second bio"),
        &true,
    );

    // Last write wins; one record per address
    let profile = client.get_profile(&user);
    assert_eq!(profile.username, String::from_str(&env, "alice2"));
    assert_eq!(profile.bio, String::from_str(&env, "second bio"));
    assert!(profile.is_private);
}

#[test]
fn test_profiles_are_per_address() {
    let (env, client) = setup();
    let user1 = Address::generate(&env);
    let user2 = Address::generate(&env);

    client.create_profile(
        &user1,
        &String::from_str(&env, "alice"),
        &String::from_str(&env, "alice bio"),
        &false,
    );
    client.create_profile(
        &user2,
        &String::from_str(&env, "bob"),
        &String::from_str(&env, "bob bio"),
        &true,
    );

    let profile1 = client.get_profile(&user1);
    let profile2 = client.get_profile(&user2);
    assert_eq!(profile1.username, String::from_str(&env, "alice"));
    assert_eq!(profile2.username, String::from_str(&env, "bob"));
    assert!(!profile1.is_private);
    assert!(profile2.is_private);
}

#[test]
fn test_set_privacy() {
    let (env, client) = setup();
    let user = Address::generate(&env);
    let username = String::from_str(&env, "alice");
    let bio = String::from_str(&env, "Hello!");

    client.create_profile(&user, &username, &bio, &false);
    client.set_privacy(&user, &true);

    // Only the flag changes
    let profile = client.get_profile(&user);
    assert_eq!(profile.username, username);
    assert_eq!(profile.bio, bio);
    assert!(profile.is_private);

    client.set_privacy(&user, &false);
    assert!(!client.get_profile(&user).is_private);
}

#[test]
fn test_set_privacy_without_profile_fails() {
    let (env, client) = setup();
    let user = Address::generate(&env);

    let result = client.try_set_privacy(&user, &true);
    assert!(result.is_err());
}

#[test]
fn test_delete_profile() {
    let (env, client) = setup();
    let user = Address::generate(&env);

    client.create_profile(
        &user,
        &String::from_str(&env, "alice"),
        &String::from_str(&env, "Hello!"),
        &false,
    );
    client.delete_profile(&user);

    // Reads back as the empty record
    let profile = client.get_profile(&user);
    assert!(profile.is_empty());
}

#[test]
fn test_delete_without_profile_fails() {
    let (env, client) = setup();
    let user = Address::generate(&env);

    let result = client.try_delete_profile(&user);
    assert!(result.is_err());
}

#[test]
fn test_delete_then_recreate() {
    let (env, client) = setup();
    let user = Address::generate(&env);

    client.create_profile(
        &user,
        &String::from_str(&env, "alice"),
        &String::from_str(&env, "first"),
        &false,
    );
    client.delete_profile(&user);

    // Hard delete frees the slot for a fresh record
    client.create_profile(
        &user,
        &String::from_str(&env, "alice_again"),
        &String::from_str(&env, "second"),
        &true,
    );

    let profile = client.get_profile(&user);
    assert_eq!(profile.username, String::from_str(&env, "alice_again"));
    assert!(profile.is_private);
}
