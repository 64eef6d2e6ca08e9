//! Tests for the in-memory user store and seeding

use crate::password_tests::fast_params;
use authd_domain::error::Error;
use authd_domain::{PasswordVerifier, Role, User, UserStore};
use authd_infrastructure::config::SeedUser;
use authd_infrastructure::crypto::PasswordService;
use authd_infrastructure::store::{InMemoryUserStore, seed_users};
use std::sync::Arc;

fn seed(username: &str, password: &str, role: Role) -> SeedUser {
    SeedUser {
        username: username.to_string(),
        password: password.to_string(),
        role,
    }
}

#[tokio::test]
async fn test_find_missing_user() {
    let store = InMemoryUserStore::new();
    assert!(store.find("nobody").await.expect("lookup").is_none());
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_save_then_find() {
    let store = InMemoryUserStore::new();
    store
        .save(User::new("alice", "$argon2id$h", Role::User))
        .await
        .expect("save");

    let found = store.find("alice").await.expect("lookup").expect("present");
    assert_eq!(found.username, "alice");
    assert_eq!(found.role, Role::User);
    assert_eq!(found.password_hash(), "$argon2id$h");
    assert!(store.find("Alice").await.expect("lookup").is_none());
}

#[tokio::test]
async fn test_duplicate_save_rejected() {
    let store = InMemoryUserStore::new();
    store
        .save(User::new("alice", "$argon2id$1", Role::User))
        .await
        .expect("save");

    let result = store
        .save(User::new("alice", "$argon2id$2", Role::Admin))
        .await;
    assert!(matches!(result, Err(Error::AlreadyExists { .. })));

    let kept = store.find("alice").await.expect("lookup").expect("present");
    assert_eq!(kept.password_hash(), "$argon2id$1");
}

#[tokio::test]
async fn test_concurrent_finds() {
    let store = Arc::new(InMemoryUserStore::new());
    for i in 0..16 {
        store
            .save(User::new(format!("user{i}"), "$argon2id$h", Role::User))
            .await
            .expect("save");
    }

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.find(&format!("user{i}")).await })
        })
        .collect();

    for handle in handles {
        let found = handle.await.expect("task").expect("lookup");
        assert!(found.is_some());
    }
    assert_eq!(store.len(), 16);
}

#[tokio::test]
async fn test_seed_users_hashes_passwords() {
    let store = InMemoryUserStore::new();
    let passwords = PasswordService::new(&fast_params()).expect("valid params");
    let users = [
        seed("admin1", "secret", Role::Admin),
        seed("user1", "secret", Role::User),
    ];

    let created = seed_users(&store, &passwords, &users).await.expect("seed");
    assert_eq!(created, 2);

    let admin = store.find("admin1").await.expect("lookup").expect("present");
    assert_eq!(admin.role, Role::Admin);
    assert_ne!(admin.password_hash(), "secret");
    assert!(admin.verify_password("secret", &passwords).expect("verify"));
    assert!(!admin.verify_password("Secret", &passwords).expect("verify"));
}

#[tokio::test]
async fn test_seed_rejects_empty_username() {
    let store = InMemoryUserStore::new();
    let passwords = PasswordService::new(&fast_params()).expect("valid params");

    let result = seed_users(&store, &passwords, &[seed("", "secret", Role::User)]).await;
    assert!(matches!(result, Err(Error::InvalidArgument { .. })));
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_seed_rejects_duplicate_username() {
    let store = InMemoryUserStore::new();
    let passwords = PasswordService::new(&fast_params()).expect("valid params");
    let users = [
        seed("alice", "one", Role::User),
        seed("alice", "two", Role::Admin),
    ];

    let result = seed_users(&store, &passwords, &users).await;
    assert!(matches!(result, Err(Error::AlreadyExists { .. })));
    assert!(
        passwords
            .verify_password(
                "one",
                store
                    .find("alice")
                    .await
                    .expect("lookup")
                    .expect("present")
                    .password_hash()
            )
            .expect("verify")
    );
}
