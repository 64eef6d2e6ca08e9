//! Concurrent logins through the fully wired service

use crate::test_utils::{seed, test_app_with};
use authd_domain::{Role, TokenService};
use authd_infrastructure::config::SeedUser;
use std::collections::{HashMap, HashSet};

const USERS: usize = 16;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_logins_issue_distinct_valid_tokens() {
    let users: Vec<SeedUser> = (0..USERS)
        .map(|i| seed(&format!("user{i}"), &format!("pass{i}"), Role::User))
        .collect();
    let app = test_app_with(&users, HashMap::new()).await;

    let handles: Vec<_> = (0..USERS)
        .map(|i| {
            let auth = app.state.auth.clone();
            tokio::spawn(async move {
                let token = auth
                    .login(&format!("user{i}"), &format!("pass{i}"))
                    .await
                    .expect("login");
                (i, token)
            })
        })
        .collect();

    let mut tokens = HashSet::new();
    for handle in handles {
        let (i, token) = handle.await.expect("login task");
        let claims = app.tokens.verify(&token).expect("token verifies");
        assert_eq!(claims.sub, format!("user{i}"));
        tokens.insert(token);
    }

    assert_eq!(tokens.len(), USERS);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_denials_do_not_disturb_successes() {
    let app = test_app_with(&[seed("alice", "s3cret", Role::User)], HashMap::new()).await;

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let auth = app.state.auth.clone();
            tokio::spawn(async move {
                let password = if i % 2 == 0 { "s3cret" } else { "wrong" };
                (i, auth.login("alice", password).await)
            })
        })
        .collect();

    for handle in handles {
        let (i, result) = handle.await.expect("login task");
        assert_eq!(result.is_ok(), i % 2 == 0, "attempt {i}");
    }
}
