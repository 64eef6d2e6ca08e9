//! HTTP API tests against a local Rocket instance

use crate::test_utils::{TEST_LIFETIME, admin_only_app, broken_store_app, test_app};
use authd_domain::{Role, TokenService};
use authd_server::api::auth_rocket;
use authd_server::api::models::{
    ErrorResponse, LiveResponse, LoginRequest, LoginResponse, WhoAmIResponse,
};
use rocket::http::{ContentType, Header, Status};
use rocket::local::asynchronous::Client;

fn credentials(username: &str, password: &str) -> LoginRequest {
    LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    }
}

fn bearer(token: &str) -> Header<'static> {
    Header::new("Authorization", format!("Bearer {token}"))
}

async fn login(client: &Client, username: &str, password: &str) -> (Status, Option<String>) {
    let response = client
        .post("/auth/login")
        .json(&credentials(username, password))
        .dispatch()
        .await;
    let status = response.status();
    let token = response
        .into_json::<LoginResponse>()
        .await
        .map(|body| body.access_token);
    (status, token)
}

// =============================================================================
// LOGIN
// =============================================================================

#[rocket::async_test]
async fn test_login_success_returns_verifiable_token() {
    let app = test_app().await;
    let client = Client::tracked(auth_rocket(app.state))
        .await
        .expect("valid rocket instance");

    let (status, token) = login(&client, "alice", "s3cret").await;
    assert_eq!(status, Status::Ok);

    let claims = app
        .tokens
        .verify(&token.expect("token in body"))
        .expect("token verifies");
    assert_eq!(claims.sub, "alice");
    assert_eq!(claims.role, Role::User);
    assert_eq!(claims.exp, claims.iat + TEST_LIFETIME);
}

#[rocket::async_test]
async fn test_wrong_password_and_unknown_user_get_identical_401() {
    let app = test_app().await;
    let client = Client::tracked(auth_rocket(app.state))
        .await
        .expect("valid rocket instance");

    let mut bodies = Vec::new();
    for (username, password) in [("alice", "wrong"), ("bob", "x")] {
        let response = client
            .post("/auth/login")
            .json(&credentials(username, password))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Unauthorized);
        bodies.push(response.into_string().await.expect("body"));
    }

    assert_eq!(bodies[0], bodies[1]);
    let body: ErrorResponse = rocket::serde::json::from_str(&bodies[0]).expect("json body");
    assert_eq!(body.error, "denied");
    assert_eq!(body.message, "incorrect username/password");
}

#[rocket::async_test]
async fn test_store_failure_returns_500() {
    let client = Client::tracked(auth_rocket(broken_store_app()))
        .await
        .expect("valid rocket instance");

    let response = client
        .post("/auth/login")
        .json(&credentials("alice", "s3cret"))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::InternalServerError);
    let body: ErrorResponse = response.into_json().await.expect("json body");
    assert_eq!(body.error, "internal");
    assert!(!body.message.contains("connection refused"));
}

#[rocket::async_test]
async fn test_malformed_body_is_rejected() {
    let app = test_app().await;
    let client = Client::tracked(auth_rocket(app.state))
        .await
        .expect("valid rocket instance");

    let response = client
        .post("/auth/login")
        .header(ContentType::JSON)
        .body("{\"username\": \"alice\"")
        .dispatch()
        .await;

    assert!(response.status().class().is_client_error());
    let body: ErrorResponse = response.into_json().await.expect("json body");
    assert_eq!(body.error, "bad_request");
}

// =============================================================================
// PROTECTED ENDPOINT
// =============================================================================

#[rocket::async_test]
async fn test_me_without_token_returns_401() {
    let app = test_app().await;
    let client = Client::tracked(auth_rocket(app.state))
        .await
        .expect("valid rocket instance");

    let response = client.get("/auth/me").dispatch().await;
    assert_eq!(response.status(), Status::Unauthorized);

    let response = client
        .get("/auth/me")
        .header(Header::new("Authorization", "Basic YWxpY2U6czNjcmV0"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Unauthorized);
}

#[rocket::async_test]
async fn test_me_with_valid_token_returns_identity() {
    let app = test_app().await;
    let client = Client::tracked(auth_rocket(app.state))
        .await
        .expect("valid rocket instance");

    let (_, token) = login(&client, "alice", "s3cret").await;
    let token = token.expect("token");

    let response = client.get("/auth/me").header(bearer(&token)).dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let me: WhoAmIResponse = response.into_json().await.expect("json body");
    assert_eq!(me.username, "alice");
    assert_eq!(me.role, Role::User);
    assert_eq!(me.expires_at, crate::test_utils::START + TEST_LIFETIME);
}

#[rocket::async_test]
async fn test_me_with_tampered_token_returns_401() {
    let app = test_app().await;
    let client = Client::tracked(auth_rocket(app.state))
        .await
        .expect("valid rocket instance");

    let (_, token) = login(&client, "alice", "s3cret").await;
    let mut token = token.expect("token");
    let last = token.pop().expect("non-empty token");
    token.push(if last == 'A' { 'B' } else { 'A' });

    let response = client.get("/auth/me").header(bearer(&token)).dispatch().await;
    assert_eq!(response.status(), Status::Unauthorized);
}

#[rocket::async_test]
async fn test_me_with_expired_token_returns_401() {
    let app = test_app().await;
    let clock = app.clock.clone();
    let client = Client::tracked(auth_rocket(app.state))
        .await
        .expect("valid rocket instance");

    let (_, token) = login(&client, "alice", "s3cret").await;
    let token = token.expect("token");

    clock.advance(TEST_LIFETIME);
    let response = client.get("/auth/me").header(bearer(&token)).dispatch().await;
    assert_eq!(response.status(), Status::Unauthorized);
}

#[rocket::async_test]
async fn test_me_with_disallowed_role_returns_403() {
    let app = admin_only_app().await;
    let client = Client::tracked(auth_rocket(app.state))
        .await
        .expect("valid rocket instance");

    let (_, user_token) = login(&client, "alice", "s3cret").await;
    let response = client
        .get("/auth/me")
        .header(bearer(&user_token.expect("token")))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Forbidden);

    let (_, admin_token) = login(&client, "root", "toor").await;
    let response = client
        .get("/auth/me")
        .header(bearer(&admin_token.expect("token")))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
}

#[rocket::async_test]
async fn test_role_rule_applies_to_every_spelling_of_the_path() {
    let app = admin_only_app().await;
    let client = Client::tracked(auth_rocket(app.state))
        .await
        .expect("valid rocket instance");

    let (_, user_token) = login(&client, "alice", "s3cret").await;
    let user_token = user_token.expect("token");
    let (_, admin_token) = login(&client, "root", "toor").await;
    let admin_token = admin_token.expect("token");

    for path in ["/auth/me", "/auth/m%65", "/auth//me", "/auth/me/"] {
        let response = client
            .get(path)
            .header(bearer(&user_token))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Forbidden, "user on {path}");

        let response = client
            .get(path)
            .header(bearer(&admin_token))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok, "admin on {path}");
    }
}

// =============================================================================
// UNAUTHENTICATED
// =============================================================================

#[rocket::async_test]
async fn test_live_needs_no_token() {
    let app = test_app().await;
    let client = Client::tracked(auth_rocket(app.state))
        .await
        .expect("valid rocket instance");

    let response = client.get("/live").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let body: LiveResponse = response.into_json().await.expect("json body");
    assert_eq!(body.status, "ok");
}
