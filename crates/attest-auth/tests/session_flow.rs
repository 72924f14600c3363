//! Session lifecycle against an in-process fake backend.

use std::sync::Arc;

use attest_auth::{
    AuthError, CookieVault, PasswordChange, PasswordError, Session, SessionStatus, SessionStore,
    StoredSession,
};
use attest_client::ApiClient;
use attest_core::entities::User;
use pretty_assertions::assert_eq;
use serde_json::json;

/// Serve `(status, body, set-cookie)` for every request, chosen by path.
fn fake_backend(
    route: impl Fn(&str) -> (u16, serde_json::Value, Option<&'static str>) + Send + Sync + 'static,
) -> String {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind fake backend");
    let port = server.server_addr().to_ip().expect("ip listener").port();
    let route = Arc::new(route);
    std::thread::spawn(move || {
        for request in server.incoming_requests() {
            let (status, body, cookie) = route(request.url());
            let mut response = tiny_http::Response::from_string(body.to_string())
                .with_status_code(status)
                .with_header(
                    tiny_http::Header::from_bytes("Content-Type", "application/json").unwrap(),
                );
            if let Some(cookie) = cookie {
                response = response
                    .with_header(tiny_http::Header::from_bytes("Set-Cookie", cookie).unwrap());
            }
            let _ = request.respond(response);
        }
    });
    format!("http://127.0.0.1:{port}/api")
}

/// A port nothing listens on.
fn dead_backend() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/api")
}

fn user_json() -> serde_json::Value {
    json!({
        "id": 3,
        "username": "ana",
        "email": "ana@example.com",
        "first_name": "Ana",
        "last_name": "Silva"
    })
}

fn stored_user() -> User {
    serde_json::from_value(user_json()).unwrap()
}

fn session_in(dir: &tempfile::TempDir) -> Session {
    Session::new(
        SessionStore::new(dir.path().join("session.json")),
        CookieVault::file_only(dir.path().join("cookies")),
    )
}

fn signed_in(dir: &tempfile::TempDir) -> Session {
    let session = session_in(dir);
    session
        .store()
        .save(&StoredSession::new(stored_user()))
        .unwrap();
    session.vault().store("sessionid=old").unwrap();
    session
}

#[tokio::test]
async fn login_stores_user_and_cookies() {
    let base = fake_backend(|path| {
        assert!(path.starts_with("/api/auth/login/"));
        (
            200,
            json!({"user": user_json(), "message": "Login successful"}),
            Some("sessionid=s1; Path=/; HttpOnly"),
        )
    });
    let tmp = tempfile::TempDir::new().unwrap();
    let session = session_in(&tmp);
    let client = ApiClient::new(&base).unwrap();

    let user = session.login(&client, "ana", "pw").await.unwrap();
    assert_eq!(user.display_name(), "Ana Silva");
    assert_eq!(session.local_user(), Some(stored_user()));
    assert!(session.vault().load().unwrap().contains("sessionid=s1"));
}

#[tokio::test]
async fn blank_credentials_are_rejected_locally() {
    let tmp = tempfile::TempDir::new().unwrap();
    let session = session_in(&tmp);
    let client = ApiClient::new(&dead_backend()).unwrap();
    let err = session.login(&client, "  ", "pw").await.unwrap_err();
    assert!(matches!(err, AuthError::InvalidInput(_)));
}

#[tokio::test]
async fn logout_clears_local_state_even_when_server_unreachable() {
    let tmp = tempfile::TempDir::new().unwrap();
    let session = signed_in(&tmp);
    let client = ApiClient::new(&dead_backend()).unwrap();

    let outcome = session.logout(&client).await;
    assert!(!outcome.server_acknowledged);
    assert!(outcome.error.is_some());
    assert_eq!(session.local_user(), None);
    assert_eq!(session.vault().load(), None);
}

#[tokio::test]
async fn check_without_local_user_is_signed_out() {
    let tmp = tempfile::TempDir::new().unwrap();
    let session = session_in(&tmp);
    let client = ApiClient::new(&dead_backend()).unwrap();
    assert_eq!(session.check(&client).await, SessionStatus::SignedOut);
}

#[tokio::test]
async fn check_with_network_failure_trusts_local_record() {
    let tmp = tempfile::TempDir::new().unwrap();
    let session = signed_in(&tmp);
    let client = ApiClient::new(&dead_backend()).unwrap();

    let status = session.check(&client).await;
    assert_eq!(
        status,
        SessionStatus::SignedIn {
            user: stored_user(),
            verified: false,
        }
    );
    assert!(session.local_user().is_some());
}

#[tokio::test]
async fn check_with_null_user_clears_session() {
    let base = fake_backend(|_| (200, json!({"user": null}), None));
    let tmp = tempfile::TempDir::new().unwrap();
    let session = signed_in(&tmp);
    let client = ApiClient::new(&base).unwrap();

    assert_eq!(session.check(&client).await, SessionStatus::SignedOut);
    assert_eq!(session.local_user(), None);
    assert_eq!(session.vault().load(), None);
}

#[tokio::test]
async fn check_with_401_clears_session() {
    let base = fake_backend(|_| {
        (
            401,
            json!({"detail": "Authentication credentials were not provided."}),
            None,
        )
    });
    let tmp = tempfile::TempDir::new().unwrap();
    let session = signed_in(&tmp);
    let client = ApiClient::new(&base).unwrap();

    assert_eq!(session.check(&client).await, SessionStatus::SignedOut);
    assert_eq!(session.local_user(), None);
}

#[tokio::test]
async fn check_refreshes_user_and_drive_flag() {
    let base = fake_backend(|_| {
        let mut user = user_json();
        user["first_name"] = json!("Ana Maria");
        user["google_drive_authenticated"] = json!(true);
        (200, json!({ "user": user }), None)
    });
    let tmp = tempfile::TempDir::new().unwrap();
    let session = signed_in(&tmp);
    let client = ApiClient::new(&base).unwrap();

    let status = session.check(&client).await;
    assert_eq!(status.user().unwrap().first_name, "Ana Maria");
    assert!(session.drive_authenticated());
}

#[tokio::test]
async fn password_validation_runs_before_any_request() {
    let tmp = tempfile::TempDir::new().unwrap();
    let session = signed_in(&tmp);
    let client = ApiClient::new(&dead_backend()).unwrap();
    let change = PasswordChange {
        current: "old-password".into(),
        new: "short".into(),
        confirmation: "short".into(),
    };
    let err = session.change_password(&client, &change).await.unwrap_err();
    assert!(matches!(err, AuthError::Password(PasswordError::TooShort)));
}

#[tokio::test]
async fn google_callback_requires_code() {
    let tmp = tempfile::TempDir::new().unwrap();
    let session = session_in(&tmp);
    let client = ApiClient::new(&dead_backend()).unwrap();
    let err = session
        .complete_google_login(&client, "   ")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidInput(_)));
}
