//! HTTP integration tests for the account API.
//!
//! Drives the full router against `MockAccountStore`: request → validation →
//! store port → error classification → status + body.

// Allow unwrap in tests - tests should panic on unexpected errors
#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use account_service::application::ports::{CreateAccountParams, ListAccountsParams, StoreError};
use account_service::domain::account::{Account, Currency};
use account_service::error::{ApiErrorResponse, ErrorCode};
use account_service::fixtures::FixtureGenerator;
use account_service::infrastructure::http::{AppState, create_router};
use account_service::infrastructure::persistence::{Matcher, MockAccountStore, StoreCall};

// =============================================================================
// Helpers
// =============================================================================

fn setup() -> (Arc<MockAccountStore>, Router) {
    let store = Arc::new(MockAccountStore::new());
    let app = create_router(AppState::new(Arc::clone(&store)));
    (store, app)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

fn assert_bad_request(status: StatusCode, body: &[u8]) -> ApiErrorResponse {
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ApiErrorResponse = serde_json::from_slice(body).unwrap();
    assert_eq!(error.code, ErrorCode::InvalidRequest);
    error
}

fn account(id: i64, owner: &str, currency: Currency) -> Account {
    Account {
        id,
        owner: owner.to_string(),
        balance: 0,
        currency,
    }
}

// =============================================================================
// POST /accounts
// =============================================================================

#[tokio::test]
async fn create_account_ok() {
    let (store, app) = setup();
    let created = account(1, "alice", Currency::Usd);
    store
        .expect_create_account(Matcher::Eq(CreateAccountParams {
            owner: "alice".to_string(),
            balance: 0,
            currency: Currency::Usd,
        }))
        .times(1)
        .returning(Ok(created.clone()));

    let (status, body) = send(
        app,
        post_json("/accounts", r#"{"owner":"alice","currency":"USD"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"id": 1, "owner": "alice", "balance": 0, "currency": "USD"})
    );
    store.verify();
}

#[tokio::test]
async fn create_account_internal_error() {
    let (store, app) = setup();
    store
        .expect_create_account(Matcher::Any)
        .times(1)
        .returning(Err(StoreError::Unavailable("connection refused".to_string())));

    let (status, body) = send(
        app,
        post_json("/accounts", r#"{"owner":"alice","currency":"EUR"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.is_empty());
    store.verify();
}

#[tokio::test]
async fn create_account_unsupported_currency() {
    let (store, app) = setup();
    store.expect_create_account(Matcher::Any).times(0);

    let (status, body) = send(
        app,
        post_json("/accounts", r#"{"owner":"alice","currency":"JPY"}"#),
    )
    .await;

    let error = assert_bad_request(status, &body);
    assert!(error.message.contains("JPY"));
    store.verify();
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn create_account_lowercase_currency_is_rejected() {
    let (store, app) = setup();

    let (status, body) = send(
        app,
        post_json("/accounts", r#"{"owner":"alice","currency":"usd"}"#),
    )
    .await;

    assert_bad_request(status, &body);
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn create_account_empty_owner() {
    let (store, app) = setup();

    let (status, body) = send(
        app,
        post_json("/accounts", r#"{"owner":"","currency":"USD"}"#),
    )
    .await;

    let error = assert_bad_request(status, &body);
    assert!(error.message.contains("owner"));
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn create_account_missing_field() {
    let (store, app) = setup();

    let (status, body) = send(app, post_json("/accounts", r#"{"owner":"alice"}"#)).await;

    assert_bad_request(status, &body);
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn create_account_malformed_json() {
    let (store, app) = setup();

    let (status, body) = send(app, post_json("/accounts", "{not json")).await;

    assert_bad_request(status, &body);
    assert!(store.calls().is_empty());
}

// =============================================================================
// GET /accounts/{id}
// =============================================================================

#[tokio::test]
async fn get_account_ok() {
    let mut fixtures = FixtureGenerator::seeded(11);
    let expected = fixtures.random_account();

    let (store, app) = setup();
    store
        .expect_get_account(Matcher::Eq(expected.id))
        .times(1)
        .returning(Ok(expected.clone()));

    let (status, body) = send(app, get(&format!("/accounts/{}", expected.id))).await;

    assert_eq!(status, StatusCode::OK);
    let actual: Account = serde_json::from_slice(&body).unwrap();
    assert_eq!(actual, expected);
    store.verify();
}

#[tokio::test]
async fn get_account_not_found() {
    let (store, app) = setup();
    store
        .expect_get_account(Matcher::Eq(7))
        .times(1)
        .returning(Err(StoreError::RowNotFound));

    let (status, body) = send(app, get("/accounts/7")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
    store.verify();
}

#[tokio::test]
async fn get_account_internal_error() {
    let (store, app) = setup();
    store
        .expect_get_account(Matcher::Any)
        .times(1)
        .returning(Err(StoreError::Backend("connection reset".to_string())));

    let (status, body) = send(app, get("/accounts/3")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.is_empty());
    store.verify();
}

#[tokio::test]
async fn get_account_zero_id() {
    let (store, app) = setup();
    store.expect_get_account(Matcher::Any).times(0);

    let (status, body) = send(app, get("/accounts/0")).await;

    assert_bad_request(status, &body);
    store.verify();
}

#[tokio::test]
async fn get_account_negative_id() {
    let (store, app) = setup();

    let (status, body) = send(app, get("/accounts/-4")).await;

    assert_bad_request(status, &body);
    assert!(store.calls().is_empty());
}

// =============================================================================
// GET /accounts
// =============================================================================

#[tokio::test]
async fn list_accounts_ok() {
    let mut fixtures = FixtureGenerator::seeded(3);
    let page = fixtures.random_accounts(5);

    let (store, app) = setup();
    store
        .expect_list_accounts(Matcher::Eq(ListAccountsParams {
            limit: 5,
            offset: 5,
        }))
        .times(1)
        .returning(Ok(page.clone()));

    let (status, body) = send(app, get("/accounts?page_id=2&page_size=5")).await;

    assert_eq!(status, StatusCode::OK);
    let actual: Vec<Account> = serde_json::from_slice(&body).unwrap();
    assert_eq!(actual, page);
    store.verify();
}

#[tokio::test]
async fn list_accounts_first_page_has_zero_offset() {
    let (store, app) = setup();
    store
        .expect_list_accounts(Matcher::Eq(ListAccountsParams {
            limit: 10,
            offset: 0,
        }))
        .times(1)
        .returning(Ok(vec![account(1, "alice", Currency::Usd)]));

    let (status, _) = send(app, get("/accounts?page_id=1&page_size=10")).await;

    assert_eq!(status, StatusCode::OK);
    store.verify();
}

#[tokio::test]
async fn list_accounts_internal_error() {
    let (store, app) = setup();
    store
        .expect_list_accounts(Matcher::Any)
        .times(1)
        .returning(Err(StoreError::Decode("bad currency".to_string())));

    let (status, body) = send(app, get("/accounts?page_id=1&page_size=5")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.is_empty());
    store.verify();
}

#[tokio::test]
async fn list_accounts_page_size_too_large() {
    let (store, app) = setup();
    store.expect_list_accounts(Matcher::Any).times(0);

    let (status, body) = send(app, get("/accounts?page_id=1&page_size=50")).await;

    let error = assert_bad_request(status, &body);
    assert!(error.message.contains("page_size"));
    store.verify();
}

#[tokio::test]
async fn list_accounts_page_size_too_small() {
    let (store, app) = setup();

    let (status, body) = send(app, get("/accounts?page_id=1&page_size=4")).await;

    assert_bad_request(status, &body);
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn list_accounts_page_id_zero() {
    let (store, app) = setup();

    let (status, body) = send(app, get("/accounts?page_id=0&page_size=5")).await;

    let error = assert_bad_request(status, &body);
    assert!(error.message.contains("page_id"));
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn list_accounts_missing_query() {
    let (store, app) = setup();

    let (status, body) = send(app, get("/accounts")).await;

    assert_bad_request(status, &body);
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn list_accounts_non_numeric_query() {
    let (store, app) = setup();

    let (status, body) = send(app, get("/accounts?page_id=one&page_size=5")).await;

    assert_bad_request(status, &body);
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn list_accounts_empty_page_is_not_found() {
    let (store, app) = setup();
    store
        .expect_list_accounts(Matcher::Eq(ListAccountsParams {
            limit: 5,
            offset: 5,
        }))
        .times(1)
        .returning(Ok(vec![]));

    let (status, body) = send(app, get("/accounts?page_id=2&page_size=5")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
    store.verify();
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn create_then_fetch_round_trip() {
    let store = Arc::new(MockAccountStore::new());
    let alice = account(1, "alice", Currency::Usd);
    store
        .expect_create_account(Matcher::Any)
        .times(1)
        .returning(Ok(alice.clone()));
    store
        .expect_get_account(Matcher::Eq(1))
        .times(1)
        .returning(Ok(alice.clone()));

    let (status, body) = send(
        create_router(AppState::new(Arc::clone(&store))),
        post_json("/accounts", r#"{"owner":"alice","currency":"USD"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let created: Account = serde_json::from_slice(&body).unwrap();

    let (status, body) = send(
        create_router(AppState::new(Arc::clone(&store))),
        get(&format!("/accounts/{}", created.id)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let fetched: Account = serde_json::from_slice(&body).unwrap();

    assert_eq!(fetched, alice);
    assert_eq!(
        store.calls(),
        vec![
            StoreCall::CreateAccount(CreateAccountParams {
                owner: "alice".to_string(),
                balance: 0,
                currency: Currency::Usd,
            }),
            StoreCall::GetAccount(1),
        ]
    );
    store.verify();
}

#[tokio::test]
async fn rejected_requests_never_reach_store() {
    let store = Arc::new(MockAccountStore::new());
    let requests = [
        post_json("/accounts", r#"{"owner":"bob","currency":"JPY"}"#),
        post_json("/accounts", r#"{"owner":"","currency":"CAD"}"#),
        get("/accounts/0"),
        get("/accounts?page_id=1&page_size=11"),
    ];

    for request in requests {
        let (status, _) = send(create_router(AppState::new(Arc::clone(&store))), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    assert!(store.calls().is_empty());
    store.verify();
}

#[tokio::test]
async fn health_reports_package_version() {
    let (_, app) = setup();

    let (status, body) = send(app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["status"], "healthy");
    assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
}
