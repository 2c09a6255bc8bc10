//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API: decode → validate → store → classify → respond.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::application::ports::AccountStorePort;
use crate::domain::account::Account;
use crate::error::{ApiError, ValidationError};

use super::request::{CreateAccountRequest, ListAccountsRequest, validate_account_id};
use super::response::HealthResponse;

/// Application state shared across handlers.
pub struct AppState<S>
where
    S: AccountStorePort,
{
    /// Account storage.
    pub store: Arc<S>,
    /// Application version.
    pub version: String,
}

impl<S> AppState<S>
where
    S: AccountStorePort,
{
    /// Create state for the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl<S> Clone for AppState<S>
where
    S: AccountStorePort,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            version: self.version.clone(),
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<S>(state: AppState<S>) -> Router
where
    S: AccountStorePort + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/accounts", post(create_account).get(list_accounts))
        .route("/accounts/{id}", get(get_account))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Decode failures are client errors, whatever status axum would pick.
fn malformed(rejection: impl std::fmt::Display) -> ApiError {
    let err = ValidationError::Malformed(rejection.to_string());
    tracing::debug!(error = %err, "Rejected undecodable request");
    ApiError::Validation(err)
}

fn rejected(err: &ValidationError) {
    tracing::debug!(error = %err, "Rejected invalid request");
}

/// Health check endpoint.
async fn health_check<S>(State(state): State<AppState<S>>) -> Json<HealthResponse>
where
    S: AccountStorePort,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// `POST /accounts`
async fn create_account<S>(
    State(state): State<AppState<S>>,
    payload: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Result<Json<Account>, ApiError>
where
    S: AccountStorePort,
{
    let Json(request) = payload.map_err(malformed)?;
    let command = request.validate().inspect_err(rejected)?;

    let account = state.store.create_account(command.into_params()).await?;

    tracing::info!(account_id = account.id, currency = %account.currency, "Account created");
    Ok(Json(account))
}

/// `GET /accounts/{id}`
async fn get_account<S>(
    State(state): State<AppState<S>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Account>, ApiError>
where
    S: AccountStorePort,
{
    let Path(raw_id) = id.map_err(malformed)?;
    let id = validate_account_id(raw_id).inspect_err(rejected)?;

    let account = state.store.get_account(id.get()).await?;
    Ok(Json(account))
}

/// `GET /accounts?page_id=&page_size=`
///
/// An empty page is reported as 404, not `200 []`.
async fn list_accounts<S>(
    State(state): State<AppState<S>>,
    query: Result<Query<ListAccountsRequest>, QueryRejection>,
) -> Result<Json<Vec<Account>>, ApiError>
where
    S: AccountStorePort,
{
    let Query(request) = query.map_err(malformed)?;
    let query = request.validate().inspect_err(rejected)?;

    let accounts = state.store.list_accounts(query.params()).await?;

    if accounts.is_empty() {
        tracing::debug!(
            page_id = query.page_id(),
            page_size = query.page_size(),
            "Requested page is empty"
        );
        return Err(ApiError::NotFound);
    }

    Ok(Json(accounts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::MockAccountStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn create_test_state() -> AppState<MockAccountStore> {
        AppState {
            store: Arc::new(MockAccountStore::new()),
            version: "1.0.0-test".to_string(),
        }
    }

    #[tokio::test]
    async fn health_check_returns_ok() {
        let state = create_test_state();
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let health: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(health.version, "1.0.0-test");
    }

    #[tokio::test]
    async fn non_integer_id_is_bad_request() {
        let state = create_test_state();
        let store = Arc::clone(&state.store);
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/accounts/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn missing_content_type_is_bad_request() {
        let state = create_test_state();
        let store = Arc::clone(&state.store);
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/accounts")
                    .body(Body::from(r#"{"owner":"alice","currency":"USD"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(store.calls().is_empty());
    }
}
