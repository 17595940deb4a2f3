// api-gateway/src/lib.rs
pub mod api;
pub mod config;
pub mod error;
pub mod identity;

use std::sync::Arc;

use account_service::AccountService;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;

use crate::api::{account, statement, transaction};

/// App state shared across handlers
pub struct AppState {
    /// Account service
    pub account_service: Arc<AccountService>,
}

/// API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Account routes
        api::account::create_account,
        api::account::get_account,
        api::account::update_account,
        api::account::delete_account,
        // Statement routes
        api::statement::get_statement,
        api::statement::get_statement_by_date,
        // Transaction routes
        api::transaction::deposit,
        api::transaction::withdraw,
        api::transaction::get_balance,
    ),
    components(
        schemas(
            // Account API
            api::account::CreateAccountRequest,
            api::account::UpdateAccountRequest,
            common::model::account::Account,
            common::model::account::Operation,
            common::model::account::OperationKind,

            // Statement API
            api::statement::StatementDateQuery,

            // Transaction API
            api::transaction::DepositRequest,
            api::transaction::WithdrawRequest,

            // Error model
            error::ErrorResponse
        )
    ),
    tags(
        (name = "account", description = "Account management endpoints"),
        (name = "statement", description = "Statement query endpoints"),
        (name = "transaction", description = "Deposit, withdrawal and balance endpoints")
    ),
    info(
        title = "FinAPI",
        version = "1.0.0",
        description = "In-memory banking ledger allowing account management, deposits, withdrawals and statement queries"
    )
)]
pub struct ApiDoc;

/// Build the application router
///
/// The CPF-scoped routes resolve the caller through the `identity::Customer`
/// extractor; only account creation is reachable without a registered CPF.
pub fn router(state: Arc<AppState>) -> Router {
    // Set up CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Account routes
        .route(
            "/account",
            post(account::create_account)
                .get(account::get_account)
                .put(account::update_account)
                .delete(account::delete_account),
        )
        // Statement routes
        .route("/statement", get(statement::get_statement))
        .route("/statement/date", get(statement::get_statement_by_date))
        // Transaction routes
        .route("/deposit", post(transaction::deposit))
        .route("/withdraw", post(transaction::withdraw))
        .route("/balance", get(transaction::get_balance))
        .layer(cors)
        .with_state(state)
}
