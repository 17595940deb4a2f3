//! Account API handlers
//!
//! Handles endpoints related to account management:
//! - Create account
//! - Get account details
//! - Update the holder name
//! - Delete account

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use common::model::account::Account;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::identity::Customer;
use crate::AppState;

/// Create account request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAccountRequest {
    /// Tax identifier, unique across accounts
    pub cpf: String,
    /// Holder display name
    pub name: String,
}

/// Create a new account
#[utoipa::path(
    post,
    path = "/account",
    request_body = CreateAccountRequest,
    responses(
        (status = 201, description = "Account successfully created"),
        (status = 400, description = "CPF already registered")
    ),
    tag = "account"
)]
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .account_service
        .open_account(request.cpf, request.name)
        .await?;

    Ok(StatusCode::CREATED)
}

/// Get the caller's account
#[utoipa::path(
    get,
    path = "/account",
    params(
        ("cpf" = String, Header, description = "Caller tax identifier")
    ),
    responses(
        (status = 200, description = "Account details retrieved successfully", body = Account),
        (status = 400, description = "Account does not exist")
    ),
    tag = "account"
)]
pub async fn get_account(Customer(customer): Customer) -> Json<Account> {
    Json(customer)
}

/// Update account request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAccountRequest {
    /// New holder display name
    pub name: String,
}

/// Update the caller's holder name
#[utoipa::path(
    put,
    path = "/account",
    params(
        ("cpf" = String, Header, description = "Caller tax identifier")
    ),
    request_body = UpdateAccountRequest,
    responses(
        (status = 201, description = "Account successfully updated"),
        (status = 400, description = "Account does not exist")
    ),
    tag = "account"
)]
pub async fn update_account(
    State(state): State<Arc<AppState>>,
    Customer(customer): Customer,
    Json(request): Json<UpdateAccountRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .account_service
        .update_name(&customer.cpf, request.name)
        .await?;

    Ok(StatusCode::CREATED)
}

/// Delete the caller's account
#[utoipa::path(
    delete,
    path = "/account",
    params(
        ("cpf" = String, Header, description = "Caller tax identifier")
    ),
    responses(
        (status = 200, description = "Account deleted, remaining accounts returned", body = [Account]),
        (status = 400, description = "Account does not exist")
    ),
    tag = "account"
)]
pub async fn delete_account(
    State(state): State<Arc<AppState>>,
    Customer(customer): Customer,
) -> Result<Json<Vec<Account>>, ApiError> {
    let remaining = state.account_service.close_account(&customer.cpf).await?;

    Ok(Json(remaining))
}
