//! Transaction API handlers
//!
//! Handles the endpoints that move money or report it:
//! - Deposit funds
//! - Withdraw funds
//! - Get the current balance

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use common::decimal::Amount;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::identity::Customer;
use crate::AppState;

/// Deposit request
#[derive(Debug, Deserialize, ToSchema)]
pub struct DepositRequest {
    /// Free-form description recorded on the credit entry
    pub description: Option<String>,
    /// Amount to credit
    pub amount: Amount,
}

/// Deposit funds into the caller's account
#[utoipa::path(
    post,
    path = "/deposit",
    params(
        ("cpf" = String, Header, description = "Caller tax identifier")
    ),
    request_body = DepositRequest,
    responses(
        (status = 201, description = "Funds deposited successfully"),
        (status = 400, description = "Account does not exist or the amount is invalid")
    ),
    tag = "transaction"
)]
pub async fn deposit(
    State(state): State<Arc<AppState>>,
    Customer(customer): Customer,
    Json(request): Json<DepositRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .account_service
        .deposit(&customer.cpf, request.description, request.amount)
        .await?;

    Ok(StatusCode::CREATED)
}

/// Withdraw request
#[derive(Debug, Deserialize, ToSchema)]
pub struct WithdrawRequest {
    /// Amount to debit
    pub amount: Amount,
}

/// Withdraw funds from the caller's account
#[utoipa::path(
    post,
    path = "/withdraw",
    params(
        ("cpf" = String, Header, description = "Caller tax identifier")
    ),
    request_body = WithdrawRequest,
    responses(
        (status = 201, description = "Funds withdrawn successfully"),
        (status = 400, description = "Account does not exist, the amount is invalid or the funds are insufficient")
    ),
    tag = "transaction"
)]
pub async fn withdraw(
    State(state): State<Arc<AppState>>,
    Customer(customer): Customer,
    Json(request): Json<WithdrawRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .account_service
        .withdraw(&customer.cpf, request.amount)
        .await?;

    Ok(StatusCode::CREATED)
}

/// Get the caller's current balance
#[utoipa::path(
    get,
    path = "/balance",
    params(
        ("cpf" = String, Header, description = "Caller tax identifier")
    ),
    responses(
        (status = 200, description = "Balance derived from the statement", body = Amount),
        (status = 400, description = "Account does not exist")
    ),
    tag = "transaction"
)]
pub async fn get_balance(Customer(customer): Customer) -> Json<Amount> {
    Json(customer.balance())
}
