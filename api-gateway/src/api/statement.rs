//! Statement API handlers
//!
//! Handles endpoints that read an account statement:
//! - Full statement
//! - Statement filtered by calendar date

use axum::{extract::Query, Json};
use chrono::NaiveDate;
use common::model::account::Operation;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::identity::Customer;

/// Statement date filter
#[derive(Debug, Deserialize, ToSchema)]
pub struct StatementDateQuery {
    /// Calendar date in YYYY-MM-DD format
    pub date: String,
}

/// Get the caller's full statement
#[utoipa::path(
    get,
    path = "/statement",
    params(
        ("cpf" = String, Header, description = "Caller tax identifier")
    ),
    responses(
        (status = 200, description = "Statement entries in insertion order", body = [Operation]),
        (status = 400, description = "Account does not exist")
    ),
    tag = "statement"
)]
pub async fn get_statement(Customer(customer): Customer) -> Json<Vec<Operation>> {
    Json(customer.statement)
}

/// Get the caller's statement filtered by calendar date
#[utoipa::path(
    get,
    path = "/statement/date",
    params(
        ("cpf" = String, Header, description = "Caller tax identifier"),
        ("date" = String, Query, description = "Calendar date in YYYY-MM-DD format")
    ),
    responses(
        (status = 200, description = "Statement entries created on the given date", body = [Operation]),
        (status = 400, description = "Account does not exist or the date is malformed")
    ),
    tag = "statement"
)]
pub async fn get_statement_by_date(
    Customer(customer): Customer,
    Query(query): Query<StatementDateQuery>,
) -> Result<Json<Vec<Operation>>, ApiError> {
    let date = NaiveDate::parse_from_str(&query.date, "%Y-%m-%d")
        .map_err(|_| ApiError::BadRequest("invalid date".to_string()))?;

    // Timestamps are recorded in UTC, so the filter compares UTC dates
    let entries = customer
        .statement
        .into_iter()
        .filter(|operation| operation.created_at.date_naive() == date)
        .collect();

    Ok(Json(entries))
}
