//! Caller resolution for account-scoped routes
//!
//! Every route that works on an existing account identifies the caller by
//! the `cpf` request header. `Customer` resolves that header against the
//! account store before the handler runs and hands the resolved account to
//! it; an unknown CPF rejects the request before any handler code executes.

use std::sync::Arc;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use common::error::Error;
use common::model::account::Account;

use crate::error::ApiError;
use crate::AppState;

/// Request header carrying the caller's CPF
pub const CPF_HEADER: &str = "cpf";

/// The account resolved from the request's `cpf` header
///
/// The wrapped account is a snapshot taken at extraction time.
#[derive(Debug, Clone)]
pub struct Customer(pub Account);

#[async_trait]
impl FromRequestParts<Arc<AppState>> for Customer {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        // A missing or non-UTF-8 header can never match a registered account
        let cpf = parts
            .headers
            .get(CPF_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        let account = state
            .account_service
            .find_account(cpf)
            .await?
            .ok_or_else(|| Error::AccountNotFound(cpf.to_string()))?;

        Ok(Customer(account))
    }
}
