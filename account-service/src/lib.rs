//! Account service for managing accounts and their statements

pub mod service;
pub mod repository;

pub use service::AccountService;
pub use repository::{AccountRepository, InMemoryAccountRepository};
