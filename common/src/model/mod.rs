//! Domain models for the ledger

pub mod account;
