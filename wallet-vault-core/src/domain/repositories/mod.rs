//! Domain repositories
//!
//! This module contains repository traits for data access
//! following Domain-Driven Design principles.

pub mod wallet_repository;

// Re-export repositories
pub use wallet_repository::*;
