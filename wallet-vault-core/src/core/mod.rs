//! Core vault functionality
//!
//! This module contains the passphrase cipher, the durable wallet store,
//! wallet creation, and portfolio aggregation.

pub mod wallet;
pub mod crypto;
pub mod storage;
pub mod portfolio;
