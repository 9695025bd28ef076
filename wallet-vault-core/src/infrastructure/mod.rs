//! Infrastructure layer - platform-specific implementations
//!
//! This module contains storage backends and the HTTP adapter for the
//! external wallet generation provider.

pub mod platform;
pub mod provider;

// Re-export infrastructure components
pub use platform::*;
pub use provider::*;
