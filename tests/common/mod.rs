//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - A scripted in-memory sync backend
//! - A scripted directory picker
//! - Custom assertion macros

pub mod assertions;

// Re-export commonly used utilities
pub use mock_backend::*;
