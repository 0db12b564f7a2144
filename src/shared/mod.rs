//! Shared Module
//!
//! This module contains the types exchanged with the sync daemon across the
//! backend command boundary, plus the error and configuration types used on
//! both sides of it.
//!
//! # Overview
//!
//! The shared module provides platform-agnostic types. Nothing here depends
//! on egui or on a particular transport; every type is serializable so a
//! backend implementation can put it on the wire as it sees fit.

/// Sync status and recent activity snapshots
pub mod status;

/// Initialization and pairing payloads
pub mod onboarding;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use status::{FileActivityEntry, SyncStatus};
pub use onboarding::{GithubConfig, InitializeRequest, DEFAULT_BRANCH};
pub use error::BackendError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
