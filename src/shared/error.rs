//! Shared Error Types
//!
//! This module defines the error type returned across the backend command
//! boundary. The UI layer never matches on transport details; it shows the
//! `Display` form of the error, which for daemon rejections is the daemon's
//! own message, unchanged.
//!
//! # Error Categories
//!
//! - `Rejected` - The daemon answered and refused the command
//! - `Transport` - The daemon could not be reached
//! - `Decode` - The daemon answered with a body we could not read
//! - `Cancelled` - The request was dropped before it produced a result
//!
//! # Usage
//!
//! ```rust
//! use oversync::shared::error::BackendError;
//!
//! let error = BackendError::rejected("Invalid ticket");
//! assert_eq!(error.to_string(), "Invalid ticket");
//! ```
use thiserror::Error;

/// Failure of a call across the backend command boundary
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The daemon refused the command; the message is shown verbatim
    #[error("{message}")]
    Rejected {
        /// Message produced by the daemon
        message: String,
    },

    /// The daemon could not be reached
    #[error("Backend unreachable: {message}")]
    Transport {
        /// Human-readable error message
        message: String,
    },

    /// The daemon replied with an unreadable body
    #[error("Malformed backend response: {message}")]
    Decode {
        /// Human-readable error message
        message: String,
    },

    /// The request was dropped before completing
    #[error("Request was cancelled")]
    Cancelled,
}

impl BackendError {
    /// Create a new rejection error
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Create a new transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(format!("JSON error: {}", err))
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::decode(err.to_string())
        } else {
            Self::transport(err.to_string())
        }
    }
}
