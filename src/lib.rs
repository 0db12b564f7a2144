//! OverSync - Desktop Shell Library
//!
//! OverSync keeps a local vault directory in sync across devices over direct
//! peer-to-peer links, optionally backed by an encrypted GitHub repository.
//! The heavy lifting (hashing, conflict resolution, transport, encryption,
//! remote storage) happens in a separate sync daemon. This library is the
//! desktop shell in front of it.
//!
//! # Overview
//!
//! This library provides:
//! - A startup probe that decides between onboarding and the live dashboard
//! - A multi-step onboarding wizard ending in a single initialization call
//! - A ticket-based peer pairing dialog
//! - A dashboard that refreshes status and recent activity on an interval
//! - Native desktop rendering via egui
//!
//! # Module Structure
//!
//! - **`shared`** - Types exchanged with the daemon
//!   - Sync status, file activity, initialization payloads
//!   - Error and configuration types
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Orchestration components and their async plumbing
//!   - Views and theme
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use oversync::egui_app::{AppState, Config, HttpBackend, NativeDirectoryPicker, Services};
//!
//! let runtime = tokio::runtime::Runtime::new().unwrap();
//! let config = Config::load().unwrap();
//! let backend = Arc::new(HttpBackend::new(config.clone()).unwrap());
//! let services = Services::new(backend, Arc::new(NativeDirectoryPicker), runtime.handle().clone());
//! let mut state = AppState::new(config, services);
//! state.update();
//! ```
//!
//! # Threading
//!
//! - Remote calls run as tokio tasks
//! - Their results are applied on the UI thread by the component that issued them
//! - No component state is shared across threads
//!
//! # Error Handling
//!
//! - `Result<T, BackendError>` for every call across the daemon boundary
//! - Failures become state (phase, step-local text, dialog text) or log lines;
//!   none of them ends the process

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
pub mod egui_app;
