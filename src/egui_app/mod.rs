//! egui Native Desktop App Module
//!
//! This module provides the OverSync desktop shell: the client-side
//! orchestration in front of the sync daemon, plus the egui views that render
//! its state.
//!
//! # Architecture
//!
//! The egui_app module is organized into focused submodules:
//!
//! - **`config`** - Configuration management (daemon URL, poll interval)
//! - **`backend`** - The daemon command boundary and its HTTP client
//! - **`picker`** - Directory selection dialog
//! - **`services`** - Runtime handle + result slots for remote calls
//! - **`status_client`** - Status and activity queries
//! - **`bootstrap`** - Startup probe and app phase
//! - **`onboarding`** - Onboarding wizard
//! - **`pairing`** - Peer pairing dialog state
//! - **`dashboard`** - Periodic dashboard refresh
//! - **`state`** - Top-level owner of all of the above
//! - **`views`** / **`theme`** - Rendering
//! - **`main`** - Main application entry point (binary)
//!
//! # Control flow
//!
//! ```text
//! BootstrapController ──probe──▶ NeedsOnboarding ──▶ OnboardingWizard ──initialize──┐
//!                     └────────▶ Ready ◀────────────────────────────────────────────┘
//!                                  ├─▶ DashboardPoller (interval task)
//!                                  └─▶ PairingCoordinator (user-opened dialog)
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the desktop app:
//! // cargo run --bin oversync
//! ```

pub mod config;
pub mod types;
pub mod backend;
pub mod picker;
pub mod services;
pub mod status_client;
pub mod bootstrap;
pub mod onboarding;
pub mod pairing;
pub mod dashboard;
pub mod state;
pub mod logging;
pub mod views;
pub mod theme;

// Re-export commonly used types
pub use config::Config;
pub use types::{AppPhase, NavSection, WizardStep};
pub use backend::{HttpBackend, SyncBackend};
pub use picker::{DirectoryPicker, NativeDirectoryPicker};
pub use services::{Pending, Services};
pub use status_client::{StatusClient, StatusSnapshot};
pub use bootstrap::BootstrapController;
pub use onboarding::{Advance, OnboardingDraft, OnboardingWizard, SubmissionOutcome};
pub use pairing::{PairingCoordinator, PairingOutcome, PairingSession};
pub use dashboard::{DashboardPoller, DashboardView};
pub use state::AppState;
