//! Theme Module
//!
//! This module provides the color scheme and styling for the OverSync
//! desktop shell. It includes:
//!
//! - Color constants for the dark surface palette
//! - Frame builders for panels, cards and dialogs
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::egui_app::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//! styles::card_frame().show(ui, |ui| {
//!     ui.label("Active Peers");
//! });
//! ```

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;
