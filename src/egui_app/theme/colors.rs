//! Color Constants
//!
//! Dark surface palette with a teal primary, loosely following Material 3
//! tonal roles.

use eframe::egui::Color32;

/// App background
pub const SURFACE: Color32 = Color32::from_rgb(0x11, 0x14, 0x16);

/// Navigation rail and wizard card
pub const SURFACE_CONTAINER: Color32 = Color32::from_rgb(0x1D, 0x20, 0x22);

/// Stat cards and list rows
pub const SURFACE_CONTAINER_HIGH: Color32 = Color32::from_rgb(0x27, 0x2B, 0x2D);

/// Outlines and separators
pub const OUTLINE_VARIANT: Color32 = Color32::from_rgb(0x3F, 0x48, 0x4A);

/// Primary accent - Teal
pub const PRIMARY: Color32 = Color32::from_rgb(0x4F, 0xD8, 0xEB);

/// Text on the primary accent
pub const ON_PRIMARY: Color32 = Color32::from_rgb(0x00, 0x36, 0x3D);

/// Selected nav item background
pub const SECONDARY_CONTAINER: Color32 = Color32::from_rgb(0x33, 0x4B, 0x4F);

/// Main text
pub const ON_SURFACE: Color32 = Color32::from_rgb(0xE1, 0xE3, 0xE4);

/// Muted text
pub const ON_SURFACE_VARIANT: Color32 = Color32::from_rgb(0xBF, 0xC8, 0xCA);

/// Online status indicator - Green
pub const STATUS_ONLINE: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Offline status indicator - Gray
pub const STATUS_OFFLINE: Color32 = Color32::from_rgb(0x9E, 0x9E, 0x9E);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xFF, 0xB4, 0xAB);

/// Warning color - Orange
pub const WARNING: Color32 = Color32::from_rgb(0xFF, 0xA7, 0x26);

/// Inactive progress dot
pub const DOT_INACTIVE: Color32 = OUTLINE_VARIANT;
