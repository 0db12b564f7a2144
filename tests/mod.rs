//! Test suite for OverSync
//!
//! This module organizes all tests

pub mod common;
pub mod property;
