//! # Display Module
//!
//! This module provides display-target configurations for generated sketches.
//!
//! ## Modules
//!
//! - [`config`]: Display hardware profiles

pub mod config;

pub use config::{DisplayProfile, PanelKind};
