//! System diagnostics console library.
//!
//! Exposes the console, report and domain modules for integration
//! testing. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module, with a host
//! simulation alongside.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod chip;
pub mod config;
pub mod console;
pub mod error;
pub mod identity;
pub mod memory;
pub mod report;

pub use error::{Error, Result};
