//! Heatmon firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod heat_index;
pub mod palette;
pub mod report;
pub mod scheduler;

// ESP-IDF-facing modules; host builds get the simulation stubs inside.
pub mod adapters;
pub mod pins;
pub mod sensors;
