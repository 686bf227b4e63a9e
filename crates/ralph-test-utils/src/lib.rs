//! Shared test utilities for the ralph workspace.
//!
//! A dev-dependency only; never published.
//!
//! # Modules
//!
//! - [`project`]: [`TestProject`], a temporary project directory paired
//!   with a temporary distribution (asset set + manifest)

pub mod project;

pub use project::{STANDARD_ASSETS, TestProject};
