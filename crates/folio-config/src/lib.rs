//! # Folio Config
//!
//! Layered configuration loading for the Folio content API.

pub mod app_config;
pub mod loader;

pub use app_config::*;
pub use loader::*;
