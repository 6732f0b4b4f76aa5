//! # Folio REST
//!
//! REST API layer using Axum for the Folio content API.
//! Every list endpoint funnels through the shared paginator; authorization
//! happens here, before a source is ever built.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
