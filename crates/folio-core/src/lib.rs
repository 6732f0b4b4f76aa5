//! # Folio Core
//!
//! Core types, errors and domain entities for the Folio content API.
//! The one piece of genuinely shared infrastructure lives in [`pagination`]:
//! every list endpoint in the HTTP layer funnels through the same
//! source/paginator/decorator contract defined there.

pub mod domain;
pub mod error;
pub mod id;
pub mod pagination;
pub mod result;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use pagination::*;
pub use result::*;
pub use validation::*;
