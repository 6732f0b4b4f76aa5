//! # Folio Service
//!
//! Application services for the Folio content API. The services own the
//! multi-step flows (page aggregation, translation lifecycle, user
//! provisioning); plain list/read endpoints talk to the repositories
//! directly.

pub mod dto;
pub mod page_service;
pub mod translation_service;
pub mod user_service;

mod r#impl;

pub use dto::*;
pub use page_service::*;
pub use r#impl::*;
pub use translation_service::*;
pub use user_service::*;
