//! Service implementations.
//!
//! Trait definitions live in the parent module (e.g. `page_service.rs`).

pub mod page_service_impl;
pub mod translation_service_impl;
pub mod user_service_impl;

pub use page_service_impl::PageServiceImpl;
pub use translation_service_impl::TranslationServiceImpl;
pub use user_service_impl::UserServiceImpl;
