//! HTTP controllers, one per CMS concept.

pub mod authors_controller;
pub mod config_controller;
pub mod form_submissions_controller;
pub mod groups_controller;
pub mod health_controller;
pub mod media_controller;
pub mod menu_controller;
pub mod nodes_controller;
pub mod pages_controller;
pub mod redirects_controller;
pub mod roles_controller;
pub mod translations_controller;
pub mod users_controller;
