//! Domain entities for the Folio content API.

pub mod author;
pub mod form_submission;
pub mod media;
pub mod menu;
pub mod node;
pub mod page;
pub mod redirect;
pub mod site_config;
pub mod translation;
pub mod user;

pub use author::*;
pub use form_submission::*;
pub use media::*;
pub use menu::*;
pub use node::*;
pub use page::*;
pub use redirect::*;
pub use site_config::*;
pub use translation::*;
pub use user::*;
