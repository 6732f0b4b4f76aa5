//! Menu and menu item entities.

use crate::{MenuId, MenuItemId};
use serde::{Deserialize, Serialize};

/// A named navigation menu for one locale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    pub id: MenuId,
    pub name: String,
    pub locale: String,
}

impl Menu {
    #[must_use]
    pub fn new(name: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            id: MenuId::new(0),
            name: name.into(),
            locale: locale.into(),
        }
    }
}

/// A single entry of a menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub menu_id: MenuId,
    pub title: String,
    /// Target URL; `None` for a plain grouping entry.
    pub url: Option<String>,
    pub new_window: bool,
    pub online: bool,
    /// Ordering weight among siblings.
    pub weight: i32,
    pub parent_id: Option<MenuItemId>,
}

impl MenuItem {
    #[must_use]
    pub fn new(menu_id: MenuId, title: impl Into<String>, url: Option<String>) -> Self {
        Self {
            id: MenuItemId::new(0),
            menu_id,
            title: title.into(),
            url,
            new_window: false,
            online: true,
            weight: 0,
            parent_id: None,
        }
    }
}
