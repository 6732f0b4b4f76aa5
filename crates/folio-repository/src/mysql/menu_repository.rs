//! MySQL menu repository implementation.

use crate::source::{SqlFilter, SqlQuerySource};
use crate::traits::MenuRepository;
use crate::DatabasePool;
use async_trait::async_trait;
use folio_core::{DynSource, FolioError, FolioResult, Menu, MenuId, MenuItem, MenuItemId};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// MySQL menu repository implementation.
#[derive(Clone)]
pub struct MySqlMenuRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlMenuRepository {
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MenuRow {
    id: i64,
    name: String,
    locale: String,
}

impl TryFrom<MenuRow> for Menu {
    type Error = FolioError;

    fn try_from(row: MenuRow) -> Result<Self, Self::Error> {
        Ok(Menu {
            id: MenuId::new(row.id),
            name: row.name,
            locale: row.locale,
        })
    }
}

#[derive(Debug, FromRow)]
struct MenuItemRow {
    id: i64,
    menu_id: i64,
    title: String,
    url: Option<String>,
    new_window: bool,
    online: bool,
    weight: i32,
    parent_id: Option<i64>,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        Self {
            id: MenuItemId::new(row.id),
            menu_id: MenuId::new(row.menu_id),
            title: row.title,
            url: row.url,
            new_window: row.new_window,
            online: row.online,
            weight: row.weight,
            parent_id: row.parent_id.map(MenuItemId::new),
        }
    }
}

#[async_trait]
impl MenuRepository for MySqlMenuRepository {
    fn find_all(&self) -> DynSource<Menu> {
        let filter = SqlFilter::new();
        let select_sql = "SELECT id, name, locale FROM menus ORDER BY id".to_string();
        let count_sql = "SELECT COUNT(*) FROM menus".to_string();

        Box::new(SqlQuerySource::new(
            self.pool.inner().clone(),
            select_sql,
            count_sql,
            filter.into_args(),
            Menu::try_from,
        ))
    }

    async fn find_by_id(&self, id: MenuId) -> FolioResult<Option<Menu>> {
        debug!("Finding menu by id: {}", id);

        let row = sqlx::query_as::<_, MenuRow>("SELECT id, name, locale FROM menus WHERE id = ?")
            .bind(id.into_inner())
            .fetch_optional(self.pool.inner())
            .await?;

        row.map(Menu::try_from).transpose()
    }

    async fn find_items(&self, menu_id: MenuId) -> FolioResult<Vec<MenuItem>> {
        debug!("Finding items of menu: {}", menu_id);

        let rows = sqlx::query_as::<_, MenuItemRow>(
            "SELECT id, menu_id, title, url, new_window, online, weight, parent_id \
             FROM menu_items WHERE menu_id = ? ORDER BY weight, id",
        )
        .bind(menu_id.into_inner())
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(MenuItem::from).collect())
    }

    async fn find_item(&self, id: MenuItemId) -> FolioResult<Option<MenuItem>> {
        debug!("Finding menu item by id: {}", id);

        let row = sqlx::query_as::<_, MenuItemRow>(
            "SELECT id, menu_id, title, url, new_window, online, weight, parent_id \
             FROM menu_items WHERE id = ?",
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(MenuItem::from))
    }

    async fn save(&self, menu: &Menu) -> FolioResult<Menu> {
        debug!("Saving menu: {}", menu.name);

        let result = sqlx::query("INSERT INTO menus (name, locale) VALUES (?, ?)")
            .bind(&menu.name)
            .bind(&menu.locale)
            .execute(self.pool.inner())
            .await?;

        let mut saved = menu.clone();
        saved.id = MenuId::new(result.last_insert_id() as i64);
        Ok(saved)
    }

    async fn update(&self, menu: &Menu) -> FolioResult<Menu> {
        debug!("Updating menu: {}", menu.id);

        let result = sqlx::query("UPDATE menus SET name = ?, locale = ? WHERE id = ?")
            .bind(&menu.name)
            .bind(&menu.locale)
            .bind(menu.id.into_inner())
            .execute(self.pool.inner())
            .await?;

        if result.rows_affected() == 0 {
            return Err(FolioError::not_found("Menu", menu.id));
        }
        Ok(menu.clone())
    }

    async fn delete(&self, id: MenuId) -> FolioResult<bool> {
        debug!("Deleting menu: {}", id);

        sqlx::query("DELETE FROM menu_items WHERE menu_id = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        let result = sqlx::query("DELETE FROM menus WHERE id = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn save_item(&self, item: &MenuItem) -> FolioResult<MenuItem> {
        debug!("Saving menu item: {}", item.title);

        let result = sqlx::query(
            "INSERT INTO menu_items (menu_id, title, url, new_window, online, weight, parent_id) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(item.menu_id.into_inner())
        .bind(&item.title)
        .bind(&item.url)
        .bind(item.new_window)
        .bind(item.online)
        .bind(item.weight)
        .bind(item.parent_id.map(MenuItemId::into_inner))
        .execute(self.pool.inner())
        .await?;

        let mut saved = item.clone();
        saved.id = MenuItemId::new(result.last_insert_id() as i64);
        Ok(saved)
    }

    async fn update_item(&self, item: &MenuItem) -> FolioResult<MenuItem> {
        debug!("Updating menu item: {}", item.id);

        let result = sqlx::query(
            "UPDATE menu_items SET title = ?, url = ?, new_window = ?, online = ?, weight = ?, \
             parent_id = ? WHERE id = ?",
        )
        .bind(&item.title)
        .bind(&item.url)
        .bind(item.new_window)
        .bind(item.online)
        .bind(item.weight)
        .bind(item.parent_id.map(MenuItemId::into_inner))
        .bind(item.id.into_inner())
        .execute(self.pool.inner())
        .await?;

        if result.rows_affected() == 0 {
            return Err(FolioError::not_found("MenuItem", item.id));
        }
        Ok(item.clone())
    }

    async fn delete_item(&self, id: MenuItemId) -> FolioResult<bool> {
        debug!("Deleting menu item: {}", id);

        let result = sqlx::query("DELETE FROM menu_items WHERE id = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
