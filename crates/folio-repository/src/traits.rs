//! Repository trait definitions.
//!
//! List methods return a [`DynSource`] so callers decide the window through
//! the paginator; single-row lookups and writes are plain async calls.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use folio_core::{
    ApiUser, Author, DynSource, Folder, FolderId, FormSubmission, Group, GroupId, Media, MediaId,
    Menu, MenuId, MenuItem, MenuItemId, Node, NodeId, PageTranslation, PageTranslationId,
    PageVersionType, Redirect, Role, RoleId, SiteConfig, Translation, TranslationStatus,
    FolioResult, UserId,
};

/// Filter for node list queries.
#[derive(Debug, Default, Clone)]
pub struct NodeFilter {
    pub internal_name: Option<String>,
    pub hidden_from_nav: Option<bool>,
    pub ref_entity_name: Option<String>,
    /// Restricts to nodes carrying a page translation in this locale.
    pub locale: Option<String>,
}

/// Node repository trait.
#[async_trait]
pub trait NodeRepository: Send + Sync {
    /// Builds a deferred source over non-deleted nodes matching the filter.
    fn find(&self, filter: &NodeFilter) -> DynSource<Node>;

    /// Finds a node by ID.
    async fn find_by_id(&self, id: NodeId) -> FolioResult<Option<Node>>;

    /// Loads all direct children of a node, in tree order.
    async fn find_children(&self, id: NodeId) -> FolioResult<Vec<Node>>;
}

/// Filter for page list queries.
#[derive(Debug, Default, Clone)]
pub struct PageFilter {
    /// Page type (the node's ref entity name).
    pub ref_entity_name: Option<String>,
    pub locale: Option<String>,
    /// Internal name of the owning node.
    pub internal_name: Option<String>,
    pub node_id: Option<NodeId>,
    pub online: Option<bool>,
    pub version: Option<PageVersionType>,
}

/// Page translation repository trait.
#[async_trait]
pub trait PageRepository: Send + Sync {
    /// Builds a deferred source over page translations matching the filter.
    fn find(&self, filter: &PageFilter) -> DynSource<PageTranslation>;

    /// Finds a page translation by ID, regardless of its online state.
    async fn find_by_id(&self, id: PageTranslationId) -> FolioResult<Option<PageTranslation>>;

    /// Finds an online page translation by ID.
    async fn find_online_by_id(&self, id: PageTranslationId) -> FolioResult<Option<PageTranslation>>;

    /// Updates an existing page translation.
    async fn update(&self, translation: &PageTranslation) -> FolioResult<PageTranslation>;
}

/// Filter for media list queries.
#[derive(Debug, Default, Clone)]
pub struct MediaFilter {
    /// Substring match on the media name.
    pub name: Option<String>,
    pub folder_id: Option<FolderId>,
}

/// Media repository trait.
#[async_trait]
pub trait MediaRepository: Send + Sync {
    /// Builds a deferred source over non-deleted media matching the filter.
    fn find(&self, filter: &MediaFilter) -> DynSource<Media>;

    /// Finds a media item by ID.
    async fn find_by_id(&self, id: MediaId) -> FolioResult<Option<Media>>;

    /// Finds a folder by ID.
    async fn find_folder(&self, id: FolderId) -> FolioResult<Option<Folder>>;

    /// Saves a new media item.
    async fn save(&self, media: &Media) -> FolioResult<Media>;

    /// Soft-deletes a media item.
    async fn delete(&self, id: MediaId) -> FolioResult<bool>;
}

/// Menu repository trait.
#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// Builds a deferred source over all menus.
    fn find_all(&self) -> DynSource<Menu>;

    /// Finds a menu by ID.
    async fn find_by_id(&self, id: MenuId) -> FolioResult<Option<Menu>>;

    /// Loads all items of a menu, in weight order.
    async fn find_items(&self, menu_id: MenuId) -> FolioResult<Vec<MenuItem>>;

    /// Finds a menu item by ID.
    async fn find_item(&self, id: MenuItemId) -> FolioResult<Option<MenuItem>>;

    /// Saves a new menu.
    async fn save(&self, menu: &Menu) -> FolioResult<Menu>;

    /// Updates an existing menu.
    async fn update(&self, menu: &Menu) -> FolioResult<Menu>;

    /// Deletes a menu and its items.
    async fn delete(&self, id: MenuId) -> FolioResult<bool>;

    /// Saves a new menu item.
    async fn save_item(&self, item: &MenuItem) -> FolioResult<MenuItem>;

    /// Updates an existing menu item.
    async fn update_item(&self, item: &MenuItem) -> FolioResult<MenuItem>;

    /// Deletes a menu item.
    async fn delete_item(&self, id: MenuItemId) -> FolioResult<bool>;
}

/// Filter for user list queries.
#[derive(Debug, Default, Clone)]
pub struct UserFilter {
    pub username: Option<String>,
    pub email: Option<String>,
}

/// API user repository trait.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Builds a deferred source over users matching the filter.
    fn find(&self, filter: &UserFilter) -> DynSource<ApiUser>;

    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> FolioResult<Option<ApiUser>>;

    /// Finds an enabled user by API key.
    async fn find_by_api_key(&self, api_key: &str) -> FolioResult<Option<ApiUser>>;

    /// Checks if a username exists.
    async fn exists_by_username(&self, username: &str) -> FolioResult<bool>;

    /// Saves a new user.
    async fn save(&self, user: &ApiUser) -> FolioResult<ApiUser>;

    /// Updates an existing user.
    async fn update(&self, user: &ApiUser) -> FolioResult<ApiUser>;

    /// Deletes a user.
    async fn delete(&self, id: UserId) -> FolioResult<bool>;
}

/// Group repository trait.
#[async_trait]
pub trait GroupRepository: Send + Sync {
    fn find_all(&self) -> DynSource<Group>;
    async fn find_by_id(&self, id: GroupId) -> FolioResult<Option<Group>>;
    async fn save(&self, group: &Group) -> FolioResult<Group>;
    async fn update(&self, group: &Group) -> FolioResult<Group>;
    async fn delete(&self, id: GroupId) -> FolioResult<bool>;
}

/// Role repository trait.
#[async_trait]
pub trait RoleRepository: Send + Sync {
    fn find_all(&self) -> DynSource<Role>;
    async fn find_by_id(&self, id: RoleId) -> FolioResult<Option<Role>>;
    async fn save(&self, role: &Role) -> FolioResult<Role>;
    async fn update(&self, role: &Role) -> FolioResult<Role>;
    async fn delete(&self, id: RoleId) -> FolioResult<bool>;
}

/// Redirect repository trait.
#[async_trait]
pub trait RedirectRepository: Send + Sync {
    /// Builds a deferred source over all redirects.
    fn find_all(&self) -> DynSource<Redirect>;
}

/// Site configuration repository trait.
#[async_trait]
pub trait SiteConfigRepository: Send + Sync {
    /// Finds a configuration document by internal name.
    async fn find_by_internal_name(&self, internal_name: &str) -> FolioResult<Option<SiteConfig>>;
}

/// Filter for translation list queries.
#[derive(Debug, Default, Clone)]
pub struct TranslationFilter {
    pub locale: Option<String>,
    pub domain: Option<String>,
    pub keyword: Option<String>,
    pub status: Option<TranslationStatus>,
}

/// Translation repository trait.
#[async_trait]
pub trait TranslationRepository: Send + Sync {
    /// Builds a deferred source over translations matching the filter.
    fn find(&self, filter: &TranslationFilter) -> DynSource<Translation>;

    /// Loads all enabled translations of a domain, optionally restricted to
    /// one locale.
    async fn find_by_domain(&self, domain: &str, locale: Option<&str>) -> FolioResult<Vec<Translation>>;

    /// Finds one enabled translation.
    async fn find_one(&self, domain: &str, keyword: &str, locale: &str) -> FolioResult<Option<Translation>>;

    /// Loads all rows of a keyword in a domain, across locales and statuses.
    async fn find_by_keyword_and_domain(&self, keyword: &str, domain: &str) -> FolioResult<Vec<Translation>>;

    /// Loads rows flagged deprecated before the given date.
    async fn find_deprecated_before(&self, date: DateTime<Utc>, domain: &str) -> FolioResult<Vec<Translation>>;

    /// Returns the next free translation group id.
    async fn next_translation_group_id(&self) -> FolioResult<i64>;

    /// Saves a new translation row.
    async fn save(&self, translation: &Translation) -> FolioResult<Translation>;

    /// Updates an existing translation row.
    async fn update(&self, translation: &Translation) -> FolioResult<Translation>;
}

/// Author repository trait.
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Builds a deferred source over authors of one type.
    fn find_by_type(&self, author_type: &str) -> DynSource<Author>;
}

/// Form submission repository trait.
#[async_trait]
pub trait FormSubmissionRepository: Send + Sync {
    /// Builds a deferred source over all submissions, newest first.
    fn find_all(&self) -> DynSource<FormSubmission>;
}
