//! Shared in-memory fixtures for the HTTP integration tests.
//!
//! Every repository trait is backed by a `Mutex<Vec<_>>` fake so the full
//! router, auth middleware and paginator run without a database.

use async_trait::async_trait;
use axum::Router;
use chrono::{DateTime, Utc};
use folio_config::{SecurityConfig, ServerConfig};
use folio_core::{
    ApiUser, Author, DynSource, Folder, FolderId, FormSubmission, FolioResult, Group, GroupId,
    MaterializedSource, Media, MediaId, Menu, MenuId, MenuItem, MenuItemId, Node, NodeId,
    PageTranslation, PageTranslationId, Redirect, Role, RoleId, SiteConfig, Translation,
    TranslationId, UserId, ROLE_ADMIN,
};
use folio_repository::{
    AuthorRepository, FormSubmissionRepository, GroupRepository, MediaFilter, MediaRepository,
    MenuRepository, NodeFilter, NodeRepository, PageFilter, PageRepository, RedirectRepository,
    RoleRepository, SiteConfigRepository, TranslationFilter, TranslationRepository, UserFilter,
    UserRepository,
};
use folio_rest::{create_router, AppState};
use folio_service::{PageServiceImpl, TranslationServiceImpl, UserServiceImpl};
use std::sync::{Arc, Mutex};

pub const ADMIN_KEY: &str = "admin-test-key";
pub const READER_KEY: &str = "reader-test-key";

// ---------------------------------------------------------------------------
// Fakes
// ---------------------------------------------------------------------------

pub struct FakeNodeRepository {
    nodes: Vec<Node>,
}

#[async_trait]
impl NodeRepository for FakeNodeRepository {
    fn find(&self, filter: &NodeFilter) -> DynSource<Node> {
        let nodes = self
            .nodes
            .iter()
            .filter(|n| !n.deleted)
            .filter(|n| {
                filter
                    .internal_name
                    .as_ref()
                    .map_or(true, |name| n.internal_name.as_deref() == Some(name))
            })
            .filter(|n| {
                filter
                    .ref_entity_name
                    .as_ref()
                    .map_or(true, |r| &n.ref_entity_name == r)
            })
            .filter(|n| filter.hidden_from_nav.map_or(true, |h| n.hidden_from_nav == h))
            .cloned()
            .collect();
        Box::new(MaterializedSource::new(nodes))
    }

    async fn find_by_id(&self, id: NodeId) -> FolioResult<Option<Node>> {
        Ok(self
            .nodes
            .iter()
            .find(|n| n.id == id && !n.deleted)
            .cloned())
    }

    async fn find_children(&self, id: NodeId) -> FolioResult<Vec<Node>> {
        Ok(self
            .nodes
            .iter()
            .filter(|n| n.parent_id == Some(id) && !n.deleted)
            .cloned()
            .collect())
    }
}

pub struct FakePageRepository {
    translations: Mutex<Vec<PageTranslation>>,
}

#[async_trait]
impl PageRepository for FakePageRepository {
    fn find(&self, filter: &PageFilter) -> DynSource<PageTranslation> {
        let translations = self
            .translations
            .lock()
            .unwrap()
            .iter()
            .filter(|t| filter.locale.as_ref().map_or(true, |l| &t.locale == l))
            .filter(|t| filter.node_id.map_or(true, |id| t.node_id == id))
            .filter(|t| filter.online.map_or(true, |o| t.online == o))
            .filter(|t| filter.version.map_or(true, |v| t.version == v))
            .cloned()
            .collect();
        Box::new(MaterializedSource::new(translations))
    }

    async fn find_by_id(&self, id: PageTranslationId) -> FolioResult<Option<PageTranslation>> {
        Ok(self
            .translations
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    async fn find_online_by_id(&self, id: PageTranslationId) -> FolioResult<Option<PageTranslation>> {
        Ok(self
            .translations
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == id && t.online)
            .cloned())
    }

    async fn update(&self, translation: &PageTranslation) -> FolioResult<PageTranslation> {
        let mut translations = self.translations.lock().unwrap();
        if let Some(existing) = translations.iter_mut().find(|t| t.id == translation.id) {
            *existing = translation.clone();
        }
        Ok(translation.clone())
    }
}

pub struct FakeMediaRepository {
    media: Mutex<Vec<Media>>,
    folders: Vec<Folder>,
}

#[async_trait]
impl MediaRepository for FakeMediaRepository {
    fn find(&self, filter: &MediaFilter) -> DynSource<Media> {
        let media = self
            .media
            .lock()
            .unwrap()
            .iter()
            .filter(|m| !m.deleted)
            .filter(|m| {
                filter
                    .name
                    .as_ref()
                    .map_or(true, |name| m.name.contains(name.as_str()))
            })
            .filter(|m| filter.folder_id.map_or(true, |id| m.folder_id == id))
            .cloned()
            .collect();
        Box::new(MaterializedSource::new(media))
    }

    async fn find_by_id(&self, id: MediaId) -> FolioResult<Option<Media>> {
        Ok(self
            .media
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == id && !m.deleted)
            .cloned())
    }

    async fn find_folder(&self, id: FolderId) -> FolioResult<Option<Folder>> {
        Ok(self
            .folders
            .iter()
            .find(|f| f.id == id && !f.deleted)
            .cloned())
    }

    async fn save(&self, media: &Media) -> FolioResult<Media> {
        let mut stored = media.clone();
        let mut items = self.media.lock().unwrap();
        stored.id = MediaId::new(items.len() as i64 + 1);
        items.push(stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: MediaId) -> FolioResult<bool> {
        let mut items = self.media.lock().unwrap();
        match items.iter_mut().find(|m| m.id == id && !m.deleted) {
            Some(media) => {
                media.soft_delete();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

pub struct FakeMenuRepository {
    menus: Mutex<Vec<Menu>>,
    items: Mutex<Vec<MenuItem>>,
}

#[async_trait]
impl MenuRepository for FakeMenuRepository {
    fn find_all(&self) -> DynSource<Menu> {
        Box::new(MaterializedSource::new(self.menus.lock().unwrap().clone()))
    }

    async fn find_by_id(&self, id: MenuId) -> FolioResult<Option<Menu>> {
        Ok(self.menus.lock().unwrap().iter().find(|m| m.id == id).cloned())
    }

    async fn find_items(&self, menu_id: MenuId) -> FolioResult<Vec<MenuItem>> {
        let mut items: Vec<MenuItem> = self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.menu_id == menu_id)
            .cloned()
            .collect();
        items.sort_by_key(|i| i.weight);
        Ok(items)
    }

    async fn find_item(&self, id: MenuItemId) -> FolioResult<Option<MenuItem>> {
        Ok(self.items.lock().unwrap().iter().find(|i| i.id == id).cloned())
    }

    async fn save(&self, menu: &Menu) -> FolioResult<Menu> {
        let mut stored = menu.clone();
        let mut menus = self.menus.lock().unwrap();
        stored.id = MenuId::new(menus.len() as i64 + 1);
        menus.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, menu: &Menu) -> FolioResult<Menu> {
        let mut menus = self.menus.lock().unwrap();
        if let Some(existing) = menus.iter_mut().find(|m| m.id == menu.id) {
            *existing = menu.clone();
        }
        Ok(menu.clone())
    }

    async fn delete(&self, id: MenuId) -> FolioResult<bool> {
        let mut menus = self.menus.lock().unwrap();
        let before = menus.len();
        menus.retain(|m| m.id != id);
        if menus.len() < before {
            self.items.lock().unwrap().retain(|i| i.menu_id != id);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn save_item(&self, item: &MenuItem) -> FolioResult<MenuItem> {
        let mut stored = item.clone();
        let mut items = self.items.lock().unwrap();
        stored.id = MenuItemId::new(items.len() as i64 + 1);
        items.push(stored.clone());
        Ok(stored)
    }

    async fn update_item(&self, item: &MenuItem) -> FolioResult<MenuItem> {
        let mut items = self.items.lock().unwrap();
        if let Some(existing) = items.iter_mut().find(|i| i.id == item.id) {
            *existing = item.clone();
        }
        Ok(item.clone())
    }

    async fn delete_item(&self, id: MenuItemId) -> FolioResult<bool> {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|i| i.id != id);
        Ok(items.len() < before)
    }
}

pub struct FakeUserRepository {
    users: Mutex<Vec<ApiUser>>,
}

#[async_trait]
impl UserRepository for FakeUserRepository {
    fn find(&self, filter: &UserFilter) -> DynSource<ApiUser> {
        let users = self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| filter.username.as_ref().map_or(true, |n| &u.username == n))
            .filter(|u| filter.email.as_ref().map_or(true, |e| &u.email == e))
            .cloned()
            .collect();
        Box::new(MaterializedSource::new(users))
    }

    async fn find_by_id(&self, id: UserId) -> FolioResult<Option<ApiUser>> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_api_key(&self, api_key: &str) -> FolioResult<Option<ApiUser>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.enabled && u.api_key.as_deref() == Some(api_key))
            .cloned())
    }

    async fn exists_by_username(&self, username: &str) -> FolioResult<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.username == username))
    }

    async fn save(&self, user: &ApiUser) -> FolioResult<ApiUser> {
        let mut stored = user.clone();
        let mut users = self.users.lock().unwrap();
        stored.id = UserId::new(users.len() as i64 + 1);
        users.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, user: &ApiUser) -> FolioResult<ApiUser> {
        let mut users = self.users.lock().unwrap();
        if let Some(existing) = users.iter_mut().find(|u| u.id == user.id) {
            *existing = user.clone();
        }
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> FolioResult<bool> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() < before)
    }
}

pub struct FakeGroupRepository {
    groups: Mutex<Vec<Group>>,
}

#[async_trait]
impl GroupRepository for FakeGroupRepository {
    fn find_all(&self) -> DynSource<Group> {
        Box::new(MaterializedSource::new(self.groups.lock().unwrap().clone()))
    }

    async fn find_by_id(&self, id: GroupId) -> FolioResult<Option<Group>> {
        Ok(self.groups.lock().unwrap().iter().find(|g| g.id == id).cloned())
    }

    async fn save(&self, group: &Group) -> FolioResult<Group> {
        let mut stored = group.clone();
        let mut groups = self.groups.lock().unwrap();
        stored.id = GroupId::new(groups.len() as i64 + 1);
        groups.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, group: &Group) -> FolioResult<Group> {
        let mut groups = self.groups.lock().unwrap();
        if let Some(existing) = groups.iter_mut().find(|g| g.id == group.id) {
            *existing = group.clone();
        }
        Ok(group.clone())
    }

    async fn delete(&self, id: GroupId) -> FolioResult<bool> {
        let mut groups = self.groups.lock().unwrap();
        let before = groups.len();
        groups.retain(|g| g.id != id);
        Ok(groups.len() < before)
    }
}

pub struct FakeRoleRepository {
    roles: Mutex<Vec<Role>>,
}

#[async_trait]
impl RoleRepository for FakeRoleRepository {
    fn find_all(&self) -> DynSource<Role> {
        Box::new(MaterializedSource::new(self.roles.lock().unwrap().clone()))
    }

    async fn find_by_id(&self, id: RoleId) -> FolioResult<Option<Role>> {
        Ok(self.roles.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }

    async fn save(&self, role: &Role) -> FolioResult<Role> {
        let mut stored = role.clone();
        let mut roles = self.roles.lock().unwrap();
        stored.id = RoleId::new(roles.len() as i64 + 1);
        roles.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, role: &Role) -> FolioResult<Role> {
        let mut roles = self.roles.lock().unwrap();
        if let Some(existing) = roles.iter_mut().find(|r| r.id == role.id) {
            *existing = role.clone();
        }
        Ok(role.clone())
    }

    async fn delete(&self, id: RoleId) -> FolioResult<bool> {
        let mut roles = self.roles.lock().unwrap();
        let before = roles.len();
        roles.retain(|r| r.id != id);
        Ok(roles.len() < before)
    }
}

pub struct FakeRedirectRepository {
    redirects: Vec<Redirect>,
}

#[async_trait]
impl RedirectRepository for FakeRedirectRepository {
    fn find_all(&self) -> DynSource<Redirect> {
        Box::new(MaterializedSource::new(self.redirects.clone()))
    }
}

pub struct FakeSiteConfigRepository {
    configs: Vec<SiteConfig>,
}

#[async_trait]
impl SiteConfigRepository for FakeSiteConfigRepository {
    async fn find_by_internal_name(&self, internal_name: &str) -> FolioResult<Option<SiteConfig>> {
        Ok(self
            .configs
            .iter()
            .find(|c| c.internal_name == internal_name)
            .cloned())
    }
}

pub struct FakeTranslationRepository {
    translations: Mutex<Vec<Translation>>,
}

#[async_trait]
impl TranslationRepository for FakeTranslationRepository {
    fn find(&self, filter: &TranslationFilter) -> DynSource<Translation> {
        let translations = self
            .translations
            .lock()
            .unwrap()
            .iter()
            .filter(|t| filter.locale.as_ref().map_or(true, |l| &t.locale == l))
            .filter(|t| filter.domain.as_ref().map_or(true, |d| &t.domain == d))
            .filter(|t| filter.keyword.as_ref().map_or(true, |k| &t.keyword == k))
            .filter(|t| filter.status.map_or(true, |s| t.status == s))
            .cloned()
            .collect();
        Box::new(MaterializedSource::new(translations))
    }

    async fn find_by_domain(
        &self,
        domain: &str,
        locale: Option<&str>,
    ) -> FolioResult<Vec<Translation>> {
        Ok(self
            .translations
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.domain == domain)
            .filter(|t| t.status == folio_core::TranslationStatus::Enabled)
            .filter(|t| locale.map_or(true, |l| t.locale == l))
            .cloned()
            .collect())
    }

    async fn find_one(
        &self,
        domain: &str,
        keyword: &str,
        locale: &str,
    ) -> FolioResult<Option<Translation>> {
        Ok(self
            .translations
            .lock()
            .unwrap()
            .iter()
            .find(|t| {
                t.domain == domain
                    && t.keyword == keyword
                    && t.locale == locale
                    && t.status == folio_core::TranslationStatus::Enabled
            })
            .cloned())
    }

    async fn find_by_keyword_and_domain(
        &self,
        keyword: &str,
        domain: &str,
    ) -> FolioResult<Vec<Translation>> {
        Ok(self
            .translations
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.keyword == keyword && t.domain == domain)
            .cloned()
            .collect())
    }

    async fn find_deprecated_before(
        &self,
        date: DateTime<Utc>,
        domain: &str,
    ) -> FolioResult<Vec<Translation>> {
        Ok(self
            .translations
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.domain == domain)
            .filter(|t| t.deprecated_at.is_some_and(|d| d < date))
            .cloned()
            .collect())
    }

    async fn next_translation_group_id(&self) -> FolioResult<i64> {
        Ok(self
            .translations
            .lock()
            .unwrap()
            .iter()
            .map(|t| t.translation_id)
            .max()
            .unwrap_or(0)
            + 1)
    }

    async fn save(&self, translation: &Translation) -> FolioResult<Translation> {
        let mut stored = translation.clone();
        let mut translations = self.translations.lock().unwrap();
        stored.id = TranslationId::new(translations.len() as i64 + 1);
        translations.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, translation: &Translation) -> FolioResult<Translation> {
        let mut translations = self.translations.lock().unwrap();
        if let Some(existing) = translations.iter_mut().find(|t| t.id == translation.id) {
            *existing = translation.clone();
        }
        Ok(translation.clone())
    }
}

pub struct FakeAuthorRepository {
    authors: Vec<Author>,
}

#[async_trait]
impl AuthorRepository for FakeAuthorRepository {
    fn find_by_type(&self, author_type: &str) -> DynSource<Author> {
        let authors = self
            .authors
            .iter()
            .filter(|a| a.author_type == author_type)
            .cloned()
            .collect();
        Box::new(MaterializedSource::new(authors))
    }
}

pub struct FakeFormSubmissionRepository {
    submissions: Vec<FormSubmission>,
}

#[async_trait]
impl FormSubmissionRepository for FakeFormSubmissionRepository {
    fn find_all(&self) -> DynSource<FormSubmission> {
        Box::new(MaterializedSource::new(self.submissions.clone()))
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn make_node(id: i64, internal_name: &str, parent_id: Option<i64>) -> Node {
    let mut node = Node::new("app.page.ContentPage", parent_id.map(NodeId::new));
    node.id = NodeId::new(id);
    node.internal_name = Some(internal_name.to_string());
    node
}

fn make_page(id: i64, node_id: i64, locale: &str, title: &str, slug: &str) -> PageTranslation {
    let mut translation = PageTranslation::new(NodeId::new(node_id), locale, title, slug);
    translation.id = PageTranslationId::new(id);
    translation.publish();
    translation
}

fn make_user(id: i64, username: &str, api_key: &str, roles: Vec<String>) -> ApiUser {
    let mut user = ApiUser::new(username, format!("{username}@example.com"));
    user.id = UserId::new(id);
    user.api_key = Some(api_key.to_string());
    user.roles = roles;
    user
}

fn make_translation(id: i64, group: i64, keyword: &str, locale: &str, text: &str) -> Translation {
    let mut translation = Translation::new(keyword, "messages", locale, text);
    translation.id = TranslationId::new(id);
    translation.translation_id = group;
    translation
}

/// Builds an application state seeded with a small content tree, two API
/// users (one admin, one plain reader) and a handful of translations.
pub fn seeded_state() -> AppState {
    let node_repository = Arc::new(FakeNodeRepository {
        nodes: vec![
            make_node(1, "home", None),
            make_node(2, "about", Some(1)),
            make_node(3, "contact", Some(1)),
        ],
    });
    let page_repository = Arc::new(FakePageRepository {
        translations: Mutex::new(vec![
            make_page(1, 1, "en", "Home", "home"),
            make_page(2, 2, "en", "About us", "about"),
            make_page(3, 3, "en", "Contact", "contact"),
        ]),
    });
    let media_repository = Arc::new(FakeMediaRepository {
        media: Mutex::new(Vec::new()),
        folders: vec![Folder {
            id: FolderId::new(1),
            name: "Images".to_string(),
            rel: Some("image".to_string()),
            parent_id: None,
            deleted: false,
        }],
    });
    let menu_repository = Arc::new(FakeMenuRepository {
        menus: Mutex::new(vec![Menu {
            id: MenuId::new(1),
            name: "Main".to_string(),
            locale: "en".to_string(),
        }]),
        items: Mutex::new(Vec::new()),
    });
    let user_repository = Arc::new(FakeUserRepository {
        users: Mutex::new(vec![
            make_user(1, "admin", ADMIN_KEY, vec![ROLE_ADMIN.to_string()]),
            make_user(2, "reader", READER_KEY, Vec::new()),
        ]),
    });
    let group_repository = Arc::new(FakeGroupRepository {
        groups: Mutex::new(Vec::new()),
    });
    let role_repository = Arc::new(FakeRoleRepository {
        roles: Mutex::new(Vec::new()),
    });
    let redirect_repository = Arc::new(FakeRedirectRepository {
        redirects: vec![Redirect::new("/old-home", "/", true)],
    });
    let site_config_repository = Arc::new(FakeSiteConfigRepository {
        configs: vec![SiteConfig::new(
            "social",
            "Social links",
            serde_json::json!({"twitter": "@folio"}),
        )],
    });
    let translation_repository = Arc::new(FakeTranslationRepository {
        translations: Mutex::new(vec![
            make_translation(1, 1, "homepage.title", "en", "Welcome"),
            make_translation(2, 1, "homepage.title", "nl", "Welkom"),
        ]),
    });
    let author_repository = Arc::new(FakeAuthorRepository {
        authors: vec![Author::new("author", "Jane Editor")],
    });
    let form_submission_repository = Arc::new(FakeFormSubmissionRepository {
        submissions: Vec::new(),
    });

    let page_service = Arc::new(PageServiceImpl::new(page_repository.clone()));
    let translation_service = Arc::new(TranslationServiceImpl::new(translation_repository.clone()));
    let user_service = Arc::new(UserServiceImpl::new(user_repository.clone()));

    AppState {
        node_repository,
        media_repository,
        menu_repository,
        user_repository,
        group_repository,
        role_repository,
        redirect_repository,
        site_config_repository,
        translation_repository,
        author_repository,
        form_submission_repository,
        page_service,
        translation_service,
        user_service,
    }
}

/// Builds the full application router over the seeded state.
pub fn test_router() -> Router {
    create_router(
        seeded_state(),
        &SecurityConfig::default(),
        &ServerConfig::default(),
    )
}
