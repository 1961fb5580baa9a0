//! In-memory storage - used when no `DATABASE_URL` is configured.
//!
//! Mirrors the relational schema closely enough that services behave the
//! same against either backend: association rows need both endpoints to
//! exist and disappear with either of them, menu parents are unchecked.
//! Note: Data is lost on process restart.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use cms_core::RecordId;
use cms_core::domain::{
    Category, CategoryDraft, Menu, MenuDraft, Pagination, ParentFilter, Post, PostCategory,
    PostDraft, SearchTerm,
};
use cms_core::error::RepoError;
use cms_core::id::{from_seq, generate};
use cms_core::ports::{BaseRepository, CategoryRepository, MenuRepository, PostRepository};

struct Tables {
    posts: HashMap<RecordId, Post>,
    categories: HashMap<RecordId, Category>,
    menus: HashMap<RecordId, Menu>,
    links: BTreeSet<PostCategory>,
    sequence: u64,
    clock: DateTime<Utc>,
}

impl Tables {
    fn new() -> Self {
        Self {
            posts: HashMap::new(),
            categories: HashMap::new(),
            menus: HashMap::new(),
            links: BTreeSet::new(),
            sequence: 0,
            clock: DateTime::<Utc>::MIN_UTC,
        }
    }

    fn next_id(&mut self) -> RecordId {
        self.sequence += 1;
        generate().unwrap_or_else(|| from_seq(self.sequence))
    }

    /// Wall-clock time at microsecond resolution, strictly increasing per store.
    fn stamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now().max(self.clock + Duration::microseconds(1));
        self.clock = now;
        now
    }
}

/// Newest first; rows created in the same instant fall back to id order.
fn newest_first<T>(mut rows: Vec<T>, key: impl Fn(&T) -> (DateTime<Utc>, RecordId)) -> Vec<T> {
    rows.sort_by(|a, b| key(b).cmp(&key(a)));
    rows
}

/// Shared in-memory tables, handing out one repository per resource.
#[derive(Clone)]
pub struct MemoryDatabase {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::new())),
        }
    }

    pub fn posts(&self) -> InMemoryPostRepository {
        InMemoryPostRepository {
            tables: Arc::clone(&self.tables),
        }
    }

    pub fn categories(&self) -> InMemoryCategoryRepository {
        InMemoryCategoryRepository {
            tables: Arc::clone(&self.tables),
        }
    }

    pub fn menus(&self) -> InMemoryMenuRepository {
        InMemoryMenuRepository {
            tables: Arc::clone(&self.tables),
        }
    }
}

impl Default for MemoryDatabase {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory post repository, including the association rows.
pub struct InMemoryPostRepository {
    tables: Arc<RwLock<Tables>>,
}

/// In-memory category repository.
pub struct InMemoryCategoryRepository {
    tables: Arc<RwLock<Tables>>,
}

/// In-memory menu repository.
pub struct InMemoryMenuRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryPostRepository {
    async fn sorted(&self) -> Vec<Post> {
        let tables = self.tables.read().await;
        newest_first(tables.posts.values().cloned().collect(), |post: &Post| {
            (post.created_at, post.id)
        })
    }
}

#[async_trait]
impl BaseRepository<Post, PostDraft> for InMemoryPostRepository {
    async fn find_by_id(&self, id: RecordId) -> Result<Option<Post>, RepoError> {
        Ok(self.tables.read().await.posts.get(&id).cloned())
    }

    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let mut tables = self.tables.write().await;
        let id = tables.next_id();
        let now = tables.stamp();
        let post = Post::from_draft(id, draft, now);
        tables.posts.insert(id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: RecordId) -> Result<u64, RepoError> {
        let mut tables = self.tables.write().await;
        if tables.posts.remove(&id).is_none() {
            return Ok(0);
        }
        tables.links.retain(|link| link.post_id != id);
        Ok(1)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self, page: Pagination) -> Result<Vec<Post>, RepoError> {
        Ok(page.window(&self.sorted().await).to_vec())
    }

    async fn search(&self, term: &SearchTerm, page: Pagination) -> Result<Vec<Post>, RepoError> {
        let needle = term.needle();
        let matches: Vec<Post> = self
            .sorted()
            .await
            .into_iter()
            .filter(|post| post.mentions(&needle))
            .collect();
        Ok(page.window(&matches).to_vec())
    }

    async fn update(&self, id: RecordId, changes: PostDraft) -> Result<Option<Post>, RepoError> {
        let mut tables = self.tables.write().await;
        let now = tables.stamp();
        Ok(tables.posts.get_mut(&id).map(|post| {
            post.apply(changes, now);
            post.clone()
        }))
    }

    async fn add_category(
        &self,
        post_id: RecordId,
        category_id: RecordId,
    ) -> Result<(), RepoError> {
        let mut tables = self.tables.write().await;
        if !tables.posts.contains_key(&post_id) {
            return Err(RepoError::Constraint(format!(
                "blog_categories.blog_id references missing blog {post_id}"
            )));
        }
        if !tables.categories.contains_key(&category_id) {
            return Err(RepoError::Constraint(format!(
                "blog_categories.category_id references missing category {category_id}"
            )));
        }
        tables.links.insert(PostCategory {
            post_id,
            category_id,
        });
        Ok(())
    }

    async fn remove_category(
        &self,
        post_id: RecordId,
        category_id: RecordId,
    ) -> Result<u64, RepoError> {
        let mut tables = self.tables.write().await;
        let removed = tables.links.remove(&PostCategory {
            post_id,
            category_id,
        });
        Ok(u64::from(removed))
    }

    async fn categories_of(&self, post_id: RecordId) -> Result<Vec<Category>, RepoError> {
        let tables = self.tables.read().await;
        let linked: Vec<Category> = tables
            .links
            .iter()
            .filter(|link| link.post_id == post_id)
            .filter_map(|link| tables.categories.get(&link.category_id).cloned())
            .collect();
        Ok(newest_first(linked, |category: &Category| {
            (category.created_at, category.id)
        }))
    }
}

#[async_trait]
impl BaseRepository<Category, CategoryDraft> for InMemoryCategoryRepository {
    async fn find_by_id(&self, id: RecordId) -> Result<Option<Category>, RepoError> {
        Ok(self.tables.read().await.categories.get(&id).cloned())
    }

    async fn create(&self, draft: CategoryDraft) -> Result<Category, RepoError> {
        let mut tables = self.tables.write().await;
        let id = tables.next_id();
        let now = tables.stamp();
        let category = Category::from_draft(id, draft, now);
        tables.categories.insert(id, category.clone());
        Ok(category)
    }

    async fn delete(&self, id: RecordId) -> Result<u64, RepoError> {
        let mut tables = self.tables.write().await;
        if tables.categories.remove(&id).is_none() {
            return Ok(0);
        }
        tables.links.retain(|link| link.category_id != id);
        Ok(1)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn list_all(&self) -> Result<Vec<Category>, RepoError> {
        let tables = self.tables.read().await;
        Ok(newest_first(
            tables.categories.values().cloned().collect(),
            |category: &Category| (category.created_at, category.id),
        ))
    }
}

impl InMemoryMenuRepository {
    async fn sorted(&self) -> Vec<Menu> {
        let tables = self.tables.read().await;
        newest_first(tables.menus.values().cloned().collect(), |menu: &Menu| {
            (menu.created_at, menu.id)
        })
    }
}

#[async_trait]
impl BaseRepository<Menu, MenuDraft> for InMemoryMenuRepository {
    async fn find_by_id(&self, id: RecordId) -> Result<Option<Menu>, RepoError> {
        Ok(self.tables.read().await.menus.get(&id).cloned())
    }

    async fn create(&self, draft: MenuDraft) -> Result<Menu, RepoError> {
        let mut tables = self.tables.write().await;
        let id = tables.next_id();
        let now = tables.stamp();
        let menu = Menu::from_draft(id, draft, now);
        tables.menus.insert(id, menu.clone());
        Ok(menu)
    }

    async fn delete(&self, id: RecordId) -> Result<u64, RepoError> {
        let removed = self.tables.write().await.menus.remove(&id);
        Ok(u64::from(removed.is_some()))
    }
}

#[async_trait]
impl MenuRepository for InMemoryMenuRepository {
    async fn list(&self, page: Pagination) -> Result<Vec<Menu>, RepoError> {
        Ok(page.window(&self.sorted().await).to_vec())
    }

    async fn update(&self, id: RecordId, changes: MenuDraft) -> Result<Option<Menu>, RepoError> {
        let mut tables = self.tables.write().await;
        let now = tables.stamp();
        Ok(tables.menus.get_mut(&id).map(|menu| {
            menu.apply(changes, now);
            menu.clone()
        }))
    }

    async fn find_by_parent(&self, filter: ParentFilter) -> Result<Vec<Menu>, RepoError> {
        Ok(self
            .sorted()
            .await
            .into_iter()
            .filter(|menu| filter.matches(menu.parent_id))
            .collect())
    }
}
