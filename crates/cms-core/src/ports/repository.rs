use async_trait::async_trait;

use crate::domain::{
    Category, CategoryDraft, Menu, MenuDraft, Pagination, ParentFilter, Post, PostDraft,
    SearchTerm,
};
use crate::error::RepoError;
use crate::id::RecordId;

/// Operations every resource store supports.
///
/// `T` is the stored record, `D` the client-supplied fields it is created from.
#[async_trait]
pub trait BaseRepository<T, D>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: RecordId) -> Result<Option<T>, RepoError>;

    /// Insert a new entity; the store assigns the identifier and timestamps.
    async fn create(&self, draft: D) -> Result<T, RepoError>;

    /// Delete an entity by its ID, returning the number of rows removed.
    async fn delete(&self, id: RecordId) -> Result<u64, RepoError>;
}

/// Post repository, including the post/category join table.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, PostDraft> {
    /// Newest first, windowed by `page`.
    async fn list(&self, page: Pagination) -> Result<Vec<Post>, RepoError>;

    /// Posts whose title or content contains `term`, ignoring case.
    async fn search(&self, term: &SearchTerm, page: Pagination) -> Result<Vec<Post>, RepoError>;

    /// Full replace; `None` when no row has this id.
    async fn update(&self, id: RecordId, changes: PostDraft) -> Result<Option<Post>, RepoError>;

    /// Insert an association row; inserting an existing pair is a no-op.
    async fn add_category(&self, post_id: RecordId, category_id: RecordId)
    -> Result<(), RepoError>;

    /// Remove an association row, returning the number of rows removed.
    async fn remove_category(
        &self,
        post_id: RecordId,
        category_id: RecordId,
    ) -> Result<u64, RepoError>;

    /// Categories linked to a post, newest first.
    async fn categories_of(&self, post_id: RecordId) -> Result<Vec<Category>, RepoError>;
}

/// Category repository.
#[async_trait]
pub trait CategoryRepository: BaseRepository<Category, CategoryDraft> {
    /// Every category, newest first.
    async fn list_all(&self) -> Result<Vec<Category>, RepoError>;
}

/// Menu repository.
#[async_trait]
pub trait MenuRepository: BaseRepository<Menu, MenuDraft> {
    /// Newest first, windowed by `page`.
    async fn list(&self, page: Pagination) -> Result<Vec<Menu>, RepoError>;

    /// Full replace of name and parent; `None` when no row has this id.
    async fn update(&self, id: RecordId, changes: MenuDraft) -> Result<Option<Menu>, RepoError>;

    /// Menus selected by the parent filter, newest first.
    async fn find_by_parent(&self, filter: ParentFilter) -> Result<Vec<Menu>, RepoError>;
}
