use std::sync::Arc;

use crate::domain::{Category, Pagination, Post, PostDraft, SearchTerm};
use crate::error::DomainError;
use crate::id::RecordId;
use crate::ports::PostRepository;

const ENTITY: &str = "Blog";

/// Post (blog) service: listing, search, CRUD and category association.
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Newest posts first, one page at a time.
    pub async fn list(&self, page: Pagination) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.list(page).await?)
    }

    /// Content is stored as given; an empty title is accepted.
    pub async fn create(&self, draft: PostDraft) -> Result<Post, DomainError> {
        let post = self.posts.create(draft).await?;
        tracing::info!(post_id = %post.id, "Post created");
        Ok(post)
    }

    pub async fn get(&self, id: RecordId) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(ENTITY, id))
    }

    pub async fn update(&self, id: RecordId, changes: PostDraft) -> Result<Post, DomainError> {
        let post = self
            .posts
            .update(id, changes)
            .await?
            .ok_or_else(|| DomainError::not_found(ENTITY, id))?;
        tracing::info!(post_id = %id, "Post updated");
        Ok(post)
    }

    /// Deleting a missing post is not an error.
    pub async fn delete(&self, id: RecordId) -> Result<(), DomainError> {
        let removed = self.posts.delete(id).await?;
        tracing::info!(post_id = %id, removed, "Post deleted");
        Ok(())
    }

    /// Case-insensitive substring search over title and content.
    pub async fn search(&self, keyword: &str, page: Pagination) -> Result<Vec<Post>, DomainError> {
        let term = SearchTerm::parse(keyword)?;
        tracing::debug!(keyword = term.as_str(), page = page.page(), "Searching posts");
        Ok(self.posts.search(&term, page).await?)
    }

    /// Idempotent: linking an already-linked pair leaves a single row.
    pub async fn add_category(
        &self,
        post_id: RecordId,
        category_id: RecordId,
    ) -> Result<(), DomainError> {
        self.posts.add_category(post_id, category_id).await?;
        tracing::info!(post_id = %post_id, category_id = %category_id, "Category linked to post");
        Ok(())
    }

    /// Idempotent: unlinking a pair that is not linked succeeds.
    pub async fn remove_category(
        &self,
        post_id: RecordId,
        category_id: RecordId,
    ) -> Result<(), DomainError> {
        let removed = self.posts.remove_category(post_id, category_id).await?;
        tracing::info!(
            post_id = %post_id,
            category_id = %category_id,
            removed,
            "Category unlinked from post"
        );
        Ok(())
    }

    pub async fn categories(&self, post_id: RecordId) -> Result<Vec<Category>, DomainError> {
        self.get(post_id).await?;
        Ok(self.posts.categories_of(post_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::error::RepoError;
    use crate::id::from_seq;
    use crate::ports::BaseRepository;

    /// A store whose connection is always down.
    struct Unreachable;

    fn down() -> RepoError {
        RepoError::Connection("connection refused".into())
    }

    #[async_trait]
    impl BaseRepository<Post, PostDraft> for Unreachable {
        async fn find_by_id(&self, _id: RecordId) -> Result<Option<Post>, RepoError> {
            Err(down())
        }

        async fn create(&self, _draft: PostDraft) -> Result<Post, RepoError> {
            Err(down())
        }

        async fn delete(&self, _id: RecordId) -> Result<u64, RepoError> {
            Err(down())
        }
    }

    #[async_trait]
    impl PostRepository for Unreachable {
        async fn list(&self, _page: Pagination) -> Result<Vec<Post>, RepoError> {
            Err(down())
        }

        async fn search(
            &self,
            _term: &SearchTerm,
            _page: Pagination,
        ) -> Result<Vec<Post>, RepoError> {
            Err(down())
        }

        async fn update(
            &self,
            _id: RecordId,
            _changes: PostDraft,
        ) -> Result<Option<Post>, RepoError> {
            Err(down())
        }

        async fn add_category(
            &self,
            _post_id: RecordId,
            _category_id: RecordId,
        ) -> Result<(), RepoError> {
            Err(down())
        }

        async fn remove_category(
            &self,
            _post_id: RecordId,
            _category_id: RecordId,
        ) -> Result<u64, RepoError> {
            Err(down())
        }

        async fn categories_of(&self, _post_id: RecordId) -> Result<Vec<Category>, RepoError> {
            Err(down())
        }
    }

    fn service() -> PostService {
        PostService::new(Arc::new(Unreachable))
    }

    #[tokio::test]
    async fn test_persistence_failures_propagate() {
        let service = service();

        assert!(matches!(
            service.list(Pagination::default()).await,
            Err(DomainError::Persistence(RepoError::Connection(_)))
        ));
        assert!(matches!(
            service.delete(from_seq(1)).await,
            Err(DomainError::Persistence(_))
        ));
        assert!(matches!(
            service.remove_category(from_seq(1), from_seq(2)).await,
            Err(DomainError::Persistence(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_keyword_fails_before_touching_the_store() {
        let result = service().search("", Pagination::default()).await;

        assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
    }
}
