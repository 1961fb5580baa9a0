use std::sync::Arc;

use crate::domain::{Category, CategoryDraft};
use crate::error::DomainError;
use crate::id::RecordId;
use crate::ports::CategoryRepository;

const ENTITY: &str = "Category";

/// Category service. Categories have no update operation.
#[derive(Clone)]
pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    /// All categories, newest first, unpaginated.
    pub async fn list(&self) -> Result<Vec<Category>, DomainError> {
        Ok(self.categories.list_all().await?)
    }

    pub async fn create(&self, draft: CategoryDraft) -> Result<Category, DomainError> {
        let category = self.categories.create(draft).await?;
        tracing::info!(category_id = %category.id, "Category created");
        Ok(category)
    }

    pub async fn get(&self, id: RecordId) -> Result<Category, DomainError> {
        self.categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(ENTITY, id))
    }

    pub async fn delete(&self, id: RecordId) -> Result<(), DomainError> {
        let removed = self.categories.delete(id).await?;
        tracing::info!(category_id = %id, removed, "Category deleted");
        Ok(())
    }
}
