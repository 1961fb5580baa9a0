use std::sync::Arc;

use crate::domain::{Menu, MenuDraft, Pagination, ParentFilter};
use crate::error::DomainError;
use crate::id::RecordId;
use crate::ports::MenuRepository;

const ENTITY: &str = "Menu";

/// Menu service: CRUD plus hierarchy filtering.
#[derive(Clone)]
pub struct MenuService {
    menus: Arc<dyn MenuRepository>,
}

impl MenuService {
    pub fn new(menus: Arc<dyn MenuRepository>) -> Self {
        Self { menus }
    }

    pub async fn list(&self, page: Pagination) -> Result<Vec<Menu>, DomainError> {
        Ok(self.menus.list(page).await?)
    }

    pub async fn create(&self, draft: MenuDraft) -> Result<Menu, DomainError> {
        let menu = self.menus.create(draft).await?;
        tracing::info!(menu_id = %menu.id, parent_id = ?menu.parent_id, "Menu created");
        Ok(menu)
    }

    pub async fn get(&self, id: RecordId) -> Result<Menu, DomainError> {
        self.menus
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(ENTITY, id))
    }

    pub async fn update(&self, id: RecordId, changes: MenuDraft) -> Result<Menu, DomainError> {
        let menu = self
            .menus
            .update(id, changes)
            .await?
            .ok_or_else(|| DomainError::not_found(ENTITY, id))?;
        tracing::info!(menu_id = %id, "Menu updated");
        Ok(menu)
    }

    /// Children of a deleted menu keep their (now dangling) parent reference.
    pub async fn delete(&self, id: RecordId) -> Result<(), DomainError> {
        let removed = self.menus.delete(id).await?;
        tracing::info!(menu_id = %id, removed, "Menu deleted");
        Ok(())
    }

    /// `None` selects root menus, `Some(id)` the direct children of `id`.
    pub async fn filter_by_parent(&self, parent: Option<RecordId>) -> Result<Vec<Menu>, DomainError> {
        Ok(self.menus.find_by_parent(ParentFilter::from(parent)).await?)
    }
}
