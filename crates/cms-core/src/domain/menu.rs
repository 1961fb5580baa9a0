use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::RecordId;

/// Menu entity - one node of the navigation forest.
///
/// `parent_id = None` marks a root-level menu. Nothing here stops a parent
/// from pointing at a deleted menu, or the relation from forming a cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub id: RecordId,
    pub name: String,
    pub parent_id: Option<RecordId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied on create and on full-replace update.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuDraft {
    pub name: String,
    pub parent_id: Option<RecordId>,
}

impl MenuDraft {
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent_id: None,
        }
    }

    pub fn child_of(name: impl Into<String>, parent_id: RecordId) -> Self {
        Self {
            name: name.into(),
            parent_id: Some(parent_id),
        }
    }
}

impl Menu {
    pub fn from_draft(id: RecordId, draft: MenuDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            parent_id: draft.parent_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, changes: MenuDraft, now: DateTime<Utc>) {
        self.name = changes.name;
        self.parent_id = changes.parent_id;
        self.updated_at = now.max(self.updated_at);
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
