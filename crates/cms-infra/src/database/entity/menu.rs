//! Menu entity for SeaORM.
//!
//! `parent_id` is a plain nullable column: menus may point at parents that
//! were never created or have since been deleted.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use cms_core::RecordId;
use cms_core::domain::{Menu, MenuDraft};
use cms_core::id::generate;

use crate::database::postgres_base::Resource;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "menus")]
pub struct Model {
    #[cfg_attr(
        feature = "uuid-ids",
        sea_orm(primary_key, auto_increment = false, column_type = "Uuid")
    )]
    #[cfg_attr(
        not(feature = "uuid-ids"),
        sea_orm(primary_key, column_type = "BigInteger")
    )]
    pub id: RecordId,
    pub name: String,
    #[cfg_attr(feature = "uuid-ids", sea_orm(column_type = "Uuid", nullable))]
    #[cfg_attr(not(feature = "uuid-ids"), sea_orm(column_type = "BigInteger", nullable))]
    pub parent_id: Option<RecordId>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Resource for Entity {
    type Record = Menu;
    type Draft = MenuDraft;
}

impl From<Model> for Menu {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            parent_id: model.parent_id,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<MenuDraft> for ActiveModel {
    fn from(draft: MenuDraft) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: generate().map_or(NotSet, Set),
            name: Set(draft.name),
            parent_id: Set(draft.parent_id),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}

pub fn changes(id: RecordId, draft: MenuDraft) -> ActiveModel {
    ActiveModel {
        id: sea_orm::Unchanged(id),
        name: Set(draft.name),
        parent_id: Set(draft.parent_id),
        created_at: NotSet,
        updated_at: Set(chrono::Utc::now().into()),
    }
}
