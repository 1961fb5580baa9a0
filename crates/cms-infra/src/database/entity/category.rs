//! Category entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use cms_core::RecordId;
use cms_core::domain::{Category, CategoryDraft};
use cms_core::id::generate;

use crate::database::postgres_base::Resource;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
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
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post_category::Entity")]
    PostCategory,
}

impl Related<super::post_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PostCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Resource for Entity {
    type Record = Category;
    type Draft = CategoryDraft;
}

impl From<Model> for Category {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            created_at: model.created_at.into(),
        }
    }
}

impl From<CategoryDraft> for ActiveModel {
    fn from(draft: CategoryDraft) -> Self {
        Self {
            id: generate().map_or(NotSet, Set),
            name: Set(draft.name),
            description: Set(draft.description),
            created_at: Set(chrono::Utc::now().into()),
        }
    }
}
