//! Post/category association, stored in the `blog_categories` table.
//!
//! The composite key makes each pair unique. Rows are removed together with
//! either endpoint (`ON DELETE CASCADE`).

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use cms_core::RecordId;
use cms_core::domain::PostCategory;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_categories")]
pub struct Model {
    #[cfg_attr(
        feature = "uuid-ids",
        sea_orm(primary_key, auto_increment = false, column_type = "Uuid")
    )]
    #[cfg_attr(
        not(feature = "uuid-ids"),
        sea_orm(primary_key, auto_increment = false, column_type = "BigInteger")
    )]
    pub blog_id: RecordId,
    #[cfg_attr(
        feature = "uuid-ids",
        sea_orm(primary_key, auto_increment = false, column_type = "Uuid")
    )]
    #[cfg_attr(
        not(feature = "uuid-ids"),
        sea_orm(primary_key, auto_increment = false, column_type = "BigInteger")
    )]
    pub category_id: RecordId,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::BlogId",
        to = "super::post::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Post,
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Category,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for PostCategory {
    fn from(model: Model) -> Self {
        Self {
            post_id: model.blog_id,
            category_id: model.category_id,
        }
    }
}

impl From<PostCategory> for ActiveModel {
    fn from(link: PostCategory) -> Self {
        Self {
            blog_id: Set(link.post_id),
            category_id: Set(link.category_id),
        }
    }
}
