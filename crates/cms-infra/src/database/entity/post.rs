//! Post entity for SeaORM, stored in the `blogs` table.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use cms_core::RecordId;
use cms_core::domain::{Post, PostDraft};
use cms_core::id::generate;

use crate::database::postgres_base::Resource;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blogs")]
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
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub status: String,
    pub cover_image: Option<String>,
    #[cfg_attr(feature = "uuid-ids", sea_orm(column_type = "Uuid", nullable))]
    #[cfg_attr(not(feature = "uuid-ids"), sea_orm(column_type = "BigInteger", nullable))]
    pub author_id: Option<RecordId>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
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
    type Record = Post;
    type Draft = PostDraft;
}

impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            status: model.status,
            cover_image: model.cover_image,
            author_id: model.author_id,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Insert form: both timestamps are stamped now, the key comes from the
/// identifier scheme (left to the sequence for integer ids).
impl From<PostDraft> for ActiveModel {
    fn from(draft: PostDraft) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: generate().map_or(NotSet, Set),
            title: Set(draft.title),
            content: Set(draft.content),
            status: Set(draft.status),
            cover_image: Set(draft.cover_image),
            author_id: Set(draft.author_id),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}

/// Update form: replaces the editable fields, keeps `author_id` and
/// `created_at`, and bumps `updated_at`.
pub fn changes(id: RecordId, draft: PostDraft) -> ActiveModel {
    ActiveModel {
        id: sea_orm::Unchanged(id),
        title: Set(draft.title),
        content: Set(draft.content),
        status: Set(draft.status),
        cover_image: Set(draft.cover_image),
        author_id: NotSet,
        created_at: NotSet,
        updated_at: Set(chrono::Utc::now().into()),
    }
}
