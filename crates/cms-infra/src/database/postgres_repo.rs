//! PostgreSQL repository implementations.
//!
//! Statement construction lives in small `*_query` functions so the SQL can
//! be checked without a database.

use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DbErr, EntityTrait, Insert, QueryFilter, QueryOrder,
    QuerySelect, Select,
};

use cms_core::RecordId;
use cms_core::domain::{
    Category, Menu, MenuDraft, Pagination, ParentFilter, Post, PostCategory, PostDraft,
    SearchTerm,
};
use cms_core::error::RepoError;
use cms_core::ports::{CategoryRepository, MenuRepository, PostRepository};

use super::entity::category::{self, Entity as CategoryEntity};
use super::entity::menu::{self, Entity as MenuEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::entity::post_category::{self, Entity as PostCategoryEntity};
use super::postgres_base::{PostgresBaseRepository, repo_err};

/// PostgreSQL post repository (`blogs` and `blog_categories`).
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL category repository.
pub type PostgresCategoryRepository = PostgresBaseRepository<CategoryEntity>;

/// PostgreSQL menu repository.
pub type PostgresMenuRepository = PostgresBaseRepository<MenuEntity>;

pub(crate) fn list_posts_query(page: Pagination) -> Select<PostEntity> {
    PostEntity::find()
        .order_by_desc(post::Column::CreatedAt)
        .order_by_desc(post::Column::Id)
        .limit(page.limit())
        .offset(page.offset())
}

/// `ILIKE` over title and content; wildcards in the keyword are escaped.
pub(crate) fn search_posts_query(term: &SearchTerm, page: Pagination) -> Select<PostEntity> {
    let pattern = term.like_pattern();
    list_posts_query(page).filter(
        Condition::any()
            .add(Expr::col((PostEntity, post::Column::Title)).ilike(pattern.clone()))
            .add(Expr::col((PostEntity, post::Column::Content)).ilike(pattern)),
    )
}

pub(crate) fn link_query(link: PostCategory) -> Insert<post_category::ActiveModel> {
    PostCategoryEntity::insert(post_category::ActiveModel::from(link)).on_conflict(
        OnConflict::columns([
            post_category::Column::BlogId,
            post_category::Column::CategoryId,
        ])
        .do_nothing()
        .to_owned(),
    )
}

pub(crate) fn categories_of_query(post_id: RecordId) -> Select<CategoryEntity> {
    CategoryEntity::find()
        .inner_join(PostCategoryEntity)
        .filter(post_category::Column::BlogId.eq(post_id))
        .order_by_desc(category::Column::CreatedAt)
        .order_by_desc(category::Column::Id)
}

pub(crate) fn list_menus_query(page: Pagination) -> Select<MenuEntity> {
    MenuEntity::find()
        .order_by_desc(menu::Column::CreatedAt)
        .order_by_desc(menu::Column::Id)
        .limit(page.limit())
        .offset(page.offset())
}

/// Root menus are the ones with a `NULL` parent.
pub(crate) fn menus_by_parent_query(filter: ParentFilter) -> Select<MenuEntity> {
    let condition = match filter {
        ParentFilter::Root => menu::Column::ParentId.is_null(),
        ParentFilter::ChildrenOf(parent_id) => menu::Column::ParentId.eq(parent_id),
    };

    MenuEntity::find()
        .filter(condition)
        .order_by_desc(menu::Column::CreatedAt)
        .order_by_desc(menu::Column::Id)
}

/// An update that matched no row is a miss, not a failure.
fn updated<M, T>(result: Result<M, DbErr>) -> Result<Option<T>, RepoError>
where
    T: From<M>,
{
    match result {
        Ok(model) => Ok(Some(model.into())),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(err) => Err(repo_err(err)),
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list(&self, page: Pagination) -> Result<Vec<Post>, RepoError> {
        let result = list_posts_query(page)
            .all(self.db.as_ref())
            .await
            .map_err(repo_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn search(&self, term: &SearchTerm, page: Pagination) -> Result<Vec<Post>, RepoError> {
        let result = search_posts_query(term, page)
            .all(self.db.as_ref())
            .await
            .map_err(repo_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: RecordId, changes: PostDraft) -> Result<Option<Post>, RepoError> {
        updated(post::changes(id, changes).update(self.db.as_ref()).await)
    }

    async fn add_category(
        &self,
        post_id: RecordId,
        category_id: RecordId,
    ) -> Result<(), RepoError> {
        let link = PostCategory {
            post_id,
            category_id,
        };
        let inserted = link_query(link)
            .exec_without_returning(self.db.as_ref())
            .await
            .map_err(repo_err)?;

        if inserted == 0 {
            tracing::debug!(post_id = %post_id, category_id = %category_id, "Link already present");
        }
        Ok(())
    }

    async fn remove_category(
        &self,
        post_id: RecordId,
        category_id: RecordId,
    ) -> Result<u64, RepoError> {
        let result = PostCategoryEntity::delete_many()
            .filter(post_category::Column::BlogId.eq(post_id))
            .filter(post_category::Column::CategoryId.eq(category_id))
            .exec(self.db.as_ref())
            .await
            .map_err(repo_err)?;

        Ok(result.rows_affected)
    }

    async fn categories_of(&self, post_id: RecordId) -> Result<Vec<Category>, RepoError> {
        let result = categories_of_query(post_id)
            .all(self.db.as_ref())
            .await
            .map_err(repo_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn list_all(&self) -> Result<Vec<Category>, RepoError> {
        let result = CategoryEntity::find()
            .order_by_desc(category::Column::CreatedAt)
            .order_by_desc(category::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(repo_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl MenuRepository for PostgresMenuRepository {
    async fn list(&self, page: Pagination) -> Result<Vec<Menu>, RepoError> {
        let result = list_menus_query(page)
            .all(self.db.as_ref())
            .await
            .map_err(repo_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: RecordId, changes: MenuDraft) -> Result<Option<Menu>, RepoError> {
        updated(menu::changes(id, changes).update(self.db.as_ref()).await)
    }

    async fn find_by_parent(&self, filter: ParentFilter) -> Result<Vec<Menu>, RepoError> {
        let result = menus_by_parent_query(filter)
            .all(self.db.as_ref())
            .await
            .map_err(repo_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
