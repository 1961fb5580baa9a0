use chrono::{Duration, Utc};
use sea_orm::{
    DatabaseBackend, DbBackend, DbErr, MockDatabase, MockExecResult, QueryTrait, RuntimeErr,
    Value,
};

use cms_core::domain::{
    Category, CategoryDraft, Pagination, ParentFilter, Post, PostCategory, PostDraft,
    SearchTerm,
};
use cms_core::error::RepoError;
use cms_core::id::from_seq;
use cms_core::ports::{BaseRepository, CategoryRepository, MenuRepository, PostRepository};

use crate::database::entity::{category, menu, post};
use crate::database::postgres_base::repo_err;
use crate::database::postgres_repo::{
    PostgresCategoryRepository, PostgresMenuRepository, PostgresPostRepository,
    categories_of_query, link_query, list_menus_query, list_posts_query, menus_by_parent_query,
    search_posts_query,
};

fn post_model(n: u64, title: &str) -> post::Model {
    let now = Utc::now();
    post::Model {
        id: from_seq(n),
        title: title.to_owned(),
        content: "Content".to_owned(),
        status: "draft".to_owned(),
        cover_image: None,
        author_id: None,
        created_at: now.into(),
        updated_at: now.into(),
    }
}

fn category_model(n: u64, name: &str) -> category::Model {
    category::Model {
        id: from_seq(n),
        name: name.to_owned(),
        description: None,
        created_at: Utc::now().into(),
    }
}

fn menu_model(n: u64, parent: Option<u64>) -> menu::Model {
    let now = Utc::now();
    menu::Model {
        id: from_seq(n),
        name: format!("Menu {n}"),
        parent_id: parent.map(from_seq),
        created_at: now.into(),
        updated_at: now.into(),
    }
}

fn no_rows() -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected: 0,
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let post_id = from_seq(1);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_model(1, "Test Post")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

    assert!(result.is_some());
    let post = result.unwrap();
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.id, post_id);
}

#[tokio::test]
async fn test_create_post_returns_stored_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_model(7, "Hello")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let post = repo.create(PostDraft::new("Hello", "Content")).await.unwrap();

    assert_eq!(post.id, from_seq(7));
    assert_eq!(post.status, "draft");
    assert_eq!(post.created_at, post.updated_at);
}

#[tokio::test]
async fn test_update_missing_post_is_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result = repo
        .update(from_seq(404), PostDraft::new("t", "c"))
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_update_post_returns_new_row() {
    let mut stored = post_model(3, "After");
    stored.updated_at = (Utc::now() + Duration::seconds(5)).into();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![stored]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let post = repo
        .update(from_seq(3), PostDraft::new("After", "Content"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(post.title, "After");
    assert!(post.updated_at > post.created_at);
}

#[tokio::test]
async fn test_delete_missing_row_affects_nothing() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![no_rows()])
        .into_connection();

    let repo = PostgresMenuRepository::new(db);

    let removed = repo.delete(from_seq(9)).await.unwrap();

    assert_eq!(removed, 0);
}

#[tokio::test]
async fn test_duplicate_link_is_not_an_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![no_rows()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    assert!(repo.add_category(from_seq(1), from_seq(2)).await.is_ok());
}

#[tokio::test]
async fn test_categories_of_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            category_model(5, "rust"),
            category_model(4, "web"),
        ]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let categories: Vec<Category> = repo.categories_of(from_seq(1)).await.unwrap();

    let names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["rust", "web"]);
}

#[tokio::test]
async fn test_create_category() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![category_model(1, "rust")]])
        .into_connection();

    let repo = PostgresCategoryRepository::new(db);

    let category = repo.create(CategoryDraft::new("rust")).await.unwrap();

    assert_eq!(category.name, "rust");
    assert!(category.description.is_none());
}

#[tokio::test]
async fn test_list_categories() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![category_model(2, "b"), category_model(1, "a")]])
        .into_connection();

    let repo = PostgresCategoryRepository::new(db);

    assert_eq!(repo.list_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_children_of_menu() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![menu_model(3, Some(1)), menu_model(2, Some(1))]])
        .into_connection();

    let repo = PostgresMenuRepository::new(db);

    let children = repo
        .find_by_parent(ParentFilter::ChildrenOf(from_seq(1)))
        .await
        .unwrap();

    assert_eq!(children.len(), 2);
    assert!(children.iter().all(|m| m.parent_id == Some(from_seq(1))));
}

#[test]
fn test_list_orders_newest_first_with_id_tiebreak() {
    let sql = list_posts_query(Pagination::new(3, 10))
        .build(DbBackend::Postgres)
        .sql;

    assert!(sql.contains(r#"ORDER BY "blogs"."created_at" DESC, "blogs"."id" DESC"#));
    assert!(sql.ends_with("LIMIT $1 OFFSET $2"));
}

#[test]
fn test_menu_list_orders_newest_first_with_id_tiebreak() {
    let stmt = list_menus_query(Pagination::new(2, 5)).build(DbBackend::Postgres);

    assert!(stmt.sql.contains(r#"ORDER BY "menus"."created_at" DESC, "menus"."id" DESC"#));
    assert!(stmt.sql.ends_with("LIMIT $1 OFFSET $2"));

    let values = stmt.values.expect("bound values").0;
    assert_eq!(values[0], Value::from(5u64));
    assert_eq!(values[1], Value::from(5u64));
}

#[test]
fn test_oversized_page_binds_signed_values() {
    let stmt = list_posts_query(Pagination::parse(Some("3"), Some("9223372036854775807")))
        .build(DbBackend::Postgres);

    for value in stmt.values.expect("bound values").0 {
        assert!(
            matches!(value, Value::BigUnsigned(Some(bound)) if i64::try_from(bound).is_ok()),
            "{value:?}"
        );
    }
}

#[test]
fn test_search_matches_title_or_content_ignoring_case() {
    let term = SearchTerm::parse("50%").unwrap();
    let stmt = search_posts_query(&term, Pagination::default()).build(DbBackend::Postgres);

    assert!(stmt.sql.contains(r#""blogs"."title" ILIKE $1"#));
    assert!(stmt.sql.contains(r#""blogs"."content" ILIKE $2"#));
    assert!(stmt.sql.contains(" OR "));

    let values = stmt.values.expect("bound values").0;
    assert_eq!(values[0], Value::from(r"%50\%%"));
    assert_eq!(values[1], Value::from(r"%50\%%"));
}

#[test]
fn test_root_menus_have_null_parent() {
    let sql = menus_by_parent_query(ParentFilter::Root)
        .build(DbBackend::Postgres)
        .sql;

    assert!(sql.contains(r#""menus"."parent_id" IS NULL"#));
}

#[test]
fn test_link_insert_ignores_duplicates() {
    let link = PostCategory {
        post_id: from_seq(1),
        category_id: from_seq(2),
    };
    let sql = link_query(link).build(DbBackend::Postgres).sql;

    assert!(sql.starts_with(r#"INSERT INTO "blog_categories""#));
    assert!(sql.contains(r#"ON CONFLICT ("blog_id", "category_id") DO NOTHING"#));
}

#[test]
fn test_categories_of_joins_association_table() {
    let sql = categories_of_query(from_seq(1))
        .build(DbBackend::Postgres)
        .sql;

    assert!(sql.contains(r#"INNER JOIN "blog_categories""#));
    assert!(sql.contains(r#""blog_categories"."blog_id" = $1"#));
}

#[test]
fn test_driver_errors_are_classified() {
    let down = DbErr::Conn(RuntimeErr::Internal("connection refused".into()));
    let broken = DbErr::Custom("syntax error".into());

    assert!(matches!(repo_err(down), RepoError::Connection(_)));
    assert!(matches!(repo_err(broken), RepoError::Query(_)));
}
