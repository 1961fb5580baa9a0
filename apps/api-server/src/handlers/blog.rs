//! Blog (post) handlers, including category association.

use actix_web::{HttpResponse, web};

use cms_core::RecordId;
use cms_core::domain::PostDraft;
use cms_shared::ApiResponse;
use cms_shared::dto::PostRequest;

use super::params::{self, CategoryQuery, PageQuery, SearchQuery};
use crate::middleware::error::{AppResult, OrFail};
use crate::state::AppState;

fn draft(req: PostRequest<RecordId>) -> PostDraft {
    PostDraft {
        title: req.title,
        content: req.content,
        status: req.status,
        cover_image: req.cover_image,
        author_id: req.author_id,
    }
}

/// GET /api/blogs?page=&limit=
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let posts = state
        .posts
        .list(query.pagination())
        .await
        .or_fail("Failed to fetch blogs")?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts, "Blogs retrieved successfully")))
}

/// POST /api/blogs
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<PostRequest<RecordId>>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .create(draft(body.into_inner()))
        .await
        .or_fail("Failed to create blog")?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(post, "Blog created successfully")))
}

/// GET /api/blogs/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = params::id(&path, "blog")?;
    let post = state.posts.get(id).await.or_fail("Failed to fetch blog")?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(post, "Blog retrieved successfully")))
}

/// PUT /api/blogs/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PostRequest<RecordId>>,
) -> AppResult<HttpResponse> {
    let id = params::id(&path, "blog")?;
    let post = state
        .posts
        .update(id, draft(body.into_inner()))
        .await
        .or_fail("Failed to update blog")?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(post, "Blog updated successfully")))
}

/// DELETE /api/blogs/{id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = params::id(&path, "blog")?;
    state
        .posts
        .delete(id)
        .await
        .or_fail("Failed to delete blog")?;

    Ok(HttpResponse::Ok().json(ApiResponse::done("Blog deleted successfully")))
}

/// GET /api/blogs/search?keyword=&page=&limit=
pub async fn search(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let keyword = query.keyword.as_deref().unwrap_or_default();
    let posts = state
        .posts
        .search(keyword, query.pagination())
        .await
        .or_fail("Failed to search blogs")?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts, "Blogs retrieved successfully")))
}

/// GET /api/blogs/{id}/categories
pub async fn categories(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = params::id(&path, "blog")?;
    let categories = state
        .posts
        .categories(id)
        .await
        .or_fail("Failed to fetch blog categories")?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        categories,
        "Blog categories retrieved successfully",
    )))
}

/// POST /api/blogs/{id}/categories?category_id=
pub async fn add_category(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<CategoryQuery>,
) -> AppResult<HttpResponse> {
    let post_id = params::id(&path, "blog")?;
    let category_id = params::id(query.category_id.as_deref().unwrap_or_default(), "category")?;
    state
        .posts
        .add_category(post_id, category_id)
        .await
        .or_fail("Failed to add category to blog")?;

    Ok(HttpResponse::Ok().json(ApiResponse::done("Category added to blog successfully")))
}

/// DELETE /api/blogs/{id}/categories/{category_id}
pub async fn remove_category(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> AppResult<HttpResponse> {
    let (post_id, category_id) = path.into_inner();
    let post_id = params::id(&post_id, "blog")?;
    let category_id = params::id(&category_id, "category")?;
    state
        .posts
        .remove_category(post_id, category_id)
        .await
        .or_fail("Failed to remove category from blog")?;

    Ok(HttpResponse::Ok().json(ApiResponse::done(
        "Category removed from blog successfully",
    )))
}
