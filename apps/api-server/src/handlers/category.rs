//! Category handlers. Categories have no update endpoint.

use actix_web::{HttpResponse, web};

use cms_core::domain::CategoryDraft;
use cms_shared::ApiResponse;
use cms_shared::dto::CategoryRequest;

use super::params;
use crate::middleware::error::{AppResult, OrFail};
use crate::state::AppState;

/// GET /api/categories
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let categories = state
        .categories
        .list()
        .await
        .or_fail("Failed to retrieve categories")?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        categories,
        "Categories retrieved successfully",
    )))
}

/// POST /api/categories
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CategoryRequest>,
) -> AppResult<HttpResponse> {
    let CategoryRequest { name, description } = body.into_inner();
    let category = state
        .categories
        .create(CategoryDraft { name, description })
        .await
        .or_fail("Failed to create category")?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(category, "Category created successfully")))
}

/// GET /api/categories/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = params::id(&path, "category")?;
    let category = state
        .categories
        .get(id)
        .await
        .or_fail("Failed to fetch category")?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(category, "Category retrieved successfully")))
}

/// DELETE /api/categories/{id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = params::id(&path, "category")?;
    state
        .categories
        .delete(id)
        .await
        .or_fail("Failed to delete category")?;

    Ok(HttpResponse::Ok().json(ApiResponse::done("Category deleted successfully")))
}
