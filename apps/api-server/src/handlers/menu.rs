//! Menu handlers, including the parent filter.

use actix_web::{HttpResponse, web};

use cms_core::RecordId;
use cms_core::domain::MenuDraft;
use cms_shared::ApiResponse;
use cms_shared::dto::MenuRequest;

use super::params::{self, PageQuery, ParentQuery};
use crate::middleware::error::{AppResult, OrFail};
use crate::state::AppState;

fn draft(req: MenuRequest<RecordId>) -> MenuDraft {
    MenuDraft {
        name: req.name,
        parent_id: req.parent_id,
    }
}

/// GET /api/menus?page=&limit=
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let menus = state
        .menus
        .list(query.pagination())
        .await
        .or_fail("Failed to fetch menus")?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(menus, "Menus retrieved successfully")))
}

/// POST /api/menus
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<MenuRequest<RecordId>>,
) -> AppResult<HttpResponse> {
    let menu = state
        .menus
        .create(draft(body.into_inner()))
        .await
        .or_fail("Failed to create menu")?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(menu, "Menu created successfully")))
}

/// GET /api/menus/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = params::id(&path, "menu")?;
    let menu = state.menus.get(id).await.or_fail("Failed to fetch menu")?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(menu, "Menu retrieved successfully")))
}

/// PUT /api/menus/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<MenuRequest<RecordId>>,
) -> AppResult<HttpResponse> {
    let id = params::id(&path, "menu")?;
    let menu = state
        .menus
        .update(id, draft(body.into_inner()))
        .await
        .or_fail("Failed to update menu")?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(menu, "Menu updated successfully")))
}

/// DELETE /api/menus/{id}
///
/// Children keep pointing at the deleted parent.
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = params::id(&path, "menu")?;
    state
        .menus
        .delete(id)
        .await
        .or_fail("Failed to delete menu")?;

    Ok(HttpResponse::Ok().json(ApiResponse::done("Menu deleted successfully")))
}

/// GET /api/menus/filter?parent_id=
///
/// Without `parent_id` the root menus are returned.
pub async fn filter(
    state: web::Data<AppState>,
    query: web::Query<ParentQuery>,
) -> AppResult<HttpResponse> {
    let parent = query.parent()?;
    let menus = state
        .menus
        .filter_by_parent(parent)
        .await
        .or_fail("Failed to filter menus")?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(menus, "Menus retrieved successfully")))
}
