//! HTTP handlers and route configuration.

mod blog;
mod category;
mod health;
mod menu;
mod params;

use actix_web::web;

pub use params::{json_config, query_config};

/// Configure all application routes.
///
/// Literal segments (`/search`, `/filter`) are registered before `/{id}`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/blogs")
                    .route("", web::get().to(blog::list))
                    .route("", web::post().to(blog::create))
                    .route("/search", web::get().to(blog::search))
                    .route("/{id}", web::get().to(blog::get))
                    .route("/{id}", web::put().to(blog::update))
                    .route("/{id}", web::delete().to(blog::delete))
                    .route("/{id}/categories", web::get().to(blog::categories))
                    .route("/{id}/categories", web::post().to(blog::add_category))
                    .route(
                        "/{id}/categories/{category_id}",
                        web::delete().to(blog::remove_category),
                    ),
            )
            .service(
                web::scope("/categories")
                    .route("", web::get().to(category::list))
                    .route("", web::post().to(category::create))
                    .route("/{id}", web::get().to(category::get))
                    .route("/{id}", web::delete().to(category::delete)),
            )
            .service(
                web::scope("/menus")
                    .route("", web::get().to(menu::list))
                    .route("", web::post().to(menu::create))
                    .route("/filter", web::get().to(menu::filter))
                    .route("/{id}", web::get().to(menu::get))
                    .route("/{id}", web::put().to(menu::update))
                    .route("/{id}", web::delete().to(menu::delete)),
            ),
    );
}
