//! Application state - shared across all handlers.

use std::sync::Arc;

use cms_core::services::{CategoryService, MenuService, PostService};
use cms_infra::MemoryDatabase;

#[cfg(feature = "postgres")]
use cms_infra::DatabasePool;
#[cfg(feature = "postgres")]
use cms_infra::database::{
    PostgresCategoryRepository, PostgresMenuRepository, PostgresPostRepository,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub categories: CategoryService,
    pub menus: MenuService,
    /// Backend name reported by the health check.
    pub storage: &'static str,
}

impl AppState {
    /// Services over process-local tables. Data is lost on restart.
    pub fn in_memory() -> Self {
        let db = MemoryDatabase::new();

        tracing::info!("Application state initialized (in-memory storage)");

        Self {
            posts: PostService::new(Arc::new(db.posts())),
            categories: CategoryService::new(Arc::new(db.categories())),
            menus: MenuService::new(Arc::new(db.menus())),
            storage: "memory",
        }
    }

    /// Services sharing the pooled PostgreSQL connection.
    #[cfg(feature = "postgres")]
    pub fn postgres(pool: &DatabasePool) -> Self {
        tracing::info!("Application state initialized (postgres storage)");

        Self {
            posts: PostService::new(Arc::new(PostgresPostRepository::new(pool.conn()))),
            categories: CategoryService::new(Arc::new(PostgresCategoryRepository::new(
                pool.conn(),
            ))),
            menus: MenuService::new(Arc::new(PostgresMenuRepository::new(pool.conn()))),
            storage: "postgres",
        }
    }
}
