//! Domain entities - the core business objects.

mod category;
mod menu;
mod post;
mod query;

pub use category::{Category, CategoryDraft, PostCategory};
pub use menu::{Menu, MenuDraft};
pub use post::{Post, PostDraft, status};
pub use query::{Pagination, ParentFilter, SearchTerm};
