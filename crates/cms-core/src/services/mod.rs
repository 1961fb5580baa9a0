//! Resource services - one per resource type, each wrapping its repository port.
//!
//! Services translate "no such row" into [`DomainError::NotFound`](crate::DomainError)
//! for reads and updates, and pass every repository failure through untouched.

mod category;
mod menu;
mod post;

pub use category::CategoryService;
pub use menu::MenuService;
pub use post::PostService;
