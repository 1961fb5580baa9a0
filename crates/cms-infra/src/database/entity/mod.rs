//! SeaORM entities, one per table.

pub mod category;
pub mod menu;
pub mod post;
pub mod post_category;
