//! # CMS Shared
//!
//! Wire types shared by the server and its clients: request bodies and the
//! response envelope every endpoint returns.

pub mod dto;
pub mod response;

pub use response::ApiResponse;
