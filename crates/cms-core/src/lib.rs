//! # CMS Core
//!
//! The domain layer of the content-management backend.
//! Entities, the identifier scheme, repository ports and the resource
//! services live here, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod id;
pub mod ports;
pub mod services;

pub use error::{DomainError, RepoError};
pub use id::RecordId;
