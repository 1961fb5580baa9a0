//! Domain-level error types.

use thiserror::Error;

/// Domain errors - what a resource service reports to its caller.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: String },

    #[error("Persistence failure: {0}")]
    Persistence(#[from] RepoError),
}

impl DomainError {
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repo_errors_convert_into_persistence_failures() {
        let err: DomainError = RepoError::Constraint("blog_categories_pkey".into()).into();

        assert!(matches!(err, DomainError::Persistence(RepoError::Constraint(_))));
        assert_eq!(
            err.to_string(),
            "Persistence failure: Constraint violation: blog_categories_pkey"
        );
    }

    #[test]
    fn not_found_renders_entity_and_id() {
        let err = DomainError::not_found("Menu", 42);
        assert_eq!(err.to_string(), "Entity not found: Menu with id 42");
    }
}
