//! Request parameter extraction shared by the resource handlers.
//!
//! Query parameters arrive as raw strings so that malformed pagination never
//! rejects a request (parse-or-default); identifiers are parsed explicitly and
//! rejected with a 400 when malformed.

use actix_web::{HttpRequest, error, web};
use serde::Deserialize;

use cms_core::RecordId;
use cms_core::domain::Pagination;
use cms_core::id::parse_id;

use crate::middleware::error::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination::parse(self.page.as_deref(), self.limit.as_deref())
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub keyword: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl SearchQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination::parse(self.page.as_deref(), self.limit.as_deref())
    }
}

#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub category_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ParentQuery {
    pub parent_id: Option<String>,
}

impl ParentQuery {
    /// Absent or empty selects root menus.
    pub fn parent(&self) -> AppResult<Option<RecordId>> {
        match self.parent_id.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .parse::<RecordId>()
                .map(Some)
                .map_err(|_| AppError::BadRequest("Invalid parent_id".to_string())),
        }
    }
}

/// Parse a path or query identifier, naming `entity` in the 400 message.
pub fn id(raw: &str, entity: &str) -> AppResult<RecordId> {
    Ok(parse_id(raw, entity)?)
}

/// Malformed JSON bodies are answered in the envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        tracing::debug!(error = %err, "Rejected request body");
        error::Error::from(AppError::BadRequest("Invalid JSON input".to_string()))
    })
}

/// Query strings that cannot be decoded at all (e.g. repeated keys).
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req: &HttpRequest| {
        tracing::debug!(error = %err, "Rejected query string");
        error::Error::from(AppError::BadRequest("Invalid query parameters".to_string()))
    })
}
