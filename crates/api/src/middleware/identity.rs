//! Verified-identity extractor.
//!
//! Token verification happens at the gateway in front of this service;
//! it forwards the decoded subject and role/level on trusted headers.
//! This extractor reads those headers and rejects requests missing
//! them -- it never re-validates signatures.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use backoffice_core::error::CoreError;
use backoffice_core::types::DbId;

use crate::error::AppError;
use crate::state::AppState;

pub const SUBJECT_HEADER: &str = "x-subject-id";
pub const LEVEL_ID_HEADER: &str = "x-level-id";
pub const LEVEL_NAME_HEADER: &str = "x-level-name";

/// The already-verified caller identity.
#[derive(Debug, Clone)]
pub struct Identity {
    pub subject_id: DbId,
    pub level_id: DbId,
    pub level_name: String,
}

impl FromRequestParts<AppState> for Identity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let subject_id = id_header(parts, SUBJECT_HEADER)?;
        let level_id = id_header(parts, LEVEL_ID_HEADER)?;
        let level_name = parts
            .headers
            .get(LEVEL_NAME_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        Ok(Identity {
            subject_id,
            level_id,
            level_name,
        })
    }
}

fn id_header(parts: &Parts, name: &str) -> Result<DbId, AppError> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<DbId>().ok())
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(format!(
                "Missing or invalid {name} header"
            )))
        })
}
