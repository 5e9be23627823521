//! Cellar duplicate-check handler
//!
//! Stateless: the client sends the candidate and the items it already knows
//! about, the server answers with the colliding ones. Whether to proceed
//! despite a duplicate is an explicit confirmation step in the UI, never a
//! decision taken here.

use axum::Json;
use serde::{Deserialize, Serialize};

use shared::closure::dedup::{self, CellarItem};

use crate::utils::AppResult;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

/// Duplicate check request
#[derive(Debug, Deserialize)]
pub struct DuplicateCheckRequest {
    pub candidate: CellarItem,
    #[serde(default)]
    pub existing: Vec<CellarItem>,
}

/// Duplicate check response
#[derive(Debug, Serialize)]
pub struct DuplicateCheckResponse {
    pub duplicate: bool,
    pub matches: Vec<CellarItem>,
}

/// POST /api/cellar/duplicates - 检测新酒品是否与已有条目重复
pub async fn check_duplicates(
    Json(req): Json<DuplicateCheckRequest>,
) -> AppResult<Json<DuplicateCheckResponse>> {
    validate_required_text(&req.candidate.description, "description", MAX_NAME_LEN)?;
    validate_required_text(&req.candidate.producer, "producer", MAX_NAME_LEN)?;

    let matches: Vec<CellarItem> = dedup::candidate_matches(&req.candidate, &req.existing)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(DuplicateCheckResponse {
        duplicate: !matches.is_empty(),
        matches,
    }))
}
