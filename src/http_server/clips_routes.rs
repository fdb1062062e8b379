//! Clips HTTP Routes
//!
//! | Path | Method | Params | Body |
//! |---|---|---|---|
//! | `/upload` | POST | multipart `file` | empty |
//! | `/run` | GET | `filename` | `true` / `false` |
//! | `/facts` | GET | `folder`, `step` | artifact text or error text |
//! | `/fact` | GET | none | artifact text or error text |

use std::sync::Arc;

use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::clips::{ClipsConfig, ClipsService};

// ==================
// Shared State
// ==================

/// Clips state shared across handlers
#[derive(Debug)]
pub struct ClipsState {
    pub service: ClipsService,
}

impl ClipsState {
    pub fn new(config: &ClipsConfig) -> Self {
        Self {
            service: ClipsService::from_config(config),
        }
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct RunQuery {
    pub filename: String,
}

#[derive(Debug, Deserialize)]
pub struct FactsQuery {
    pub folder: String,
    pub step: i32,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

/// Multipart field carrying the upload
const UPLOAD_FIELD: &str = "file";

// ==================
// Clips Routes
// ==================

/// Create clips routes
pub fn clips_routes(state: Arc<ClipsState>) -> Router {
    Router::new()
        .route("/upload", post(upload_handler))
        .route("/run", get(run_handler))
        .route("/facts", get(facts_handler))
        .route("/fact", get(fact_handler))
        .with_state(state)
}

fn bad_request(error: impl ToString) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.to_string(),
            code: 400,
        }),
    )
}

// ==================
// Handlers
// ==================

async fn upload_handler(
    State(state): State<Arc<ClipsState>>,
    mut multipart: Multipart,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    while let Some(field) = multipart.next_field().await.map_err(bad_request)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        // A part without a filename attribute is a plain form value, not a file
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let data = field.bytes().await.map_err(bad_request)?;

        state.service.store_file(&file_name, &data);
        return Ok(StatusCode::OK);
    }

    Err(bad_request(format!(
        "Required part '{}' is not present",
        UPLOAD_FIELD
    )))
}

async fn run_handler(
    State(state): State<Arc<ClipsState>>,
    Query(query): Query<RunQuery>,
) -> Json<bool> {
    Json(state.service.run_script(&query.filename))
}

async fn facts_handler(
    State(state): State<Arc<ClipsState>>,
    Query(query): Query<FactsQuery>,
) -> String {
    state.service.facts(&query.folder, query.step)
}

async fn fact_handler(State(state): State<Arc<ClipsState>>) -> String {
    state.service.fact()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facts_query_parses_step() {
        let query = parse_facts_query("folder=alpha&step=3").expect("valid query");
        assert_eq!(query.folder, "alpha");
        assert_eq!(query.step, 3);
    }

    fn parse_facts_query(raw: &str) -> Option<FactsQuery> {
        let uri: axum::http::Uri = format!("/facts?{}", raw).parse().ok()?;
        Query::<FactsQuery>::try_from_uri(&uri).ok().map(|q| q.0)
    }

    #[test]
    fn test_facts_query_rejects_non_integer_step() {
        assert!(parse_facts_query("folder=alpha&step=three").is_none());
        assert!(parse_facts_query("folder=alpha").is_none());
    }
}
