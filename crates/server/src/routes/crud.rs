//! Generic CRUD handlers, one set per resource.
//!
//! | Method | Path   | Success                                         |
//! |--------|--------|-------------------------------------------------|
//! | GET    | `/`    | 200, every record                               |
//! | GET    | `/:id` | 200, one-element array; 404 when absent         |
//! | POST   | `/`    | 200, the stored record                          |
//! | PUT    | `/:id` | 200, `{ <name>: record, message }`; 404 absent  |
//! | DELETE | `/:id` | 204 whether or not the record existed           |

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Map, Value};
use service::repository::{Lookup, ResourceRepository};

use crate::errors::ApiError;

pub const UPDATED_MESSAGE: &str = "Updated successfully";

pub fn router<R: ResourceRepository>(repo: R) -> Router {
    Router::new()
        .route("/", get(list::<R>).post(create::<R>))
        .route("/:id", get(show::<R>).put(update::<R>).delete(destroy::<R>))
        .with_state(repo)
}

/// Ids outside the integer range cannot name a record.
pub(crate) fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

/// Request body as JSON. An empty or unparseable body reads as `{}`, so the
/// schema reports the missing fields instead of the extractor rejecting it.
pub(crate) fn body_or_empty(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap_or_else(|_| Value::Object(Map::new()))
}

async fn list<R: ResourceRepository>(State(repo): State<R>) -> Result<Json<Vec<R::Record>>, ApiError> {
    Ok(Json(repo.list_all().await?))
}

async fn show<R: ResourceRepository>(
    State(repo): State<R>,
    Path(id): Path<String>,
) -> Result<Json<Vec<R::Record>>, ApiError> {
    let id = parse_id(&id).ok_or(ApiError::NotFound)?;
    match repo.find_by_id(id).await? {
        Lookup::Empty => Err(ApiError::NotFound),
        found => Ok(Json(found.into_vec())),
    }
}

async fn create<R: ResourceRepository>(
    State(repo): State<R>,
    body: Bytes,
) -> Result<Json<R::Record>, ApiError> {
    Ok(Json(repo.create(&body_or_empty(&body)).await?))
}

async fn update<R: ResourceRepository>(
    State(repo): State<R>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id).ok_or(ApiError::NotFound)?;
    let updated = repo.update(id, &body_or_empty(&body)).await?;
    let record = serde_json::to_value(&updated).map_err(|e| ApiError::Internal(e.to_string()))?;

    let mut out = Map::new();
    out.insert(repo.name().to_string(), record);
    out.insert("message".to_string(), json!(UPDATED_MESSAGE));
    Ok(Json(Value::Object(out)))
}

async fn destroy<R: ResourceRepository>(
    State(repo): State<R>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if let Some(id) = parse_id(&id) {
        repo.delete(id).await?;
    }
    Ok(StatusCode::NO_CONTENT)
}
