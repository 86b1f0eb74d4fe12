//! Read-only listing of a parent's children, e.g. `GET /paises/:id/zonas`.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use service::repository::ResourceRepository;

use super::crud::parse_id;
use crate::errors::ApiError;

#[derive(Clone)]
struct Children<P, C> {
    parent: P,
    child: C,
    /// Reference field on the child that points at the parent.
    key: &'static str,
}

/// Mount `GET <path>` listing `child` records whose `key` equals the parent id.
pub fn children<P, C>(path: &str, parent: P, child: C, key: &'static str) -> Router
where
    P: ResourceRepository,
    C: ResourceRepository,
{
    Router::new()
        .route(path, get(list_children::<P, C>))
        .with_state(Children { parent, child, key })
}

async fn list_children<P, C>(
    State(s): State<Children<P, C>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<C::Record>>, ApiError>
where
    P: ResourceRepository,
    C: ResourceRepository,
{
    let id = parse_id(&id).ok_or(ApiError::NotFound)?;
    if s.parent.find_by_id(id).await?.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(s.child.list_where(s.key, id).await?))
}
