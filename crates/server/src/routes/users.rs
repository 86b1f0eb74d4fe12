//! Countries a user subscribes to.
//!
//! `GET /:id/paises`, `PUT /:id/paises/:pais_id`, `DELETE /:id/paises/:pais_id`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use models::country;
use service::membership::Memberships;
use service::repository::Lookup;

use super::crud::parse_id;
use crate::errors::ApiError;

pub fn membership_router(memberships: Memberships) -> Router {
    Router::new()
        .route("/:id/paises", get(countries))
        .route("/:id/paises/:pais_id", put(link).delete(unlink))
        .with_state(memberships)
}

async fn countries(
    State(m): State<Memberships>,
    Path(id): Path<String>,
) -> Result<Json<Vec<country::Model>>, ApiError> {
    let id = parse_id(&id).ok_or(ApiError::NotFound)?;
    match m.countries_of(id).await? {
        Lookup::Found(list) => Ok(Json(list)),
        Lookup::Empty => Err(ApiError::NotFound),
    }
}

async fn link(
    State(m): State<Memberships>,
    Path((id, pais_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let (Some(id), Some(pais_id)) = (parse_id(&id), parse_id(&pais_id)) else {
        return Err(ApiError::NotFound);
    };
    m.link_country(id, pais_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn unlink(
    State(m): State<Memberships>,
    Path((id, pais_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    if let (Some(id), Some(pais_id)) = (parse_id(&id), parse_id(&pais_id)) {
        m.unlink_country(id, pais_id).await?;
    }
    Ok(StatusCode::NO_CONTENT)
}
