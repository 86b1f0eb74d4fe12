use axum::Router;
use models::{color, country, gauge, product, product_type, service_center, user, zone};
use sea_orm::DatabaseConnection;
use service::membership::Memberships;
use service::repository::SeaOrmRepository;
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tracing::Level;

use crate::errors::ApiError;

pub mod associations;
pub mod crud;
pub mod users;

/// Every `/api` route. Unmatched paths below `/api` answer with [`ApiError::RouteNotFound`].
pub fn api_router(db: DatabaseConnection) -> Router {
    let centros = SeaOrmRepository::<service_center::Entity>::new(db.clone());
    let usuarios = SeaOrmRepository::<user::Entity>::new(db.clone());
    let paises = SeaOrmRepository::<country::Entity>::new(db.clone());
    let zonas = SeaOrmRepository::<zone::Entity>::new(db.clone());
    let productos = SeaOrmRepository::<product::Entity>::new(db.clone());
    let tipos = SeaOrmRepository::<product_type::Entity>::new(db.clone());
    let colores = SeaOrmRepository::<color::Entity>::new(db.clone());
    let calibres = SeaOrmRepository::<gauge::Entity>::new(db.clone());

    Router::new()
        .nest("/centros", crud::router(centros.clone()))
        .nest(
            "/users",
            crud::router(usuarios).merge(users::membership_router(Memberships::new(db))),
        )
        .nest(
            "/paises",
            crud::router(paises.clone())
                .merge(associations::children("/:id/zonas", paises, zonas.clone(), "paisId")),
        )
        .nest(
            "/zonas",
            crud::router(zonas.clone())
                .merge(associations::children("/:id/centros", zonas, centros, "zonaId")),
        )
        .nest(
            "/productos",
            crud::router(productos.clone())
                .merge(associations::children("/:id/tipos", productos.clone(), tipos.clone(), "productoId"))
                .merge(associations::children("/:id/colores", productos, colores, "productoId")),
        )
        .nest(
            "/tipos",
            crud::router(tipos.clone())
                .merge(associations::children("/:id/calibres", tipos, calibres, "tipoId")),
        )
        .fallback(route_not_found)
}

async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// Request tracing: one INFO span per request, failures (5xx) at ERROR.
pub fn trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
        .on_failure(DefaultOnFailure::new().level(Level::ERROR))
}
