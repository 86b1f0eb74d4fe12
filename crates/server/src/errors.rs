use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// Failure of a request, translated into the status and body clients expect.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Rejected input. Served as 500 with the message as plain text, which is
    /// what existing clients check for.
    #[error("{0}")]
    Validation(String),
    #[error("not found")]
    NotFound,
    #[error("API route not found!")]
    RouteNotFound,
    #[error("{0}")]
    Internal(String),
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => ApiError::Validation(msg),
            ServiceError::NotFound(_) => ApiError::NotFound,
            ServiceError::Db(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(msg) => {
                warn!(error = %msg, "validation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response()
            }
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::RouteNotFound => (StatusCode::NOT_FOUND, self.to_string()).into_response(),
            ApiError::Internal(msg) => {
                error!(error = %msg, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_api_errors() {
        assert!(matches!(ApiError::from(ServiceError::Validation("x".into())), ApiError::Validation(_)));
        assert!(matches!(ApiError::from(ServiceError::not_found("pais")), ApiError::NotFound));
        assert!(matches!(ApiError::from(ServiceError::Db("down".into())), ApiError::Internal(_)));
    }

    #[test]
    fn statuses() {
        assert_eq!(ApiError::Validation("v".into()).into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ApiError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::RouteNotFound.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Internal("i".into()).into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
