//! HTTP mapping for record service errors.

use app::error::RoutingError;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug)]
pub struct ApiError(pub RoutingError);

impl ApiError {
    pub const fn status(&self) -> StatusCode {
        match &self.0 {
            RoutingError::NotFound(_) => StatusCode::NOT_FOUND,
            RoutingError::DuplicateKey(_) | RoutingError::ConstraintViolation(_) => {
                StatusCode::BAD_REQUEST
            }
            RoutingError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RoutingError::Config(_) | RoutingError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<RoutingError> for ApiError {
    fn from(e: RoutingError) -> Self {
        Self(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(RoutingError::Validation(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(RoutingError::Validation(rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self(RoutingError::Validation(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if !self.0.is_client_error() {
            tracing::error!(error = %self.0, "Request failed");
        }

        let body = Json(json!({
            "error": self.0.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
