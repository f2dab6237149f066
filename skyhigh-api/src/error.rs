use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use skyhigh_booking::BookingError;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => {
                tracing::warn!("Rejected booking input: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            },
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            },
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::PriceOverflow => AppError::InternalServerError(err.to_string()),
            other => AppError::ValidationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyhigh_shared::Leg;

    #[test]
    fn test_booking_errors_map_to_bad_request() {
        let err = AppError::from(BookingError::SelectionMissing(Leg::Inbound));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_overflow_is_internal() {
        let err = AppError::from(BookingError::PriceOverflow);
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
