use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ruplan_core::ErrorResponse;
use thiserror::Error;
use tracing::error;

/// Errori applicativi, mappati su status HTTP + corpo JSON `{ "message": ... }`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("All fields are required!")]
    MissingFields,

    #[error("Email already registered. Please login instead.")]
    DuplicateEmail,

    #[error("User not found. Please signup.")]
    UserNotFound,

    #[error("Invalid password. Try again.")]
    WrongPassword,

    /// Guasto interno: sul wire va solo un messaggio generico per endpoint,
    /// la causa resta nel log del server.
    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    /// Mappa un errore inatteso in 500, loggando la causa senza esporla.
    pub fn internal<E: std::fmt::Display>(public: &'static str, err: E) -> Self {
        error!("{public}: {err}");
        ApiError::Internal(public)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingFields => StatusCode::BAD_REQUEST,
            ApiError::DuplicateEmail => StatusCode::CONFLICT,
            ApiError::UserNotFound => StatusCode::NOT_FOUND,
            ApiError::WrongPassword => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse {
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}
