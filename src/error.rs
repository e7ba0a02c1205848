use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt::{self, Debug};
use std::sync::PoisonError;

pub const INVALID_REQUEST: i32 = 101;
pub const NO_DRIVERS_AVAILABLE: i32 = 102;

#[derive(Debug)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Error {
    pub fn is_invalid_request_error(&self) -> bool {
        self.code == INVALID_REQUEST
    }

    pub fn is_no_drivers_available_error(&self) -> bool {
        self.code == NO_DRIVERS_AVAILABLE
    }

    pub fn is_internal_error(&self) -> bool {
        (1..=99).contains(&self.code)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl<T> From<PoisonError<T>> for Error {
    fn from(_: PoisonError<T>) -> Self {
        poisoned_lock_error()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.code {
            1..=99 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            NO_DRIVERS_AVAILABLE => (StatusCode::CONFLICT, self.message.as_str()),
            _ => (StatusCode::BAD_REQUEST, self.message.as_str()),
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub fn invalid_request_error() -> Error {
    Error {
        code: INVALID_REQUEST,
        message: "pickup and dropoff locations must be provided".into(),
    }
}

pub fn no_drivers_available_error() -> Error {
    Error {
        code: NO_DRIVERS_AVAILABLE,
        message: "no drivers available at the moment".into(),
    }
}

pub fn env_var_error(_: env::VarError) -> Error {
    Error {
        code: 1,
        message: "environment variable error".into(),
    }
}

pub fn invalid_config_error(key: &str) -> Error {
    Error {
        code: 2,
        message: format!("invalid value for {}", key),
    }
}

pub fn server_error<T: Debug>(err: T) -> Error {
    tracing::error!("server error: {:?}", err);

    Error {
        code: 3,
        message: "server error".into(),
    }
}

pub fn poisoned_lock_error() -> Error {
    Error {
        code: 4,
        message: "poisoned lock".into(),
    }
}
