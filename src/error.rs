use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use derive_more::{Display, Error};
use log::{error, warn};
use serde::Serialize;
use utoipa::ToSchema;

pub type HResult<T> = std::result::Result<T, HandlerError>;

/// Body of every error response.
#[derive(Debug, Display, Error, Serialize, ToSchema)]
#[display(fmt = "{}", message)]
pub struct HandlerError {
    #[schema(example = "tour_not_found")]
    pub message: String,
    #[schema(example = 404)]
    pub code: u16,
}

impl HandlerError {
    pub fn with_code(code: u16, message: String) -> Self {
        Self { message, code }
    }

    pub fn internal_error() -> Self {
        Self::with_code(500, "Internal Server Error".into())
    }

    pub fn not_found(message: &str) -> Self {
        Self::with_code(404, message.into())
    }

    pub fn invalid_input(message: &str) -> Self {
        Self::with_code(400, message.into())
    }
}

impl ResponseError for HandlerError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Translates storage failures into the api's error taxonomy.
/// Constraint violations are caller mistakes, everything else is ours.
impl From<sqlx::Error> for HandlerError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::RowNotFound = err {
            return Self::not_found("not_found");
        }

        if let sqlx::Error::Database(ref db_err) = err {
            let code = db_err.code();
            match code.as_deref() {
                // unique_violation
                Some("23505") => return Self::with_code(409, "already_exists".into()),
                // foreign_key_violation
                Some("23503") => return Self::not_found("referenced_row_not_found"),
                // not_null_violation, check_violation
                Some("23502") | Some("23514") => {
                    return Self::invalid_input("constraint_violation")
                }
                // string_data_right_truncation, invalid_text_representation
                Some("22001") | Some("22P02") => return Self::invalid_input("invalid_value"),
                // numeric_value_out_of_range
                Some("22003") => return Self::invalid_input("value_out_of_range"),
                _ => {}
            }
        }

        error!("database error: {}", err);
        Self::internal_error()
    }
}

impl From<u16> for HandlerError {
    fn from(code: u16) -> Self {
        let message = match code {
            403 => "Access denied".into(),
            401 => "Authorization required".into(),
            404 => "not_found".into(),
            _ => StatusCode::from_u16(code)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
                .to_string(),
        };

        Self::with_code(code, message)
    }
}

impl From<&str> for HandlerError {
    fn from(message: &str) -> Self {
        Self::with_code(500, message.into())
    }
}

impl From<String> for HandlerError {
    fn from(message: String) -> Self {
        Self::with_code(500, message)
    }
}

impl From<(u16, &'static str)> for HandlerError {
    fn from(tuple: (u16, &'static str)) -> Self {
        Self::with_code(tuple.0, tuple.1.into())
    }
}

pub trait IntoHandlerErrorResult<T> {
    fn or_err(self, code: u16) -> Result<T, HandlerError>;
    fn or_err_msg(self, code: u16, message: &'static str) -> Result<T, HandlerError>;
}

impl<T, E> IntoHandlerErrorResult<T> for Result<T, E> {
    fn or_err(self, code: u16) -> Result<T, HandlerError> {
        self.map_err(|_| code.into())
    }

    fn or_err_msg(self, code: u16, message: &'static str) -> Result<T, HandlerError> {
        self.map_err(|_| HandlerError::from((code, message)))
    }
}

impl<T> IntoHandlerErrorResult<T> for Option<T> {
    fn or_err(self, code: u16) -> Result<T, HandlerError> {
        self.ok_or_else(|| code.into())
    }

    fn or_err_msg(self, code: u16, message: &'static str) -> Result<T, HandlerError> {
        self.ok_or_else(|| HandlerError::from((code, message)))
    }
}

/// Turns extractor failures (bad json, bad path segments, bad query strings)
/// into the same json error body every handler produces.
pub fn json_config() -> actix_web::web::JsonConfig {
    actix_web::web::JsonConfig::default().error_handler(|err, _req| {
        warn!("rejected json body: {}", err);
        HandlerError::with_code(400, format!("invalid_body: {}", err)).into()
    })
}

pub fn path_config() -> actix_web::web::PathConfig {
    actix_web::web::PathConfig::default().error_handler(|err, _req| {
        HandlerError::with_code(400, format!("invalid_path: {}", err)).into()
    })
}

pub fn query_config() -> actix_web::web::QueryConfig {
    actix_web::web::QueryConfig::default().error_handler(|err, _req| {
        HandlerError::with_code(400, format!("invalid_query: {}", err)).into()
    })
}

pub mod macros {
    macro_rules! err {
        ($code:expr, $msg:expr) => {
            Err(crate::error::HandlerError::from(($code, $msg)))
        };
        ($code:expr) => {
            Err(crate::error::HandlerError::from($code))
        };
        () => {
            Err(crate::error::HandlerError::internal_error())
        };
    }

    pub(crate) use err;
}
