// errors.rs
use crate::api::ApiError;
use astra::Response;
use std::fmt;

/// Errors originating from either the server logic
/// (routing, bad form input, etc.) or downstream layers (backend API, export).
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    Api(ApiError),
    XlsxError(String),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::Api(err) => write!(f, "Backend API Error: {err}"),
            ServerError::XlsxError(msg) => write!(f, "Spreadsheet Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<ApiError> for ServerError {
    fn from(err: ApiError) -> Self {
        ServerError::Api(err)
    }
}
