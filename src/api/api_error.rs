use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    Network(String),
    Http(u16),
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {msg}"),
            ApiError::Http(status) => write!(f, "Backend returned HTTP {status}"),
            ApiError::Decode(msg) => write!(f, "Response decode error: {msg}"),
        }
    }
}

impl Error for ApiError {}
