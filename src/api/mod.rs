pub mod api_error;
pub mod client;
pub mod models;

pub use api_error::ApiError;
pub use client::ApiClient;
