pub mod errors;
pub mod html;
pub mod xlsx;

// These two *are* in responses/errors.rs
pub use errors::{error_to_response, ResultResp};

// Normal HTML / text / redirect responses
pub use html::{css_response, html_response, redirect_response, text_response};
pub use xlsx::xlsx_response;
