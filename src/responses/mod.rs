pub mod download;
pub mod errors;
pub mod html;

pub use download::{csv_response, json_response, xlsx_response};
pub use errors::{html_error_response, status_for, ResultResp};
pub use html::{html_response, html_response_with_cookie};
