use crate::errors::ServerError;
use crate::templates::error_page;
use astra::{Body, Response, ResponseBuilder};

pub use crate::errors::ResultResp;

pub fn status_for(err: &ServerError) -> u16 {
    match err {
        ServerError::NotFound(_) => 404,
        ServerError::BadRequest(_) => 400,
        ServerError::Upstream(_) => 502,
        ServerError::ExportError(_) | ServerError::InternalError => 500,
    }
}

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    let status = status_for(&err);
    let message = match &err {
        ServerError::NotFound(msg) | ServerError::BadRequest(msg) => msg.clone(),
        ServerError::Upstream(e) => {
            format!("Could not load listings: {e}. No comparison was stored.")
        }
        other => other.to_string(),
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(error_page(status, &message).into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
