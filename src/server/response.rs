use crate::error::ContactError;
use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// Failures a handler turns into an error page.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error(transparent)]
    Contact(#[from] ContactError),

    #[error("Page rendering failed: {0}")]
    Render(#[from] askama::Error),
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::Contact(ContactError::NotFound(_)) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self);
            return (status, "Internal server error").into_response();
        }
        (status, self.to_string()).into_response()
    }
}

pub(crate) fn render_page<T: Template>(page: &T) -> Result<Html<String>, HttpError> {
    Ok(Html(page.render()?))
}
