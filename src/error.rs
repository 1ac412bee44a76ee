//! Errors raised at the HTTP boundary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::shell::ShellEventKind;

/// Request-level failures. The shell itself has none.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// A navigation event arrived without the tab it selects.
    #[error("Event {0:?} requires a tab")]
    MissingTab(ShellEventKind),
}

impl ServerError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingTab(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::warn!(name: "server.request.rejected", error = %self, "Request rejected");
        (self.status(), self.to_string()).into_response()
    }
}
