use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use error_stack::Report;
use kernel::KernelError;
use serde_json::json;
use std::process::{ExitCode, Termination};

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

/// Response marker for a `NotAuthenticated` answer.
#[derive(Debug, Clone, Copy)]
pub struct SessionRejected;

impl ErrorStatus {
    fn status(&self) -> StatusCode {
        match self.0.current_context() {
            KernelError::NotAuthenticated
            | KernelError::Authentication
            | KernelError::InvalidCredential => StatusCode::UNAUTHORIZED,
            KernelError::DuplicateIdentity | KernelError::InvalidStatus => StatusCode::CONFLICT,
            KernelError::EmptyCart => StatusCode::BAD_REQUEST,
            KernelError::Validation => StatusCode::UNPROCESSABLE_ENTITY,
            KernelError::OrderNotFound | KernelError::NotFound => StatusCode::NOT_FOUND,
            KernelError::Timeout => StatusCode::REQUEST_TIMEOUT,
            KernelError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{:?}", self.0);
        } else {
            tracing::debug!("{:?}", self.0);
        }
        let body = json!({ "error": self.0.current_context().to_string() });
        let mut response = (status, Json(body)).into_response();
        if *self.0.current_context() == KernelError::NotAuthenticated {
            response.extensions_mut().insert(SessionRejected);
        }
        response
    }
}
