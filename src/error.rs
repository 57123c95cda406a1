/*
 * Responsibility
 * - アプリ共通の AppError 定義 (Unauthorized / Http / Internal)
 * - IntoResponse 実装: Unauthorized は即 401、それ以外は response extensions に載せて OnError に渡す
 * - OnError: NormalizedError (status / message / headers) への変換
 */
use std::any::Any;
use std::sync::Arc;

use axum::{
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub const UNAUTHORIZED_MESSAGE: &str = "This action needs a valid token!";

/// An error that describes its own HTTP status and headers.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct HttpError {
    pub status: StatusCode,
    pub message: String,
    pub code: i64,
    pub headers: HeaderMap,
}

impl HttpError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            code: 0,
            headers: HeaderMap::new(),
        }
    }

    pub fn with_code(mut self, code: i64) -> Self {
        self.code = code;
        self
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("This action needs a valid token!")]
    Unauthorized,
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error("{message}")]
    Internal { message: String, code: i64 },
}

impl AppError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            code: 0,
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            AppError::Unauthorized => i64::from(StatusCode::UNAUTHORIZED.as_u16()),
            AppError::Http(e) => e.code,
            AppError::Internal { code, .. } => *code,
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        AppError::internal(e.to_string())
    }
}

/// Error carried in response extensions until OnError converts it.
#[derive(Debug, Clone)]
pub struct PendingError(pub Arc<AppError>);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // PreDispatch rejection: fixed body, not routed through OnError.
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, UNAUTHORIZED_MESSAGE).into_response(),
            err => {
                let mut res = StatusCode::INTERNAL_SERVER_ERROR.into_response();
                res.extensions_mut().insert(PendingError(Arc::new(err)));
                res
            }
        }
    }
}

/// The response OnError produces.
#[derive(Debug)]
pub struct NormalizedError {
    pub status: StatusCode,
    pub message: String,
    pub headers: HeaderMap,
}

impl NormalizedError {
    pub fn from_error(err: &AppError) -> Self {
        let message = format!("My Error says: {} with code: {}", err, err.code());

        match err {
            AppError::Http(e) => Self {
                status: e.status,
                message,
                headers: e.headers.clone(),
            },
            // Unauthorized renders itself and never reaches OnError.
            AppError::Unauthorized | AppError::Internal { .. } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message,
                headers: HeaderMap::new(),
            },
        }
    }
}

impl IntoResponse for NormalizedError {
    fn into_response(self) -> Response {
        let mut res = self.message.into_response();
        *res.status_mut() = self.status;

        // Headers are replaced wholesale by the error's own set; only the body's content type is kept.
        let content_type = res.headers_mut().remove(header::CONTENT_TYPE);
        *res.headers_mut() = self.headers;
        if let Some(content_type) = content_type {
            res.headers_mut()
                .entry(header::CONTENT_TYPE)
                .or_insert(content_type);
        }
        res
    }
}

/// OnError: replaces a response carrying a [`PendingError`] with its normalized form.
/// Any other response passes through untouched.
pub fn on_error(mut res: Response) -> Response {
    let Some(PendingError(err)) = res.extensions_mut().remove::<PendingError>() else {
        return res;
    };

    let normalized = NormalizedError::from_error(&err);
    if normalized.status.is_server_error() {
        tracing::error!(error = %err, code = err.code(), "unhandled error");
    } else {
        tracing::debug!(error = %err, status = %normalized.status, "http error");
    }

    normalized.into_response()
}

/// `CatchPanicLayer` handler: a panic is an untyped error with code 0.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    tracing::error!(%message, "handler panicked");

    NormalizedError::from_error(&AppError::internal(message)).into_response()
}
