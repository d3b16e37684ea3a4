use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, FromRequest, Request},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{error::Category, json};
use thiserror::Error;

/// Request errors, answered to the client.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] serde_json::Error),

    #[error("Expected request with `Content-Type: application/json`, got `{0}`")]
    ContentType(String),

    #[error("failed to read request body: {0}")]
    Body(#[from] BytesRejection),
}

/// Startup configuration errors. Never reach a response.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {var}={value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// One entry of the `detail` list in a 422 body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub loc: Vec<String>,
    pub msg: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            // every body shape failure is one client error class
            AppError::Validation(_) | AppError::ContentType(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Body(rejection) => rejection.status(),
        }
    }

    pub fn issue(&self) -> ValidationIssue {
        let msg = self.to_string();
        match self {
            AppError::Validation(e) => match e.classify() {
                Category::Syntax | Category::Eof | Category::Io => ValidationIssue {
                    kind: "json_invalid",
                    loc: vec!["body".to_string()],
                    msg,
                },
                Category::Data => match missing_field(&msg) {
                    Some(field) => ValidationIssue {
                        kind: "missing",
                        loc: vec!["body".to_string(), field.to_string()],
                        msg,
                    },
                    None => ValidationIssue {
                        kind: "value_error",
                        loc: vec!["body".to_string()],
                        msg,
                    },
                },
            },
            AppError::ContentType(_) => ValidationIssue {
                kind: "content_type",
                loc: vec!["body".to_string()],
                msg,
            },
            AppError::Body(_) => ValidationIssue {
                kind: "body",
                loc: vec!["body".to_string()],
                msg,
            },
        }
    }
}

// serde reports missing fields as "missing field `name` at line .."
fn missing_field(msg: &str) -> Option<&str> {
    let rest = msg.strip_prefix("missing field `")?;
    rest.split('`').next()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let issue = self.issue();
        tracing::warn!(status = %status, reason = %issue.msg, "rejected analysis request");

        (status, Json(json!({ "detail": [issue] }))).into_response()
    }
}

/// JSON body extractor whose rejections are reported through [`AppError`].
///
/// A body without `Content-Type` is still parsed as JSON; any other
/// non-JSON content type is rejected.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(content_type) = req.headers().get(header::CONTENT_TYPE) {
            if !is_json(content_type) {
                let raw = String::from_utf8_lossy(content_type.as_bytes()).into_owned();
                return Err(AppError::ContentType(raw));
            }
        }

        let bytes = Bytes::from_request(req, state).await?;
        let value = serde_json::from_slice(&bytes)?;
        Ok(AppJson(value))
    }
}

fn is_json(content_type: &HeaderValue) -> bool {
    let Ok(raw) = content_type.to_str() else {
        return false;
    };
    let essence = raw.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();

    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}

pub type Result<T, E = AppError> = core::result::Result<T, E>;
