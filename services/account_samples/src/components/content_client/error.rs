use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API call failed with status {status}: {message}{}", render_details(.details))]
    Api {
        status: StatusCode,
        message: String,
        details: Vec<ApiErrorDetail>,
    },

    #[error("Invalid API endpoint `{endpoint}` ({reason})")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Access token cannot be used as a header value")]
    InvalidAuthToken,

    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Vec<ApiErrorDetail>,
}

impl ClientError {
    /// Decodes the API error envelope, falling back to the raw body.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => ClientError::Api {
                status,
                message: envelope.error.message,
                details: envelope.error.errors,
            },
            Err(_) => ClientError::Api {
                status,
                message: body.trim().to_string(),
                details: Vec::new(),
            },
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(err) => err.status(),
            _ => None,
        }
    }
}

fn render_details(details: &[ApiErrorDetail]) -> String {
    details
        .iter()
        .map(|detail| {
            format!(
                "\n  - [{}/{}] {}",
                detail.domain, detail.reason, detail.message
            )
        })
        .collect()
}
