//! The crate's error taxonomy. One enum, one variant per pipeline stage
//! that can fail, so callers can `match` on the kind rather than parse a
//! message string.

use thiserror::Error;

/// A parsed S3 `<Error>` XML payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename = "Error")]
pub struct ApiError {
    #[serde(default, rename = "Code")]
    pub code: String,
    #[serde(default, rename = "Message")]
    pub message: String,
    #[serde(default, rename = "RequestId")]
    pub request_id: String,
    #[serde(default, rename = "HostId")]
    pub host_id: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "s3 api error")?;
        if !self.code.is_empty() {
            write!(f, " (ErrorCode:{})", self.code)?;
        }
        if !self.request_id.is_empty() {
            write!(f, " (RequestID:{})", self.request_id)?;
        }
        if !self.host_id.is_empty() {
            write!(f, " (HostID:{})", self.host_id)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

/// A non-success HTTP response, wrapping whatever S3 identity headers and
/// XML error body came back with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerSideError {
    pub http_status: u16,
    pub x_amz_request_id: String,
    pub x_amz_id_2: String,
    pub api_error: Option<ApiError>,
}

impl std::error::Error for ServerSideError {}

impl std::fmt::Display for ServerSideError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let body = self
            .api_error
            .as_ref()
            .map(|e| e.to_string())
            .unwrap_or_else(|| "error message not found".to_string());
        write!(
            f,
            "server-side error occurred (StatusCode:{}): {}",
            self.http_status, body
        )
    }
}

/// Every way a call through the pipeline can fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid client configuration: {0}")]
    ConfigInvalid(String),

    #[error("invalid request input: {0}")]
    InputInvalid(String),

    #[error("cannot resolve endpoint: {0}")]
    EndpointUnresolvable(String),

    #[error("failed to marshal request: {0}")]
    MarshalFailed(String),

    #[error("failed to sign request: {0}")]
    SigningFailed(String),

    #[error("transport error: {0}")]
    TransportFailed(String),

    #[error("failed to unmarshal response: {0}")]
    UnmarshalFailed(String),

    #[error(transparent)]
    ServerSideError(#[from] ServerSideError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_side_error_display_without_api_error() {
        let e = ServerSideError {
            http_status: 503,
            x_amz_request_id: "r".into(),
            x_amz_id_2: "i".into(),
            api_error: None,
        };
        assert_eq!(
            e.to_string(),
            "server-side error occurred (StatusCode:503): error message not found"
        );
    }

    #[test]
    fn api_error_display_includes_all_present_fields() {
        let e = ApiError {
            code: "NoSuchKey".into(),
            message: "missing".into(),
            request_id: "req-1".into(),
            host_id: "host-1".into(),
        };
        assert_eq!(
            e.to_string(),
            "s3 api error (ErrorCode:NoSuchKey) (RequestID:req-1) (HostID:host-1): missing"
        );
    }
}
