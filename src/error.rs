use thiserror::Error;

/// Errors that can occur when converting a custom canvas format into a
/// canonical `FlowSnapshot`.
#[derive(Error, Debug, Clone)]
pub enum SnapshotConversionError {
    #[error("Invalid canvas data: {0}")]
    ValidationError(String),
}

/// Errors from the remote endpoint client.
///
/// Callers are expected to turn these into display strings for an inline
/// error panel; there is no retry or partial-failure recovery.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API request failed: {status} {body}")]
    Api { status: u16, body: String },

    #[error("Response from '{url}' had an unexpected shape: {message}")]
    MalformedResponse { url: String, message: String },

    #[error("Could not read upload file '{path}': {message}")]
    UploadFile { path: String, message: String },
}
