use thiserror::Error as ThisError;

pub type Result<T> = std::result::Result<T, Error>;

/// Public Errors. Each one wraps the failure of whatever the builder delegated to.
#[derive(ThisError, Debug)]
pub enum Error {
    #[error("No response set on builder")]
    Unset,
    #[error("Invalid header value: {0}")]
    HeaderValue(#[from] http::header::InvalidHeaderValue),
    #[error("Error encoding json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid compression level {0}, expected 0-9")]
    CompressionLevel(u32),
    #[error("Error compressing body: {0}")]
    Compression(std::io::Error),
    /// A `ResponseValue` refused a body write. `Response` itself never does.
    #[error("Error writing body: {0}")]
    BodyWrite(std::io::Error),
    #[error("Error converting body: {0}")]
    BodyConversion(#[from] std::string::FromUtf8Error),
}
