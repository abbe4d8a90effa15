use thiserror::Error;

/// Errors returned by [`WeatherClient`](crate::WeatherClient) operations.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// A caller-supplied parameter is outside its allowed set.
    ///
    /// Raised before any request is sent.
    #[error("{0}")]
    InvalidArgument(String),

    /// The transport failed. Carries the transport's own message unchanged.
    #[error("{0}")]
    Http(String),

    /// JSON output was requested but the body is not a JSON object.
    #[error("Failed to decode weather response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Transport options could not be applied.
    #[error("Invalid transport options: {0}")]
    InvalidOptions(String),
}

impl WeatherError {
    pub(crate) fn invalid_type(value: &str) -> Self {
        WeatherError::InvalidArgument(format!("Invalid type value(base/all): {value}"))
    }

    pub(crate) fn invalid_format(value: &str) -> Self {
        WeatherError::InvalidArgument(format!("Invalid response format: {value}"))
    }
}
