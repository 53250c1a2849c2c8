//! Station directory error types.

/// Errors that can occur when talking to the station directory.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication failed
    #[error("unauthorized: check STATION_API_KEY")]
    Unauthorized,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Mock data could not be loaded
    #[error("mock data error: {message}")]
    MockData { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DirectoryError::Unauthorized;
        assert_eq!(err.to_string(), "unauthorized: check STATION_API_KEY");

        let err = DirectoryError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = DirectoryError::Json {
            message: "expected number".into(),
        };
        assert!(err.to_string().contains("JSON parse error"));
    }
}
