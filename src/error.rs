/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Generation error: {0}")]
    Generation(String),
}

impl AppError {
    /// True for failures talking to either external service over the wire,
    /// as opposed to generation-layer failures or bad caller input.
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::HttpClient(_) | AppError::ExternalApi(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_api_is_transport() {
        let err = AppError::ExternalApi("status 500".to_string());
        assert!(err.is_transport());
    }

    #[test]
    fn test_generation_is_not_transport() {
        let err = AppError::Generation("no candidates".to_string());
        assert!(!err.is_transport());
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Generation("empty response".to_string());
        assert_eq!(err.to_string(), "Generation error: empty response");
    }
}
