/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("External API error: {0}")]
    ExternalApi(String),
}

pub type AppResult<T> = Result<T, AppError>;
