use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingEnv(Vec<&'static str>),

    #[error("API request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("malformed API response: {0}")]
    MalformedResponse(&'static str),
}

pub type Result<T> = std::result::Result<T, BotError>;
