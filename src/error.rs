use thiserror::Error;

#[derive(Error, Debug)]
pub enum JiraError {
    #[error("Credentials file '{0}' not found.")]
    CredentialsNotFound(String),

    #[error("Failed to load credentials: {0}")]
    ConfigError(String),

    #[error("Jira authentication failed: {0}")]
    AuthError(String),

    #[error("{0} not found.")]
    NotFound(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type JiraResult<T> = Result<T, JiraError>;

pub trait ErrorContext<T> {
    fn with_context<F>(self, f: F) -> JiraResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn with_context<F>(self, f: F) -> JiraResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| JiraError::Unknown(format!("{}: {}", f(), e)))
    }
}

#[macro_export]
macro_rules! jira_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::JiraError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::JiraError::$error_type(format!($fmt, $($arg)*))
    };
}
