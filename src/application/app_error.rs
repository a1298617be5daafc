use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Server configuration error")]
    Configuration,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("This email is already on our waitlist")]
    AlreadyRegistered,

    #[error("Failed to send email")]
    EmailProvider {
        /// Diagnostic body returned by the provider, when it answered at all.
        details: Option<serde_json::Value>,
    },

    #[error("Database error: {0}")]
    Database(String),
}

pub type AppResult<T> = Result<T, AppError>;
