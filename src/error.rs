// Error handling for the dev tools

use std::fmt;

/// Exit code for a clean run
pub const EXIT_OK: u8 = 0;
/// Exit code when something failed after validation passed
pub const EXIT_FAILURE: u8 = 1;
/// Exit code for argument or pre-flight validation failures
pub const EXIT_USAGE: u8 = 2;

/// Application error type
#[derive(Debug)]
pub enum AppError {
    Usage(String),
    Preflight(String),
    Database(String),
}

impl AppError {
    /// Process exit code an operator sees for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Usage(_) | AppError::Preflight(_) => EXIT_USAGE,
            AppError::Database(_) => EXIT_FAILURE,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Usage(msg) => write!(f, "{}", msg),
            AppError::Preflight(msg) => write!(f, "{}", msg),
            AppError::Database(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// Extension trait for database result handling
pub trait DbResultExt<T> {
    /// Convert database errors to AppError::Database with "Database error: " prefix
    fn db_err(self) -> Result<T, AppError>;
}

impl<T, E: fmt::Display> DbResultExt<T> for Result<T, E> {
    fn db_err(self) -> Result<T, AppError> {
        self.map_err(|e| AppError::Database(format!("Database error: {:#}", e)))
    }
}
