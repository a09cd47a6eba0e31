// Common error types for webgen

use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ScaffoldError {
    IoError(std::io::Error),
    ValidationError(String),
    GitError(String),
}

impl fmt::Display for ScaffoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaffoldError::IoError(err) => write!(f, "IO error: {}", err),
            ScaffoldError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            ScaffoldError::GitError(msg) => write!(f, "Git error: {}", msg),
        }
    }
}

impl Error for ScaffoldError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ScaffoldError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ScaffoldError {
    fn from(err: std::io::Error) -> Self {
        ScaffoldError::IoError(err)
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// User-facing rendering of a failed run, with the exit code to terminate with
#[derive(Debug)]
pub struct UserError {
    pub message: String,
    pub exit_code: i32,
}

impl UserError {
    pub fn from_scaffold_error(err: &ScaffoldError) -> Self {
        let exit_code = match err {
            ScaffoldError::ValidationError(_) => 2,
            _ => 1,
        };

        UserError {
            message: err.to_string(),
            exit_code,
        }
    }

    pub fn print(&self) {
        eprintln!("{}", self.message);
    }
}
