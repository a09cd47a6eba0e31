// Webgen - minimal web project scaffolder
// Core library functionality

pub mod cli;
pub mod services;
pub mod templates;
pub mod utils;

// Re-export commonly used types
pub use services::file_writer::WriteReport;
pub use utils::error::{Result, ScaffoldError};
