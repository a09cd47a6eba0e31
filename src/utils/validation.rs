// Common validation utilities for webgen

use crate::utils::error::{Result, ScaffoldError};

/// Validate a project name before any filesystem work happens.
///
/// The name becomes both the project folder and literal text inside the
/// generated files, so anything that would escape the target directory is
/// rejected rather than sanitized.
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ScaffoldError::ValidationError(
            "Project name cannot be empty.\n\nProvide a name:\n  webgen my-app".to_string(),
        ));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(ScaffoldError::ValidationError(format!(
            "Invalid project name '{}' - cannot contain path separators.\n\nValid project names:\n  ✓ my-app\n  ✓ myApp\n  ✗ apps/site",
            name
        )));
    }

    if name == "." || name == ".." {
        return Err(ScaffoldError::ValidationError(format!(
            "Invalid project name '{}' - cannot refer to the current or parent directory.",
            name
        )));
    }

    Ok(())
}
