// Best-effort file materialization

use std::path::Path;

/// Outcome of a single `ensure_written` call.
///
/// Write failures are captured here instead of being propagated; callers
/// decide whether a partial scaffold is acceptable.
#[derive(Debug)]
pub struct WriteReport {
    pub path: String,
    pub error: Option<std::io::Error>,
}

impl WriteReport {
    pub fn ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Create every parent directory of `rel_path` under `base`, then write the
/// trimmed content to the file, overwriting any existing file.
///
/// Directory creation walks the path prefixes shortest-first so each level
/// exists before the next is attempted. Failures along the way are logged and
/// skipped; the write itself is still attempted and its outcome captured in
/// the returned report. Progress reporting is left to the caller so stdout
/// stays clean for machine-readable output modes.
pub async fn ensure_written(base: &Path, rel_path: &str, content: &str) -> WriteReport {
    // make folders based on file path
    let segments: Vec<&str> = rel_path.split('/').collect();
    let folders = &segments[..segments.len() - 1];
    for i in 0..folders.len() {
        let prefix = folders[..=i].join("/");
        create_folder(&base.join(prefix));
    }

    // make file
    let full_path = base.join(rel_path);
    match tokio::fs::write(&full_path, content.trim()).await {
        Ok(()) => WriteReport {
            path: rel_path.to_string(),
            error: None,
        },
        Err(err) => {
            eprintln!("Failed to write {}: {}", rel_path, err);
            WriteReport {
                path: rel_path.to_string(),
                error: Some(err),
            }
        }
    }
}

fn create_folder(dir: &Path) {
    if !dir.exists() {
        if let Err(err) = std::fs::create_dir(dir) {
            eprintln!("Failed to create {}: {}", dir.display(), err);
        }
    }
}
