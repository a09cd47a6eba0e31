use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::services::file_writer::{ensure_written, WriteReport};
use crate::services::git;
use crate::templates;
use crate::utils::error::{Result, ScaffoldError};
use crate::utils::validation::validate_project_name;

/// Scaffold a new web project
#[derive(Debug)]
pub struct NewCommand {
    /// Name of the project folder to create
    pub name: String,

    /// Base directory to scaffold under (default: current directory)
    pub dir: Option<PathBuf>,

    /// Output JSON instead of human-readable text
    pub json: bool,
}

/// JSON response format for a scaffold run
#[derive(Debug, Serialize, Deserialize)]
pub struct NewResponse {
    pub status: String,
    pub project_name: String,
    pub project_path: String,
    pub generated: Vec<String>,
    pub failed: Vec<String>,
}

impl NewCommand {
    /// Execute the scaffold: templates, file writes, then repository init.
    ///
    /// Each step is awaited before the next; file writes are best-effort and
    /// never abort the run, the git init is fatal on failure.
    pub async fn run(&self) -> Result<()> {
        validate_project_name(&self.name)?;

        let base = match &self.dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().map_err(ScaffoldError::IoError)?,
        };

        if !self.json {
            println!("🤠 Howdy! We're making your project now!");
        }

        let files = [
            (
                format!("{}/styles/main.css", self.name),
                templates::stylesheet().to_string(),
            ),
            (
                format!("{}/src/index.js", self.name),
                templates::script(&self.name),
            ),
            (
                format!("{}/index.html", self.name),
                templates::markup(&self.name),
            ),
        ];

        let mut reports = Vec::new();
        for (rel_path, content) in &files {
            let report = ensure_written(&base, rel_path, content).await;
            // In --json mode stdout carries only the JSON summary
            if !self.json && report.ok() {
                println!("📄 Generated {}", report.path);
            }
            reports.push(report);
        }

        let failed: Vec<&WriteReport> = reports.iter().filter(|report| !report.ok()).collect();
        for report in &failed {
            eprintln!("⚠️ Could not write {}", report.path);
        }

        let project_dir = base.join(&self.name);
        git::init_repository(&project_dir).await?;

        if self.json {
            let response = NewResponse {
                status: if failed.is_empty() {
                    "success".to_string()
                } else {
                    "partial".to_string()
                },
                project_name: self.name.clone(),
                project_path: project_dir.display().to_string(),
                generated: reports
                    .iter()
                    .filter(|report| report.ok())
                    .map(|report| report.path.clone())
                    .collect(),
                failed: failed.iter().map(|report| report.path.clone()).collect(),
            };

            let json_output = serde_json::to_string_pretty(&response).map_err(|err| {
                ScaffoldError::ValidationError(format!(
                    "Failed to serialize JSON response: {}",
                    err
                ))
            })?;

            println!("{}", json_output);
        } else {
            println!("🐙 Initialized new git repository");
            println!("🤠 Done!");
        }

        Ok(())
    }
}
