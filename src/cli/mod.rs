// CLI module for command-line interface

pub mod new;

use clap::Parser;
use std::path::PathBuf;

use crate::utils::error::Result;

use self::new::NewCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "webgen")]
#[command(about = "A tiny scaffolder for minimal web projects")]
#[command(long_about = r#"Webgen creates a ready-to-open web project skeleton: a stylesheet, a
starter script, an HTML page wired to both, and a fresh git repository.

Generated layout:
  <name>/styles/main.css    CSS reset plus starter rules
  <name>/src/index.js       Starter script greeting the project
  <name>/index.html         Minimal page linking both assets
  <name>/.git/              Initialized git repository

Examples:
  webgen my-app                 Scaffold ./my-app
  webgen my-app --dir /tmp      Scaffold /tmp/my-app
  webgen my-app --json          Machine-readable result summary"#)]
#[command(version)]
pub struct Cli {
    /// Name of the project folder to create
    pub name: String,

    /// Base directory to scaffold under (default: current directory)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Run the scaffold with the parsed arguments
    pub async fn run(self) -> Result<()> {
        let cmd = NewCommand {
            name: self.name,
            dir: self.dir,
            json: self.json,
        };
        cmd.run().await
    }
}
