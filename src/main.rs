// Webgen - minimal web project scaffolder
// Main CLI entry point

use clap::Parser;
use std::process;
use webgen::cli::Cli;
use webgen::utils::error::UserError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = cli.run().await;

    if let Err(err) = result {
        let user_error = UserError::from_scaffold_error(&err);
        user_error.print();
        process::exit(user_error.exit_code);
    }
}
