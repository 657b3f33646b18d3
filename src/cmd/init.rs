use crate::cli::context::{timeq_context_file_path, timeq_home_dir, CONTEXT_DEFAULT_TEXT};
use crate::cli::file_utils::FileUtils;
use crate::tui::confirmation;
use clap::Args;

/// Initializes a local environment. Creates a sample context file.
#[derive(Args)]
pub struct InitCommand {}

pub fn execute() -> Result<(), anyhow::Error> {
    FileUtils::create_dir("home directory".to_string(), timeq_home_dir())?;

    FileUtils::create_file(
        "context".to_string(),
        timeq_context_file_path(),
        CONTEXT_DEFAULT_TEXT.to_string(),
        false,
    )?;

    confirmation("timeq initialized successfully!");

    Ok(())
}
