//! Subcommand implementations.

mod analyze;
mod create;
mod generate;
mod posts;
mod preview;
mod status;

use std::io::Read;
use std::path::Path;

use anyhow::Context;

use crate::cli::{Command, OutputFormat};
use crate::state::AppState;

/// Run one subcommand.
pub async fn dispatch(command: Command, state: &AppState, format: OutputFormat) -> anyhow::Result<()> {
    match command {
        Command::Analyze(args) => analyze::run(args, format),
        Command::Preview { file, source } => preview::run(&file, source),
        Command::Prompts => generate::list_prompts(format),
        Command::Generate {
            prompt,
            suggestion,
            output,
        } => generate::run(state, prompt, suggestion, output.as_deref(), format).await,
        Command::Create(args) => create::run(state, args, format).await,
        Command::Posts => posts::list(state, format).await,
        Command::Show { id, html } => posts::show(state, &id, html, format).await,
        Command::Status => status::run(state, format).await,
    }
}

/// Read a file, or stdin when the path is `-`.
pub(crate) fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
