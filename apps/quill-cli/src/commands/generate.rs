use std::io::IsTerminal;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::Serialize;

use quill_core::DomainError;
use quill_core::assistant::{ActivityIndicator, Assistant, SUGGESTED_PROMPTS};
use quill_core::ports::BlogApi;

use crate::cli::OutputFormat;
use crate::output;
use crate::state::AppState;

const SPINNER_INTERVAL: Duration = Duration::from_millis(120);

#[derive(Serialize)]
struct Generated<'a> {
    prompt: &'a str,
    content: &'a str,
}

pub fn list_prompts(format: OutputFormat) -> anyhow::Result<()> {
    output::emit(format, &SUGGESTED_PROMPTS, |prompts| {
        prompts
            .iter()
            .enumerate()
            .map(|(i, prompt)| format!("{:>2}. {prompt}\n", i + 1))
            .collect()
    })
}

pub async fn run(
    state: &AppState,
    prompt: Option<String>,
    suggestion: Option<usize>,
    output_path: Option<&Path>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let mut assistant = Assistant::new();
    match suggestion {
        Some(number) => {
            assistant.select_suggestion(number)?;
        }
        None => assistant.set_prompt(prompt.unwrap_or_default()),
    }
    let prompt = assistant.prompt().to_string();
    let content = generate_with_progress(state.api.as_ref(), &mut assistant, None).await?;

    if let Some(path) = output_path {
        std::fs::write(path, &content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        eprintln!("Wrote {} bytes to {}", content.len(), path.display());
        return Ok(());
    }

    let generated = Generated {
        prompt: &prompt,
        content: &content,
    };
    output::emit(format, &generated, |g| format!("{}\n", g.content))
}

/// Drive one assistant round trip, animating a spinner on stderr while it is pending.
pub async fn generate_with_progress(
    api: &dyn BlogApi,
    assistant: &mut Assistant,
    custom: Option<&str>,
) -> Result<String, DomainError> {
    let prompt = assistant.begin(custom)?;
    let show_progress = std::io::stderr().is_terminal();

    let mut indicator = ActivityIndicator::start();
    let mut ticker = tokio::time::interval(SPINNER_INTERVAL);
    let request = api.generate_content(&prompt);
    tokio::pin!(request);

    let result = loop {
        tokio::select! {
            result = &mut request => break result,
            _ = ticker.tick() => {
                if show_progress {
                    eprint!("\r{}", indicator.tick());
                }
            }
        }
    };
    if show_progress {
        eprint!("\r\x1b[2K");
    }

    tracing::debug!(elapsed_ms = indicator.elapsed().as_millis() as u64, "Generation settled");
    assistant.settle(result)
}
