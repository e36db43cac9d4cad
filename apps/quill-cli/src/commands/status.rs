use quill_core::status::SystemStatus;

use crate::cli::OutputFormat;
use crate::output;
use crate::state::AppState;

/// Print the status board. An offline backend is a result, not an error.
pub async fn run(state: &AppState, format: OutputFormat) -> anyhow::Result<()> {
    let status = SystemStatus::check(state.api.as_ref()).await;
    output::emit(format, &status, output::system_status)
}
