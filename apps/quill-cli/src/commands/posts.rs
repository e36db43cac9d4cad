use quill_core::editor::render_html;
use quill_core::listing::{ListingState, PostListing};

use crate::cli::OutputFormat;
use crate::output;
use crate::state::AppState;

pub async fn list(state: &AppState, format: OutputFormat) -> anyhow::Result<()> {
    let mut listing = PostListing::new();
    if let ListingState::Failed(message) = listing.load(state.api.as_ref()).await {
        anyhow::bail!("{message}");
    }

    if listing.is_empty() && format == OutputFormat::Plain {
        println!("No posts yet. Create your first post with `quill create`.");
        return Ok(());
    }

    if listing.is_placeholder() {
        eprintln!("Backend unavailable, showing the demo post. Run `quill status` for details.");
    }

    let summaries = listing.summaries();
    output::emit(format, &summaries, |s| output::summaries(s))
}

pub async fn show(state: &AppState, id: &str, html: bool, format: OutputFormat) -> anyhow::Result<()> {
    let mut post = state.api.get_post(id).await?;
    if html {
        post.content = render_html(&post.content);
    }
    output::emit(format, &post, output::post)
}
