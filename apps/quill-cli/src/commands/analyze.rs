use quill_core::form::PostForm;

use crate::cli::{AnalyzeArgs, OutputFormat};
use crate::output;

use super::read_input;

pub fn run(args: AnalyzeArgs, format: OutputFormat) -> anyhow::Result<()> {
    let content = read_input(&args.content)?;

    // The description is set first so the form only derives one when none was given.
    let mut form = PostForm::new();
    form.set_title(args.title);
    if let Some(description) = args.description {
        form.set_meta_description(description);
    }
    form.set_content(content);

    let report = form.seo_report();
    tracing::debug!(score = report.seo_score, words = report.word_count, "SEO analysis complete");
    output::emit(format, &report, output::seo_report)
}
