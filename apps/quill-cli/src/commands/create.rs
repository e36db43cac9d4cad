use serde::Serialize;

use quill_core::assistant::Assistant;
use quill_core::domain::{Post, PostDraft};
use quill_core::form::PostForm;
use quill_core::seo::SeoReport;

use crate::cli::{CreateArgs, OutputFormat};
use crate::output;
use crate::state::AppState;

use super::generate::generate_with_progress;
use super::read_input;

#[derive(Serialize)]
struct Created {
    post: Post,
    seo: SeoReport,
}

#[derive(Serialize)]
struct DryRun {
    draft: PostDraft,
    seo: SeoReport,
}

/// Fill a form from the arguments. Fields are set in the order a user
/// would type them so the slug and description autofill behaves the same.
fn fill_form(args: &CreateArgs) -> PostForm {
    let mut form = PostForm::new();
    form.set_title(args.title.as_str());
    if let Some(slug) = &args.slug {
        form.set_slug(slug.as_str());
    }
    if let Some(description) = &args.description {
        form.set_meta_description(description.as_str());
    }
    form.set_tags(args.tags.as_str());
    if let Some(author) = &args.author {
        form.set_author(author.as_str());
    }
    form
}

pub async fn run(state: &AppState, args: CreateArgs, format: OutputFormat) -> anyhow::Result<()> {
    let mut form = fill_form(&args);

    if let Some(prompt) = &args.generate {
        let mut assistant = Assistant::new();
        let content =
            generate_with_progress(state.api.as_ref(), &mut assistant, Some(prompt.as_str())).await?;
        form.apply_generated(content);
    } else if let Some(path) = &args.content {
        form.set_content(read_input(path)?);
    }

    let seo = form.seo_report();

    if args.dry_run {
        form.validate()?;
        let dry_run = DryRun {
            draft: form.to_draft(),
            seo,
        };
        return output::emit(format, &dry_run, |d| {
            format!(
                "Draft OK: /{}\n\n{}",
                d.draft.slug,
                output::seo_report(&d.seo)
            )
        });
    }

    let post = form.submit(state.api.as_ref()).await?;
    let created = Created { post, seo };
    output::emit(format, &created, |c| {
        format!(
            "Published \"{}\" as {} (/{})\n\n{}",
            c.post.title,
            c.post.id,
            c.post.slug,
            output::seo_report(&c.seo)
        )
    })
}
