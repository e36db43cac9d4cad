//! Markdown editor model: one text buffer shown either as source or as a
//! rendered preview.

use pulldown_cmark::{Options, Parser, html};
use serde::Serialize;

pub const PLACEHOLDER: &str = "# Welcome to your new blog post!

Start writing your content here using markdown...

## Features you can use:
- **Bold text** with **
- *Italic text* with *
- Lists with - or 1.
- [Links](http://example.com)
- `inline code`
- And much more!";

pub const EMPTY_PREVIEW: &str = "Nothing to preview yet. Start writing in the editor!";

pub const QUICK_TIPS: &str =
    "Quick tips: Use # for headings, **text** for bold, *text* for italic";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    #[default]
    Edit,
    Preview,
}

/// What the editor currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorView<'a> {
    /// Raw markdown; empty content shows the placeholder.
    Source(&'a str),
    /// Rendered HTML of the content.
    Preview(String),
    /// Preview mode with nothing to render.
    EmptyPreview,
}

#[derive(Debug, Clone, Default)]
pub struct MarkdownEditor {
    content: String,
    mode: EditorMode,
}

impl MarkdownEditor {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            mode: EditorMode::Edit,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn edit(&mut self) {
        self.mode = EditorMode::Edit;
    }

    pub fn preview(&mut self) {
        self.mode = EditorMode::Preview;
    }

    pub fn toggle(&mut self) {
        self.mode = match self.mode {
            EditorMode::Edit => EditorMode::Preview,
            EditorMode::Preview => EditorMode::Edit,
        };
    }

    /// Status line shown next to the mode switch.
    pub fn hint(&self) -> &'static str {
        match self.mode {
            EditorMode::Edit => "Markdown supported",
            EditorMode::Preview => "Live preview",
        }
    }

    pub fn view(&self) -> EditorView<'_> {
        match self.mode {
            EditorMode::Edit if self.content.is_empty() => EditorView::Source(PLACEHOLDER),
            EditorMode::Edit => EditorView::Source(&self.content),
            EditorMode::Preview if self.content.is_empty() => EditorView::EmptyPreview,
            EditorMode::Preview => EditorView::Preview(render_html(&self.content)),
        }
    }
}

/// Render GitHub-flavored markdown to HTML.
pub fn render_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(markdown, options);

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
