use std::path::Path;

use quill_core::editor::{EMPTY_PREVIEW, EditorMode, EditorView, MarkdownEditor, QUICK_TIPS};

use super::read_input;

pub fn run(file: &Path, source: bool) -> anyhow::Result<()> {
    let mut editor = MarkdownEditor::new(read_input(file)?);
    if !source {
        editor.preview();
    }

    match editor.view() {
        EditorView::Source(markdown) => print!("{markdown}"),
        EditorView::Preview(html) => print!("{html}"),
        EditorView::EmptyPreview => eprintln!("{EMPTY_PREVIEW}"),
    }
    eprintln!("{}", editor.hint());
    if editor.mode() == EditorMode::Edit {
        eprintln!("{QUICK_TIPS}");
    }
    Ok(())
}
