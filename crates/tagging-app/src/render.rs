//! Plain-text rendering of the widget view.

use std::io::{self, Write};
use tagging_core::{TagStyle, TagView, WidgetView};

fn tag_text(tag: &TagView) -> String {
    let mark = match tag.style {
        TagStyle::Neutral => "",
        TagStyle::Correct => " ✓",
        TagStyle::Incorrect => " ✗",
    };
    if tag.id.as_str() == tag.label {
        format!("[{}{}]", tag.label, mark)
    } else {
        format!("[{} ({}){}]", tag.label, tag.id, mark)
    }
}

fn tag_row(tags: &[TagView]) -> String {
    if tags.is_empty() {
        "(empty)".to_string()
    } else {
        tags.iter().map(tag_text).collect::<Vec<_>>().join(" ")
    }
}

/// Write the view to `out`.
pub fn render_view(view: &WidgetView, out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Image:    {}", view.image)?;
    writeln!(out, "Question: {}", view.question)?;

    if let Some(notice) = view.notice {
        writeln!(out, "{notice}")?;
        return Ok(());
    }

    writeln!(out, "Tags:     {}", tag_row(&view.pool))?;
    let locked = if view.check_enabled { "" } else { " (locked)" };
    writeln!(out, "Answer{locked}: {}", tag_row(&view.answer_area))?;

    for line in &view.feedback {
        writeln!(out, "  - {line}")?;
    }
    if view.all_correct {
        writeln!(out, "All placed tags are correct!")?;
    }
    Ok(())
}
