//! Document assembly.
//!
//! Turns rendered layout text into DOCX bytes. The vocabulary is small and
//! fixed by the templates in `render`:
//! - `# Heading` / `## Heading` → form title / section header
//! - `- row` → indented checkbox or table row
//! - `---` → explicit page break (the forms are paginated like the paper
//!   originals)
//! - anything else → plain label/value line

use std::io::Cursor;

use docx_rs::{BreakType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use crate::error::ExportError;

const BODY_FONT: &str = "Arial";
const TITLE_SIZE_PT: usize = 14;
const HEADING_SIZE_PT: usize = 11;

pub fn generate_docx(rendered: &str) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Title", "title", TITLE_SIZE_PT))
        .add_style(heading_style("SectionHeading", "heading 1", HEADING_SIZE_PT));

    for line in rendered.lines() {
        let trimmed = line.trim_end();
        docx = docx.add_paragraph(paragraph_for(trimmed));
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Document(e.to_string()))?;
    Ok(buf.into_inner())
}

fn paragraph_for(line: &str) -> Paragraph {
    if line == "---" {
        return Paragraph::new().add_run(Run::new().add_break(BreakType::Page));
    }
    if let Some(text) = line.strip_prefix("## ") {
        return Paragraph::new()
            .style("SectionHeading")
            .add_run(body_run(text).bold());
    }
    if let Some(text) = line.strip_prefix("# ") {
        return Paragraph::new().style("Title").add_run(body_run(text).bold());
    }
    if let Some(text) = line.strip_prefix("- ") {
        return Paragraph::new()
            .add_run(body_run("\u{2022} "))
            .add_run(body_run(text));
    }
    Paragraph::new().add_run(body_run(line))
}

fn body_run(text: &str) -> Run {
    Run::new()
        .add_text(text)
        .fonts(RunFonts::new().ascii(BODY_FONT))
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    // OOXML sizes are half-points.
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2)
}
