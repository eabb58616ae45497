use docx_rs::{DocumentChild, ParagraphChild, RunChild, TableCellContent, TableChild, TableRowChild};

use super::{ExtractError, ExtractResult};

/// Paragraph text, one paragraph per line; table rows become `a | b` lines.
pub(super) fn extract_text(content: &[u8]) -> ExtractResult<String> {
    let docx = docx_rs::read_docx(content)
        .map_err(|e| ExtractError::Docx(format!("Failed to parse DOCX: {}", e)))?;

    let mut lines: Vec<String> = Vec::new();

    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(p) => lines.push(paragraph_text(p)),
            DocumentChild::Table(t) => lines.extend(table_lines(t)),
            _ => {}
        }
    }

    Ok(lines.join("\n"))
}

fn paragraph_text(p: &docx_rs::Paragraph) -> String {
    let mut text = String::new();

    for child in &p.children {
        match child {
            ParagraphChild::Run(r) => push_run(&mut text, r),
            ParagraphChild::Hyperlink(h) => {
                for child in &h.children {
                    if let ParagraphChild::Run(r) = child {
                        push_run(&mut text, r);
                    }
                }
            }
            _ => {}
        }
    }

    text
}

fn push_run(text: &mut String, run: &docx_rs::Run) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }
}

fn table_lines(t: &docx_rs::Table) -> Vec<String> {
    let mut lines = Vec::new();

    for row in &t.rows {
        let TableChild::TableRow(r) = row;
        let cells: Vec<String> = r
            .cells
            .iter()
            .map(|cell| {
                let TableRowChild::TableCell(c) = cell;
                c.children
                    .iter()
                    .filter_map(|content| match content {
                        TableCellContent::Paragraph(p) => Some(paragraph_text(p)),
                        _ => None,
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
                    .trim()
                    .to_string()
            })
            .collect();
        lines.push(cells.join(" | "));
    }

    lines
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use docx_rs::{Docx, Paragraph, Run};

    use super::*;

    fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for text in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
        }

        let mut buf = Cursor::new(Vec::new());
        docx.build().pack(&mut buf).unwrap();
        buf.into_inner()
    }

    #[test]
    fn paragraphs_become_lines() {
        let bytes = build_docx(&["Course Name: Databases", "Instructor: Codd"]);
        let text = extract_text(&bytes).unwrap();
        assert!(text.contains("Course Name: Databases\nInstructor: Codd"));
    }

    #[test]
    fn corrupt_archive_is_an_error() {
        let result = extract_text(b"PK\x03\x04 truncated");
        assert!(matches!(result, Err(ExtractError::Docx(_))));
    }
}
