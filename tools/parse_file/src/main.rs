use std::path::Path;

use syllabus_parser::extract::{DOCX_MIME, DocumentExtractor, PDF_MIME, TEXT_MIME, TextExtractor};
use syllabus_parser::parser::{parse, validate_record};

fn is_compact() -> bool {
    std::env::args().any(|a| a == "--compact")
}

fn content_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "pdf" => Some(PDF_MIME),
        "docx" => Some(DOCX_MIME),
        "txt" | "text" | "md" => Some(TEXT_MIME),
        _ => None,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let paths: Vec<String> = std::env::args()
        .skip(1)
        .filter(|a| !a.starts_with("--"))
        .collect();

    if paths.is_empty() {
        eprintln!("usage: parse_file [--compact] <syllabus.pdf|.docx|.txt>...");
        std::process::exit(2);
    }

    let extractor = DocumentExtractor::new();
    let compact = is_compact();

    for path in &paths {
        let path = Path::new(path);
        let Some(content_type) = content_type_for(path) else {
            eprintln!("Skipping {}: unsupported extension", path.display());
            continue;
        };

        let content = std::fs::read(path)?;
        let text = extractor.extract(&content, content_type).await?;

        if text.trim().is_empty() {
            eprintln!("Skipping {}: extracted text is empty", path.display());
            continue;
        }

        let record = parse(&text);
        if !validate_record(&record) {
            eprintln!("Skipping {}: invalid syllabus structure", path.display());
            continue;
        }

        let json = if compact {
            serde_json::to_string(&record)?
        } else {
            serde_json::to_string_pretty(&record)?
        };
        println!("{}", json);
    }

    Ok(())
}
