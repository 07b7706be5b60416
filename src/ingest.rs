//! File ingestion
//!
//! Turns an uploaded file into plain text before any analysis runs.
//! Format is decided by extension; unsupported extensions and extraction
//! failures surface as typed errors rather than sentinel strings.

use std::fs;
use std::path::Path;

use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

use crate::error::{Error, Result};

/// Input formats the ingestion boundary accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    PlainText,
    Pdf,
    Docx,
}

impl SourceFormat {
    /// Decide the format from a file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "txt" | "text" | "md" => Ok(SourceFormat::PlainText),
            "pdf" => Ok(SourceFormat::Pdf),
            "docx" => Ok(SourceFormat::Docx),
            _ => Err(Error::UnsupportedFormat { extension }),
        }
    }
}

/// Read a document file and return its plain-text content.
pub fn extract_text(path: &Path) -> Result<String> {
    let format = SourceFormat::from_path(path)?;
    log::info!("ingesting {} as {:?}", path.display(), format);
    match format {
        SourceFormat::PlainText => Ok(fs::read_to_string(path)?),
        SourceFormat::Pdf => {
            pdf_extract::extract_text(path).map_err(|e| Error::PdfExtraction(e.to_string()))
        }
        SourceFormat::Docx => extract_docx_text(path),
    }
}

/// Walk the docx tree and join paragraph texts with newlines.
///
/// Runs inside one paragraph concatenate with no separator; they are
/// fragments of the same sentence split by formatting.
fn extract_docx_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    let docx = read_docx(&bytes).map_err(|e| Error::DocxParse(format!("{e:?}")))?;

    let mut paragraphs: Vec<String> = Vec::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            let mut parts: Vec<&str> = Vec::new();
            for para_child in &paragraph.children {
                if let ParagraphChild::Run(run) = para_child {
                    for run_child in &run.children {
                        if let RunChild::Text(text) = run_child {
                            parts.push(&text.text);
                        }
                    }
                }
            }
            let paragraph_text = parts.concat();
            if !paragraph_text.trim().is_empty() {
                paragraphs.push(paragraph_text);
            }
        }
    }

    Ok(paragraphs.join("\n"))
}
