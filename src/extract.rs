//! Multi-format text decoding for resume files (PDF, DOCX, plain text).
//!
//! Decoding is collaborator-layer: the screening core consumes plain Unicode
//! text and never touches file formats itself. Dispatch is by file extension;
//! anything else is an `Unsupported` error that the ingest loop reports
//! per-file without aborting the batch.

use std::io::Read;
use std::path::Path;

/// Maximum decompressed bytes to read from a single ZIP entry (zip-bomb protection).
const MAX_XML_ENTRY_BYTES: u64 = 50 * 1024 * 1024;

/// Decoding error. Never panics; the ingest loop reports and skips the file.
#[derive(Debug)]
pub enum ExtractError {
    Unsupported(String),
    Pdf(String),
    Docx(String),
    Io(String),
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractError::Unsupported(ext) => {
                write!(f, "unsupported file format: {}", ext)
            }
            ExtractError::Pdf(e) => write!(f, "PDF decoding failed: {}", e),
            ExtractError::Docx(e) => write!(f, "DOCX decoding failed: {}", e),
            ExtractError::Io(e) => write!(f, "read failed: {}", e),
        }
    }
}

impl std::error::Error for ExtractError {}

/// Whether `decode` knows how to handle this path, judged by extension.
pub fn is_supported(path: &Path) -> bool {
    matches!(
        extension_of(path).as_deref(),
        Some("pdf") | Some("docx") | Some("doc") | Some("txt")
    )
}

/// Decodes a resume file into plain text, dispatched by extension.
pub fn decode(path: &Path) -> Result<String, ExtractError> {
    match extension_of(path).as_deref() {
        Some("pdf") => {
            let bytes = read_bytes(path)?;
            decode_pdf(&bytes)
        }
        Some("docx") | Some("doc") => {
            let bytes = read_bytes(path)?;
            decode_docx(&bytes)
        }
        Some("txt") => {
            let bytes = read_bytes(path)?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        other => Err(ExtractError::Unsupported(
            other.map(str::to_string).unwrap_or_else(|| "(none)".into()),
        )),
    }
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, ExtractError> {
    std::fs::read(path).map_err(|e| ExtractError::Io(e.to_string()))
}

fn decode_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
}

fn decode_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes))
        .map_err(|e| ExtractError::Docx(e.to_string()))?;
    let mut doc_xml = Vec::new();
    let mut found = false;
    for i in 0..archive.len() {
        let entry = archive
            .by_index(i)
            .map_err(|e| ExtractError::Docx(e.to_string()))?;
        if entry.name() == "word/document.xml" {
            entry
                .take(MAX_XML_ENTRY_BYTES)
                .read_to_end(&mut doc_xml)
                .map_err(|e| ExtractError::Docx(e.to_string()))?;
            if doc_xml.len() as u64 >= MAX_XML_ENTRY_BYTES {
                return Err(ExtractError::Docx(
                    "word/document.xml exceeds size limit".to_string(),
                ));
            }
            found = true;
            break;
        }
    }
    if !found {
        return Err(ExtractError::Docx(
            "word/document.xml not found".to_string(),
        ));
    }
    extract_w_t_elements(&doc_xml)
}

/// Collects the text runs (`w:t` elements) of a WordprocessingML body.
/// Paragraph boundaries become newlines so the field heuristics can still
/// see line structure.
fn extract_w_t_elements(xml: &[u8]) -> Result<String, ExtractError> {
    let mut out = String::new();
    let mut reader = quick_xml::Reader::from_reader(xml);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(quick_xml::events::Event::Start(e)) => {
                if e.local_name().as_ref() == b"t" {
                    if let Ok(quick_xml::events::Event::Text(te)) = reader.read_event_into(&mut buf)
                    {
                        out.push_str(te.unescape().unwrap_or_default().as_ref());
                    }
                }
            }
            Ok(quick_xml::events::Event::End(e)) => {
                if e.local_name().as_ref() == b"p" && !out.ends_with('\n') {
                    out.push('\n');
                }
            }
            Ok(quick_xml::events::Event::Eof) => break,
            Err(e) => return Err(ExtractError::Docx(e.to_string())),
            _ => {}
        }
        buf.clear();
    }
    Ok(out)
}
