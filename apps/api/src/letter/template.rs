//! DOCX placeholder substitution.
//!
//! A DOCX file is a zip archive of XML parts. Placeholders are written in
//! the template as `{{key}}`, and each one must sit inside a single text
//! run: Word splits a token typed with mixed formatting across runs, and
//! such a token is left untouched.

use std::collections::BTreeMap;
use std::io::{Cursor, Read, Write};
use std::path::Path;

use quick_xml::escape::escape;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::errors::AppError;

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// A letter template held in memory.
#[derive(Debug, Clone)]
pub struct DocxTemplate {
    bytes: Vec<u8>,
}

impl DocxTemplate {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        match std::fs::read(path) {
            Ok(bytes) => Ok(Self::from_bytes(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(AppError::TemplateMissing(path.display().to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Returns a copy of the template with every `{{key}}` in the document
    /// body, headers and footers replaced by the XML-escaped value.
    /// Unknown placeholders are kept as written.
    pub fn render(&self, fields: &BTreeMap<&str, String>) -> Result<Vec<u8>, AppError> {
        let mut archive = ZipArchive::new(Cursor::new(self.bytes.as_slice()))?;
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for i in 0..archive.len() {
            let mut entry = archive.by_index(i)?;
            let name = entry.name().to_string();

            if entry.is_dir() {
                writer.add_directory(name, options)?;
                continue;
            }

            let mut content = Vec::new();
            entry.read_to_end(&mut content)?;

            if is_text_part(&name) {
                let xml = String::from_utf8(content)
                    .map_err(|e| AppError::Storage(format!("{name} is not UTF-8: {e}")))?;
                content = fill_placeholders(&xml, fields).into_bytes();
            }

            writer.start_file(name, options)?;
            writer.write_all(&content)?;
        }

        Ok(writer.finish()?.into_inner())
    }
}

fn is_text_part(name: &str) -> bool {
    name == "word/document.xml"
        || ((name.starts_with("word/header") || name.starts_with("word/footer"))
            && name.ends_with(".xml"))
}

/// Single left-to-right pass: substituted values are never rescanned, so a
/// value containing `{{...}}` lands in the output literally.
fn fill_placeholders(xml: &str, fields: &BTreeMap<&str, String>) -> String {
    let mut out = String::with_capacity(xml.len());
    let mut rest = xml;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];

        let Some(close) = after.find("}}") else {
            rest = &rest[open..];
            break;
        };

        match fields.get(&after[..close]) {
            Some(value) => {
                out.push_str(&escape(value.as_str()));
                rest = &after[close + 2..];
            }
            None => {
                out.push_str("{{");
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
