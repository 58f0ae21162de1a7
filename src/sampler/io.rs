use std::fs;
use std::path::Path;

use super::error::SelectError;

/// The delimited formats a name file may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Csv,
    Tsv,
}

impl FileKind {
    pub fn delimiter(self) -> u8 {
        match self {
            FileKind::Csv => b',',
            FileKind::Tsv => b'\t',
        }
    }
}

/// Classify a file name by the text after its last `.`, ignoring case. A name without a dot is
/// classified by the whole name.
pub fn classify_extension(filename: &str) -> Option<FileKind> {
    let ext = match filename.rsplit_once('.') {
        Some((_, ext)) => ext,
        None => filename,
    }
    .to_lowercase();

    match ext.as_str() {
        "csv" => Some(FileKind::Csv),
        "tsv" => Some(FileKind::Tsv),
        _ => None,
    }
}

/// Read a whole file as text. Invalid UTF-8 is replaced rather than rejected.
pub fn read_text(file_path: &Path) -> Result<String, SelectError> {
    let bytes = fs::read(file_path).map_err(|_| SelectError::ReadFailure)?;
    Ok(decode_text(bytes))
}

pub fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}
