//! Error enum
use std::fmt;

use crate::split::Split;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Custom(String),
    /// Document does not have the shape the segmenter expects.
    DocumentFormat(String),
    /// Gold and OCR sequences do not have the same length.
    Misaligned { gold: usize, ocr: usize },
    /// No sentence pair could be extracted from a split.
    EmptySplit(Split),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Serde(e) => write!(f, "json error: {}", e),
            Error::Custom(s) => write!(f, "{}", s),
            Error::DocumentFormat(s) => write!(f, "malformed document: {}", s),
            Error::Misaligned { gold, ocr } => write!(
                f,
                "misaligned sequences: {} gold vs {} ocr elements",
                gold, ocr
            ),
            Error::EmptySplit(split) => write!(f, "no sentence pairs in {} split", split),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}
