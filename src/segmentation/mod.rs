/*! Document segmentation

A [Segmenter] maps a single [Document] to an [Aligned] couple of gold/OCR sequences.
The document layout is entirely owned by the segmenter, the rest of the crate only sees [Aligned] values.

[FieldSegmenter] is the segmenter used by the command line tool.
!*/
mod field;

pub use field::FieldSegmenter;

use crate::error::Error;
use crate::processing::Aligned;

/// Opaque JSON document.
pub type Document = serde_json::Value;

/// Unit of the produced pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    #[default]
    Sentence,
    Token,
}

/// Where the OCR side of a document comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OcrSource {
    /// OCR text shipped with the corpus.
    #[default]
    Digital,
    /// Output of the Tesseract engine.
    Tesseract,
}

pub trait Segmenter {
    /// Split `document` into index-aligned gold/OCR units.
    fn segment(
        &self,
        document: &Document,
        granularity: Granularity,
        source: OcrSource,
    ) -> Result<Aligned, Error>;
}
