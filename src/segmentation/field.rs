//! Segmenter reading gold and OCR texts from named document fields.
use super::{Document, Granularity, OcrSource, Segmenter};
use crate::error::Error;
use crate::processing::Aligned;

/// Reads gold text from one field and OCR text from another, chosen by [OcrSource].
///
/// Sentences are lines, tokens are whitespace separated words.
/// Both sides have to yield the same number of units.
#[derive(Debug, Clone)]
pub struct FieldSegmenter {
    gold_field: String,
    ocr_field: String,
    tesseract_field: String,
}

impl Default for FieldSegmenter {
    /// Uses the `gold`, `ocr` and `tesseract` fields.
    fn default() -> Self {
        Self {
            gold_field: "gold".to_string(),
            ocr_field: "ocr".to_string(),
            tesseract_field: "tesseract".to_string(),
        }
    }
}

impl FieldSegmenter {
    pub fn with_gold_field(mut self, field: &str) -> Self {
        self.gold_field = field.to_string();
        self
    }

    pub fn with_ocr_field(mut self, field: &str) -> Self {
        self.ocr_field = field.to_string();
        self
    }

    pub fn with_tesseract_field(mut self, field: &str) -> Self {
        self.tesseract_field = field.to_string();
        self
    }

    fn ocr_field(&self, source: OcrSource) -> &str {
        match source {
            OcrSource::Digital => &self.ocr_field,
            OcrSource::Tesseract => &self.tesseract_field,
        }
    }

    fn text<'a>(document: &'a Document, field: &str) -> Result<&'a str, Error> {
        let object = document
            .as_object()
            .ok_or_else(|| Error::DocumentFormat("document is not a JSON object".to_string()))?;
        object
            .get(field)
            .ok_or_else(|| Error::DocumentFormat(format!("missing field {:?}", field)))?
            .as_str()
            .ok_or_else(|| Error::DocumentFormat(format!("field {:?} is not a string", field)))
    }

    fn units(text: &str, granularity: Granularity) -> Vec<String> {
        match granularity {
            Granularity::Sentence => text.lines().map(String::from).collect(),
            Granularity::Token => text.split_whitespace().map(String::from).collect(),
        }
    }
}

impl Segmenter for FieldSegmenter {
    fn segment(
        &self,
        document: &Document,
        granularity: Granularity,
        source: OcrSource,
    ) -> Result<Aligned, Error> {
        let gold = Self::text(document, &self.gold_field)?;
        let ocr = Self::text(document, self.ocr_field(source))?;
        Aligned::new(
            Self::units(gold, granularity),
            Self::units(ocr, granularity),
        )
    }
}
