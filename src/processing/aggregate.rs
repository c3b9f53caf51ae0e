//! Corpus-level aggregation of per-document pairs.
use log::debug;

use super::Aligned;
use crate::error::Error;
use crate::segmentation::{Document, Granularity, OcrSource, Segmenter};

/// Segment every document and concatenate the results, keeping document order.
pub fn aggregate<S: Segmenter + ?Sized>(
    segmenter: &S,
    documents: &[Document],
    granularity: Granularity,
    source: OcrSource,
) -> Result<Aligned, Error> {
    let mut pairs = Aligned::default();
    for (idx, document) in documents.iter().enumerate() {
        let doc_pairs = segmenter.segment(document, granularity, source)?;
        debug!("document {}: {} pairs", idx, doc_pairs.len());
        pairs.extend(doc_pairs);
    }
    Ok(pairs)
}
