/*! Sentence pair processing

Aggregation of segmented documents, optional subsampling and character-level formatting.
!*/
pub mod aggregate;
mod aligned;
pub mod format;
pub mod subsample;

pub use aggregate::aggregate;
pub use aligned::Aligned;
pub use format::format_line;
pub use subsample::subsample;
