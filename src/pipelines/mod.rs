//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait,
//! and [OpenNmt], the conversion of a gold/OCR corpus into OpenNMT files.
pub mod opennmt;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use opennmt::{OpenNmt, SplitReport};
pub use pipeline::Pipeline;
