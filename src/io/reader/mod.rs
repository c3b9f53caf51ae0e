/*! Document collection reading

Collections are JSON arrays of documents, compressed with gzip.
!*/
mod docreader;

pub use docreader::{load_documents, DocReader};
