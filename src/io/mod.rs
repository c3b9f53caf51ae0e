/*!
# IO utilities

Loading of gzipped JSON document collections and writing of OpenNMT text files.
!*/
pub mod reader;
pub mod writer;

pub use reader::load_documents;
pub use writer::{OpenNmtWriter, WriterTrait};
