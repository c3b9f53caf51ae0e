//! Gzipped JSON array reader.
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use log::debug;

use crate::error::Error;
use crate::segmentation::Document;

/// Decodes a gzip stream holding a JSON array of documents.
#[derive(Debug)]
pub struct DocReader<T>
where
    T: Read,
{
    inner: BufReader<MultiGzDecoder<BufReader<T>>>,
}

impl DocReader<File> {
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let f = File::open(src)?;
        Ok(Self::new(f))
    }
}

impl<T> DocReader<T>
where
    T: Read,
{
    pub fn new(inner: T) -> Self {
        let gzd = MultiGzDecoder::new(BufReader::new(inner));
        Self {
            inner: BufReader::new(gzd),
        }
    }

    /// Decompress and parse the whole array.
    pub fn read_all(self) -> Result<Vec<Document>, Error> {
        Ok(serde_json::from_reader(self.inner)?)
    }
}

/// Load every document of the gzipped JSON array at `src`.
pub fn load_documents(src: &Path) -> Result<Vec<Document>, Error> {
    let documents = DocReader::from_path(src)?.read_all()?;
    debug!("loaded {} documents from {:?}", documents.len(), src);
    Ok(documents)
}
