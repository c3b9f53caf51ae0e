use std::path::Path;

use crate::error::Error;
use crate::split::Split;

pub trait WriterTrait {
    type Item;

    fn new(dst: &Path, split: Split) -> Result<Self, Error>
    where
        Self: Sized;
    fn write(&mut self, vals: Vec<Self::Item>) -> Result<(), Error>;
    fn flush(&mut self) -> Result<(), Error>;
}
