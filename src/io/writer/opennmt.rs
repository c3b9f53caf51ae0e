/*! Input/output file couple for a given split.

Lines are formatted with [crate::processing::format_line] and written in the order they are given,
so that line `n` of both files comes from the same pair.
!*/
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;

use super::WriterTrait;
use crate::error::Error;
use crate::processing::format_line;
use crate::split::Split;

/// `(gold, ocr)` couple.
pub type Pair = (String, String);

pub struct OpenNmtWriter {
    split: Split,
    input: BufWriter<File>,
    output: BufWriter<File>,
    input_path: PathBuf,
    output_path: PathBuf,
    nb_lines: usize,
}

impl OpenNmtWriter {
    fn write_pair(&mut self, gold: &str, ocr: &str) -> Result<(), Error> {
        self.input.write_all(format_line(ocr).as_bytes())?;
        self.output.write_all(format_line(gold).as_bytes())?;
        self.nb_lines += 1;
        Ok(())
    }

    /// Number of pairs written so far.
    pub fn nb_lines(&self) -> usize {
        self.nb_lines
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

impl WriterTrait for OpenNmtWriter {
    type Item = Pair;

    /// Create (or truncate) both files of `split` in `dst`.
    ///
    /// `dst` is created if it does not exist yet.
    fn new(dst: &Path, split: Split) -> Result<Self, Error> {
        if !dst.exists() {
            debug!("creating destination folder {:?}", dst);
        }
        std::fs::create_dir_all(dst)?;

        let input_path = split.input_path(dst);
        let output_path = split.output_path(dst);
        debug!("[{}] writing to {:?} and {:?}", split, input_path, output_path);

        Ok(Self {
            split,
            input: BufWriter::new(File::create(&input_path)?),
            output: BufWriter::new(File::create(&output_path)?),
            input_path,
            output_path,
            nb_lines: 0,
        })
    }

    fn write(&mut self, pairs: Vec<Pair>) -> Result<(), Error> {
        for (gold, ocr) in pairs {
            self.write_pair(&gold, &ocr)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.input.flush()?;
        self.output.flush()?;
        debug!("[{}] flushed {} lines", self.split, self.nb_lines);
        Ok(())
    }
}
