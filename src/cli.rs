//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use ocrnmt::pipelines::OpenNmt;
use ocrnmt::segmentation::{Granularity, OcrSource};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
/// Conversion command and parameters.
///
/// ```sh
/// ocrnmt 0.1.0
/// Converts paired gold/OCR document collections into character-level OpenNMT training files.
///
/// USAGE:
///     ocrnmt [FLAGS] [OPTIONS] <in-dir> <out-dir>
///
/// FLAGS:
///         --single_tokens    Split data into single tokens instead of sentences
///         --tesseract        Use tesseract output as the input
///
/// OPTIONS:
///         --max_size <max-size>    Maximum number of examples per data split
///         --seed <seed>            Seed used for subsampling [default: 42]
///
/// ARGS:
///     <in-dir>     source (contains {train,devel,test}.json.gz)
///     <out-dir>    destination of open_nmt_*.txt files
/// ```
#[structopt(
    name = "ocrnmt",
    about = "Converts paired gold/OCR document collections into character-level OpenNMT training files."
)]
pub struct Convert {
    #[structopt(
        parse(from_os_str),
        help = "source (contains {train,devel,test}.json.gz)"
    )]
    pub in_dir: PathBuf,
    #[structopt(parse(from_os_str), help = "destination of open_nmt_*.txt files")]
    pub out_dir: PathBuf,
    #[structopt(
        long = "single_tokens",
        help = "Split data into single tokens instead of sentences"
    )]
    pub single_tokens: bool,
    #[structopt(long = "tesseract", help = "Use tesseract output as the input")]
    pub tesseract: bool,
    #[structopt(long = "max_size", help = "Maximum number of examples per data split")]
    pub max_size: Option<usize>,
    #[structopt(
        long = "seed",
        help = "Seed used for subsampling",
        default_value = "42"
    )]
    pub seed: u64,
}

impl From<Convert> for OpenNmt {
    fn from(c: Convert) -> Self {
        let granularity = if c.single_tokens {
            Granularity::Token
        } else {
            Granularity::Sentence
        };
        let source = if c.tesseract {
            OcrSource::Tesseract
        } else {
            OcrSource::Digital
        };
        OpenNmt::new(c.in_dir, c.out_dir)
            .granularity(granularity)
            .source(source)
            .max_size(c.max_size)
            .seed(c.seed)
    }
}
