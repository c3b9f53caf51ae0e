/*! OpenNMT conversion pipeline

Converts `train`, `devel` and `test` splits, one after the other:

1. documents are loaded from `<src>/<split>.json.gz`,
2. each document is segmented into gold/OCR pairs, which are concatenated,
3. pairs are optionally subsampled using a RNG seeded once per run,
4. pairs are formatted and written to `<dst>/open_nmt_<split>_{input,output}.txt`.
!*/
use std::path::{Path, PathBuf};

use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Error;
use crate::io::{load_documents, OpenNmtWriter, WriterTrait};
use crate::processing::{aggregate, subsample};
use crate::segmentation::{FieldSegmenter, Granularity, OcrSource, Segmenter};
use crate::split::Split;

use super::Pipeline;

pub const DEFAULT_SEED: u64 = 42;

/// Summary of a converted split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitReport {
    pub split: Split,
    /// Pairs extracted from the documents.
    pub nb_read: usize,
    /// Pairs written after subsampling.
    pub nb_written: usize,
    /// Longest gold sentence, in characters.
    pub gold_max_len: usize,
    /// Longest OCR sentence, in characters.
    pub ocr_max_len: usize,
}

pub struct OpenNmt<S = FieldSegmenter> {
    src: PathBuf,
    dst: PathBuf,
    segmenter: S,
    granularity: Granularity,
    source: OcrSource,
    max_size: Option<usize>,
    seed: u64,
}

impl OpenNmt<FieldSegmenter> {
    pub fn new(src: PathBuf, dst: PathBuf) -> Self {
        Self {
            src,
            dst,
            segmenter: FieldSegmenter::default(),
            granularity: Granularity::default(),
            source: OcrSource::default(),
            max_size: None,
            seed: DEFAULT_SEED,
        }
    }
}

impl<S: Segmenter> OpenNmt<S> {
    /// Replace the segmenter, keeping every other setting.
    pub fn with_segmenter<T: Segmenter>(self, segmenter: T) -> OpenNmt<T> {
        OpenNmt {
            src: self.src,
            dst: self.dst,
            segmenter,
            granularity: self.granularity,
            source: self.source,
            max_size: self.max_size,
            seed: self.seed,
        }
    }

    pub fn granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    pub fn source(mut self, source: OcrSource) -> Self {
        self.source = source;
        self
    }

    /// Cap the number of pairs written per split.
    ///
    /// `Some(0)` means no cap, same as [None].
    pub fn max_size(mut self, max_size: Option<usize>) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn src(&self) -> &Path {
        &self.src
    }

    pub fn dst(&self) -> &Path {
        &self.dst
    }

    /// Convert a single split, drawing subsamples from `rng`.
    ///
    /// Fails with [Error::EmptySplit] before writing anything if no pair is found.
    pub fn convert_split<R: Rng + ?Sized>(
        &self,
        split: Split,
        rng: &mut R,
    ) -> Result<SplitReport, Error> {
        let documents = load_documents(&split.source_path(&self.src))?;
        info!("[{}] {} documents", split, documents.len());

        let pairs = aggregate(&self.segmenter, &documents, self.granularity, self.source)?;
        let nb_read = pairs.len();

        let (gold_max_len, ocr_max_len) = pairs.max_lengths().ok_or(Error::EmptySplit(split))?;
        info!(
            "[{}] maximum sentence lengths in characters: {} / {} (gold/ocr)",
            split, gold_max_len, ocr_max_len
        );

        let pairs = match self.max_size {
            Some(max_size) if max_size > 0 => subsample(pairs, max_size, rng),
            _ => pairs,
        };

        let mut writer = OpenNmtWriter::new(&self.dst, split)?;
        let (gold, ocr) = pairs.into_parts();
        writer.write(gold.into_iter().zip(ocr).collect())?;
        writer.flush()?;
        info!(
            "[{}] wrote {} examples to {:?}",
            split,
            writer.nb_lines(),
            self.dst
        );

        Ok(SplitReport {
            split,
            nb_read,
            nb_written: writer.nb_lines(),
            gold_max_len,
            ocr_max_len,
        })
    }
}

impl<S: Segmenter> Pipeline<Vec<SplitReport>> for OpenNmt<S> {
    fn run(&self) -> Result<Vec<SplitReport>, Error> {
        if self.dst.exists() && !self.dst.is_dir() {
            return Err(Error::Custom(format!(
                "destination has to be a directory: {:?}",
                self.dst
            )));
        }
        if !self.dst.exists() {
            warn!("Destination folder does not exist. Creating");
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut reports = Vec::with_capacity(Split::ALL.len());
        for split in Split::ALL {
            reports.push(self.convert_split(split, &mut rng)?);
        }
        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::Write;

    use flate2::write::GzEncoder;
    use flate2::Compression;
    use serde_json::json;

    use super::*;
    use crate::processing::Aligned;
    use crate::segmentation::Document;

    fn write_split(dir: &Path, split: Split, docs: &serde_json::Value) {
        let f = File::create(split.source_path(dir)).unwrap();
        let mut enc = GzEncoder::new(f, Compression::default());
        enc.write_all(docs.to_string().as_bytes()).unwrap();
        enc.finish().unwrap();
    }

    /// Returns one pair per string element of a document array.
    struct Echo;

    impl Segmenter for Echo {
        fn segment(
            &self,
            document: &Document,
            _granularity: Granularity,
            _source: OcrSource,
        ) -> Result<Aligned, Error> {
            let s = document.as_str().unwrap_or_default().to_string();
            Aligned::new(vec![s.clone()], vec![s.to_uppercase()])
        }
    }

    #[test]
    fn two_pairs_one_example() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        write_split(
            src.path(),
            Split::Train,
            &json!([{"gold": "ab\ncd", "ocr": "a6\ncl"}]),
        );

        let p = OpenNmt::new(src.path().to_path_buf(), dst.path().to_path_buf())
            .max_size(Some(1));
        let report = p
            .convert_split(Split::Train, &mut StdRng::seed_from_u64(1))
            .unwrap();
        assert_eq!(report.nb_read, 2);
        assert_eq!(report.nb_written, 1);

        let input = std::fs::read_to_string(Split::Train.input_path(dst.path())).unwrap();
        let output = std::fs::read_to_string(Split::Train.output_path(dst.path())).unwrap();
        let expected = [
            ("<BEG> a 6\n", "<BEG> a b\n"),
            ("<BEG> c l\n", "<BEG> c d\n"),
        ];
        assert!(expected.contains(&(input.as_str(), output.as_str())));
    }

    #[test]
    fn zero_max_size_keeps_everything() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        write_split(
            src.path(),
            Split::Train,
            &json!([{"gold": "ab\ncd\nef", "ocr": "a6\ncl\nef"}]),
        );

        let p = OpenNmt::new(src.path().to_path_buf(), dst.path().to_path_buf())
            .max_size(Some(0));
        let report = p
            .convert_split(Split::Train, &mut StdRng::seed_from_u64(DEFAULT_SEED))
            .unwrap();
        assert_eq!((report.nb_read, report.nb_written), (3, 3));

        let output = std::fs::read_to_string(Split::Train.output_path(dst.path())).unwrap();
        assert_eq!(output, "<BEG> a b\n<BEG> c d\n<BEG> e f\n");
    }

    #[test]
    fn empty_split() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        write_split(src.path(), Split::Devel, &json!([]));

        let p = OpenNmt::new(src.path().to_path_buf(), dst.path().to_path_buf());
        let r = p.convert_split(Split::Devel, &mut StdRng::seed_from_u64(DEFAULT_SEED));
        assert!(matches!(r, Err(Error::EmptySplit(Split::Devel))));
        assert!(!Split::Devel.input_path(dst.path()).exists());
    }

    #[test]
    fn custom_segmenter() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        for split in Split::ALL {
            write_split(src.path(), split, &json!(["a b", "c"]));
        }

        let p = OpenNmt::new(src.path().to_path_buf(), dst.path().to_path_buf())
            .with_segmenter(Echo);
        let reports = p.run().unwrap();
        assert_eq!(reports.len(), 3);
        for report in reports {
            assert_eq!(report.nb_written, 2);
            assert_eq!((report.gold_max_len, report.ocr_max_len), (3, 3));
        }
        let input = std::fs::read_to_string(Split::Test.input_path(dst.path())).unwrap();
        assert_eq!(input, "<BEG> A _ B\n<BEG> C\n");
    }

    #[test]
    fn missing_split_file() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        let p = OpenNmt::new(src.path().to_path_buf(), dst.path().to_path_buf());
        assert!(matches!(p.run(), Err(Error::Io(_))));
    }
}
