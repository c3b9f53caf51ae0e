//! Corpus splits and their file naming.
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Split {
    Train,
    Devel,
    Test,
}

impl Split {
    /// Splits in processing order.
    pub const ALL: [Split; 3] = [Split::Train, Split::Devel, Split::Test];

    pub fn name(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Devel => "devel",
            Split::Test => "test",
        }
    }

    /// Gzipped JSON source of this split, in `src`.
    pub fn source_path(&self, src: &Path) -> PathBuf {
        src.join(format!("{}.json.gz", self.name()))
    }

    /// File holding formatted OCR lines.
    pub fn input_path(&self, dst: &Path) -> PathBuf {
        dst.join(format!("open_nmt_{}_input.txt", self.name()))
    }

    /// File holding formatted gold lines.
    pub fn output_path(&self, dst: &Path) -> PathBuf {
        dst.join(format!("open_nmt_{}_output.txt", self.name()))
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
