/*!
# OpenNMT file writing

Each split is written to a couple of parallel files, one formatted line per pair:
- `open_nmt_<split>_input.txt` holds the OCR side (model source),
- `open_nmt_<split>_output.txt` holds the gold side (model target).
!*/
mod opennmt;
mod writertrait;

pub use opennmt::{OpenNmtWriter, Pair};
pub use writertrait::WriterTrait;
