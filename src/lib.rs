/*! # ocrnmt

Conversion of paired gold/OCR document collections into character-level OpenNMT training files.

```no_run
use ocrnmt::pipelines::{OpenNmt, Pipeline};
use ocrnmt::segmentation::Granularity;

let _reports = OpenNmt::new("data".into(), "out".into())
    .granularity(Granularity::Token)
    .max_size(Some(10_000))
    .run()?;
# Ok::<(), ocrnmt::error::Error>(())
```
!*/
pub mod error;
pub mod io;
pub mod pipelines;
pub mod processing;
pub mod segmentation;
pub mod split;
