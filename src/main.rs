//! # ocrnmt
//!
//! Converts a gold/OCR corpus into OpenNMT character-level training files.
//!
//! ```sh
//! ocrnmt data/ out/ --tesseract --max_size 100000
//! ```
//!
//! Logging is controlled by `RUST_LOG` and defaults to `info`.
use ocrnmt::error;
use ocrnmt::pipelines::{OpenNmt, Pipeline};
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), error::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opt = cli::Convert::from_args();
    debug!("cli args\n{:#?}", opt);

    let p = OpenNmt::from(opt);
    let reports = p.run()?;
    for report in reports {
        debug!("{:?}", report);
    }
    Ok(())
}
