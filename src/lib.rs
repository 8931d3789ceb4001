//! Command line front end of the lotto simulator.
//!
//! The domain lives in `lotto-core`; this crate parses arguments and run files,
//! prompts for missing values and prints the results.

mod app;

pub use app::{cli, config, input, output, run};
