//! `rt-output`: simulation output writers for the retention simulation.
//!
//! | Backend | Files created                         |
//! |---------|---------------------------------------|
//! | CSV     | `model_vars.csv`, `agent_vars.csv`    |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`CollectorObserver`], which implements `rt_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rt_output::{CollectorObserver, CsvWriter};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = CollectorObserver::new(writer);
//! model.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod writer;


pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::CollectorObserver;
pub use writer::OutputWriter;
