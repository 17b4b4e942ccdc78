//! `gs-output` — simulation output writers.
//!
//! | Backend | Files created                       |
//! |---------|-------------------------------------|
//! | CSV     | `departures.csv`, `registers.csv`   |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`StoreOutputObserver`], which implements `gs_sim::StoreObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gs_output::{CsvWriter, StoreOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = StoreOutputObserver::new(writer);
//! store.run_to_completion(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::StoreOutputObserver;
pub use row::{DepartureRow, RegisterRow};
pub use writer::OutputWriter;
