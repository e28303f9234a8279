//! `at-output` — trigger log writers for the autotouch harness.
//!
//! The CSV backend creates two files in the output directory:
//!
//! | File                | Columns                                       |
//! |---------------------|-----------------------------------------------|
//! | `triggers.csv`      | `frame,day,name,x,y,actor_x,actor_y`          |
//! | `day_summaries.csv` | `day,triggered`                               |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `at_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use at_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{DaySummaryRow, TriggerRow};
pub use writer::OutputWriter;
