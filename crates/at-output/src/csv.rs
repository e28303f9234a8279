//! CSV output backend.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DaySummaryRow, OutputResult, TriggerRow};

/// Writes the trigger log to `triggers.csv` and `day_summaries.csv`.
pub struct CsvWriter {
    triggers:  Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) both files, and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut triggers = Writer::from_path(dir.join("triggers.csv"))?;
        triggers.write_record(["frame", "day", "name", "x", "y", "actor_x", "actor_y"])?;

        let mut summaries = Writer::from_path(dir.join("day_summaries.csv"))?;
        summaries.write_record(["day", "triggered"])?;

        Ok(Self { triggers, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_trigger(&mut self, row: &TriggerRow) -> OutputResult<()> {
        self.triggers.write_record(&[
            row.frame.to_string(),
            row.day.to_string(),
            row.name.clone(),
            row.x.to_string(),
            row.y.to_string(),
            row.actor_x.to_string(),
            row.actor_y.to_string(),
        ])?;
        Ok(())
    }

    fn write_day_summary(&mut self, row: &DaySummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[row.day.to_string(), row.triggered.to_string()])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.triggers.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
