//! The `OutputWriter` trait implemented by all backend writers.

use crate::{DaySummaryRow, OutputResult, TriggerRow};

/// Trait implemented by trigger-log backends.
///
/// Errors are stored by [`SimOutputObserver`][crate::SimOutputObserver] and
/// retrieved with its `take_error`.
pub trait OutputWriter {
    fn write_trigger(&mut self, row: &TriggerRow) -> OutputResult<()>;

    fn write_day_summary(&mut self, row: &DaySummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
