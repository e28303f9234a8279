//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use at_core::{Frame, TilePos, WorldEntity};
use at_sim::SimObserver;

use crate::row::{DaySummaryRow, TriggerRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes every trigger and one summary per day.
///
/// A day's summary is written when the next day starts, or at the end of the
/// run for the last day.  Errors from the writer are stored internally
/// because `SimObserver` methods have no return value; check
/// [`take_error`][Self::take_error] after the run.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:       W,
    current_day:  Option<u64>,
    day_triggers: u64,
    last_error:   Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, current_day: None, day_triggers: 0, last_error: None }
    }

    /// Take the stored write error (if any).  `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn close_day(&mut self) {
        if let Some(day) = self.current_day.take() {
            let row = DaySummaryRow { day, triggered: self.day_triggers };
            let result = self.writer.write_day_summary(&row);
            self.store_err(result);
        }
        self.day_triggers = 0;
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_day_start(&mut self, _frame: Frame, day: u64) {
        self.close_day();
        self.current_day = Some(day);
    }

    fn on_trigger(&mut self, frame: Frame, day: u64, entity: &WorldEntity, actor: TilePos) {
        self.day_triggers += 1;
        let row = TriggerRow {
            frame:   frame.0,
            day,
            name:    entity.name.clone(),
            x:       entity.position.x,
            y:       entity.position.y,
            actor_x: actor.x,
            actor_y: actor.y,
        };
        let result = self.writer.write_trigger(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_frame: Frame) {
        self.close_day();
        let result = self.writer.finish();
        self.store_err(result);
    }
}
