//! `StoreOutputObserver<W>` — bridges `StoreObserver` to an `OutputWriter`.

use gs_register::{Departure, Register};
use gs_sim::StoreObserver;

use crate::row::{DepartureRow, RegisterRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`StoreObserver`] that records every departure and the final register
/// state through any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `StoreObserver`
/// methods have no return value.  After `run_to_completion` returns, check
/// for errors with [`take_error`][Self::take_error].
pub struct StoreOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> StoreOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after the run.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
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

impl<W: OutputWriter> StoreObserver for StoreOutputObserver<W> {
    fn on_departure(&mut self, departure: &Departure) {
        let row = DepartureRow {
            customer_id: departure.customer.0,
            kind:        departure.kind.as_str(),
            register:    departure.register.number(),
            finish_time: departure.finish_time,
        };
        let result = self.writer.write_departures(&[row]);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _completion_time: f64, registers: &[Register]) {
        let rows: Vec<RegisterRow> = registers
            .iter()
            .map(|r| RegisterRow {
                register:        r.id().number(),
                rate:            r.rate(),
                training:        r.is_training(),
                served:          r.served_count(),
                completion_time: r.projected_completion_time(),
            })
            .collect();

        let result = self.writer.write_registers(&rows);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
