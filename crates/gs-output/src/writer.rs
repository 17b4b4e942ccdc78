//! The `OutputWriter` trait implemented by all backend writers.

use crate::{DepartureRow, OutputResult, RegisterRow};

/// Trait implemented by output backends.
///
/// Errors are stored by the observer and retrieved with
/// [`StoreOutputObserver::take_error`][crate::StoreOutputObserver::take_error].
pub trait OutputWriter {
    fn write_departures(&mut self, rows: &[DepartureRow]) -> OutputResult<()>;

    fn write_registers(&mut self, rows: &[RegisterRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
