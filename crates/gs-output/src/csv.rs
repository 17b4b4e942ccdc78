//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `departures.csv`
//! - `registers.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DepartureRow, OutputResult, RegisterRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    departures: Writer<File>,
    registers:  Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut departures = Writer::from_path(dir.join("departures.csv"))?;
        departures.write_record(["customer_id", "kind", "register", "finish_time"])?;

        let mut registers = Writer::from_path(dir.join("registers.csv"))?;
        registers.write_record(["register", "rate", "training", "served", "completion_time"])?;

        Ok(Self {
            departures,
            registers,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_departures(&mut self, rows: &[DepartureRow]) -> OutputResult<()> {
        for row in rows {
            self.departures.write_record(&[
                row.customer_id.to_string(),
                row.kind.to_owned(),
                row.register.to_string(),
                row.finish_time.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_registers(&mut self, rows: &[RegisterRow]) -> OutputResult<()> {
        for row in rows {
            self.registers.write_record(&[
                row.register.to_string(),
                row.rate.to_string(),
                (row.training as u8).to_string(),
                row.served.to_string(),
                row.completion_time.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.departures.flush()?;
        self.registers.flush()?;
        Ok(())
    }
}
