//! Store input loaders.
//!
//! # Text format
//!
//! The first non-blank line is the register count.  Every following
//! non-blank line is one customer: kind, arrival minute, item count,
//! separated by whitespace.
//!
//! ```text
//! 2
//! A 1 2
//! A 2 1
//! B 2 3
//! ```
//!
//! # CSV format
//!
//! Customers only (the register count is supplied separately), with a
//! header row:
//!
//! ```csv
//! kind,arrival_time,items
//! A,1,2
//! B,2,3
//! ```
//!
//! Customers receive `CustomerId`s in the order they appear.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use gs_core::{Customer, CustomerId, CustomerKind, StoreConfig, Tick};

use crate::{ArrivalBatch, ScheduleError, ScheduleResult, group_into_batches};

// ── Parsed input ──────────────────────────────────────────────────────────────

/// Everything read from a store file, before pre-processing.
#[derive(Clone, Debug, PartialEq)]
pub struct StoreInput {
    pub register_count: usize,
    /// Customers in file order.
    pub customers:      Vec<Customer>,
}

impl StoreInput {
    /// Default-rate configuration plus batches in replay order.
    pub fn into_parts(self) -> (StoreConfig, Vec<ArrivalBatch>) {
        (StoreConfig::new(self.register_count), group_into_batches(self.customers))
    }
}

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CustomerRecord {
    kind:         String,
    arrival_time: u64,
    items:        u64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a store description from a text file.
pub fn load_store_file(path: &Path) -> ScheduleResult<StoreInput> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_store_reader(file)
}

/// Like [`load_store_file`] but accepts any `Read` source.
pub fn load_store_reader<R: Read>(reader: R) -> ScheduleResult<StoreInput> {
    let mut register_count: Option<usize> = None;
    let mut customers = Vec::new();

    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let line_no = i + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if register_count.is_none() {
            register_count = Some(parse_register_count(trimmed, line_no)?);
            continue;
        }

        let id = next_customer_id(customers.len())?;
        customers.push(parse_customer_line(trimmed, line_no, id)?);
    }

    let register_count = register_count
        .ok_or_else(|| ScheduleError::Parse("empty input: expected a register count".to_owned()))?;

    Ok(StoreInput { register_count, customers })
}

/// Load customers from a CSV file with a `kind,arrival_time,items` header.
pub fn load_customers_csv(path: &Path) -> ScheduleResult<Vec<Customer>> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_customers_csv_reader(file)
}

/// Like [`load_customers_csv`] but accepts any `Read` source.
pub fn load_customers_csv_reader<R: Read>(reader: R) -> ScheduleResult<Vec<Customer>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut customers = Vec::new();
    for result in csv_reader.deserialize::<CustomerRecord>() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        let kind = row
            .kind
            .parse::<CustomerKind>()
            .map_err(|e| ScheduleError::Parse(format!("record {}: {e}", customers.len() + 1)))?;
        let id = next_customer_id(customers.len())?;
        customers.push(Customer::new(id, kind, Tick(row.arrival_time), row.items));
    }
    Ok(customers)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_register_count(line: &str, line_no: usize) -> ScheduleResult<usize> {
    line.parse::<usize>().map_err(|_| {
        ScheduleError::Parse(format!(
            "line {line_no}: invalid register count {line:?}: expected a non-negative integer"
        ))
    })
}

fn parse_customer_line(line: &str, line_no: usize, id: CustomerId) -> ScheduleResult<Customer> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [kind, time, items] = fields.as_slice() else {
        return Err(ScheduleError::Parse(format!(
            "line {line_no}: expected 3 fields (kind, arrival time, items), found {}",
            fields.len()
        )));
    };

    let kind = kind
        .parse::<CustomerKind>()
        .map_err(|e| ScheduleError::Parse(format!("line {line_no}: {e}")))?;
    let time = time.parse::<u64>().map_err(|_| {
        ScheduleError::Parse(format!("line {line_no}: invalid arrival time {time:?}"))
    })?;
    let items = items.parse::<u64>().map_err(|_| {
        ScheduleError::Parse(format!("line {line_no}: invalid item count {items:?}"))
    })?;

    Ok(Customer::new(id, kind, Tick(time), items))
}

fn next_customer_id(count: usize) -> ScheduleResult<CustomerId> {
    CustomerId::try_from(count)
        .map_err(|_| ScheduleError::Parse(format!("too many customers (limit {})", u32::MAX)))
}
