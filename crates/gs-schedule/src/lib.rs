//! `gs-schedule` — turning raw customer records into time-ordered batches.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                         |
//! |--------------|------------------------------------------------------------------|
//! | [`batch`]    | `ArrivalBatch`, `group_into_batches`                             |
//! | [`loader`]   | `StoreInput`, `load_store_file`, `load_store_reader`, CSV loader |
//! | [`error`]    | `ScheduleError`, `ScheduleResult<T>`                             |
//!
//! # Ordering contract
//!
//! The store replays batches exactly as given and never sorts.  Everything
//! it relies on is established here:
//!
//! ```text
//! batches   ascending by time, one batch per distinct arrival time
//! customers within a batch ascending by (initial items, kind), then input order
//! ```

pub mod batch;
pub mod error;
pub mod loader;

#[cfg(test)]
mod tests;

pub use batch::{ArrivalBatch, group_into_batches};
pub use error::{ScheduleError, ScheduleResult};
pub use loader::{
    StoreInput, load_customers_csv, load_customers_csv_reader, load_store_file, load_store_reader,
};
