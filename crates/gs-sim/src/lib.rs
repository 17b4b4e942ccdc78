//! `gs-sim` — the store scheduler for the grocery checkout simulator.
//!
//! # Batch replay loop
//!
//! ```text
//! while a batch is pending:
//!   ① Pop     — take the earliest pending ArrivalBatch.
//!   ② Advance — every register drains its line up to batch.time; the store
//!               clock becomes batch.time.
//!   ③ Route   — each customer, in batch order, joins the register chosen by
//!               the policy for its kind (gs-routing).
//! finally:
//!   completion = max over registers of projected_completion_time()
//! ```
//!
//! All registers reach the batch time before anyone is routed, so routing
//! always sees fully drained lines.  The loop is strictly sequential; the
//! same input always produces the same result.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gs_schedule::load_store_reader;
//! use gs_sim::{NoopObserver, StoreBuilder};
//!
//! let input = load_store_reader(Cursor::new("1\nA 0 10\n"))?;
//! let mut store = StoreBuilder::from_input(input).build()?;
//! let finished_at = store.run_to_completion(&mut NoopObserver)?;
//! assert_eq!(finished_at, 20.0);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod store;


pub use builder::StoreBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, StoreObserver};
pub use store::Store;
