//! `gs-register` — a single checkout register and its customer line.
//!
//! # Crate layout
//!
//! | Module        | Contents                                          |
//! |---------------|---------------------------------------------------|
//! | [`register`]  | `Register` — FIFO queue, rate, local clock        |
//! | [`departure`] | `Departure` — a customer finishing checkout       |
//! | [`error`]     | `RegisterError`, `RegisterResult<T>`              |
//!
//! # Drain model (catch-up)
//!
//! A register does not step minute by minute.  When asked to advance from
//! `local_time` to `now` it earns `rate * (now - local_time)` items of
//! capacity and pours that capacity through the queue front to back:
//!
//! ```text
//! capacity = rate * elapsed
//! while capacity > 0 and queue not empty:
//!     capacity = queue.front.consume(capacity)
//!     if queue.front is done: pop it, record its finish time
//! local_time = now
//! ```
//!
//! The result is the same as processing continuously through the interval,
//! so the scheduler only has to wake registers when new customers arrive.

pub mod departure;
pub mod error;
pub mod register;


pub use departure::Departure;
pub use error::{RegisterError, RegisterResult};
pub use register::Register;
