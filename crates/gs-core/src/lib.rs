//! `gs-core` — foundational types for the grocery checkout simulator.
//!
//! This crate is a dependency of every other `gs-*` crate.  It has no `gs-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `RegisterId`, `CustomerId`                            |
//! | [`time`]        | `Tick`                                                |
//! | [`customer`]    | `CustomerKind`, `Customer`                            |
//! | [`config`]      | `StoreConfig`                                         |
//! | [`error`]       | `GsError`, `GsResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod customer;
pub mod error;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::StoreConfig;
pub use customer::{Customer, CustomerKind};
pub use error::{GsError, GsResult};
pub use ids::{CustomerId, RegisterId};
pub use time::Tick;
