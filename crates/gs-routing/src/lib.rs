//! `gs-routing` — which line does an arriving customer join?
//!
//! Each [`CustomerKind`][gs_core::CustomerKind] maps to one stateless
//! [`RoutingPolicy`].  A policy is a pure function of the registers' current
//! state; ties always go to the register created first.
//!
//! | Kind | Policy                 | Picks the register with…                    |
//! |------|------------------------|---------------------------------------------|
//! | `A`  | [`ShortestQueue`]      | the fewest customers in line                |
//! | `B`  | [`LeastCongestedTail`] | the fewest items on its last customer       |

pub mod policy;

#[cfg(test)]
mod tests;

pub use policy::{LeastCongestedTail, RoutingPolicy, ShortestQueue, policy_for};
