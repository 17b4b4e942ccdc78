//! The `RoutingPolicy` trait and the two built-in policies.

use gs_core::{CustomerKind, RegisterId};
use gs_register::Register;

/// Chooses a register for an arriving customer.
///
/// Implementations must be deterministic: the same register state always
/// yields the same choice.  Returns `None` only when `registers` is empty.
pub trait RoutingPolicy {
    fn select(&self, registers: &[Register]) -> Option<RegisterId>;
}

/// Fewest customers in line; ties go to the lowest-numbered register.
pub struct ShortestQueue;

impl RoutingPolicy for ShortestQueue {
    fn select(&self, registers: &[Register]) -> Option<RegisterId> {
        // `min_by_key` keeps the first of several equal minima.
        registers
            .iter()
            .min_by_key(|r| r.queue_len())
            .map(Register::id)
    }
}

/// Fewest items on the last customer in line.
///
/// An empty line counts as zero, so any idle register wins over a busy one.
/// Ties go to the lowest-numbered register.
pub struct LeastCongestedTail;

impl RoutingPolicy for LeastCongestedTail {
    fn select(&self, registers: &[Register]) -> Option<RegisterId> {
        registers
            .iter()
            .min_by(|a, b| {
                a.peek_tail_remaining_items()
                    .total_cmp(&b.peek_tail_remaining_items())
            })
            .map(Register::id)
    }
}

/// The policy customers of `kind` follow.
pub fn policy_for(kind: CustomerKind) -> &'static dyn RoutingPolicy {
    match kind {
        CustomerKind::A => &ShortestQueue,
        CustomerKind::B => &LeastCongestedTail,
    }
}
