//! Unit tests for gs-routing.

use gs_core::{Customer, CustomerId, CustomerKind, RegisterId, Tick};
use gs_register::Register;

use crate::{LeastCongestedTail, RoutingPolicy, ShortestQueue, policy_for};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// `lines[i]` is the item count of each customer queued at register `i`.
fn registers(lines: &[&[u64]]) -> Vec<Register> {
    let mut next_id = 0;
    lines
        .iter()
        .enumerate()
        .map(|(i, items)| {
            let training = i + 1 == lines.len();
            let mut r = Register::new(RegisterId(i as u32), if training { 0.5 } else { 1.0 }, training);
            for &n in *items {
                r.enqueue(Customer::new(CustomerId(next_id), CustomerKind::A, Tick(0), n));
                next_id += 1;
            }
            r
        })
        .collect()
}

#[cfg(test)]
mod shortest_queue {
    use super::*;

    #[test]
    fn picks_fewest_customers() {
        let regs = registers(&[&[1, 1], &[50], &[1, 1, 1]]);
        assert_eq!(ShortestQueue.select(&regs), Some(RegisterId(1)));
    }

    #[test]
    fn counts_customers_not_items() {
        let regs = registers(&[&[100], &[1, 1]]);
        assert_eq!(ShortestQueue.select(&regs), Some(RegisterId(0)));
    }

    #[test]
    fn ties_go_to_first_register() {
        let regs = registers(&[&[], &[], &[]]);
        assert_eq!(ShortestQueue.select(&regs), Some(RegisterId(0)));

        let regs = registers(&[&[4], &[], &[]]);
        assert_eq!(ShortestQueue.select(&regs), Some(RegisterId(1)));
    }

    #[test]
    fn no_registers_no_choice() {
        assert_eq!(ShortestQueue.select(&[]), None);
    }
}

#[cfg(test)]
mod least_congested_tail {
    use super::*;

    #[test]
    fn picks_smallest_tail() {
        let regs = registers(&[&[1, 9], &[20, 3], &[5]]);
        assert_eq!(LeastCongestedTail.select(&regs), Some(RegisterId(1)));
    }

    #[test]
    fn empty_register_always_wins() {
        let regs = registers(&[&[1], &[], &[1]]);
        assert_eq!(LeastCongestedTail.select(&regs), Some(RegisterId(1)));
    }

    #[test]
    fn ties_go_to_first_register() {
        let regs = registers(&[&[2, 4], &[4], &[4]]);
        assert_eq!(LeastCongestedTail.select(&regs), Some(RegisterId(0)));
    }

    #[test]
    fn no_registers_no_choice() {
        assert_eq!(LeastCongestedTail.select(&[]), None);
    }
}

#[cfg(test)]
mod dispatch {
    use super::*;

    #[test]
    fn kinds_use_their_policy() {
        // Register 0 has the shorter line, register 1 the lighter tail.
        let regs = registers(&[&[10], &[1, 1], &[3, 3]]);
        assert_eq!(policy_for(CustomerKind::A).select(&regs), Some(RegisterId(0)));
        assert_eq!(policy_for(CustomerKind::B).select(&regs), Some(RegisterId(1)));
    }
}
