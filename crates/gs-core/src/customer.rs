//! Customers and their routing class.

use std::fmt;
use std::str::FromStr;

use crate::{CustomerId, GsError, Tick};

// ── CustomerKind ──────────────────────────────────────────────────────────────

/// The routing class a customer belongs to.
///
/// The set is closed: anything other than `A` or `B` is rejected at parse
/// time, so the router never sees an unknown class.  `A < B` in the derived
/// ordering, which the arrival pre-processing uses as a tie-break.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CustomerKind {
    /// Joins the line with the fewest customers.
    A,
    /// Joins the line whose last customer has the fewest items left.
    B,
}

impl CustomerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CustomerKind::A => "A",
            CustomerKind::B => "B",
        }
    }
}

impl fmt::Display for CustomerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CustomerKind {
    type Err = GsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(CustomerKind::A),
            "B" => Ok(CustomerKind::B),
            other => Err(GsError::Parse(format!(
                "unknown customer kind {other:?}: expected \"A\" or \"B\""
            ))),
        }
    }
}

// ── Customer ──────────────────────────────────────────────────────────────────

/// A shopper waiting to check out.
///
/// `remaining_items` is fractional because a half-rate register can finish
/// half an item in a single minute.  It only ever decreases and bottoms out
/// at exactly `0.0`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Customer {
    pub id:            CustomerId,
    pub kind:          CustomerKind,
    pub arrival_time:  Tick,
    /// Item count as read from the input.  Never mutated.
    pub initial_items: u64,
    remaining_items:   f64,
}

impl Customer {
    pub fn new(id: CustomerId, kind: CustomerKind, arrival_time: Tick, items: u64) -> Self {
        Self {
            id,
            kind,
            arrival_time,
            initial_items:   items,
            remaining_items: items as f64,
        }
    }

    #[inline]
    pub fn remaining_items(&self) -> f64 {
        self.remaining_items
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.remaining_items <= 0.0
    }

    /// Spend up to `capacity` items of register throughput on this customer.
    ///
    /// Returns the capacity left over once the customer is fully processed,
    /// or `0.0` if the customer absorbed all of it.  `capacity` must be
    /// non-negative.
    pub fn consume(&mut self, capacity: f64) -> f64 {
        debug_assert!(capacity >= 0.0, "negative capacity {capacity}");
        if self.remaining_items < capacity {
            let unused = capacity - self.remaining_items;
            self.remaining_items = 0.0;
            unused
        } else {
            self.remaining_items -= capacity;
            0.0
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.kind, self.arrival_time.0, self.remaining_items)
    }
}
