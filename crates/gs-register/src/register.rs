//! The `Register` struct and its drain loop.

use std::collections::VecDeque;
use std::fmt;

use gs_core::{Customer, RegisterId, Tick};

use crate::{Departure, RegisterError, RegisterResult};

/// One checkout lane.
///
/// Owns its line of customers exclusively; the front of `queue` is the
/// customer currently being served.  `local_time` never decreases.
#[derive(Clone, Debug)]
pub struct Register {
    id:         RegisterId,
    /// Items processed per minute.
    rate:       f64,
    training:   bool,
    local_time: Tick,
    queue:      VecDeque<Customer>,
    /// Customers that have left this register so far.
    served:     u64,
}

impl Register {
    /// Create an idle register at time zero.
    pub fn new(id: RegisterId, rate: f64, training: bool) -> Self {
        Self {
            id,
            rate,
            training,
            local_time: Tick::ZERO,
            queue:      VecDeque::new(),
            served:     0,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> RegisterId {
        self.id
    }

    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// `true` for the half-speed register staffed by a trainee.
    #[inline]
    pub fn is_training(&self) -> bool {
        self.training
    }

    #[inline]
    pub fn local_time(&self) -> Tick {
        self.local_time
    }

    /// Number of customers in line, including the one being served.
    #[inline]
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    #[inline]
    pub fn served_count(&self) -> u64 {
        self.served
    }

    /// Customers in line, front (being served) first.
    pub fn queue(&self) -> impl ExactSizeIterator<Item = &Customer> {
        self.queue.iter()
    }

    /// Items left for the last customer in line, or `0.0` for an empty line.
    pub fn peek_tail_remaining_items(&self) -> f64 {
        self.queue.back().map_or(0.0, Customer::remaining_items)
    }

    /// Total unprocessed items across the whole line.
    pub fn outstanding_items(&self) -> f64 {
        self.queue.iter().map(Customer::remaining_items).sum()
    }

    /// Minute at which this register would empty if nobody else arrived.
    ///
    /// Only meaningful once every arrival has been routed.
    pub fn projected_completion_time(&self) -> f64 {
        if self.queue.is_empty() {
            return self.local_time.as_minutes();
        }
        self.local_time.as_minutes() + self.outstanding_items() / self.rate
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Put `customer` at the back of the line.
    ///
    /// A customer with no items is checked out on the spot: nothing is
    /// queued and the departure is returned instead.
    pub fn enqueue(&mut self, customer: Customer) -> Option<Departure> {
        if customer.is_done() {
            self.served += 1;
            return Some(Departure {
                customer:    customer.id,
                kind:        customer.kind,
                register:    self.id,
                finish_time: self.local_time.as_minutes(),
            });
        }
        self.queue.push_back(customer);
        None
    }

    /// Process the line up to `now`, spending `rate * (now - local_time)`
    /// items of capacity front to back.
    ///
    /// Returns every customer that finished in the interval, in finishing
    /// order.  `local_time` becomes `now` even when the line was empty.
    pub fn advance_to(&mut self, now: Tick) -> RegisterResult<Vec<Departure>> {
        let elapsed = now.checked_since(self.local_time).ok_or(RegisterError::NonMonotonicTime {
            register:  self.id,
            local:     self.local_time,
            requested: now,
        })?;

        let granted = self.rate * elapsed as f64;
        let mut capacity = granted;
        let mut departures = Vec::new();

        while capacity > 0.0 {
            let Some(front) = self.queue.front_mut() else {
                break;
            };
            capacity = front.consume(capacity);
            if !front.is_done() {
                break;
            }
            if let Some(done) = self.queue.pop_front() {
                let finish_time = self.local_time.as_minutes() + (granted - capacity) / self.rate;
                tracing::trace!(register = %self.id, customer = %done.id, finish_time, "customer checked out");
                self.served += 1;
                departures.push(Departure {
                    customer: done.id,
                    kind:     done.kind,
                    register: self.id,
                    finish_time,
                });
            }
        }

        self.local_time = now;
        Ok(departures)
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Register {} (rate {}", self.id.number(), self.rate)?;
        if self.training {
            f.write_str(", training")?;
        }
        writeln!(f, ", {})", self.local_time)?;
        for customer in &self.queue {
            writeln!(f, "  {customer}")?;
        }
        Ok(())
    }
}
