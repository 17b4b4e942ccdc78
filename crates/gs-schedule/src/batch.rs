//! Arrival batches and the pre-processing that builds them.

use gs_core::{Customer, Tick};

use crate::{ScheduleError, ScheduleResult};

/// Every customer that walks up to the registers at the same minute.
///
/// Immutable once built; the store consumes each batch exactly once.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrivalBatch {
    time:      Tick,
    customers: Vec<Customer>,
}

impl ArrivalBatch {
    /// Build a batch from customers that all arrive at `time`.
    ///
    /// Customers are kept in the order given; the caller is responsible for
    /// the within-batch tie-break (see [`group_into_batches`]).
    pub fn new(time: Tick, customers: Vec<Customer>) -> ScheduleResult<Self> {
        if let Some(stray) = customers.iter().find(|c| c.arrival_time != time) {
            return Err(ScheduleError::MixedArrivalTimes {
                batch: time,
                got:   stray.arrival_time,
            });
        }
        Ok(Self { time, customers })
    }

    #[inline]
    pub fn time(&self) -> Tick {
        self.time
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Hand the customers over to the router, in batch order.
    pub fn into_customers(self) -> Vec<Customer> {
        self.customers
    }
}

/// Group customers into batches ready for the store.
///
/// One explicit stable sort on `(arrival_time, initial_items, kind)` fixes
/// both orderings at once: batches come out ascending by time, and within a
/// batch lighter baskets go first, `A` before `B` on equal baskets, input
/// order after that.  Consecutive equal arrival times then form one batch.
pub fn group_into_batches(mut customers: Vec<Customer>) -> Vec<ArrivalBatch> {
    customers.sort_by(|a, b| {
        a.arrival_time
            .cmp(&b.arrival_time)
            .then(a.initial_items.cmp(&b.initial_items))
            .then(a.kind.cmp(&b.kind))
    });

    let mut batches: Vec<ArrivalBatch> = Vec::new();
    for customer in customers {
        match batches.last_mut() {
            Some(batch) if batch.time == customer.arrival_time => batch.customers.push(customer),
            _ => batches.push(ArrivalBatch {
                time:      customer.arrival_time,
                customers: vec![customer],
            }),
        }
    }
    batches
}
