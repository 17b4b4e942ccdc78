//! Observer trait for progress reporting and data collection.

use gs_core::{Customer, RegisterId, Tick};
use gs_register::{Departure, Register};

/// Callbacks invoked by [`Store::step`][crate::Store::step] and
/// [`Store::run_to_completion`][crate::Store::run_to_completion].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait StoreObserver {
    /// Called when a batch is popped, before any register is advanced.
    fn on_batch_start(&mut self, _time: Tick, _arrivals: usize) {}

    /// Called for every customer that finishes checkout, whether during a
    /// drain or (for empty baskets) on arrival.
    fn on_departure(&mut self, _departure: &Departure) {}

    /// Called after `customer` has been assigned to `register`.
    fn on_customer_routed(&mut self, _customer: &Customer, _register: RegisterId) {}

    /// Called once after the last batch, with the store's completion time and
    /// the final register state.
    fn on_sim_end(&mut self, _completion_time: f64, _registers: &[Register]) {}
}

/// A [`StoreObserver`] that does nothing.
pub struct NoopObserver;

impl StoreObserver for NoopObserver {}
