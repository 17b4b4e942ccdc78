//! The `Store` struct and its batch replay loop.

use std::collections::VecDeque;

use gs_core::{Customer, GsError, RegisterId, StoreConfig, Tick};
use gs_register::{Departure, Register};
use gs_routing::policy_for;
use gs_schedule::ArrivalBatch;

use crate::{SimError, SimResult, StoreObserver};

/// The whole checkout area: every register plus the arrivals still to come.
///
/// The store exclusively owns its registers, and each register exclusively
/// owns its line, so a customer sits in at most one queue at a time.
///
/// Create via [`StoreBuilder`][crate::StoreBuilder] or [`Store::new`].
pub struct Store {
    /// Time of the most recently processed batch (zero before the first).
    global_time: Tick,

    /// Registers in creation order; the last one is the training register.
    registers:   Vec<Register>,

    /// Batches not yet replayed, strictly ascending by time.
    pending:     VecDeque<ArrivalBatch>,

    /// Time of the last batch ever accepted by `add_batch`.
    last_queued: Option<Tick>,

    batches_processed: usize,
}

impl Store {
    /// Create `config.register_count` idle registers.
    ///
    /// Fails if the configuration has no registers or a non-positive rate.
    pub fn new(config: StoreConfig) -> SimResult<Self> {
        config.validate()?;

        let registers = (0..config.register_count)
            .map(|i| -> SimResult<Register> {
                let id = RegisterId::try_from(i).map_err(|_| {
                    GsError::Config(format!("too many registers: {}", config.register_count))
                })?;
                Ok(Register::new(id, config.rate_for(i), i + 1 == config.register_count))
            })
            .collect::<SimResult<Vec<_>>>()?;

        Ok(Self {
            global_time:       Tick::ZERO,
            registers,
            pending:           VecDeque::new(),
            last_queued:       None,
            batches_processed: 0,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn global_time(&self) -> Tick {
        self.global_time
    }

    pub fn registers(&self) -> &[Register] {
        &self.registers
    }

    pub fn pending_batches(&self) -> usize {
        self.pending.len()
    }

    pub fn batches_processed(&self) -> usize {
        self.batches_processed
    }

    // ── Scheduling ────────────────────────────────────────────────────────

    /// Queue `batch` behind every batch already added.
    ///
    /// Its time must be strictly later than the previously added batch and
    /// no earlier than the store clock.  Out-of-order batches are rejected,
    /// never re-sorted.
    pub fn add_batch(&mut self, batch: ArrivalBatch) -> SimResult<()> {
        let floor = self.last_queued.unwrap_or(self.global_time);
        let in_order = match self.last_queued {
            Some(previous) => batch.time() > previous,
            None => batch.time() >= self.global_time,
        };
        if !in_order {
            return Err(SimError::OutOfOrderBatch { previous: floor, got: batch.time() });
        }
        self.last_queued = Some(batch.time());
        self.pending.push_back(batch);
        Ok(())
    }

    /// Bring every register to `now`, then move the store clock.
    ///
    /// Returns the customers who finished checkout along the way, register
    /// by register.
    pub fn advance_time(&mut self, now: Tick) -> SimResult<Vec<Departure>> {
        if now < self.global_time {
            return Err(SimError::TimeWentBackwards { current: self.global_time, requested: now });
        }

        let mut departures = Vec::new();
        for register in &mut self.registers {
            departures.extend(register.advance_to(now)?);
        }
        self.global_time = now;
        Ok(departures)
    }

    /// Send `customer` to the register its kind's policy selects.
    ///
    /// Returns the chosen register and, for a customer with no items, the
    /// immediate departure.
    pub fn route(&mut self, customer: Customer) -> SimResult<(RegisterId, Option<Departure>)> {
        let target = policy_for(customer.kind)
            .select(&self.registers)
            .ok_or(SimError::NoRegisters)?;
        tracing::trace!(customer = %customer.id, kind = %customer.kind, register = %target, "routed");
        let departure = self.registers[target.index()].enqueue(customer);
        Ok((target, departure))
    }

    /// Replay the earliest pending batch.
    ///
    /// Returns `false` once nothing is left to replay.
    pub fn step<O: StoreObserver>(&mut self, observer: &mut O) -> SimResult<bool> {
        let Some(batch) = self.pending.pop_front() else {
            return Ok(false);
        };
        let time = batch.time();
        tracing::debug!(time = %time, arrivals = batch.len(), "processing arrival batch");
        observer.on_batch_start(time, batch.len());

        for departure in self.advance_time(time)? {
            observer.on_departure(&departure);
        }

        for customer in batch.into_customers() {
            let snapshot = customer.clone();
            let (register, departure) = self.route(customer)?;
            observer.on_customer_routed(&snapshot, register);
            if let Some(departure) = departure {
                observer.on_departure(&departure);
            }
        }

        self.batches_processed += 1;
        Ok(true)
    }

    /// Replay every pending batch in order and return the completion time.
    pub fn run_to_completion<O: StoreObserver>(&mut self, observer: &mut O) -> SimResult<f64> {
        while self.step(observer)? {}

        let completion = self.final_completion_time();
        tracing::info!(
            batches = self.batches_processed,
            completion_time = completion,
            "simulation finished"
        );
        observer.on_sim_end(completion, &self.registers);
        Ok(completion)
    }

    // ── Projection ────────────────────────────────────────────────────────

    /// Every register's projected completion time, in register order.
    pub fn completion_times(&self) -> Vec<(RegisterId, f64)> {
        self.registers
            .iter()
            .map(|r| (r.id(), r.projected_completion_time()))
            .collect()
    }

    /// The latest projected completion time across all registers.
    ///
    /// Only meaningful once every batch has been replayed.
    pub fn final_completion_time(&self) -> f64 {
        self.registers
            .iter()
            .map(Register::projected_completion_time)
            .fold(self.global_time.as_minutes(), f64::max)
    }
}
