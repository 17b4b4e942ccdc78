//! Fluent builder for constructing a [`Store`].

use gs_core::StoreConfig;
use gs_schedule::{ArrivalBatch, StoreInput};

use crate::{SimResult, Store};

/// Fluent builder for [`Store`].
///
/// Batches must be supplied in strictly ascending time order, as produced by
/// [`gs_schedule::group_into_batches`]; `build` rejects anything else rather
/// than re-sorting.
///
/// # Example
///
/// ```rust,ignore
/// let mut store = StoreBuilder::new(StoreConfig::new(3))
///     .batches(batches)
///     .build()?;
/// ```
pub struct StoreBuilder {
    config:  StoreConfig,
    batches: Vec<ArrivalBatch>,
}

impl StoreBuilder {
    pub fn new(config: StoreConfig) -> Self {
        Self { config, batches: Vec::new() }
    }

    /// Default-rate store for a parsed input file, batches pre-processed.
    pub fn from_input(input: StoreInput) -> Self {
        let (config, batches) = input.into_parts();
        Self { config, batches }
    }

    pub fn batch(mut self, batch: ArrivalBatch) -> Self {
        self.batches.push(batch);
        self
    }

    pub fn batches(mut self, batches: impl IntoIterator<Item = ArrivalBatch>) -> Self {
        self.batches.extend(batches);
        self
    }

    /// Validate the configuration, create the registers, and queue the
    /// batches.
    pub fn build(self) -> SimResult<Store> {
        let mut store = Store::new(self.config)?;
        for batch in self.batches {
            store.add_batch(batch)?;
        }
        Ok(store)
    }
}
