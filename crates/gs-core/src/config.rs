//! Store configuration.

use crate::{GsError, GsResult};

/// Top-level store configuration.
///
/// The register count normally comes from the first line of the input file;
/// the rates default to one item per minute with the training register
/// running at half speed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoreConfig {
    /// Number of registers.  The last one is the training register.
    pub register_count: usize,

    /// Items per minute processed by a regular register.  Default: 1.0.
    pub base_rate: f64,

    /// Divisor applied to `base_rate` for the training register.  Default: 2.0.
    pub training_slowdown: f64,
}

impl StoreConfig {
    pub const DEFAULT_BASE_RATE: f64 = 1.0;
    pub const DEFAULT_TRAINING_SLOWDOWN: f64 = 2.0;

    /// Configuration with default rates for `register_count` registers.
    pub fn new(register_count: usize) -> Self {
        Self {
            register_count,
            base_rate:         Self::DEFAULT_BASE_RATE,
            training_slowdown: Self::DEFAULT_TRAINING_SLOWDOWN,
        }
    }

    /// Processing rate of the training register.
    #[inline]
    pub fn training_rate(&self) -> f64 {
        self.base_rate / self.training_slowdown
    }

    /// Rate of the register in slot `index` (the last slot is the trainee).
    pub fn rate_for(&self, index: usize) -> f64 {
        if index + 1 == self.register_count {
            self.training_rate()
        } else {
            self.base_rate
        }
    }

    /// Reject configurations the simulation cannot run.
    pub fn validate(&self) -> GsResult<()> {
        if self.register_count == 0 {
            return Err(GsError::Config(
                "store needs at least one register".to_owned(),
            ));
        }
        if !(self.base_rate.is_finite() && self.base_rate > 0.0) {
            return Err(GsError::Config(format!(
                "base_rate must be positive and finite, got {}",
                self.base_rate
            )));
        }
        if !(self.training_slowdown.is_finite() && self.training_slowdown > 0.0) {
            return Err(GsError::Config(format!(
                "training_slowdown must be positive and finite, got {}",
                self.training_slowdown
            )));
        }
        Ok(())
    }
}
