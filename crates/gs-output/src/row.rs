//! Plain data row types written by output backends.

/// One customer leaving a register.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepartureRow {
    pub customer_id: u32,
    pub kind:        &'static str,
    /// One-based register number.
    pub register:    u32,
    pub finish_time: f64,
}

/// Final state of one register after the last batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegisterRow {
    /// One-based register number.
    pub register:        u32,
    pub rate:            f64,
    pub training:        bool,
    /// Customers that finished during the replay.
    pub served:          u64,
    pub completion_time: f64,
}
