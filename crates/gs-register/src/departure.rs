use gs_core::{CustomerId, CustomerKind, RegisterId};

/// A customer that has finished checking out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Departure {
    pub customer:    CustomerId,
    pub kind:        CustomerKind,
    pub register:    RegisterId,
    /// Exact simulated minute the last item was scanned.  May fall between
    /// ticks.
    pub finish_time: f64,
}
