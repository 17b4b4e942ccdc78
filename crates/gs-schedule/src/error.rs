use gs_core::Tick;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("input parse error: {0}")]
    Parse(String),

    #[error("customer arriving at {got} does not belong in the batch for {batch}")]
    MixedArrivalTimes { batch: Tick, got: Tick },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
