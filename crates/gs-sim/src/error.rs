use gs_core::{GsError, Tick};
use gs_register::RegisterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("store configuration error: {0}")]
    Config(#[from] GsError),

    #[error("batch at {got} must come after the batch at {previous}")]
    OutOfOrderBatch { previous: Tick, got: Tick },

    #[error("store clock cannot move back from {current} to {requested}")]
    TimeWentBackwards { current: Tick, requested: Tick },

    #[error("no register available to route to")]
    NoRegisters,

    #[error(transparent)]
    Register(#[from] RegisterError),
}

pub type SimResult<T> = Result<T, SimError>;
