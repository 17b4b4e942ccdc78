use gs_core::{RegisterId, Tick};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegisterError {
    #[error("{register} cannot move back in time from {local} to {requested}")]
    NonMonotonicTime {
        register:  RegisterId,
        local:     Tick,
        requested: Tick,
    },
}

pub type RegisterResult<T> = Result<T, RegisterError>;
