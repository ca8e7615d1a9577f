use std::any::type_name;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("State not found: {name}")]
    StateNotFound { name: &'static str },
    #[error("Compute not found: {name}")]
    ComputeNotFound { name: &'static str },
    #[error("Command not found: {name}")]
    CommandNotFound { name: &'static str },
}

impl Error {
    pub fn state_not_found<T>() -> Self {
        Self::StateNotFound {
            name: type_name::<T>(),
        }
    }

    pub fn compute_not_found<T>() -> Self {
        Self::ComputeNotFound {
            name: type_name::<T>(),
        }
    }

    pub fn command_not_found<T>() -> Self {
        Self::CommandNotFound {
            name: type_name::<T>(),
        }
    }
}
