//! Errors surfaced by the simulation runtime.
//!
//! Wraps worker pool failures and battle capacity overflows so the binary can
//! bubble them up with consistent context.
use battle_core::{CapacityError, ErrorSeverity, GameError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("simulation requires at least one iteration")]
    NoIterations,

    #[error("failed to build worker thread pool")]
    ThreadPool(#[source] rayon::ThreadPoolBuildError),

    #[error("failed to set up battle state")]
    Setup(#[source] CapacityError),

    #[error("worker {worker} aborted")]
    Battle {
        worker: usize,
        #[source]
        source: CapacityError,
    },
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoIterations => ErrorSeverity::Validation,
            Self::ThreadPool(_) => ErrorSeverity::Internal,
            Self::Setup(_) | Self::Battle { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoIterations => "RUNTIME_NO_ITERATIONS",
            Self::ThreadPool(_) => "RUNTIME_THREAD_POOL",
            Self::Setup(_) => "RUNTIME_SETUP",
            Self::Battle { .. } => "RUNTIME_BATTLE",
        }
    }
}
