//! Monte Carlo orchestration for the demon simulator.
//!
//! This crate turns a resolved [`battle_core::Loadout`] into many independent
//! battles spread across a fixed pool of worker threads, then reduces the
//! per-worker results into one [`Summary`].
//!
//! Modules are organized by responsibility:
//! - [`config`] holds the immutable run configuration
//! - [`stats`] provides the associative outcome accumulators
//! - [`runner`] plays one worker's share of iterations
//! - [`simulation`] hosts the orchestrator that seeds, dispatches and joins
pub mod config;
pub mod error;
pub mod runner;
pub mod simulation;
pub mod stats;

mod pool;

pub use config::SimConfig;
pub use error::{Result, RuntimeError};
pub use runner::{WorkerReport, run_worker};
pub use simulation::{RunReport, Simulation};
pub use stats::{StatRange, Summary};
