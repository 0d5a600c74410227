//! Command line front end for the demon simulator.
//!
//! This crate is the composition root: it layers settings, loads content
//! through [`battle_content::ContentFactory`], runs a
//! [`battle_runtime::Simulation`] and renders the report.
pub mod app;
pub mod cli;
pub mod logging;
pub mod report;
pub mod settings;

pub use app::run;
pub use cli::Cli;
pub use settings::Settings;
