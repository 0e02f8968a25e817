//! Balance simulator for Monte Carlo analysis.
//!
//! Plays thousands of games with an automatic player to see how far runs
//! get and which loot the bot ends up taking. Every game goes through the
//! same `Game` state machine the terminal UI uses.

mod config;
mod policy;
mod report;
mod runner;

pub use config::{SelectionPolicy, SimConfig};
pub use policy::{choose_item, AutoPlayer};
pub use report::SimReport;
pub use runner::{run_simulation, simulate_single_run, RunStats};
