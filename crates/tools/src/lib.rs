//! fecsim Tools library

pub mod common;
pub mod config;
pub mod interactive;
pub mod render;
pub mod run;

pub use common::{init_logging, ReportFormat};
pub use config::SimulationConfig;
pub use interactive::Prompter;
pub use run::{RunArgs, Simulation};
