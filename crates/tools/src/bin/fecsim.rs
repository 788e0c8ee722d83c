//! fecsim - Repetition coding and interleaving simulator
//!
//! Encodes a binary frame with redundancy, interleaves it, passes it
//! through a channel that inverts two fixed bits per group, then
//! deinterleaves and majority-decodes it.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use tracing::info;

use fecsim_tools::run::{self, RunArgs};
use fecsim_tools::{init_logging, render, Prompter, ReportFormat, Simulation, SimulationConfig};

/// Redundancy and interleaving simulator
#[derive(Parser)]
#[command(name = "fecsim")]
#[command(about = "Simulate repetition coding and block interleaving over a noisy channel")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation from command-line values
    Run(RunArgs),
    /// Ask for each value in turn, then run the simulation
    Interactive {
        /// Report format
        #[arg(long, value_enum, default_value = "text")]
        format: ReportFormat,
    },
    /// Explain the processing stages
    Info,
}

fn show_info() {
    println!("fecsim processes a binary frame in five stages:");
    println!();
    println!("  1. Redundancy: every bit is repeated n times ('0' -> '000' for n = 3).");
    println!("  2. Interleaving: the frame is padded with zeros to a multiple of m*t,");
    println!("     cut into groups of t sub-words of m bits, and each group is read");
    println!("     column by column so neighbouring copies end up far apart.");
    println!("  3. Channel: the 2nd and 3rd bits of every group are inverted.");
    println!("  4. Deinterleaving: each group is put back in its original order.");
    println!("  5. Redundancy removal: each run of n bits is replaced by its majority");
    println!("     bit (ties give 0) and the padding is dropped.");
    println!();
    println!("Combining redundancy with interleaving lets the majority vote repair");
    println!("errors that would otherwise hit several copies of the same bit.");
    println!();
    println!("Examples:");
    println!("  fecsim run 0110 -n 3 -m 3 -t 2");
    println!("  fecsim run 0110 -n 3 -m 3 -t 2 --format json");
    println!("  fecsim run --config sim.toml --no-channel");
    println!("  fecsim interactive");
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.debug)?;
    info!("fecsim starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Run(args) => {
            run::execute(&args, &mut out)?;
        }

        Commands::Interactive { format } => {
            writeln!(out, "=== BINARY FRAME PROCESSING ===")?;
            let stdin = io::stdin();
            let config = Prompter::new(stdin.lock(), &mut out).collect(&SimulationConfig::default())?;

            let trace = Simulation::new(&config)?.run()?;
            writeln!(out)?;
            render::render(&trace, format, &mut out)?;
        }

        Commands::Info => {
            show_info();
        }
    }

    Ok(())
}
