//! Flag-driven simulation runs

use anyhow::Result;
use clap::Parser;
use fecsim_frame::prelude::*;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use crate::common::ReportFormat;
use crate::config::SimulationConfig;
use crate::render;

/// Run the pipeline on a frame given on the command line
#[derive(Parser, Debug, Clone, Default)]
pub struct RunArgs {
    /// Binary frame to transmit, e.g. 0110
    pub frame: Option<String>,

    /// Redundancy order n (copies per bit)
    #[arg(short = 'n', long)]
    pub redundancy: Option<usize>,

    /// Word length m (bits per sub-word)
    #[arg(short = 'm', long)]
    pub word_length: Option<usize>,

    /// Depth t (sub-words per interleaving group)
    #[arg(short = 't', long)]
    pub depth: Option<usize>,

    /// Configuration file (TOML or JSON) supplying any value not given as a flag
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the resolved configuration to this file
    #[arg(long, value_name = "FILE")]
    pub save_config: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Bypass the corrupting channel
    #[arg(long)]
    pub no_channel: bool,
}

impl RunArgs {
    /// Merge flags over the config file over the defaults
    pub fn resolve(&self) -> Result<SimulationConfig> {
        let base = match &self.config {
            Some(path) => {
                info!("Loading configuration from {:?}", path);
                SimulationConfig::from_file(path)?
            }
            None => SimulationConfig::default(),
        };

        Ok(SimulationConfig {
            frame: self.frame.clone().unwrap_or(base.frame),
            redundancy: self.redundancy.unwrap_or(base.redundancy),
            word_length: self.word_length.unwrap_or(base.word_length),
            depth: self.depth.unwrap_or(base.depth),
        })
    }
}

/// A validated simulation ready to run
pub struct Simulation {
    frame: BitFrame,
    pipeline: Pipeline,
    channel: Box<dyn Channel>,
}

impl Simulation {
    /// Validate `config`; nothing runs if the frame or a parameter is invalid
    pub fn new(config: &SimulationConfig) -> Result<Self> {
        let (frame, params) = config.validate()?;
        Ok(Self {
            frame,
            pipeline: Pipeline::new(params),
            channel: Box::new(FixedFlipChannel),
        })
    }

    /// Replace the corrupting channel with a noise-free one
    pub fn without_channel(mut self) -> Self {
        self.channel = Box::new(IdealChannel);
        self
    }

    /// Run the pipeline and return its trace
    pub fn run(&self) -> Result<PipelineTrace> {
        let params = self.pipeline.params();
        info!(
            "Simulating frame {} with n = {}, m = {}, t = {}",
            self.frame,
            params.redundancy(),
            params.word_length(),
            params.depth()
        );

        Ok(self.pipeline.run_with_channel(&self.frame, self.channel.as_ref())?)
    }

    /// Run the pipeline and render the report
    pub fn report<W: Write>(&self, format: ReportFormat, out: &mut W) -> Result<PipelineTrace> {
        let trace = self.run()?;
        render::render(&trace, format, out)?;
        Ok(trace)
    }
}

/// Execute the `run` subcommand
pub fn execute<W: Write>(args: &RunArgs, out: &mut W) -> Result<PipelineTrace> {
    let config = args.resolve()?;

    let mut simulation = Simulation::new(&config)?;
    if args.no_channel {
        simulation = simulation.without_channel();
    }

    if let Some(path) = &args.save_config {
        config.save_to_file(path)?;
        info!("Saved configuration to {:?}", path);
    }

    simulation.report(args.format, out)
}
