//! Prompt-driven collection of simulation inputs

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

use crate::config::SimulationConfig;

/// Asks for the frame and the three parameters one at a time.
///
/// An empty answer keeps the value from `defaults`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Collect a complete, validated configuration
    pub fn collect(&mut self, defaults: &SimulationConfig) -> Result<SimulationConfig> {
        let frame = self.ask("Binary frame (e.g. 0110)", &defaults.frame)?;
        let redundancy = self.ask_number("Redundancy order n", defaults.redundancy)?;
        let word_length = self.ask_number("Word length m", defaults.word_length)?;
        let depth = self.ask_number("Depth t (sub-words per group)", defaults.depth)?;

        let config = SimulationConfig {
            frame,
            redundancy,
            word_length,
            depth,
        };
        config.validate()?;

        debug!("Collected {:?}", config);
        Ok(config)
    }

    /// Hand back the underlying writer
    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, question: &str, default: &str) -> Result<String> {
        write!(self.output, "{} [{}]: ", question, default)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            anyhow::bail!("Input closed while waiting for: {}", question);
        }

        let answer = line.trim();
        Ok(if answer.is_empty() {
            default.to_string()
        } else {
            answer.to_string()
        })
    }

    fn ask_number(&mut self, question: &str, default: usize) -> Result<usize> {
        let answer = self.ask(question, &default.to_string())?;
        answer
            .parse::<usize>()
            .with_context(|| format!("{}: {:?} is not a positive integer", question, answer))
    }
}
