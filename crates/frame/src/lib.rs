//! fecsim Frame - Repetition coding and block interleaving
//!
//! This crate provides the five pure stages of the simulator: repetition
//! encoding, block splitting with zero padding, block interleaving, a
//! fixed two-position corrupting channel, and deinterleaving followed by
//! majority-vote decoding. [`pipeline::Pipeline`] chains them and records
//! every intermediate frame.

pub mod block;
pub mod channel;
pub mod error;
pub mod fec;
pub mod interleave;
pub mod pipeline;

pub use error::{FrameError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        block::{BlockSplitter, Dimensions},
        channel::{diff, BitFlip, Channel, FixedFlipChannel, IdealChannel},
        error::{FrameError, Result},
        fec::{ErrorStats, FecDecoder, FecEncoder, RepetitionCode},
        interleave::{BlockInterleaver, Interleaver},
        pipeline::{Outcome, Pipeline, PipelineParams, PipelineTrace},
    };
    pub use fecsim_core::prelude::*;
}
