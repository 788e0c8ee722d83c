//! The encode / interleave / channel / deinterleave / decode chain

use crate::block::{BlockSplitter, Dimensions};
use crate::channel::{diff, BitFlip, Channel, FixedFlipChannel};
use crate::fec::{ErrorStats, FecEncoder, RepetitionCode};
use crate::interleave::{BlockInterleaver, Interleaver};
use crate::Result;
use fecsim_core::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// The three numeric pipeline parameters, validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineParams {
    code: RepetitionCode,
    dims: Dimensions,
}

impl PipelineParams {
    /// Validate redundancy order `n`, word length `m` and depth `t`
    pub fn new(redundancy: usize, word_length: usize, depth: usize) -> Result<Self> {
        Ok(Self {
            code: RepetitionCode::new(redundancy)?,
            dims: Dimensions::new(word_length, depth)?,
        })
    }

    pub fn redundancy(&self) -> usize {
        self.code.order()
    }

    pub fn word_length(&self) -> usize {
        self.dims.word_length()
    }

    pub fn depth(&self) -> usize {
        self.dims.depth()
    }

    pub fn group_size(&self) -> usize {
        self.dims.group_size()
    }
}

/// Whether the decoded frame reproduces the original
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
}

/// Every intermediate value of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineTrace {
    pub redundancy: usize,
    pub word_length: usize,
    pub depth: usize,
    /// A: the frame as supplied
    pub original: BitFrame,
    /// B: after repetition
    pub redundant: BitFrame,
    /// B padded with zeros to a whole number of groups
    pub padded: BitFrame,
    pub groups: Vec<BitFrame>,
    /// The `t` sub-words of each group
    pub sub_words: Vec<Vec<BitFrame>>,
    /// C: each group interleaved and concatenated
    pub interleaved: Vec<BitFrame>,
    /// D: each interleaved group after the channel
    pub corrupted: Vec<BitFrame>,
    /// Bits the channel changed, per group
    pub flips: Vec<Vec<BitFlip>>,
    /// E: each corrupted group deinterleaved
    pub deinterleaved: Vec<BitFrame>,
    pub reconstituted: BitFrame,
    /// F: majority decoded, truncated to the original length
    pub decoded: BitFrame,
    pub stats: ErrorStats,
    pub outcome: Outcome,
}

impl PipelineTrace {
    /// Number of zero bits appended by the splitter
    pub fn padding_bits(&self) -> usize {
        self.padded.len() - self.redundant.len()
    }

    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }
}

/// Runs all stages over one frame
#[derive(Debug, Clone, Copy)]
pub struct Pipeline {
    params: PipelineParams,
    splitter: BlockSplitter,
    interleaver: BlockInterleaver,
}

impl Pipeline {
    /// Create a pipeline for the given parameters
    pub fn new(params: PipelineParams) -> Self {
        Self {
            params,
            splitter: BlockSplitter::new(params.dims),
            interleaver: BlockInterleaver::new(params.dims),
        }
    }

    pub fn params(&self) -> PipelineParams {
        self.params
    }

    /// Run through the fixed two-bit-flip channel
    pub fn run(&self, frame: &BitFrame) -> Result<PipelineTrace> {
        self.run_with_channel(frame, &FixedFlipChannel)
    }

    /// Run through an arbitrary channel
    pub fn run_with_channel(&self, frame: &BitFrame, channel: &dyn Channel) -> Result<PipelineTrace> {
        let code = self.params.code;

        let redundant = code.encode(frame)?;
        let (padded, groups) = self.splitter.pad_and_split(&redundant)?;

        let sub_words = groups
            .iter()
            .map(|group| self.splitter.sub_words(group))
            .collect::<Result<Vec<_>>>()?;

        let interleaved = groups
            .iter()
            .map(|group| self.interleaver.interleave(group))
            .collect::<Result<Vec<_>>>()?;
        debug!("Interleaved {} groups", interleaved.len());

        let corrupted = channel.transmit_all(&interleaved);
        let flips: Vec<Vec<BitFlip>> = interleaved
            .iter()
            .zip(&corrupted)
            .map(|(before, after)| diff(before, after))
            .collect();

        let deinterleaved = corrupted
            .iter()
            .map(|group| self.interleaver.deinterleave(group))
            .collect::<Result<Vec<_>>>()?;
        let reconstituted = BitFrame::concat(&deinterleaved);
        debug!("Reconstituted {} bits", reconstituted.len());

        let (decoded, stats) = code.decode_truncated(&reconstituted, frame.len());

        let outcome = if decoded == *frame {
            info!("Decoded frame {} matches the original", decoded);
            Outcome::Success
        } else {
            warn!("Decoded frame {} differs from the original {}", decoded, frame);
            Outcome::Failure
        };

        Ok(PipelineTrace {
            redundancy: self.params.redundancy(),
            word_length: self.params.word_length(),
            depth: self.params.depth(),
            original: frame.clone(),
            redundant,
            padded,
            groups,
            sub_words,
            interleaved,
            corrupted,
            flips,
            deinterleaved,
            reconstituted,
            decoded,
            stats,
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::IdealChannel;
    use crate::FrameError;

    fn frame(text: &str) -> BitFrame {
        BitFrame::parse(text).unwrap()
    }

    fn strings(frames: &[BitFrame]) -> Vec<String> {
        frames.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_params_validation() {
        assert!(PipelineParams::new(3, 3, 2).is_ok());
        assert!(matches!(
            PipelineParams::new(0, 3, 2),
            Err(FrameError::InvalidParameter { name: "redundancy order", value: 0 })
        ));
        assert!(matches!(
            PipelineParams::new(3, 0, 2),
            Err(FrameError::InvalidParameter { name: "word length", value: 0 })
        ));
        assert!(matches!(
            PipelineParams::new(3, 3, 0),
            Err(FrameError::InvalidParameter { name: "depth", value: 0 })
        ));
    }

    #[test]
    fn test_reference_scenario() {
        let pipeline = Pipeline::new(PipelineParams::new(3, 3, 2).unwrap());
        let trace = pipeline.run(&frame("0110")).unwrap();

        assert_eq!(trace.redundant.to_string(), "000111111000");
        assert_eq!(trace.padding_bits(), 0);
        assert_eq!(strings(&trace.groups), vec!["000111", "111000"]);
        assert_eq!(strings(&trace.sub_words[0]), vec!["000", "111"]);
        assert_eq!(strings(&trace.sub_words[1]), vec!["111", "000"]);
        assert_eq!(strings(&trace.interleaved), vec!["010101", "101010"]);
        assert_eq!(strings(&trace.corrupted), vec!["001101", "110010"]);
        assert_eq!(trace.flips[0].iter().map(|f| f.position).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(strings(&trace.deinterleaved), vec!["010011", "101100"]);
        assert_eq!(trace.reconstituted.to_string(), "010011101100");
        assert_eq!(trace.decoded.to_string(), "0110");
        assert_eq!(trace.outcome, Outcome::Success);
        assert_eq!(trace.stats.outvoted_bits, 4);
    }

    #[test]
    fn test_flips_beyond_margin_fail() {
        // With t = 1 interleaving is the identity, so both flips land in
        // the first redundancy window.
        let pipeline = Pipeline::new(PipelineParams::new(3, 6, 1).unwrap());
        let trace = pipeline.run(&frame("01")).unwrap();

        assert_eq!(strings(&trace.corrupted), vec!["011111"]);
        assert_eq!(trace.decoded.to_string(), "11");
        assert_eq!(trace.outcome, Outcome::Failure);
        assert!(!trace.is_success());
    }

    #[test]
    fn test_padding_is_dropped() {
        let pipeline = Pipeline::new(PipelineParams::new(3, 2, 2).unwrap());
        let trace = pipeline.run_with_channel(&frame("10"), &IdealChannel).unwrap();

        assert_eq!(trace.padded.to_string(), "11100000");
        assert_eq!(trace.padding_bits(), 2);
        assert_eq!(trace.decoded.to_string(), "10");
        assert!(trace.is_success());
    }

    #[test]
    fn test_oversized_parameters_are_errors() {
        let pipeline = Pipeline::new(PipelineParams::new(5, usize::MAX, 1).unwrap());
        assert!(matches!(
            pipeline.run(&frame("1")),
            Err(FrameError::FrameTooLarge { .. })
        ));

        let pipeline = Pipeline::new(PipelineParams::new(usize::MAX, 3, 2).unwrap());
        assert!(matches!(
            pipeline.run(&frame("11")),
            Err(FrameError::FrameTooLarge { .. })
        ));
    }

    #[test]
    fn test_empty_frame() {
        let pipeline = Pipeline::new(PipelineParams::new(3, 3, 2).unwrap());
        let trace = pipeline.run(&BitFrame::new()).unwrap();

        assert!(trace.redundant.is_empty());
        assert!(trace.padded.is_empty());
        assert!(trace.groups.is_empty());
        assert!(trace.interleaved.is_empty());
        assert!(trace.corrupted.is_empty());
        assert!(trace.reconstituted.is_empty());
        assert!(trace.decoded.is_empty());
        assert!(trace.is_success());
    }

    #[test]
    fn test_trace_serializes_frames_as_strings() {
        let pipeline = Pipeline::new(PipelineParams::new(3, 3, 2).unwrap());
        let trace = pipeline.run(&frame("0110")).unwrap();
        let json = serde_json::to_value(&trace).unwrap();

        assert_eq!(json["decoded"], "0110");
        assert_eq!(json["interleaved"][1], "101010");
        assert_eq!(json["flips"][0][0]["after"], "0");
        assert_eq!(json["outcome"], "success");
    }
}
