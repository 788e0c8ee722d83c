//! Block splitting and zero padding

use crate::{FrameError, Result};
use fecsim_core::prelude::*;
use tracing::debug;

/// Upper bound on any intermediate frame, in bits
pub const MAX_FRAME_BITS: usize = 1 << 26;

/// Fail unless `bits` is a representable size within [`MAX_FRAME_BITS`]
pub(crate) fn check_frame_size(bits: Option<usize>) -> Result<usize> {
    match bits {
        Some(bits) if bits <= MAX_FRAME_BITS => Ok(bits),
        _ => Err(FrameError::FrameTooLarge {
            limit: MAX_FRAME_BITS,
        }),
    }
}

/// Interleaving block shape: `depth` sub-words of `word_length` bits each
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    word_length: usize,
    depth: usize,
}

impl Dimensions {
    /// Create validated dimensions
    pub fn new(word_length: usize, depth: usize) -> Result<Self> {
        if word_length == 0 {
            return Err(FrameError::InvalidParameter {
                name: "word length",
                value: word_length,
            });
        }
        if depth == 0 {
            return Err(FrameError::InvalidParameter {
                name: "depth",
                value: depth,
            });
        }
        if word_length.checked_mul(depth).is_none() {
            return Err(FrameError::GroupSizeOverflow { word_length, depth });
        }

        Ok(Self { word_length, depth })
    }

    /// Bits per sub-word (`m`)
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Sub-words per group (`t`)
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Bits per group (`m * t`)
    pub fn group_size(&self) -> usize {
        self.word_length * self.depth
    }

    /// Fail unless `group` holds exactly one block
    pub fn check_group(&self, group: &BitFrame) -> Result<()> {
        if group.len() != self.group_size() {
            return Err(FrameError::DimensionMismatch {
                expected: self.group_size(),
                actual: group.len(),
            });
        }

        Ok(())
    }
}

/// Pads a frame with zeros and cuts it into whole groups
#[derive(Debug, Clone, Copy)]
pub struct BlockSplitter {
    dims: Dimensions,
}

impl BlockSplitter {
    /// Create a splitter for the given block shape
    pub fn new(dims: Dimensions) -> Self {
        Self { dims }
    }

    /// Right-pad with `0` up to the next multiple of the group size.
    ///
    /// A frame that is already a multiple, including the empty frame, is
    /// returned unchanged.
    pub fn pad(&self, frame: &BitFrame) -> Result<BitFrame> {
        let group_size = self.dims.group_size();
        let remainder = frame.len() % group_size;

        let mut padded = frame.clone();
        if remainder != 0 {
            let target = check_frame_size(frame.len().checked_add(group_size - remainder))?;
            padded.resize(target, Bit::Zero);
        }
        Ok(padded)
    }

    /// Pad, then split into consecutive groups of exactly `m * t` bits
    pub fn pad_and_split(&self, frame: &BitFrame) -> Result<(BitFrame, Vec<BitFrame>)> {
        let padded = self.pad(frame)?;
        let groups: Vec<BitFrame> = padded.chunks(self.dims.group_size()).collect();

        debug!(
            "Split {} bits (+{} padding) into {} groups of {}",
            frame.len(),
            padded.len() - frame.len(),
            groups.len(),
            self.dims.group_size()
        );
        Ok((padded, groups))
    }

    /// Break one group into its `t` sub-words of `m` bits
    pub fn sub_words(&self, group: &BitFrame) -> Result<Vec<BitFrame>> {
        self.dims.check_group(group)?;
        Ok(group.chunks(self.dims.word_length()).collect())
    }
}
