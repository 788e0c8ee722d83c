//! Transmission channel models

use fecsim_core::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A channel carries one interleaved group and may corrupt it
pub trait Channel {
    /// Pass a group through the channel
    fn transmit(&self, group: &BitFrame) -> BitFrame;

    /// Pass every group through the channel, in order
    fn transmit_all(&self, groups: &[BitFrame]) -> Vec<BitFrame> {
        groups.iter().map(|group| self.transmit(group)).collect()
    }
}

/// Deterministic channel that inverts the bits at indices 1 and 2 of
/// every group, where those indices exist.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedFlipChannel;

impl FixedFlipChannel {
    /// Zero-based indices inverted in each group
    pub const FLIP_POSITIONS: [usize; 2] = [1, 2];
}

impl Channel for FixedFlipChannel {
    fn transmit(&self, group: &BitFrame) -> BitFrame {
        let mut corrupted = group.clone();
        for &position in &Self::FLIP_POSITIONS {
            if position < corrupted.len() {
                corrupted[position] = corrupted[position].flipped();
            }
        }

        debug!("Channel: {} -> {}", group, corrupted);
        corrupted
    }
}

/// Noise-free channel
#[derive(Debug, Clone, Copy, Default)]
pub struct IdealChannel;

impl Channel for IdealChannel {
    fn transmit(&self, group: &BitFrame) -> BitFrame {
        group.clone()
    }
}

/// A single bit changed by the channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitFlip {
    /// Zero-based index within the group
    pub position: usize,
    pub before: Bit,
    pub after: Bit,
}

/// Positions where two groups differ, compared over their common length
pub fn diff(before: &BitFrame, after: &BitFrame) -> Vec<BitFlip> {
    before
        .iter()
        .zip(after.iter())
        .enumerate()
        .filter(|(_, (b, a))| b != a)
        .map(|(position, (&before, &after))| BitFlip {
            position,
            before,
            after,
        })
        .collect()
}
