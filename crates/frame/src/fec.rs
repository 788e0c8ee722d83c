//! Repetition coding with majority-vote decoding

use crate::block::check_frame_size;
use crate::{FrameError, Result};
use fecsim_core::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Generic FEC encoder trait
pub trait FecEncoder {
    /// Encode a frame with redundancy
    fn encode(&self, frame: &BitFrame) -> Result<BitFrame>;

    /// Get the code rate (data bits per transmitted bit)
    fn code_rate(&self) -> f64;

    /// Get the number of redundant bits added for a given input length
    fn overhead_bits(&self, input_len: usize) -> usize;
}

/// Generic FEC decoder trait
pub trait FecDecoder {
    /// Decode a frame, correcting what the code allows
    fn decode(&self, encoded: &BitFrame) -> BitFrame {
        self.decode_with_stats(encoded).0
    }

    /// Decode a frame and report what the decoder saw
    fn decode_with_stats(&self, encoded: &BitFrame) -> (BitFrame, ErrorStats);
}

/// Error correction statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorStats {
    /// Redundancy windows processed, including a short final one
    pub windows: usize,
    /// Bits that lost the vote inside their window
    pub outvoted_bits: usize,
    /// Windows holding at least one outvoted bit
    pub disputed_windows: usize,
    /// Windows with as many ones as zeros; these decode to `0`
    pub ties: usize,
}

/// Repetition code of order `n`: every bit is sent `n` times
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepetitionCode {
    order: usize,
}

impl RepetitionCode {
    /// Create a new repetition code
    pub fn new(order: usize) -> Result<Self> {
        if order == 0 {
            return Err(FrameError::InvalidParameter {
                name: "redundancy order",
                value: order,
            });
        }

        Ok(Self { order })
    }

    /// Get the redundancy order
    pub fn order(&self) -> usize {
        self.order
    }

    /// Majority vote over one window. Ties go to `0`.
    fn vote(window: &[Bit]) -> Bit {
        let ones = window.iter().filter(|&&b| b == Bit::One).count();
        let zeros = window.len() - ones;
        if ones > zeros {
            Bit::One
        } else {
            Bit::Zero
        }
    }

    /// Decode and keep only the first `original_len` bits
    pub fn decode_truncated(&self, encoded: &BitFrame, original_len: usize) -> (BitFrame, ErrorStats) {
        let (mut decoded, stats) = self.decode_with_stats(encoded);
        decoded.truncate(original_len);
        (decoded, stats)
    }
}

impl FecEncoder for RepetitionCode {
    fn encode(&self, frame: &BitFrame) -> Result<BitFrame> {
        let encoded_len = check_frame_size(frame.len().checked_mul(self.order))?;
        let mut encoded = BitFrame::with_capacity(encoded_len);
        for &bit in frame {
            encoded.extend(std::iter::repeat(bit).take(self.order));
        }

        debug!("Repetition x{}: {} -> {} bits", self.order, frame.len(), encoded.len());
        Ok(encoded)
    }

    fn code_rate(&self) -> f64 {
        1.0 / self.order as f64
    }

    fn overhead_bits(&self, input_len: usize) -> usize {
        input_len.saturating_mul(self.order - 1)
    }
}

impl FecDecoder for RepetitionCode {
    fn decode_with_stats(&self, encoded: &BitFrame) -> (BitFrame, ErrorStats) {
        let mut stats = ErrorStats::default();
        let mut decoded = BitFrame::with_capacity(encoded.len().div_ceil(self.order));

        for window in encoded.bits().chunks(self.order) {
            let bit = Self::vote(window);
            let outvoted = window.iter().filter(|&&b| b != bit).count();

            stats.windows += 1;
            if outvoted > 0 {
                stats.outvoted_bits += outvoted;
                stats.disputed_windows += 1;
            }
            if outvoted * 2 == window.len() {
                stats.ties += 1;
            }

            decoded.push(bit);
        }

        debug!(
            "Majority decode x{}: {} windows, {} outvoted bits, {} ties",
            self.order, stats.windows, stats.outvoted_bits, stats.ties
        );
        (decoded, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::MAX_FRAME_BITS;

    fn frame(text: &str) -> BitFrame {
        BitFrame::parse(text).unwrap()
    }

    #[test]
    fn test_repetition_creation() {
        let code = RepetitionCode::new(3).unwrap();
        assert_eq!(code.order(), 3);
        assert!((code.code_rate() - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(code.overhead_bits(4), 8);
    }

    #[test]
    fn test_invalid_order() {
        assert_eq!(
            RepetitionCode::new(0),
            Err(FrameError::InvalidParameter { name: "redundancy order", value: 0 })
        );
    }

    #[test]
    fn test_encode() {
        let code = RepetitionCode::new(3).unwrap();
        assert_eq!(code.encode(&frame("0110")).unwrap().to_string(), "000111111000");
        assert_eq!(code.encode(&frame("")).unwrap().to_string(), "");
    }

    #[test]
    fn test_oversized_encoding() {
        let code = RepetitionCode::new(usize::MAX).unwrap();
        assert_eq!(
            code.encode(&frame("11")),
            Err(FrameError::FrameTooLarge { limit: MAX_FRAME_BITS })
        );

        let code = RepetitionCode::new(MAX_FRAME_BITS).unwrap();
        assert!(code.encode(&frame("1")).is_ok());
        assert!(code.encode(&frame("10")).is_err());
    }

    #[test]
    fn test_order_one_is_identity() {
        let code = RepetitionCode::new(1).unwrap();
        let data = frame("10110");
        assert_eq!(code.encode(&data).unwrap(), data);
        assert_eq!(code.decode(&data), data);
    }

    #[test]
    fn test_majority_corrects_single_error() {
        let code = RepetitionCode::new(3).unwrap();
        let (decoded, stats) = code.decode_with_stats(&frame("010011101100"));
        assert_eq!(decoded.to_string(), "0110");
        assert_eq!(stats.windows, 4);
        assert_eq!(stats.outvoted_bits, 4);
        assert_eq!(stats.disputed_windows, 4);
        assert_eq!(stats.ties, 0);
    }

    #[test]
    fn test_tie_decodes_to_zero() {
        let code = RepetitionCode::new(4).unwrap();
        let (decoded, stats) = code.decode_with_stats(&frame("0011"));
        assert_eq!(decoded.to_string(), "0");
        assert_eq!(stats.ties, 1);

        assert_eq!(code.decode(&frame("1100")).to_string(), "0");
        assert_eq!(code.decode(&frame("1101")).to_string(), "1");
    }

    #[test]
    fn test_partial_window_still_votes() {
        let code = RepetitionCode::new(3).unwrap();
        // Last window holds only "11"
        assert_eq!(code.decode(&frame("00011")).to_string(), "01");
        // Last window holds only "1"
        assert_eq!(code.decode(&frame("0001")).to_string(), "01");
        // Last window "10" is a tie
        assert_eq!(code.decode(&frame("11110")).to_string(), "10");
    }

    #[test]
    fn test_decode_truncated_drops_padding() {
        let code = RepetitionCode::new(2).unwrap();
        let (decoded, _) = code.decode_truncated(&frame("1100110000"), 3);
        assert_eq!(decoded.to_string(), "101");
    }
}
