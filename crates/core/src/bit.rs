//! Single binary symbol

use crate::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A binary symbol, rendered as `'0'` or `'1'`.
///
/// Bits are symbols rather than numbers: the only operations the pipeline
/// needs are comparison and inversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bit {
    #[default]
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "1")]
    One,
}

impl Bit {
    /// Parse a single character, reporting `position` on failure
    pub fn from_char(symbol: char, position: usize) -> Result<Self> {
        match symbol {
            '0' => Ok(Bit::Zero),
            '1' => Ok(Bit::One),
            _ => Err(CoreError::InvalidFrame { position, symbol }),
        }
    }

    /// Character representation
    pub fn as_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }

    /// The opposite symbol
    pub fn flipped(self) -> Self {
        match self {
            Bit::Zero => Bit::One,
            Bit::One => Bit::Zero,
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char() {
        assert_eq!(Bit::from_char('0', 0).unwrap(), Bit::Zero);
        assert_eq!(Bit::from_char('1', 0).unwrap(), Bit::One);
        assert_eq!(
            Bit::from_char('2', 7),
            Err(CoreError::InvalidFrame { position: 7, symbol: '2' })
        );
    }

    #[test]
    fn test_flip() {
        assert_eq!(Bit::Zero.flipped(), Bit::One);
        assert_eq!(Bit::One.flipped(), Bit::Zero);
        assert_eq!(Bit::One.flipped().flipped(), Bit::One);
    }

    #[test]
    fn test_serde_as_symbol() {
        assert_eq!(serde_json::to_string(&Bit::One).unwrap(), "\"1\"");
        let bit: Bit = serde_json::from_str("\"0\"").unwrap();
        assert_eq!(bit, Bit::Zero);
    }
}
