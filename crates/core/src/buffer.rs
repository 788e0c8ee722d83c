//! Bit frame storage and operations

use crate::{bit::Bit, CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// An ordered sequence of bits.
///
/// Frames render and serialize as plain `'0'`/`'1'` strings, which is the
/// interchange format for every stage of the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct BitFrame {
    data: Vec<Bit>,
}

impl BitFrame {
    /// Create an empty frame
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty frame with room for `capacity` bits
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a frame from existing bits
    pub fn from_bits(data: Vec<Bit>) -> Self {
        Self { data }
    }

    /// Parse a `'0'`/`'1'` string. The empty string is a valid, empty frame.
    pub fn parse(text: &str) -> Result<Self> {
        let data = text
            .chars()
            .enumerate()
            .map(|(position, symbol)| Bit::from_char(symbol, position))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { data })
    }

    /// Parse user input: like [`BitFrame::parse`] but rejects an empty frame
    pub fn parse_non_empty(text: &str) -> Result<Self> {
        let frame = Self::parse(text)?;
        if frame.is_empty() {
            return Err(CoreError::EmptyFrame);
        }

        Ok(frame)
    }

    /// Get the number of bits
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the frame is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a reference to the underlying bits
    pub fn bits(&self) -> &[Bit] {
        &self.data
    }

    /// Iterate over the bits in order
    pub fn iter(&self) -> std::slice::Iter<'_, Bit> {
        self.data.iter()
    }

    /// Append a single bit
    pub fn push(&mut self, bit: Bit) {
        self.data.push(bit);
    }

    /// Append the bits of another frame
    pub fn extend_from_frame(&mut self, other: &BitFrame) {
        self.data.extend_from_slice(&other.data);
    }

    /// Resize the frame, filling new positions with `fill`
    pub fn resize(&mut self, new_len: usize, fill: Bit) {
        self.data.resize(new_len, fill);
    }

    /// Keep at most the first `len` bits
    pub fn truncate(&mut self, len: usize) {
        self.data.truncate(len);
    }

    /// Count the occurrences of `bit`
    pub fn count(&self, bit: Bit) -> usize {
        self.data.iter().filter(|&&b| b == bit).count()
    }

    /// Split into consecutive frames of `size` bits; the last may be shorter.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn chunks(&self, size: usize) -> impl Iterator<Item = BitFrame> + '_ {
        self.data.chunks(size).map(|chunk| BitFrame::from_bits(chunk.to_vec()))
    }

    /// Concatenate frames in order
    pub fn concat<'a, I>(frames: I) -> BitFrame
    where
        I: IntoIterator<Item = &'a BitFrame>,
    {
        let mut joined = BitFrame::new();
        for frame in frames {
            joined.extend_from_frame(frame);
        }
        joined
    }
}

impl Index<usize> for BitFrame {
    type Output = Bit;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl IndexMut<usize> for BitFrame {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl FromIterator<Bit> for BitFrame {
    fn from_iter<I: IntoIterator<Item = Bit>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl Extend<Bit> for BitFrame {
    fn extend<I: IntoIterator<Item = Bit>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl<'a> IntoIterator for &'a BitFrame {
    type Item = &'a Bit;
    type IntoIter = std::slice::Iter<'a, Bit>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl fmt::Display for BitFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.data.iter().map(|bit| bit.as_char()).collect();
        f.pad(&text)
    }
}

impl FromStr for BitFrame {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<BitFrame> for String {
    fn from(frame: BitFrame) -> Self {
        frame.to_string()
    }
}

impl TryFrom<String> for BitFrame {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}
