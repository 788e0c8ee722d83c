//! Block interleaving for burst error mitigation
//!
//! A group of `m * t` bits is viewed as a `t x m` matrix whose rows are the
//! sub-words. Interleaving reads it column by column, giving `m` columns of
//! `t` bits; deinterleaving writes the columns back and reads row by row.

use crate::block::Dimensions;
use crate::Result;
use fecsim_core::prelude::*;

/// Generic per-group interleaver trait
pub trait Interleaver {
    /// Interleave one group to spread adjacent bits apart
    fn interleave(&self, group: &BitFrame) -> Result<BitFrame>;

    /// Deinterleave one group back into original order
    fn deinterleave(&self, group: &BitFrame) -> Result<BitFrame>;

    /// Number of bits in a group
    fn block_size(&self) -> usize;
}

/// Block (matrix transpose) interleaver
#[derive(Debug, Clone, Copy)]
pub struct BlockInterleaver {
    dims: Dimensions,
}

impl BlockInterleaver {
    /// Create a new block interleaver
    pub fn new(dims: Dimensions) -> Self {
        Self { dims }
    }

    /// Get the block shape
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Interleave a group into its `m` columns of `t` bits.
    ///
    /// Column `j` holds bit `j` of every sub-word, in sub-word order.
    pub fn columns(&self, group: &BitFrame) -> Result<Vec<BitFrame>> {
        self.dims.check_group(group)?;

        let rows = self.dims.depth();
        let cols = self.dims.word_length();
        let mut columns = Vec::with_capacity(cols);

        for col in 0..cols {
            let mut column = BitFrame::with_capacity(rows);
            for row in 0..rows {
                column.push(group[row * cols + col]);
            }
            columns.push(column);
        }

        Ok(columns)
    }

    /// Deinterleave a group into its `t` rows of `m` bits.
    ///
    /// The group is read as `m` consecutive chunks of `t` bits (the columns
    /// produced by [`BlockInterleaver::columns`]); row `i` takes bit `i` of
    /// each chunk in order.
    pub fn rows(&self, group: &BitFrame) -> Result<Vec<BitFrame>> {
        self.dims.check_group(group)?;

        let rows = self.dims.depth();
        let cols = self.dims.word_length();

        // Fill matrix column by column
        let mut matrix = vec![vec![Bit::Zero; cols]; rows];
        let mut index = 0;
        for col in 0..cols {
            for row in matrix.iter_mut() {
                row[col] = group[index];
                index += 1;
            }
        }

        Ok(matrix.into_iter().map(BitFrame::from_bits).collect())
    }
}

impl Interleaver for BlockInterleaver {
    fn interleave(&self, group: &BitFrame) -> Result<BitFrame> {
        Ok(BitFrame::concat(&self.columns(group)?))
    }

    fn deinterleave(&self, group: &BitFrame) -> Result<BitFrame> {
        Ok(BitFrame::concat(&self.rows(group)?))
    }

    fn block_size(&self) -> usize {
        self.dims.group_size()
    }
}
