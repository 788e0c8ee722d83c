//! fecsim Core - Bit and frame value types
//!
//! This crate provides the symbol-level building blocks shared by the
//! redundancy/interleaving pipeline and its front-ends: single bits,
//! ordered bit frames and the validation errors raised while parsing them.

pub mod bit;
pub mod buffer;
pub mod error;

pub use error::{CoreError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        bit::Bit,
        buffer::BitFrame,
        error::{CoreError, Result},
    };
}
