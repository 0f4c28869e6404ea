//! RNOKPP types, parsing, checksum, and decoding.
//!
//! This module is always compiled and has no randomness or clock
//! dependencies: every function here is pure.

mod checksum;
mod error;
mod number;
mod types;
mod validation;

pub use checksum::{WEIGHTS, control_digit};
pub use error::*;
pub use number::*;
pub use types::*;
pub use validation::*;
