//! # rnokpp
//!
//! Validation, decoding and generation of Ukrainian individual taxpayer
//! registration numbers (RNOKPP, "реєстраційний номер облікової картки
//! платника податків").
//!
//! An RNOKPP is ten digits: a five-digit count of days since 31.12.1899, a
//! three-digit sequence number, a gender digit (odd = male, even = female)
//! and a control digit computed from the first nine.
//!
//! ## Quick Start
//!
//! ```rust
//! use rnokpp::*;
//!
//! assert!(is_valid("3652504575"));
//! assert!(!is_valid("1234567890"));
//!
//! let details = get_details("3652504575").unwrap();
//! assert_eq!(details.to_string(), "valid, male, 01.01.2000");
//!
//! assert_eq!(get_details("123456789"), Err(RnokppError::TooShort { len: 9 }));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `generate` (default) | [`Generator`], random identifiers, Kyiv wall clock |

pub mod core;

#[cfg(feature = "generate")]
pub mod generate;

// Re-export at crate root for convenience
pub use crate::core::*;

#[cfg(feature = "generate")]
pub use crate::generate::*;
