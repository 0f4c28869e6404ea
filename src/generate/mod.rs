//! RNOKPP generation.
//!
//! [`Generator`] takes its random source and clock as parameters. The free
//! functions share one process-wide [`StdRng`](rand::rngs::StdRng), seeded
//! once from OS entropy, and read the current day from the Kyiv wall clock.
//!
//! # Example
//!
//! ```
//! use rnokpp::{generate_random_rnokpp_n, is_valid};
//!
//! let numbers = generate_random_rnokpp_n(5).unwrap();
//! assert!(numbers.iter().all(|n| is_valid(&n.to_string())));
//! ```

mod clock;
mod generator;
mod shared;

pub use clock::{Clock, FixedClock, KyivClock, kyiv_date};
pub use generator::Generator;
pub use shared::{generate_random_rnokpp, generate_random_rnokpp_n, generate_rnokpp};
