//! Configurable password generation.
//!
//! A [`Config`] selects which symbol groups populate the character pool
//! (digits, letters, symbols) and which letter cases are allowed. A
//! [`Generator`] samples that pool uniformly through an injected
//! [`RandomSource`], so production code runs on OS entropy while tests swap
//! in a deterministic source.
//!
//! ```
//! use genpass::{CharacterType, Config, Generator};
//!
//! let config = Config::new(24).with_character_type(CharacterType::AlphanumericWithSymbols);
//! let password = Generator::new().generate(&config)?;
//! assert_eq!(password.len(), 24);
//! # Ok::<(), genpass::Error>(())
//! ```

pub mod config;
mod error;
pub mod pass;
pub mod source;

pub use config::{CaseMode, CharacterType, Config};
pub use error::Error;
pub use pass::Generator;
pub use source::{OsEntropy, RandomSource, RngSource};
