//! Character pool building for password generation.

use crate::config::{CaseMode, CharacterType, Config};

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";

/// The fixed symbol set used by [`CharacterType::AlphanumericWithSymbols`].
pub const SYMBOLS: &str = "!@#$%^&*";

/// Build the character pool for one generation call.
///
/// Group order is fixed (digits, lowercase, uppercase, symbols), so the
/// pool is deterministic for a given config and contains no duplicates.
/// All characters are ASCII.
pub fn build(config: &Config) -> Vec<u8> {
    let mut chars: Vec<u8> = Vec::with_capacity(size(config));

    if wants_digits(config.character_type) {
        chars.extend(DIGITS.bytes());
    }

    if wants_letters(config.character_type) {
        if config.case_mode != CaseMode::Uppercase {
            chars.extend(LOWERCASE.bytes());
        }
        if config.case_mode != CaseMode::Lowercase {
            chars.extend(UPPERCASE.bytes());
        }
    }

    if config.character_type == CharacterType::AlphanumericWithSymbols {
        chars.extend(SYMBOLS.bytes());
    }

    chars
}

/// Calculate the effective pool size without building the pool.
pub fn size(config: &Config) -> usize {
    let mut size = 0;
    if wants_digits(config.character_type) {
        size += DIGITS.len();
    }
    if wants_letters(config.character_type) {
        size += match config.case_mode {
            CaseMode::Mixedcase => LOWERCASE.len() + UPPERCASE.len(),
            CaseMode::Uppercase | CaseMode::Lowercase => LOWERCASE.len(),
        };
    }
    if config.character_type == CharacterType::AlphanumericWithSymbols {
        size += SYMBOLS.len();
    }
    size
}

/// Estimated password entropy in bits: `length * log2(pool size)`.
pub fn entropy_bits(config: &Config) -> f64 {
    let size = size(config);
    if size == 0 {
        return 0.0;
    }
    config.length as f64 * (size as f64).log2()
}

fn wants_digits(character_type: CharacterType) -> bool {
    matches!(
        character_type,
        CharacterType::Numeric | CharacterType::Alphanumeric | CharacterType::AlphanumericWithSymbols
    )
}

fn wants_letters(character_type: CharacterType) -> bool {
    matches!(
        character_type,
        CharacterType::Alphabetic | CharacterType::Alphanumeric | CharacterType::AlphanumericWithSymbols
    )
}
