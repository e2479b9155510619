//! Password generation settings.

/// Which symbol groups populate the character pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharacterType {
    /// Digits only.
    Numeric,
    /// Letters only.
    Alphabetic,
    /// Letters and digits.
    #[default]
    Alphanumeric,
    /// Letters, digits, and the fixed symbol set.
    AlphanumericWithSymbols,
}

impl CharacterType {
    /// Map a string label to a variant. Unknown labels resolve to the
    /// default so outer layers can pass user input straight through.
    pub fn from_label(label: &str) -> Self {
        match label {
            "numeric" => Self::Numeric,
            "alphabetic" => Self::Alphabetic,
            "alphanumeric" => Self::Alphanumeric,
            "alphanumeric-symbols" => Self::AlphanumericWithSymbols,
            _ => Self::default(),
        }
    }
}

/// Which letter cases populate the character pool. Has no effect on
/// digits or symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    Uppercase,
    Lowercase,
    #[default]
    Mixedcase,
}

impl CaseMode {
    /// Map a string label to a variant, defaulting on unknown labels.
    pub fn from_label(label: &str) -> Self {
        match label {
            "uppercase" => Self::Uppercase,
            "lowercase" => Self::Lowercase,
            "mixedcase" => Self::Mixedcase,
            _ => Self::default(),
        }
    }
}

/// Settings for one generation call. Fields are public and may be mutated
/// between calls; validation happens at generation time.
#[derive(Debug, Clone)]
pub struct Config {
    /// Password length in characters. Zero yields an empty password.
    pub length: usize,
    pub character_type: CharacterType,
    pub case_mode: CaseMode,
}

impl Config {
    /// Settings for a password of `length` characters, with the default
    /// character type and case mode.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    pub fn with_character_type(mut self, character_type: CharacterType) -> Self {
        self.character_type = character_type;
        self
    }

    pub fn with_case_mode(mut self, case_mode: CaseMode) -> Self {
        self.case_mode = case_mode;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            length: 16,
            character_type: CharacterType::default(),
            case_mode: CaseMode::default(),
        }
    }
}
