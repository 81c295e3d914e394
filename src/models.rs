use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 128;

pub const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMERIC_CHARS: &str = "0123456789";
pub const DEFAULT_SPECIAL_CHARS: &str = r"!#$%&*@\";
pub const SPACE_CHARS: &str = " ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Numeric,
    Special,
    Space,
}

impl CharacterClass {
    /// Every class, in pool order.
    pub const ALL: [CharacterClass; 5] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Numeric,
        CharacterClass::Special,
        CharacterClass::Space,
    ];

    // Characters belonging to this class. The special set is configurable.
    pub fn chars<'a>(&self, config: &'a GenerationConfig) -> &'a str {
        match self {
            CharacterClass::Lowercase => LOWERCASE_CHARS,
            CharacterClass::Uppercase => UPPERCASE_CHARS,
            CharacterClass::Numeric => NUMERIC_CHARS,
            CharacterClass::Special => &config.special_chars,
            CharacterClass::Space => SPACE_CHARS,
        }
    }

    pub fn matches(&self, c: char, config: &GenerationConfig) -> bool {
        match self {
            CharacterClass::Lowercase => c.is_ascii_lowercase(),
            CharacterClass::Uppercase => c.is_ascii_uppercase(),
            CharacterClass::Numeric => c.is_ascii_digit(),
            CharacterClass::Special => config.special_chars.contains(c),
            CharacterClass::Space => c == ' ',
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterClass::Lowercase => write!(f, "lowercase"),
            CharacterClass::Uppercase => write!(f, "uppercase"),
            CharacterClass::Numeric => write!(f, "numeric"),
            CharacterClass::Special => write!(f, "special"),
            CharacterClass::Space => write!(f, "space"),
        }
    }
}

// Options for a single generation call. A class that is enabled is also
// required to appear in the accepted password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub numeric: bool,
    pub special: bool,
    pub space: bool,
    pub special_chars: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 15,
            lowercase: true,
            uppercase: true,
            numeric: true,
            special: true,
            space: false,
            special_chars: DEFAULT_SPECIAL_CHARS.to_string(),
        }
    }
}

impl GenerationConfig {
    /// A config with every class disabled, to be switched on with the `with_*` methods.
    pub fn empty(length: usize) -> Self {
        Self {
            length,
            lowercase: false,
            uppercase: false,
            numeric: false,
            special: false,
            space: false,
            special_chars: DEFAULT_SPECIAL_CHARS.to_string(),
        }
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn with_class(mut self, class: CharacterClass, enabled: bool) -> Self {
        match class {
            CharacterClass::Lowercase => self.lowercase = enabled,
            CharacterClass::Uppercase => self.uppercase = enabled,
            CharacterClass::Numeric => self.numeric = enabled,
            CharacterClass::Special => self.special = enabled,
            CharacterClass::Space => self.space = enabled,
        }
        self
    }

    pub fn with_special_chars(mut self, special_chars: impl Into<String>) -> Self {
        self.special_chars = special_chars.into();
        self
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Numeric => self.numeric,
            CharacterClass::Special => self.special,
            CharacterClass::Space => self.space,
        }
    }

    pub fn enabled_classes(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.is_enabled(*class))
    }
}

// A generated password. Only the generator builds these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    pub(crate) fn new(value: String) -> Self {
        Password(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    // Number of characters, not bytes
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

}
