use thiserror::Error;

use crate::models::{CharacterClass, MAX_LENGTH, MIN_LENGTH};

pub mod password;
pub mod pool;
pub mod strength;

pub use password::{generate, PasswordGenerator, MAX_CONSECUTIVE, MAX_RETRIES_PER_POSITION};
pub use pool::CharacterPool;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Password length must be between {min} and {max} (got {length}).")]
    InvalidLength { length: usize, min: usize, max: usize },

    #[error("No character classes selected")]
    NoCharacterClasses,

    #[error("Character class '{0}' is enabled but has no characters")]
    EmptyCharacterClass(CharacterClass),

    #[error("Character pool too small to generate without repeats (size {size})")]
    PoolTooSmall { size: usize },

    #[error("Password length {length} cannot fit {required} required character classes")]
    TooManyRequiredClasses { length: usize, required: usize },

    #[error("Could not place a character at position {position} without a triple repeat")]
    RetriesExhausted { position: usize },

    #[error("No valid password after {attempts} attempts")]
    AttemptsExhausted { attempts: usize },
}

pub type Result<T> = std::result::Result<T, GenerationError>;

pub(crate) fn check_length(length: usize) -> Result<()> {
    if (MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        Ok(())
    } else {
        Err(GenerationError::InvalidLength {
            length,
            min: MIN_LENGTH,
            max: MAX_LENGTH,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_bounds_are_inclusive() {
        assert!(check_length(8).is_ok());
        assert!(check_length(128).is_ok());
        assert!(matches!(check_length(7), Err(GenerationError::InvalidLength { length: 7, .. })));
        assert!(matches!(check_length(129), Err(GenerationError::InvalidLength { length: 129, .. })));
    }

    #[test]
    fn invalid_length_message_names_the_range() {
        let err = check_length(0).unwrap_err();
        assert!(err.to_string().starts_with("Password length must be between 8 and 128"));
    }
}
