use rand::Rng;

use super::{GenerationError, Result};
use crate::models::GenerationConfig;

/// Characters eligible for sampling, in class order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<char>,
}

impl CharacterPool {
    // Concatenate every enabled class. Fails when nothing is enabled or an
    // enabled class has no characters. A character listed twice (within the
    // special set or across classes) keeps only its first slot so sampling
    // stays uniform over distinct characters.
    pub fn build(config: &GenerationConfig) -> Result<Self> {
        let mut chars: Vec<char> = Vec::new();

        for class in config.enabled_classes() {
            let class_chars = class.chars(config);
            if class_chars.is_empty() {
                return Err(GenerationError::EmptyCharacterClass(class));
            }
            for c in class_chars.chars() {
                if !chars.contains(&c) {
                    chars.push(c);
                }
            }
        }

        if chars.is_empty() {
            return Err(GenerationError::NoCharacterClasses);
        }

        Ok(Self { chars })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[cfg(test)]
    pub(crate) fn as_slice(&self) -> &[char] {
        &self.chars
    }

    // Uniform over the whole pool, last element included.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        self.chars[rng.gen_range(0..self.chars.len())]
    }
}
