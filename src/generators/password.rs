use rand::Rng;

use super::pool::CharacterPool;
use super::{check_length, strength, GenerationError, Result};
use crate::models::{GenerationConfig, Password};

// Longest run of one character a password may contain.
pub const MAX_CONSECUTIVE: usize = 2;

// Redraws allowed for a single position before giving up.
pub const MAX_RETRIES_PER_POSITION: usize = 1000;

pub struct PasswordGenerator {
    pool: CharacterPool,
    length: usize,
}

impl PasswordGenerator {
    pub fn new(config: &GenerationConfig) -> Result<Self> {
        check_length(config.length)?;

        // The pool holds distinct characters only, so this is the real
        // alphabet size.
        let pool = CharacterPool::build(config)?;
        if pool.len() <= 1 {
            return Err(GenerationError::PoolTooSmall { size: pool.len() });
        }

        Ok(Self {
            pool,
            length: config.length,
        })
    }

    pub fn pool(&self) -> &CharacterPool {
        &self.pool
    }

    /// Draws `length` characters uniformly from the pool, redrawing any
    /// character that would extend a run past [`MAX_CONSECUTIVE`].
    ///
    /// No class coverage is guaranteed here; see [`crate::core::driver`].
    pub fn generate_password<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Password> {
        let mut password: Vec<char> = Vec::with_capacity(self.length);

        while password.len() < self.length {
            let position = password.len();
            let mut retries = 0;

            loop {
                let candidate = self.pool.sample(rng);
                if !extends_run(&password, candidate) {
                    password.push(candidate);
                    break;
                }

                retries += 1;
                if retries >= MAX_RETRIES_PER_POSITION {
                    log::warn!("Gave up placing a character at position {}", position);
                    return Err(GenerationError::RetriesExhausted { position });
                }
            }
        }

        Ok(Password::new(password.into_iter().collect()))
    }

    pub fn analyze_password_strength(&self, password: &Password) -> f64 {
        strength::entropy_bits(password.len(), self.pool.len())
    }
}

// True when the last MAX_CONSECUTIVE characters all equal `next`.
fn extends_run(prefix: &[char], next: char) -> bool {
    prefix.len() >= MAX_CONSECUTIVE
        && prefix[prefix.len() - MAX_CONSECUTIVE..]
            .iter()
            .all(|&c| c == next)
}

// One candidate password for `config`
pub fn generate<R: Rng + ?Sized>(config: &GenerationConfig, rng: &mut R) -> Result<Password> {
    PasswordGenerator::new(config)?.generate_password(rng)
}
