use rand::Rng;

use crate::generators::{GenerationError, PasswordGenerator, Result};
use crate::models::{GenerationConfig, Password};
use crate::validation;

pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

// Rejects configurations the generate/validate loop could never satisfy and
// returns a generator ready to draw from.
pub fn check_convergent(config: &GenerationConfig) -> Result<PasswordGenerator> {
    let generator = PasswordGenerator::new(config)?;

    let required = config.enabled_classes().count();
    if required > config.length {
        return Err(GenerationError::TooManyRequiredClasses {
            length: config.length,
            required,
        });
    }

    Ok(generator)
}

/// Generates candidates until one contains every enabled class.
///
/// Gives up with [`GenerationError::AttemptsExhausted`] after `max_attempts`
/// rejected candidates.
pub fn generate_valid<R: Rng + ?Sized>(
    config: &GenerationConfig,
    rng: &mut R,
    max_attempts: usize,
) -> Result<Password> {
    let generator = check_convergent(config)?;

    for attempt in 1..=max_attempts {
        let candidate = generator.generate_password(rng)?;

        if validation::is_valid(config, candidate.as_str()) {
            log::debug!("Accepted candidate on attempt {}", attempt);
            return Ok(candidate);
        }

        let missing = validation::missing_classes(config, candidate.as_str());
        log::debug!(
            "Attempt {} rejected, missing: {}",
            attempt,
            missing
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    log::warn!("No valid password after {} attempts", max_attempts);
    Err(GenerationError::AttemptsExhausted {
        attempts: max_attempts,
    })
}

// Entry point for callers that don't care about the random source.
pub fn generate_password(config: &GenerationConfig) -> Result<Password> {
    let mut rng = rand::thread_rng();
    generate_valid(config, &mut rng, DEFAULT_MAX_ATTEMPTS)
}
