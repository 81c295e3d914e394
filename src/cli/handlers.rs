use anyhow::{Context, Result};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::cli::Args;
use crate::core::{driver, Config};
use crate::generators::strength::{self, StrengthRating};
use crate::generators::PasswordGenerator;
use crate::models::{CharacterClass, Password};
use crate::validation;

#[derive(Debug, Serialize)]
pub struct GenerateOutput {
    pub password: Password,
    pub length: usize,
    pub pool_size: usize,
    pub entropy_bits: f64,
    pub rating: StrengthRating,
}

#[derive(Debug, Serialize)]
pub struct ValidateOutput {
    pub valid: bool,
    pub missing: Vec<CharacterClass>,
}

pub fn handle_generate(args: &Args, config: &Config) -> Result<GenerateOutput> {
    let generation = args.generation_config(config);
    let max_attempts = args.max_attempts(config);

    let mut rng: Box<dyn RngCore> = match args.seed {
        Some(seed) => {
            log::info!("Using seeded generator ({})", seed);
            Box::new(ChaCha8Rng::seed_from_u64(seed))
        }
        None => Box::new(rand::thread_rng()),
    };

    let password = driver::generate_valid(&generation, rng.as_mut(), max_attempts)
        .context("Error generating password")?;

    let generator = PasswordGenerator::new(&generation)?;
    let entropy_bits = generator.analyze_password_strength(&password);

    Ok(GenerateOutput {
        length: password.len(),
        pool_size: generator.pool().len(),
        entropy_bits,
        rating: strength::rate(entropy_bits),
        password,
    })
}

pub fn handle_validate(args: &Args, config: &Config, candidate: &str) -> ValidateOutput {
    let generation = args.generation_config(config);

    ValidateOutput {
        valid: validation::is_valid(&generation, candidate),
        missing: validation::missing_classes(&generation, candidate),
    }
}

pub fn render_generate(output: &GenerateOutput, json: bool, show_strength: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(output)?);
    }

    let mut text = format!("Your password is: {}", output.password.as_str());
    if show_strength {
        text.push_str(&format!(
            "\nStrength: {} ({:.1} bits over {} characters)",
            output.rating, output.entropy_bits, output.pool_size
        ));
    }
    Ok(text)
}

pub fn render_validate(output: &ValidateOutput, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(output)?);
    }

    if output.valid {
        Ok("✅ Password contains every required character class".to_string())
    } else {
        let missing: Vec<String> = output.missing.iter().map(ToString::to_string).collect();
        Ok(format!("❌ Password is missing: {}", missing.join(", ")))
    }
}
