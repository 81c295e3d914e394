use std::env;
use std::str::FromStr;
use log::LevelFilter;

use crate::core::driver::DEFAULT_MAX_ATTEMPTS;
use crate::models::GenerationConfig;

// Defaults for the command-line tool
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub generation: GenerationConfig,
    pub max_attempts: usize,

    // Logging
    pub log_level: LevelFilter,

    // Problems found while loading, logged once the logger is up
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generation: GenerationConfig::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            log_level: LevelFilter::Warn,
            warnings: Vec::new(),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(length) = parse_var(&lookup, &mut config.warnings, "PWDGEN_LENGTH") {
            config.generation.length = length;
        }

        if let Some(enabled) = parse_var(&lookup, &mut config.warnings, "PWDGEN_LOWERCASE") {
            config.generation.lowercase = enabled;
        }

        if let Some(enabled) = parse_var(&lookup, &mut config.warnings, "PWDGEN_UPPERCASE") {
            config.generation.uppercase = enabled;
        }

        if let Some(enabled) = parse_var(&lookup, &mut config.warnings, "PWDGEN_NUMERIC") {
            config.generation.numeric = enabled;
        }

        if let Some(enabled) = parse_var(&lookup, &mut config.warnings, "PWDGEN_SPECIAL") {
            config.generation.special = enabled;
        }

        if let Some(enabled) = parse_var(&lookup, &mut config.warnings, "PWDGEN_SPACE") {
            config.generation.space = enabled;
        }

        if let Some(chars) = lookup("PWDGEN_SPECIAL_CHARS") {
            config.generation.special_chars = chars;
        }

        if let Some(attempts) = parse_var(&lookup, &mut config.warnings, "PWDGEN_MAX_ATTEMPTS") {
            config.max_attempts = attempts;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => config.warnings.push(format!(
                    "Unknown log level '{}', using {}",
                    level, config.log_level
                )),
            }
        }

        config
    }
}

fn parse_var<F, T>(lookup: &F, warnings: &mut Vec<String>, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warnings.push(format!("Ignoring {}: cannot parse '{}'", key, raw));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config_from(&[]);
        assert_eq!(config.generation, GenerationConfig::default());
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn reads_generation_settings() {
        let config = config_from(&[
            ("PWDGEN_LENGTH", "32"),
            ("PWDGEN_SPECIAL", "false"),
            ("PWDGEN_SPACE", "true"),
            ("PWDGEN_SPECIAL_CHARS", "-_"),
            ("PWDGEN_MAX_ATTEMPTS", "50"),
            ("LOG_LEVEL", "DEBUG"),
        ]);
        assert_eq!(config.generation.length, 32);
        assert!(!config.generation.special);
        assert!(config.generation.space);
        assert_eq!(config.generation.special_chars, "-_");
        assert_eq!(config.max_attempts, 50);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let config = config_from(&[
            ("PWDGEN_LENGTH", "long"),
            ("PWDGEN_UPPERCASE", "yes please"),
            ("LOG_LEVEL", "chatty"),
        ]);
        assert_eq!(config.generation.length, 15);
        assert!(config.generation.uppercase);
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert_eq!(
            config.warnings,
            vec![
                "Ignoring PWDGEN_LENGTH: cannot parse 'long'".to_string(),
                "Ignoring PWDGEN_UPPERCASE: cannot parse 'yes please'".to_string(),
                "Unknown log level 'chatty', using WARN".to_string(),
            ]
        );
    }
}
