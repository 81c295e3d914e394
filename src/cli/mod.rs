use clap::Parser;

use crate::core::Config;
use crate::models::GenerationConfig;

pub mod commands;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(name = "pwdgen", author, version, about = "Generate random passwords", long_about = None)]
pub struct Args {
    /// Password length (8-128)
    #[arg(long, short, global = true)]
    pub length: Option<usize>,

    /// Leave out lowercase letters
    #[arg(long, global = true)]
    pub no_lowercase: bool,

    /// Leave out uppercase letters
    #[arg(long, global = true)]
    pub no_uppercase: bool,

    /// Leave out digits
    #[arg(long, global = true)]
    pub no_numeric: bool,

    /// Leave out special characters
    #[arg(long, global = true)]
    pub no_special: bool,

    /// Include and require the space character
    #[arg(long, global = true)]
    pub space: bool,

    /// Characters making up the special class
    #[arg(long, global = true)]
    pub special_chars: Option<String>,

    /// Give up after this many rejected candidates
    #[arg(long, global = true)]
    pub max_attempts: Option<usize>,

    /// Seed for a reproducible password (testing only)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Print the result as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Show the estimated strength of the generated password
    #[arg(long, global = true)]
    pub strength: bool,

    /// Command to execute (defaults to generate)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl Args {
    // Command-line flags layered over the loaded configuration. The `--no-*`
    // flags can only switch classes off; `--space` can only switch it on.
    pub fn generation_config(&self, config: &Config) -> GenerationConfig {
        let defaults = &config.generation;

        GenerationConfig {
            length: self.length.unwrap_or(defaults.length),
            lowercase: defaults.lowercase && !self.no_lowercase,
            uppercase: defaults.uppercase && !self.no_uppercase,
            numeric: defaults.numeric && !self.no_numeric,
            special: defaults.special && !self.no_special,
            space: defaults.space || self.space,
            special_chars: self
                .special_chars
                .clone()
                .unwrap_or_else(|| defaults.special_chars.clone()),
        }
    }

    pub fn max_attempts(&self, config: &Config) -> usize {
        self.max_attempts.unwrap_or(config.max_attempts)
    }

    // Loggable view of the arguments. The validate candidate is a password
    // and never appears here.
    pub fn log_summary(&self) -> String {
        let command = match &self.command {
            None | Some(CliCommand::Generate) => "generate",
            Some(CliCommand::Validate { .. }) => "validate",
        };
        format!(
            "{} length={:?} seed={:?} json={} strength={}",
            command, self.length, self.seed, self.json, self.strength
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn flags_override_config() {
        let args = Args::parse_from(["pwdgen", "-l", "20", "--no-special", "--space", "--max-attempts", "7"]);
        let config = Config::default();
        let generation = args.generation_config(&config);

        assert_eq!(generation.length, 20);
        assert!(generation.lowercase && generation.uppercase && generation.numeric);
        assert!(!generation.special);
        assert!(generation.space);
        assert_eq!(args.max_attempts(&config), 7);
    }

    #[test]
    fn config_defaults_when_no_flags() {
        let args = Args::parse_from(["pwdgen"]);
        let mut config = Config::default();
        config.generation.numeric = false;
        config.max_attempts = 3;

        let generation = args.generation_config(&config);
        assert!(!generation.numeric);
        assert_eq!(args.max_attempts(&config), 3);
        assert!(args.command.is_none());
    }

    #[test]
    fn class_flags_after_validate_subcommand() {
        let args = Args::parse_from(["pwdgen", "validate", "abcDEF12", "--no-special"]);
        assert!(args.no_special);
        assert!(matches!(args.command, Some(CliCommand::Validate { ref candidate }) if candidate == "abcDEF12"));
    }

    #[test]
    fn seed_and_strength_after_generate_subcommand() {
        let args = Args::parse_from(["pwdgen", "generate", "--seed", "1", "--strength"]);
        assert_eq!(args.seed, Some(1));
        assert!(args.strength);
        assert!(matches!(args.command, Some(CliCommand::Generate)));
    }

    #[test]
    fn environment_is_left_to_config() {
        // Only Config reads PWDGEN_* so a bad value is logged and ignored
        // rather than rejected by the parser.
        let command = Args::command();
        assert!(command.get_arguments().all(|arg| arg.get_env().is_none()));
    }

    #[test]
    fn log_summary_hides_candidate() {
        let args = Args::parse_from(["pwdgen", "validate", "hunter2-Secret!"]);
        let summary = args.log_summary();
        assert!(summary.starts_with("validate"));
        assert!(!summary.contains("hunter2"));
    }
}
