use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password
    Generate,

    /// Check a password against the selected character classes
    Validate {
        /// Password to check
        #[arg(required = true)]
        candidate: String,
    },
}
