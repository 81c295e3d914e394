use anyhow::Result;
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

use pwdgen::cli::{handlers, Args, CliCommand};
use pwdgen::core::Config;
use pwdgen::logging;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    // Load environment variables
    let dotenv_loaded = Path::new(".env").exists() && dotenvy::dotenv().is_ok();

    let args = Args::parse();
    let config = Config::load();

    logging::init(config.log_level)?;
    if dotenv_loaded {
        log::debug!("Loaded .env file");
    }
    for warning in &config.warnings {
        log::warn!("{}", warning);
    }

    log::debug!("Command line args: {}", args.log_summary());
    log::debug!("Loaded config: {:?}", config);

    match &args.command {
        None | Some(CliCommand::Generate) => {
            let output = handlers::handle_generate(&args, &config)?;
            println!("{}", handlers::render_generate(&output, args.json, args.strength)?);
            Ok(ExitCode::SUCCESS)
        }
        Some(CliCommand::Validate { candidate }) => {
            let output = handlers::handle_validate(&args, &config, candidate);
            println!("{}", handlers::render_validate(&output, args.json)?);
            Ok(if output.valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
