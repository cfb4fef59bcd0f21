use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

use hashpass::cli::{self, handlers::AppContext, Args};
use hashpass::core::config::Config;
use hashpass::logging;

fn main() -> ExitCode {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let (mut config, config_warnings) = Config::load();
    if let Some(data) = &args.data {
        config.data_file = data.clone();
    }

    if let Err(e) = logging::init(&config) {
        eprintln!("⚠️ Logging disabled: {}", e);
    }
    for warning in &config_warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Loaded config: {:?}", config);

    let ctx = match AppContext::new(config) {
        Ok(ctx) => ctx,
        Err(e) => {
            log::error!("Failed to open target file: {}", e);
            eprintln!("❌ Failed to open target file: {}", e);
            return ExitCode::FAILURE;
        }
    };
    log::info!("Using target file {}", ctx.store.path().display());

    match cli::run(args, &ctx) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}
