use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use logo_forge::cli::Args;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help and --version also land here, on stdout
            let code = if err.use_stderr() { 1 } else { 0 };
            err.print().ok();
            return ExitCode::from(code);
        }
    };

    let config = match args.into_config() {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match logo_forge::run(&config) {
        Ok(report) => {
            info!(
                "done: {} file(s) written, {} warning(s)",
                report.written.len() + usize::from(report.icon.is_some()),
                report.diagnostics.len()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
