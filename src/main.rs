use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mandelbrot_render::{CliArgs, RenderController, RenderError, presenter_for_path};

fn run(args: CliArgs) -> Result<(), RenderError> {
    let config = args.into_config()?;
    let mut controller = RenderController::new(presenter_for_path(&config.output));

    controller.generate(&config)?;
    controller.write(&config.output)?;

    Ok(())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
