use clap::Parser;
use edgekit::AppError;
use edgekit::cli::dispatcher::{Dispatcher, flush_output};
use edgekit::cli::main_types::Cli;
use edgekit::storage::config::Config;
use edgekit::utils::logging::init_logging;
use std::path::Path;
use tracing::debug;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli
        .config_dir
        .as_ref()
        .map(|dir| Config::path_in(Path::new(dir)))
        .or_else(|| Config::default_path().ok());

    let config = match Config::load(config_path.clone()) {
        Ok(config) => config,
        Err(err) => {
            report_error(&err);
            std::process::exit(1);
        }
    };

    if let Some(path) = &config_path {
        debug!(path = %path.display(), "using configuration file");
    }

    let dispatcher = Dispatcher::new(config, config_path, !cli.no_color);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = dispatcher
        .dispatch(cli.command, &mut out)
        .and_then(|()| flush_output(&mut out));

    if let Err(err) = result {
        report_error(&err);
        std::process::exit(1);
    }
}

fn report_error(err: &AppError) {
    eprintln!("{}: {}", err.severity().label(), err);
    if let Some(hint) = err.troubleshooting_hint() {
        eprintln!("hint: {}", hint);
    }
}
