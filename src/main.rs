#![warn(clippy::all, rust_2018_idioms)]

use std::io::{self, Write as _};

use lotto::cli::{self, CliArgs};
use lotto::config::RunConfig;
use lotto::input::InputView;
use lotto::output::OutputFormat;

fn main() -> anyhow::Result<()> {
    // .env may carry RUST_LOG, so load it before the logger reads the environment
    let env_file = dotenvy::dotenv();

    let args = CliArgs::from_matches(&cli::command().get_matches());
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    match env_file {
        Ok(path) => log::debug!("Loaded environment from {}", path.display()),
        Err(e) => log::trace!("No .env file loaded: {e}"),
    }

    let config = RunConfig::from_cli(&args)?;
    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let stdin = io::stdin();
    let mut input = InputView::new(stdin.lock(), io::stderr());
    let mut stdout = io::stdout().lock();
    lotto::run(&config, &mut input, &mut stdout, format)?;
    stdout.flush()?;
    Ok(())
}
