use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};

/// Arguments of the `lotto` binary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub amount: Option<u64>,
    pub seed: Option<u64>,
    pub json: bool,
    pub verbose: u8,
}

pub fn command() -> Command {
    Command::new("lotto")
        .version(clap::crate_version!())
        .about("Buy lotto tickets, draw the winning numbers and see what they paid")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("TOML run file with amount, seed, manual, winning and bonus"),
        )
        .arg(
            Arg::new("amount")
                .long("amount")
                .short('a')
                .value_parser(value_parser!(u64))
                .help("Purchase amount, overrides the run file"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .short('s')
                .value_parser(value_parser!(u64))
                .help("Seed for automatic tickets, overrides the run file"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the report as JSON"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .help("Set verbose output level"),
        )
}

impl CliArgs {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            config: matches.get_one::<PathBuf>("config").cloned(),
            amount: matches.get_one::<u64>("amount").copied(),
            seed: matches.get_one::<u64>("seed").copied(),
            json: matches.get_flag("json"),
            verbose: matches.get_count("verbose"),
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
