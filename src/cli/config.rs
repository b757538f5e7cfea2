use clap::Parser;
use serde::Serialize;

use otter_acts::{
    config::Config,
    structures::timepoint::Time,
    types::err::ConfigError,
};

/// Answers queries about a scenario of actions, agents, and fluents
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The JSON form problem to read
    pub file: Option<std::path::PathBuf>,

    /// The last time to run to, in place of the termination given by the problem
    #[arg(long)]
    pub horizon: Option<Time>,

    /// The most distinct atoms a formula may have for its models to be enumerated
    #[arg(long, default_value_t = 20)]
    pub atom_limit: usize,

    /// The most quasi-models which may be live at once
    #[arg(long, default_value_t = 65_536)]
    pub model_limit: usize,

    /// Time limit for the run, in seconds
    #[arg(short, long, value_parser = |seconds: &str| seconds.parse().map(std::time::Duration::from_secs))]
    pub time_limit: Option<std::time::Duration>,

    /// The most detailed level of log to display
    #[arg(long, default_value_t, value_enum)]
    pub log_level: LogLevel,

    /// Print help as markdown and exit
    #[arg(long, default_value_t = false, hide = true)]
    pub markdown_help: bool,
}

#[derive(Debug, Clone, Copy, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => Self::Off,
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

/// A configuration from the defaults, revised by any arguments given.
pub fn config_from_args(args: &Args) -> Result<Config, ConfigError> {
    let mut the_config = Config::default();

    the_config.atom_limit.set(args.atom_limit)?;
    the_config.model_limit.set(args.model_limit)?;
    if let Some(limit) = args.time_limit {
        the_config.time_limit.set(limit)?;
    }

    Ok(the_config)
}
