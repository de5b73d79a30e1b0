mod app;
mod clock;
mod command;
mod config;
mod consts;
mod game;
mod logging;
mod store;
mod util;
use crate::app::App;
use crate::config::Config;
use crate::game::Game;
use crate::store::{FileStore, KeyValueStore, MemoryStore};
use anyhow::Context;
use lexopt::{Arg, Parser};
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = concat!(
    "Usage: snakegrid [-c|--config <FILE>]\n",
    "\n",
    "Play Snake in your terminal\n",
    "\n",
    "Options:\n",
    "  -c, --config <FILE>   Read configuration from the given file\n",
    "  -h, --help            Show this help message and exit\n",
    "  -V, --version         Show the program version and exit\n",
);

#[derive(Clone, Debug, Eq, PartialEq)]
enum Cli {
    Run { config: Option<PathBuf> },
    Help,
    Version,
}

impl Cli {
    fn from_parser(mut parser: Parser) -> Result<Cli, lexopt::Error> {
        let mut config = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Cli::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Cli::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Cli::Run { config })
    }

    fn run(self) -> ExitCode {
        match self {
            Cli::Run { config } => {
                let store = match setup(config) {
                    Ok(store) => store,
                    Err(e) => {
                        eprintln!("snakegrid: {e:?}");
                        return ExitCode::from(2);
                    }
                };
                let terminal = ratatui::init();
                let r = App::new(Game::new(store)).run(terminal);
                ratatui::restore();
                io_exit(r)
            }
            Cli::Help => {
                print!("{USAGE}");
                ExitCode::SUCCESS
            }
            Cli::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                ExitCode::SUCCESS
            }
        }
    }
}

/// Read the configuration, start logging, and open the high score store
fn setup(config_path: Option<PathBuf>) -> anyhow::Result<Box<dyn KeyValueStore>> {
    let config = match config_path {
        Some(path) => Config::load(&path, false)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load(&Config::default_path()?, true)?,
    };
    logging::init(&config.logging)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting snakegrid");
    Ok(open_store(&config))
}

/// Open the store named by the configuration.  A store that cannot be read
/// is replaced with an empty one, and with saving disabled nothing touches
/// the disk.
fn open_store(config: &Config) -> Box<dyn KeyValueStore> {
    let Some(path) = config.high_score_file() else {
        tracing::info!("High score will not be saved");
        return Box::new(MemoryStore::new());
    };
    match FileStore::load(path.clone()) {
        Ok(store) => {
            tracing::debug!(path = %store.path().display(), "Opened high score file");
            Box::new(store)
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = ?anyhow::Error::new(e),
                "Could not read high score file; starting from zero"
            );
            Box::new(FileStore::empty(path))
        }
    }
}

fn main() -> ExitCode {
    match Cli::from_parser(Parser::from_env()) {
        Ok(cli) => cli.run(),
        Err(e) => {
            eprintln!("snakegrid: {e}\n\n{USAGE}");
            ExitCode::from(2)
        }
    }
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Terminal I/O failed");
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
