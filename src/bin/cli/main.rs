//! CLI tool for browsing a ZIP archive as a filesystem.

mod exit_codes;
mod repl;

use clap::Parser;
use std::path::PathBuf;

use env_logger::Env;
use zipvfs::{Config, Shell};

use exit_codes::{ExitCode, error_to_exit_code};

/// Shell over a ZIP archive
#[derive(Parser)]
#[command(name = "zipvfs")]
#[command(author, version, about = "Browse and edit a ZIP archive from a small shell", long_about = None)]
pub struct Cli {
    /// CSV file with `hostname,archive` on its first line
    #[arg(long, short = 'C', env = "ZIPVFS_CONFIG", default_value = "config.csv")]
    config: PathBuf,

    /// Host name shown in the prompt (overrides the config file)
    #[arg(long)]
    hostname: Option<String>,

    /// Archive to open (overrides the config file)
    #[arg(long, short = 'a')]
    archive: Option<PathBuf>,

    /// Run a command and exit instead of starting the prompt (repeatable)
    #[arg(short = 'c', long = "command", value_name = "COMMAND")]
    commands: Vec<String>,
}

impl Cli {
    /// Loads the config file and applies the command line overrides.
    ///
    /// The config file is not read when both fields are given here.
    fn config(&self) -> zipvfs::Result<Config> {
        if let (Some(hostname), Some(archive)) = (&self.hostname, &self.archive) {
            return Ok(Config::new(hostname.as_str(), archive.as_path()));
        }
        let mut config = Config::load(&self.config)?;
        if let Some(hostname) = &self.hostname {
            config.hostname = hostname.clone();
        }
        if let Some(archive) = &self.archive {
            config.archive = archive.clone();
        }
        Ok(config)
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let exit_code = run(&cli);
    std::process::exit(exit_code.code());
}

fn run(cli: &Cli) -> ExitCode {
    let mut shell = match cli.config().and_then(|config| Shell::from_config(&config)) {
        Ok(shell) => shell,
        Err(e) => {
            eprintln!("Error: {}", e);
            return error_to_exit_code(&e);
        }
    };
    log::info!(
        "Opened '{}' as {}",
        shell.vfs().archive_path().display(),
        shell.hostname()
    );

    if cli.commands.is_empty() {
        return repl::run(&mut shell);
    }

    for command in &cli.commands {
        if !repl::report(shell.execute(command)) {
            break;
        }
    }
    ExitCode::Success
}
