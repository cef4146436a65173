mod config;
mod list;
mod logging;
mod tui;

use anyhow::{Context, Result};
use clap::{Args, Command, CommandFactory, Parser, Subcommand, ValueHint};
use clap_complete::{Generator, Shell, generate};
use config::{Config, ConfigError};
use crossterm::{
    event::{self, Event},
    execute,
    style::Print,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use list::source::Source;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use std::path::PathBuf;
use tui::{app::App, ui};

#[derive(Parser)]
#[command(name = "undolist")]
#[command(about = "Browse a list, delete entries and undo the deletions")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,
}

#[derive(Args)]
struct RunArgs {
    #[arg(long, help = "Load items from a file, one per line", value_hint = ValueHint::FilePath, conflicts_with_all = ["dir", "accounts"])]
    file: Option<PathBuf>,
    #[arg(long, help = "Load items from a directory listing", value_hint = ValueHint::DirPath, conflicts_with = "accounts")]
    dir: Option<PathBuf>,
    #[arg(
        long,
        help = "Load user names from a passwd-format file",
        value_hint = ValueHint::FilePath,
        num_args = 0..=1,
        default_missing_value = list::source::DEFAULT_ACCOUNTS_FILE
    )]
    accounts: Option<PathBuf>,
    #[arg(long, help = "Start with an empty list (press r to load)")]
    empty: bool,
    #[arg(long, help = "Write the log to this file", value_hint = ValueHint::FilePath)]
    log_file: Option<PathBuf>,
    #[arg(short, long, help = "Log debug messages")]
    verbose: bool,
}

impl RunArgs {
    fn source(&self) -> Option<Source> {
        if let Some(path) = &self.file {
            Some(Source::File(path.clone()))
        } else if let Some(path) = &self.dir {
            Some(Source::Dir(path.clone()))
        } else {
            self.accounts.clone().map(Source::Accounts)
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Configuration management")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    #[command(about = "Generate shell completion scripts")]
    Completion {
        #[arg(help = "Shell to generate completions for")]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    #[command(about = "Set a configuration value")]
    Set {
        #[arg(help = "Configuration key (source, start_empty, log_file)")]
        key: String,
        #[arg(help = "Configuration value, e.g. file:names.txt for source")]
        value: String,
    },
    #[command(about = "Get a configuration value")]
    Get {
        #[arg(help = "Configuration key")]
        key: String,
    },
    #[command(about = "List all configuration values")]
    List,
    #[command(about = "Print the configuration file location")]
    Path,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { action }) => {
            if let Err(e) = handle_config_command(action) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            print_completions(shell, &mut cmd);
        }
        None => {
            if let Err(e) = run_main_app(cli.run) {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        }
    }
}

fn handle_config_command(action: ConfigAction) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            println!("Configuration saved successfully.");
        }
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            println!("{}", config.get(&key)?);
        }
        ConfigAction::List => {
            let config = Config::load()?;
            for key in config::KEYS {
                println!("{} = {}", key, config.get(key)?);
            }
        }
        ConfigAction::Path => {
            println!("{}", config::get_config_file_path()?.display());
        }
    }
    Ok(())
}

fn run_main_app(args: RunArgs) -> Result<()> {
    let config = Config::load().context("Configuration error")?;

    let log_path = args
        .log_file
        .clone()
        .or_else(|| config.log_file.clone())
        .unwrap_or_else(logging::default_log_path);
    if let Err(e) = logging::init(&log_path, args.verbose) {
        // Not fatal: the list still works without a log
        eprintln!("Warning: {:#}", e);
    }

    let source = args.source().unwrap_or_else(|| config.source.clone());
    let baseline = source.load()?;
    log::info!("loaded {} items from {}", baseline.len(), source.label());

    let start_empty = args.empty || config.start_empty;
    let mut app = App::new(baseline, start_empty, source.label());

    run_tui(&mut app)?;
    log::info!(
        "exiting with {} items, {} undo records",
        app.controller.store().len(),
        app.controller.undo_log().len()
    );

    Ok(())
}

fn run_tui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: Backend + io::Write>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key_event(key)?;
            if app.take_bell() {
                execute!(terminal.backend_mut(), Print('\u{7}'))?;
            }
            if app.should_quit {
                break;
            }
        }
    }
    Ok(())
}

fn print_completions<G: Generator>(generator: G, cmd: &mut Command) {
    generate(generator, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_source_flags() {
        let cli = Cli::parse_from(["undolist", "--dir", "/tmp"]);
        assert_eq!(cli.run.source(), Some(Source::Dir(PathBuf::from("/tmp"))));

        let cli = Cli::parse_from(["undolist", "--accounts"]);
        assert_eq!(
            cli.run.source(),
            Some(Source::Accounts(PathBuf::from("/etc/passwd")))
        );

        let cli = Cli::parse_from(["undolist", "--empty"]);
        assert!(cli.run.empty);
        assert_eq!(cli.run.source(), None);
    }

    #[test]
    fn test_source_flags_conflict() {
        assert!(Cli::try_parse_from(["undolist", "--file", "a", "--dir", "b"]).is_err());
    }
}
