mod completions;
mod generate;
mod stacks;

use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use stacks::StacksCommand;
use tracing::Level;

/// Extension trait for exiting on library errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for modgen::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "modgen")]
#[command(version)]
#[command(about = "Scaffold CRUD modules for Go, Laravel, React and Flutter")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Stacks(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }

    /// Install the stderr log subscriber.
    pub fn init_logging(&self) {
        tracing_subscriber::fmt()
            .with_max_level(log_level(self.verbose))
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a module for one stack
    Generate(GenerateCommand),

    /// List supported stacks
    Stacks(StacksCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
