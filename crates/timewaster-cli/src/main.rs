use clap::{Parser, Subcommand};

mod commands;
mod config;
mod flavor;
mod pages;

#[derive(Parser)]
#[command(name = "timewaster-cli", version, about = "TimeWaster CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the five-page sequence in the terminal
    Play {
        /// Also emit every state-change event as JSON on stderr
        #[arg(long)]
        events: bool,
    },
    /// Preview tier and title for a hypothetical session
    Score {
        /// Total clicks
        #[arg(long)]
        clicks: u64,
        /// Elapsed seconds
        #[arg(long)]
        seconds: u64,
        /// Seed the title draw for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the tier/title table as JSON
    Titles,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Play { events } => commands::play::run(events),
        Commands::Score {
            clicks,
            seconds,
            seed,
        } => commands::score::run(clicks, seconds, seed),
        Commands::Titles => commands::titles::run(),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
