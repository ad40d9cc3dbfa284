use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colo_cli::{CliContext, commands, logging};

#[derive(Parser)]
#[command(version, about = "Colosseum wave spawn and LoS link tracker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a recorded encounter script and print the wave links
    Replay {
        #[arg(short, long)]
        path: PathBuf,
        /// Leave the player position out of every link
        #[arg(long)]
        no_player_location: bool,
    },
    /// Show the current configuration
    Config,
    /// Choose which links include the player position
    SetPlayerLocation {
        #[arg(long)]
        spawns: Option<bool>,
        #[arg(long)]
        reinforcements: Option<bool>,
        #[arg(long)]
        current: Option<bool>,
    },
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let cli = Cli::parse();
    let _log_guard = logging::init();
    let ctx = CliContext::new();

    match cli.command {
        Commands::Replay {
            path,
            no_player_location,
        } => commands::replay(&path, &ctx, !no_player_location).await,
        Commands::Config => commands::show_config(&ctx).await,
        Commands::SetPlayerLocation {
            spawns,
            reinforcements,
            current,
        } => commands::set_player_location(&ctx, spawns, reinforcements, current).await,
    }
}
