use std::path::Path;

use colo_core::{AppConfig, AppConfigExt};

use crate::context::CliContext;
use crate::replay::{self, ReplaySession};

pub async fn replay(path: &Path, ctx: &CliContext, include_player: bool) -> Result<(), String> {
    let config = if include_player {
        ctx.config().await
    } else {
        AppConfig::without_player_location()
    };

    let session = replay::replay_file(path, config)
        .await
        .map_err(|e| error_chain(&e))?;

    print_board(&session);
    Ok(())
}

fn print_board(session: &ReplaySession) {
    let rows = session.board.rows();
    if rows.is_empty() {
        println!("No waves captured");
    } else {
        println!("{:<6} {:<60} Reinforcements", "Wave", "Spawn");
        println!("{}", "-".repeat(100));
        for row in rows {
            println!(
                "{:<6} {:<60} {}",
                row.wave,
                row.spawn_url.as_deref().unwrap_or("-"),
                row.reinforcement_url.as_deref().unwrap_or("-"),
            );
        }
    }

    for (i, link) in session.current_links.iter().enumerate() {
        match link {
            Some(url) => println!("Current LoS #{}: {url}", i + 1),
            None => println!("Current LoS #{}: not in the colosseum or no wave NPCs", i + 1),
        }
    }
}

pub async fn show_config(ctx: &CliContext) -> Result<(), String> {
    let config = ctx.config().await;
    match AppConfig::path() {
        Ok(path) => println!("Config file: {}", path.display()),
        Err(e) => println!("Config file: unavailable ({e})"),
    }

    let player = config.player_location;
    println!("Player location in spawn links:         {}", player.spawns);
    println!("Player location in reinforcement links: {}", player.reinforcements);
    println!("Player location in current links:       {}", player.current);
    Ok(())
}

pub async fn set_player_location(
    ctx: &CliContext,
    spawns: Option<bool>,
    reinforcements: Option<bool>,
    current: Option<bool>,
) -> Result<(), String> {
    let mut config = ctx.config.write().await;
    let player = &mut config.player_location;
    if let Some(value) = spawns {
        player.spawns = value;
    }
    if let Some(value) = reinforcements {
        player.reinforcements = value;
    }
    if let Some(value) = current {
        player.current = value;
    }

    config.save().map_err(|e| error_chain(&e))?;
    tracing::info!(config = ?*config, "Config saved");
    drop(config);

    show_config(ctx).await
}

/// Render an error and its sources on one line.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
