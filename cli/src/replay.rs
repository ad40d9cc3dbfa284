//! Replay scripts
//!
//! A replay script is a line-oriented description of what the game client
//! would report during an encounter. Blank lines and lines starting with `#`
//! are ignored; arguments use shell-style quoting.
//!
//! ```text
//! region 7216               # map regions of the loaded scene, or `none`
//! player 50 60              # local player scene position, or `none`
//! modifier 3                # Mantimayhem stack level
//! chat "Wave: 1"            # game message
//! spawn 7 12818 42 70       # index npc_id x y [spot_anim...]
//! anims 7 2681              # replace an NPC's spot anims
//! move 7 43 70              # move an NPC
//! despawn 7
//! tick 12                   # advance the clock, one controller tick each
//! login                     # logged-in game state
//! link                      # request a current LoS link
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use colo_core::{AppConfig, Npc, Position, SessionController, SignalHandler, WaveBoard, WaveSignal};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::world::ScriptedWorld;

/// Commands buffered between the script reader and the controller loop
pub const COMMAND_CHANNEL_CAPACITY: usize = 256;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to read replay script {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: invalid quoting")]
    Quoting { line: usize },

    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' is missing <{argument}>")]
    MissingArgument {
        line: usize,
        command: &'static str,
        argument: &'static str,
    },

    #[error("line {line}: '{value}' is not a valid number")]
    InvalidNumber { line: usize, value: String },

    #[error("replay reader task failed")]
    Reader(#[source] tokio::task::JoinError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayCommand {
    Region(Option<Vec<u32>>),
    Player(Option<Position>),
    Modifier(i32),
    Chat(String),
    Spawn(Npc),
    Anims { index: i32, spot_anims: Vec<i32> },
    Move { index: i32, position: Position },
    Despawn { index: i32 },
    Tick(u32),
    Login,
    Link,
}

// ─────────────────────────────────────────────────────────────────────────────
// Parsing
// ─────────────────────────────────────────────────────────────────────────────

/// Parse one script line. Returns `Ok(None)` for blank lines and comments.
pub fn parse_line(line_num: usize, line: &str) -> Result<Option<ReplayCommand>, ReplayError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let tokens = shlex::split(trimmed).ok_or(ReplayError::Quoting { line: line_num })?;
    let Some((command, args)) = tokens.split_first() else {
        return Ok(None);
    };
    let mut args = Args {
        line: line_num,
        tokens: args,
        pos: 0,
    };

    let cmd = match command.as_str() {
        "region" => {
            if args.is_none_keyword() {
                ReplayCommand::Region(None)
            } else {
                ReplayCommand::Region(Some(args.rest_numbers()?))
            }
        }
        "player" => {
            if args.is_none_keyword() {
                ReplayCommand::Player(None)
            } else {
                let x = args.number("player", "x")?;
                let y = args.number("player", "y")?;
                ReplayCommand::Player(Some(Position::new(x, y)))
            }
        }
        "modifier" => ReplayCommand::Modifier(args.number("modifier", "level")?),
        "chat" => ReplayCommand::Chat(args.rest_text()),
        "spawn" => {
            let index = args.number("spawn", "index")?;
            let npc_id = args.number("spawn", "npc_id")?;
            let x = args.number("spawn", "x")?;
            let y = args.number("spawn", "y")?;
            ReplayCommand::Spawn(Npc {
                index,
                npc_id,
                scene_position: Some(Position::new(x, y)),
                spot_anims: args.rest_numbers()?,
            })
        }
        "anims" => ReplayCommand::Anims {
            index: args.number("anims", "index")?,
            spot_anims: args.rest_numbers()?,
        },
        "move" => {
            let index = args.number("move", "index")?;
            let x = args.number("move", "x")?;
            let y = args.number("move", "y")?;
            ReplayCommand::Move {
                index,
                position: Position::new(x, y),
            }
        }
        "despawn" => ReplayCommand::Despawn {
            index: args.number("despawn", "index")?,
        },
        "tick" => ReplayCommand::Tick(args.optional_number()?.unwrap_or(1)),
        "login" => ReplayCommand::Login,
        "link" => ReplayCommand::Link,
        other => {
            return Err(ReplayError::UnknownCommand {
                line: line_num,
                command: other.to_string(),
            });
        }
    };

    Ok(Some(cmd))
}

struct Args<'a> {
    line: usize,
    tokens: &'a [String],
    pos: usize,
}

impl Args<'_> {
    fn next(&mut self) -> Option<&str> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token.as_str())
    }

    fn parse<T: FromStr>(&self, value: &str) -> Result<T, ReplayError> {
        value.parse().map_err(|_| ReplayError::InvalidNumber {
            line: self.line,
            value: value.to_string(),
        })
    }

    fn is_none_keyword(&self) -> bool {
        self.tokens.get(self.pos).is_some_and(|t| t == "none")
    }

    fn number<T: FromStr>(&mut self, command: &'static str, argument: &'static str) -> Result<T, ReplayError> {
        let line = self.line;
        let value = self.next().ok_or(ReplayError::MissingArgument {
            line,
            command,
            argument,
        })?;
        let value = value.to_string();
        self.parse(&value)
    }

    fn optional_number<T: FromStr>(&mut self) -> Result<Option<T>, ReplayError> {
        match self.next() {
            Some(value) => {
                let value = value.to_string();
                self.parse(&value).map(Some)
            }
            None => Ok(None),
        }
    }

    fn rest_numbers<T: FromStr>(&mut self) -> Result<Vec<T>, ReplayError> {
        let tokens = self.tokens;
        let rest = &tokens[self.pos.min(tokens.len())..];
        self.pos = tokens.len();
        rest.iter().map(|value| self.parse(value)).collect()
    }

    fn rest_text(&mut self) -> String {
        let tokens = self.tokens;
        let rest = &tokens[self.pos.min(tokens.len())..];
        self.pos = tokens.len();
        rest.join(" ")
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Session
// ─────────────────────────────────────────────────────────────────────────────

/// Controller, world and board for one replay run.
#[derive(Debug, Clone)]
pub struct ReplaySession {
    pub controller: SessionController,
    pub world: ScriptedWorld,
    pub board: WaveBoard,
    /// Results of `link` commands, in order
    pub current_links: Vec<Option<String>>,
}

impl ReplaySession {
    pub fn new(config: AppConfig) -> Self {
        Self {
            controller: SessionController::new(config),
            world: ScriptedWorld::new(),
            board: WaveBoard::new(),
            current_links: Vec::new(),
        }
    }

    pub fn apply(&mut self, command: ReplayCommand) {
        match command {
            ReplayCommand::Region(regions) => self.world.regions = regions,
            ReplayCommand::Player(position) => self.world.player = position,
            ReplayCommand::Modifier(level) => self.world.modifier_level = level,
            ReplayCommand::Chat(message) => {
                let signals = self.controller.on_chat_line(&message, &self.world);
                self.dispatch(&signals);
            }
            ReplayCommand::Spawn(npc) => {
                self.world.spawn(npc.clone());
                self.controller.on_npc_spawned(&npc);
            }
            ReplayCommand::Anims { index, spot_anims } => match self.world.npc_mut(index) {
                Some(npc) => npc.spot_anims = spot_anims,
                None => tracing::warn!(index, "anims for unknown NPC"),
            },
            ReplayCommand::Move { index, position } => match self.world.npc_mut(index) {
                Some(npc) => npc.scene_position = Some(position),
                None => tracing::warn!(index, "move for unknown NPC"),
            },
            ReplayCommand::Despawn { index } => {
                if !self.world.despawn(index) {
                    tracing::warn!(index, "despawn for unknown NPC");
                }
            }
            ReplayCommand::Tick(count) => {
                for _ in 0..count {
                    self.world.tick += 1;
                    let signals = self.controller.on_tick(&self.world);
                    self.dispatch(&signals);
                }
            }
            ReplayCommand::Login => self.controller.on_logged_in(&self.world),
            ReplayCommand::Link => {
                let link = self.controller.generate_current_link(&self.world);
                match &link {
                    Some(url) => tracing::info!(tick = self.world.tick, %url, "Current LoS link"),
                    None => tracing::info!(tick = self.world.tick, "No current LoS link"),
                }
                self.current_links.push(link);
            }
        }
    }

    fn dispatch(&mut self, signals: &[WaveSignal]) {
        for signal in signals {
            tracing::debug!(tick = self.world.tick, ?signal, "Wave signal");
        }
        self.board.handle_signals(signals);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Driver
// ─────────────────────────────────────────────────────────────────────────────

/// Read a script line by line, sending parsed commands to the consumer.
/// Stops at the first parse error.
async fn read_script(path: PathBuf, tx: mpsc::Sender<ReplayCommand>) -> Result<(), ReplayError> {
    let file = tokio::fs::File::open(&path)
        .await
        .map_err(|source| ReplayError::Read {
            path: path.clone(),
            source,
        })?;
    let mut lines = BufReader::new(file).lines();
    let mut line_num = 0;

    while let Some(line) = lines.next_line().await.map_err(|source| ReplayError::Read {
        path: path.clone(),
        source,
    })? {
        line_num += 1;
        if let Some(command) = parse_line(line_num, &line)?
            && tx.send(command).await.is_err()
        {
            // Consumer went away
            break;
        }
    }

    Ok(())
}

/// Replay a script file. Commands are parsed on a reader task and applied
/// one at a time by this task, so the controller only ever sees a single
/// serial stream of events.
pub async fn replay_file(path: &Path, config: AppConfig) -> Result<ReplaySession, ReplayError> {
    let (tx, mut rx) = mpsc::channel(COMMAND_CHANNEL_CAPACITY);
    let reader = tokio::spawn(read_script(path.to_path_buf(), tx));

    let mut session = ReplaySession::new(config);
    while let Some(command) = rx.recv().await {
        session.apply(command);
    }

    reader.await.map_err(ReplayError::Reader)??;
    Ok(session)
}
