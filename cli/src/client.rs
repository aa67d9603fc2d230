use crate::config::Config;
use crate::ui;
use c5_engine::player::Symbol;
use reqwest::blocking::Client as HttpClient;
use serde::Deserialize;
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("No response from server: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Deserialize)]
pub struct JoinReply {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct AssignmentReply {
    pub success: bool,
    pub active_player: bool,
    pub symbol: Symbol,
}

#[derive(Debug, Deserialize)]
pub struct ActiveReply {
    pub success: bool,
    pub active_player: bool,
}

#[derive(Debug, Deserialize)]
pub struct MoveReply {
    pub success: bool,
    #[serde(default)]
    pub reason: Option<String>,
    pub winner: bool,
}

#[derive(Debug, Deserialize)]
struct WinnerReply {
    winner: bool,
}

#[derive(Debug, Deserialize)]
struct BoardReply {
    board: String,
}

#[derive(Debug, Deserialize)]
struct PlayersReply {
    players: String,
}

#[derive(Debug, Deserialize)]
struct ResetReply {
    message: String,
}

/// Typed HTTP client for the game server's wire contract.
pub struct GameClient {
    http: HttpClient,
    base: String,
}

impl GameClient {
    pub fn new(server: &str) -> Result<Self, ClientError> {
        // The assignment request suspends server-side until a second player
        // registers, so the client must not impose a request timeout.
        let http = HttpClient::builder().timeout(None::<Duration>).build()?;
        Ok(Self {
            http,
            base: server.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn join(&self, name: &str) -> Result<JoinReply, ClientError> {
        Ok(self
            .http
            .post(self.url("/register"))
            .json(&serde_json::json!({ "name": name }))
            .send()?
            .json()?)
    }

    /// Blocks until the server has two players and reports this player's
    /// turn and symbol.
    pub fn initial_assignment(&self, name: &str) -> Result<AssignmentReply, ClientError> {
        Ok(self
            .http
            .post(self.url("/playerdetails"))
            .json(&serde_json::json!({ "name": name }))
            .send()?
            .json()?)
    }

    pub fn is_active(&self, name: &str) -> Result<bool, ClientError> {
        let reply: ActiveReply = self
            .http
            .get(self.url(&format!("/activeplayer/{}", name)))
            .send()?
            .json()?;
        Ok(reply.active_player)
    }

    pub fn make_move(&self, column: usize, symbol: Symbol) -> Result<MoveReply, ClientError> {
        Ok(self
            .http
            .post(self.url("/makemove"))
            .json(&serde_json::json!({ "column": column, "symbol": symbol }))
            .send()?
            .json()?)
    }

    pub fn winner_exists(&self) -> Result<bool, ClientError> {
        let reply: WinnerReply = self.http.get(self.url("/winner")).send()?.json()?;
        Ok(reply.winner)
    }

    pub fn board(&self) -> Result<String, ClientError> {
        let reply: BoardReply = self.http.get(self.url("/board")).send()?.json()?;
        Ok(reply.board)
    }

    pub fn players(&self) -> Result<String, ClientError> {
        let reply: PlayersReply = self.http.get(self.url("/players")).send()?.json()?;
        Ok(reply.players)
    }

    pub fn reset(&self) -> Result<String, ClientError> {
        let reply: ResetReply = self.http.get(self.url("/reset")).send()?.json()?;
        Ok(reply.message)
    }
}

/// The interactive game loop: join with a chosen name, wait for the initial
/// assignment, then alternate between polling for the turn and prompting for
/// a column until someone wins.
pub fn play(cfg: &Config, input: &mut dyn BufRead, out: &mut dyn Write) -> Result<(), ClientError> {
    let client = GameClient::new(&cfg.server)?;

    let name = loop {
        let name = ui::prompt_line(input, out, "Please enter name: ")?;
        let reply = client.join(&name)?;
        writeln!(out, "{}", reply.message)?;
        if reply.success {
            break name;
        }
    };

    let assignment = client.initial_assignment(&name)?;
    let mut active = assignment.active_player;
    let symbol = assignment.symbol;
    let poll = Duration::from_millis(cfg.poll_interval_ms);

    while !client.winner_exists()? {
        while !active {
            thread::sleep(poll);
            active = client.is_active(&name)?;
            if client.winner_exists()? {
                // A winner decided before this turn means the opponent won.
                writeln!(out, "{}", client.board()?)?;
                writeln!(out, "You lost. Commiserations {}.", name)?;
                return Ok(());
            }
        }

        writeln!(out, "{}", client.board()?)?;
        let won = prompt_and_move(&client, cfg, &name, symbol, input, out)?;
        if won {
            writeln!(out, "{}", client.board()?)?;
            writeln!(out, "You won! Congratulations {}.", name)?;
            return Ok(());
        }
        writeln!(out, "Please wait for your turn...")?;
        active = false;
    }
    Ok(())
}

/// Prompts until the server accepts a move; returns whether it won the game.
fn prompt_and_move(
    client: &GameClient,
    cfg: &Config,
    name: &str,
    symbol: Symbol,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<bool, ClientError> {
    loop {
        let prompt = format!(
            "It's your turn {}, please enter column (1-{}): ",
            name, cfg.columns
        );
        let entry = ui::prompt_line(input, out, &prompt)?;
        let Some(column) = ui::parse_column(&entry, cfg.columns) else {
            writeln!(
                out,
                "Column must be an integer between 1 and {}!",
                cfg.columns
            )?;
            continue;
        };

        let reply = client.make_move(column, symbol)?;
        if reply.success {
            return Ok(reply.winner);
        }
        if let Some(reason) = reply.reason {
            writeln!(out, "{}", reason)?;
        }
    }
}
