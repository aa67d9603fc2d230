pub mod client;
pub mod config;
pub mod ui;

use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use c5_engine::logger::GameLogger;
use c5_engine::rules::GameRules;
use c5_web::{AppContext, ServerConfig, SharedSession, WebServer};
use client::GameClient;

/// Runs the CLI with provided args, writing to the given writers.
/// Returns the intended process exit code.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
    match C5Cli::try_parse_from(&argv) {
        Err(_) => {
            let _ = writeln!(out, "Connect Five CLI\n");
            let _ = writeln!(out, "Usage: c5 <command> [options]\n");
            let _ = writeln!(out, "Commands:");
            for c in ["serve", "play", "board", "players", "reset", "cfg"] {
                let _ = writeln!(out, "  {}", c);
            }
            let _ = writeln!(out, "\nOptions:\n  -h, --help     Show this help");
            0
        }
        Ok(cli) => match cli.cmd {
            Commands::Serve {
                host,
                port,
                move_log,
            } => cmd_serve(host, port, move_log, err),
            Commands::Play => cmd_play(out, err),
            Commands::Board => cmd_board(out, err),
            Commands::Players => cmd_players(out, err),
            Commands::Reset => cmd_reset(out, err),
            Commands::Cfg => cmd_cfg(out, err),
        },
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "c5",
    version,
    about = "Connect Five over HTTP",
    disable_help_flag = true
)]
struct C5Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the game server
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        #[arg(long, default_value_t = 5000)]
        port: u16,
        /// Append accepted moves to this JSONL file
        #[arg(long)]
        move_log: Option<PathBuf>,
    },
    /// Join a game as an interactive player
    Play,
    /// Print the current board
    Board,
    /// Print the registered players
    Players,
    /// Reset the game
    Reset,
    /// Show the client configuration
    Cfg,
}

fn cmd_serve(host: String, port: u16, move_log: Option<PathBuf>, err: &mut dyn Write) -> i32 {
    let logger = match move_log {
        Some(path) => match GameLogger::create(&path) {
            Ok(logger) => Some(logger),
            Err(e) => {
                let _ = ui::write_error(err, &format!("cannot open move log: {}", e));
                return 1;
            }
        },
        None => None,
    };

    let session = Arc::new(SharedSession::with_logger(GameRules::default(), logger));
    let ctx = AppContext::new_with_session(ServerConfig::new(host, port), session);
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            return 1;
        }
    };
    match runtime.block_on(WebServer::new(ctx).run()) {
        Ok(()) => 0,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            1
        }
    }
}

fn cmd_play(out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    let cfg = match config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            return 1;
        }
    };
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    match client::play(&cfg, &mut input, out) {
        Ok(()) => 0,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            1
        }
    }
}

fn cmd_board(out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    one_shot(out, err, |client| client.board())
}

fn cmd_players(out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    one_shot(out, err, |client| client.players())
}

fn cmd_reset(out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    one_shot(out, err, |client| client.reset())
}

fn cmd_cfg(out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    match config::load().map(|cfg| serde_json::to_string_pretty(&cfg)) {
        Ok(Ok(rendered)) => {
            let _ = writeln!(out, "{}", rendered);
            0
        }
        Ok(Err(e)) => {
            let _ = ui::write_error(err, &e.to_string());
            1
        }
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            1
        }
    }
}

/// Loads the config, issues one request and prints the server's answer.
fn one_shot(
    out: &mut dyn Write,
    err: &mut dyn Write,
    request: impl FnOnce(&GameClient) -> Result<String, client::ClientError>,
) -> i32 {
    let cfg = match config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            return 1;
        }
    };
    let game_client = match GameClient::new(&cfg.server) {
        Ok(c) => c,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            return 1;
        }
    };
    match request(&game_client) {
        Ok(answer) => {
            let _ = writeln!(out, "{}", answer);
            0
        }
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            1
        }
    }
}
