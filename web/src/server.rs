use crate::handlers::game;
use crate::session::{SessionError, SharedSession};
use c5_engine::rules::GameRules;
use std::net::{SocketAddr, ToSocketAddrs};
use std::sync::Arc;
use thiserror::Error;
use warp::{Filter, Rejection, Reply};

#[derive(Debug, Clone)]
pub struct ServerConfig {
    host: String,
    port: u16,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn for_tests() -> Self {
        Self::new("127.0.0.1", 0)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|err| ServerError::BindError(err.to_string()))?
            .next()
            .ok_or_else(|| {
                ServerError::ConfigError(format!("no address for {}:{}", self.host, self.port))
            })
    }
}

#[derive(Debug, Clone)]
pub struct AppContext {
    config: ServerConfig,
    session: Arc<SharedSession>,
}

impl AppContext {
    pub fn new(config: ServerConfig) -> Self {
        let session = Arc::new(SharedSession::new(GameRules::default()));
        Self::new_with_session(config, session)
    }

    pub fn new_with_session(config: ServerConfig, session: Arc<SharedSession>) -> Self {
        Self { config, session }
    }

    pub fn new_for_tests() -> Self {
        Self::new(ServerConfig::for_tests())
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn session(&self) -> Arc<SharedSession> {
        Arc::clone(&self.session)
    }
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind to address: {0}")]
    BindError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Session error: {0}")]
    SessionError(#[from] SessionError),
}

/// Builds the full route table over one shared session. Paths and body
/// shapes are the wire contract the terminal client consumes.
pub fn routes(
    session: Arc<SharedSession>,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let with_session = warp::any().map(move || Arc::clone(&session));

    let board = warp::get()
        .and(with_session.clone())
        .and(warp::path!("board"))
        .then(game::get_board);

    let players = warp::get()
        .and(with_session.clone())
        .and(warp::path!("players"))
        .then(game::get_players);

    let register = warp::post()
        .and(with_session.clone())
        .and(warp::path!("register"))
        .and(warp::body::json())
        .then(game::register);

    let active_player = warp::get()
        .and(with_session.clone())
        .and(warp::path!("activeplayer" / String))
        .then(game::active_player);

    let player_details = warp::post()
        .and(with_session.clone())
        .and(warp::path!("playerdetails"))
        .and(warp::body::json())
        .then(game::player_details);

    let make_move = warp::post()
        .and(with_session.clone())
        .and(warp::path!("makemove"))
        .and(warp::body::json())
        .then(game::make_move);

    let winner = warp::get()
        .and(with_session.clone())
        .and(warp::path!("winner"))
        .then(game::check_winner);

    let reset = warp::get()
        .and(with_session)
        .and(warp::path!("reset"))
        .then(game::reset_game);

    board
        .or(players)
        .or(register)
        .or(active_player)
        .or(player_details)
        .or(make_move)
        .or(winner)
        .or(reset)
}

pub struct WebServer {
    ctx: AppContext,
}

impl WebServer {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    pub async fn run(self) -> Result<(), ServerError> {
        let addr = self.ctx.config().socket_addr()?;
        let filter = routes(self.ctx.session());
        let (bound, serving) = warp::serve(filter)
            .try_bind_ephemeral(addr)
            .map_err(|err| ServerError::BindError(err.to_string()))?;
        log::info!("connect five server listening on {}", bound);
        serving.await;
        Ok(())
    }
}
