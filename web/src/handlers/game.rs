use crate::session::{SessionError, SharedSession};
use c5_engine::errors::GameError;
use c5_engine::player::Symbol;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use warp::http::StatusCode;
use warp::reply::{self, Response};
use warp::Reply;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlayerDetailsRequest {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub column: usize,
    pub symbol: Symbol,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct BoardResponse {
    pub success: bool,
    pub board: String,
}

#[derive(Debug, Serialize)]
pub struct PlayersResponse {
    pub success: bool,
    pub players: String,
}

#[derive(Debug, Serialize)]
pub struct ActivePlayerResponse {
    pub success: bool,
    pub active_player: bool,
}

#[derive(Debug, Serialize)]
pub struct AssignmentResponse {
    pub success: bool,
    pub active_player: bool,
    pub symbol: Symbol,
}

#[derive(Debug, Serialize)]
pub struct MoveResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub winner: bool,
}

#[derive(Debug, Serialize)]
pub struct WinnerResponse {
    pub success: bool,
    pub winner: bool,
}

pub async fn get_board(session: Arc<SharedSession>) -> Response {
    match session.render_board() {
        Ok(board) => json_response(
            StatusCode::OK,
            &BoardResponse {
                success: true,
                board,
            },
        ),
        Err(err) => internal_error(err),
    }
}

pub async fn get_players(session: Arc<SharedSession>) -> Response {
    match session.roster() {
        Ok(players) => json_response(
            StatusCode::OK,
            &PlayersResponse {
                success: true,
                players,
            },
        ),
        Err(err) => internal_error(err),
    }
}

pub async fn register(session: Arc<SharedSession>, request: RegisterRequest) -> Response {
    let name = request.name.unwrap_or_default();
    match session.register(&name) {
        Ok(()) => json_response(
            StatusCode::OK,
            &MessageResponse {
                success: true,
                message: "Successfully joined, please await your turn".to_string(),
            },
        ),
        Err(SessionError::Game(err)) => json_response(
            StatusCode::OK,
            &MessageResponse {
                success: false,
                message: err.to_string(),
            },
        ),
        Err(err) => internal_error(err),
    }
}

pub async fn active_player(session: Arc<SharedSession>, name: String) -> Response {
    match session.is_active(&name) {
        Ok(Some(active)) => json_response(
            StatusCode::OK,
            &ActivePlayerResponse {
                success: true,
                active_player: active,
            },
        ),
        // No active player has been assigned yet.
        Ok(None) => json_response(
            StatusCode::OK,
            &ActivePlayerResponse {
                success: false,
                active_player: false,
            },
        ),
        Err(err) => internal_error(err),
    }
}

/// Suspends until a second player has registered, then reports the queried
/// player's turn and symbol.
pub async fn player_details(session: Arc<SharedSession>, request: PlayerDetailsRequest) -> Response {
    let name = request.name.unwrap_or_default();
    match session.initial_assignment(&name).await {
        Ok(assignment) => json_response(
            StatusCode::OK,
            &AssignmentResponse {
                success: true,
                active_player: assignment.active,
                symbol: assignment.symbol,
            },
        ),
        Err(err) => internal_error(err),
    }
}

pub async fn make_move(session: Arc<SharedSession>, request: MoveRequest) -> Response {
    match session.make_move(request.column, request.symbol) {
        Ok(outcome) => json_response(
            StatusCode::OK,
            &MoveResponse {
                success: true,
                reason: None,
                winner: outcome.winner,
            },
        ),
        Err(SessionError::Game(err @ GameError::InvalidColumn { .. })) => {
            move_rejection(StatusCode::BAD_REQUEST, err)
        }
        Err(SessionError::Game(err)) => move_rejection(StatusCode::OK, err),
        Err(err) => internal_error(err),
    }
}

pub async fn check_winner(session: Arc<SharedSession>) -> Response {
    match session.has_winner() {
        Ok(winner) => json_response(
            StatusCode::OK,
            &WinnerResponse {
                success: true,
                winner,
            },
        ),
        Err(err) => internal_error(err),
    }
}

pub async fn reset_game(session: Arc<SharedSession>) -> Response {
    match session.reset() {
        Ok(()) => json_response(
            StatusCode::OK,
            &MessageResponse {
                success: true,
                message: "Game reset".to_string(),
            },
        ),
        Err(err) => internal_error(err),
    }
}

fn move_rejection(status: StatusCode, err: GameError) -> Response {
    json_response(
        status,
        &MoveResponse {
            success: false,
            reason: Some(err.to_string()),
            winner: false,
        },
    )
}

fn json_response<T>(status: StatusCode, body: &T) -> Response
where
    T: Serialize,
{
    reply::with_status(reply::json(body), status).into_response()
}

fn internal_error(err: SessionError) -> Response {
    log::error!("session failure: {}", err);
    json_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        &MessageResponse {
            success: false,
            message: err.to_string(),
        },
    )
}
