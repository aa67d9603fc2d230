//! c5-engine: Connect Five game core modules

pub mod board;
pub mod errors;
pub mod game;
pub mod logger;
pub mod participants;
pub mod player;
pub mod rules;
