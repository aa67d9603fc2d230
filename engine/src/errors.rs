use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Name is already in use, please choose another")]
    NameInUse,
    #[error("Too many players")]
    SessionFull,
    #[error("You must supply a name to register")]
    EmptyName,
    #[error("That column is full. Choose another column")]
    ColumnFull,
    #[error("Column {column} is out of range for a board with {cols} columns")]
    InvalidColumn { column: usize, cols: usize },
    #[error("Two players need to be present to switch turns")]
    ToggleWithoutTwoPlayers,
    #[error("Active player not selected, turns cannot be switched")]
    ToggleWithoutActiveSet,
}
