use crate::engine::snake::End;
use crate::engine::tile::Tile;

/// The Result type for dominoes.
pub(crate) type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub(crate) enum Error {
    #[error("io error")]
    StdIOError(#[from] std::io::Error),

    #[error("log error")]
    LogError(#[from] log::SetLoggerError),

    #[error("move rejected: {source}")]
    MoveError {
        #[from]
        source: MoveError,
    },
}

/// Reasons a requested move is turned down. None of these end a session; the driver reports them
/// and asks again.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub(crate) enum MoveError {
    #[error("malformed move {0:?}")]
    Malformed(String),

    #[error("selector {selector} is out of range for a hand of {hand_size}")]
    OutOfRange { selector: i32, hand_size: usize },

    #[error("{tile} does not fit the {end} end")]
    Illegal { tile: Tile, end: End },

    #[error("the game is already over")]
    GameOver,
}

impl MoveError {
    /// Whether the token itself was unusable, as opposed to naming a tile that cannot go there.
    pub(crate) fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_) | Self::OutOfRange { .. })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn move_error_message() {
        let e: Error = MoveError::GameOver.into();
        assert_eq!(e.to_string(), "move rejected: the game is already over");
    }
}
