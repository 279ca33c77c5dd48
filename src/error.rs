use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError
{
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The player pressed Ctrl-C/Esc or the input stream ended.
    #[error("interrupted by the player")]
    Interrupted,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("could not install the Ctrl-C handler: {0}")]
    Signal(#[from] ctrlc::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
