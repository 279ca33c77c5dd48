pub mod config;
pub mod console;
pub mod dialect;
pub mod error;
pub mod games;
pub mod splash;
pub mod store;

pub use config::GameConfig;
pub use dialect::{KeywordTable, Prediction, Scores, predict, score};
pub use error::{GameError, Result};
pub use games::wordle::{LetterStatus, feedback};
pub use store::{FeedbackLog, Leaderboard, LeaderboardEntry};
