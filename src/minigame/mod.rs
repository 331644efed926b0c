//! Mini-game module - sliding puzzle, trivia quiz, and the session hand-off.

mod plugin;
mod puzzle;
mod session;
mod trivia;

pub use plugin::MiniGamePlugin;
pub use puzzle::{SlidingPuzzle, PUZZLE_SIDE};
pub use session::{random_game, step_game, ActiveGame, MiniGameSession};
pub use trivia::{Question, TriviaBank, TriviaQuiz};
