//! Mini-game hand-off between the world and the active game.

use bevy::prelude::*;
use rand::Rng;

use super::puzzle::SlidingPuzzle;
use super::trivia::{TriviaBank, TriviaQuiz};
use crate::core::{ExperienceEvent, GameClock, GameSettings, PlayState, TreasureOpenedEvent};
use crate::player::Controls;

/// The game currently holding control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveGame {
    SlidingPuzzle {
        puzzle: SlidingPuzzle,
        /// Clock time the puzzle was solved.
        solved_at: Option<u64>,
    },
    Trivia(TriviaQuiz),
}

/// Shared context between the world and a running mini-game.
#[derive(Resource, Debug, Default)]
pub struct MiniGameSession {
    pub game: Option<ActiveGame>,
    /// Set by the game when it ends.
    pub solved: bool,
    pub correct_answers: u32,
}

impl MiniGameSession {
    pub fn is_active(&self) -> bool {
        self.game.is_some()
    }

    /// Experience owed for the finished game, if solved.
    pub fn reward(&self, settings: &GameSettings) -> Option<u32> {
        if !self.solved {
            return None;
        }
        match self.game {
            Some(ActiveGame::SlidingPuzzle { .. }) => Some(settings.rewards.sliding_puzzle),
            Some(ActiveGame::Trivia(_)) => Some(settings.rewards.trivia * self.correct_answers),
            None => None,
        }
    }

    /// Forget the game and its outcome.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Pick one of the two games at random.
pub fn random_game(bank: &TriviaBank, rng: &mut impl Rng) -> ActiveGame {
    if rng.gen_bool(0.5) {
        ActiveGame::SlidingPuzzle {
            puzzle: SlidingPuzzle::shuffled(rng),
            solved_at: None,
        }
    } else {
        ActiveGame::Trivia(TriviaQuiz::from_bank(bank, rng))
    }
}

/// Start a mini-game when a chest opens.
pub fn start_minigame(
    mut opened: EventReader<TreasureOpenedEvent>,
    bank: Res<TriviaBank>,
    mut session: ResMut<MiniGameSession>,
    mut next_state: ResMut<NextState<PlayState>>,
) {
    if opened.read().last().is_none() || session.is_active() {
        return;
    }

    let game = random_game(&bank, &mut rand::thread_rng());
    info!(
        "Starting {}",
        match game {
            ActiveGame::SlidingPuzzle { .. } => "sliding puzzle",
            ActiveGame::Trivia(_) => "trivia",
        }
    );
    session.game = Some(game);
    session.solved = false;
    session.correct_answers = 0;
    next_state.set(PlayState::MiniGame);
}

/// Feed this tick's input to the active game. Returns `true` when it ended.
pub fn step_game(
    session: &mut MiniGameSession,
    controls: &Controls,
    now: u64,
    settings: &GameSettings,
) -> bool {
    let timings = &settings.timings;
    let Some(game) = session.game.as_mut() else {
        return false;
    };

    match game {
        ActiveGame::SlidingPuzzle { puzzle, solved_at } => {
            if controls.escape {
                session.solved = puzzle.is_solved();
                return true;
            }
            if let Some(direction) = controls.navigate {
                puzzle.move_tile(direction);
            } else if controls.select && !puzzle.is_solved() {
                puzzle.shuffle(&mut rand::thread_rng());
            }
            if puzzle.is_solved() {
                let at = *solved_at.get_or_insert(now);
                if now.saturating_sub(at) >= timings.puzzle_exit_delay {
                    session.solved = true;
                    return true;
                }
            }
            false
        }
        ActiveGame::Trivia(quiz) => {
            if controls.escape {
                return true;
            }
            if controls.select {
                quiz.select_next();
            } else if controls.confirm {
                quiz.confirm(now);
            }
            if quiz.is_finished(now, timings.trivia_exit_delay) {
                session.solved = true;
                session.correct_answers = quiz.correct_answers();
                return true;
            }
            false
        }
    }
}

/// Run the active game and hand control back when it ends.
pub fn run_minigame(
    controls: Res<Controls>,
    clock: Res<GameClock>,
    settings: Res<GameSettings>,
    mut session: ResMut<MiniGameSession>,
    mut experience: EventWriter<ExperienceEvent>,
    mut next_state: ResMut<NextState<PlayState>>,
) {
    if !step_game(&mut session, &controls, clock.now(), &settings) {
        if !session.is_active() {
            next_state.set(PlayState::Exploring);
        }
        return;
    }

    if let Some(amount) = session.reward(&settings) {
        info!("Mini-game solved, +{} exp", amount);
        experience.send(ExperienceEvent { amount });
    } else {
        info!("Mini-game left unsolved");
    }
    session.clear();
    next_state.set(PlayState::Exploring);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Facing;

    fn puzzle_session() -> MiniGameSession {
        let mut puzzle = SlidingPuzzle::new();
        // One move away from solved
        puzzle.move_tile(Facing::Right);
        MiniGameSession {
            game: Some(ActiveGame::SlidingPuzzle {
                puzzle,
                solved_at: None,
            }),
            ..default()
        }
    }

    #[test]
    fn solved_puzzle_ends_after_delay() {
        let settings = GameSettings::default();
        let mut session = puzzle_session();
        let controls = Controls {
            navigate: Some(Facing::Left),
            ..default()
        };

        assert!(!step_game(&mut session, &controls, 1_000, &settings));
        assert!(!step_game(&mut session, &Controls::default(), 1_399, &settings));
        assert!(step_game(&mut session, &Controls::default(), 1_400, &settings));
        assert_eq!(session.reward(&settings), Some(250));
    }

    #[test]
    fn escape_leaves_puzzle_unsolved() {
        let settings = GameSettings::default();
        let mut session = puzzle_session();
        let controls = Controls {
            escape: true,
            ..default()
        };
        assert!(step_game(&mut session, &controls, 0, &settings));
        assert_eq!(session.reward(&settings), None);
    }

    #[test]
    fn trivia_reward_scales_with_correct_answers() {
        let settings = GameSettings::default();
        let session = MiniGameSession {
            game: Some(ActiveGame::Trivia(TriviaQuiz::new(Vec::new()))),
            solved: true,
            correct_answers: 2,
        };
        assert_eq!(session.reward(&settings), Some(300));
    }
}
