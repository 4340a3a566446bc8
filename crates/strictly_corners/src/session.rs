//! Game session: two named players, one game at a time.

use super::action::{Move, MoveError};
use super::address;
use super::board::Board;
use super::config::{ConfigError, GameConfig};
use super::contracts::{Contract, MoveContract, MoveValidator};
use super::rules::{WinEvaluator, WinState};
use super::snapshot::Snapshot;
use super::state::GameState;
use super::types::{Color, Coordinate};
use super::zones::ZoneLayout;
use derive_getters::Getters;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{info, instrument, warn};

/// A player in a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Player's name.
    name: String,
    /// Colour this player moves.
    #[getter(copy)]
    color: Color,
}

impl Player {
    /// Creates a player.
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.color)
    }
}

/// Status of the current game as seen by the players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No move made yet.
    JustStarted,
    /// Moves made, nobody home yet.
    InProgress,
    /// This player filled their target first and waits for the reply.
    PendingConfirmation(Player),
    /// This player won.
    Finished(Player),
    /// Both players filled their targets in the same round.
    DeadHeat,
}

impl GameStatus {
    /// Returns true once no more moves are accepted.
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Finished(_) | GameStatus::DeadHeat)
    }

    /// Returns the winner, if decided.
    pub fn winner(&self) -> Option<&Player> {
        match self {
            GameStatus::Finished(player) => Some(player),
            _ => None,
        }
    }
}

/// One table of corners: configuration, two players, and the current game.
///
/// Colours are drawn at random at every [`GameSession::start_game`]; the
/// random source is a type parameter so tests can fix it.
#[derive(Debug, Clone)]
pub struct GameSession<R: Rng = StdRng> {
    config: GameConfig,
    players: [Player; 2],
    state: GameState,
    evaluator: WinEvaluator,
    status: GameStatus,
    active: Color,
    rng: R,
}

impl GameSession<StdRng> {
    /// Creates a session with an entropy-seeded colour draw and starts the
    /// first game.
    #[instrument(skip(config))]
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> GameSession<R> {
    /// Creates a session drawing colours from `rng` and starts the first
    /// game.
    #[instrument(skip(config, rng))]
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        let state = GameState::new(&config)?;
        let first = config.first_color();
        let evaluator = WinEvaluator::new(ZoneLayout::from_config(&config), first);
        let players = [
            Player::new(config.player_one().clone(), first),
            Player::new(config.player_two().clone(), first.opponent()),
        ];

        let mut session = Self {
            config,
            players,
            state,
            evaluator,
            status: GameStatus::JustStarted,
            active: first,
            rng,
        };
        session.start_game();
        Ok(session)
    }

    /// Resets the board, draws colours and hands the move to the first
    /// colour.
    #[instrument(skip(self))]
    pub fn start_game(&mut self) {
        let first = self.config.first_color();
        self.state.reset(first);
        self.evaluator.reset(first);

        let (one, two) = if self.rng.gen_bool(0.5) {
            (first, first.opponent())
        } else {
            (first.opponent(), first)
        };
        self.players = [
            Player::new(self.config.player_one().clone(), one),
            Player::new(self.config.player_two().clone(), two),
        ];

        self.status = GameStatus::JustStarted;
        self.active = first;
        info!(
            player_one = %self.players[0],
            player_two = %self.players[1],
            "Game started"
        );
    }

    /// Submits a move given as two addresses, e.g. `("B3", "B4")`.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, from: &str, to: &str) -> Result<GameStatus, MoveError> {
        let (width, height) = (self.state.board().width(), self.state.board().height());
        let from = address::parse(from, width, height).inspect_err(|e| {
            warn!(error = %e, "Rejected source address");
        })?;
        let to = address::parse(to, width, height).inspect_err(|e| {
            warn!(error = %e, "Rejected destination address");
        })?;
        self.submit(from, to)
    }

    /// Submits a move for the active player.
    ///
    /// On error nothing changes and the same player is still to move.
    #[instrument(skip(self), fields(active = %self.active))]
    pub fn submit(&mut self, from: Coordinate, to: Coordinate) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            warn!(status = ?self.status, "Move submitted after the game ended");
            return Err(MoveError::GameOver);
        }

        let mov = Move::new(self.active, from, to);
        MoveContract::pre(&self.state, &mov).inspect_err(|e| {
            warn!(%mov, error = %e, "Rejected move");
        })?;

        let mut next = self.state.clone();
        next.apply(mov)?;

        #[cfg(debug_assertions)]
        MoveContract::post(&self.state, &next)?;

        self.state = next;
        info!(color = %mov.color, from = %mov.from, to = %mov.to, "Move applied");

        let win = self.evaluator.evaluate(self.state.board(), mov.color);
        let status = self.status_for(win);
        if status != self.status && status != GameStatus::InProgress {
            info!(?status, "Game status changed");
        }
        self.status = status;

        if !win.is_terminal() {
            self.active = self.active.opponent();
        }
        Ok(self.status.clone())
    }

    fn status_for(&self, win: WinState) -> GameStatus {
        match win {
            WinState::InProgress => GameStatus::InProgress,
            WinState::PendingConfirmation { closer } => {
                GameStatus::PendingConfirmation(self.player_with(closer).clone())
            }
            WinState::Finished { winner } => GameStatus::Finished(self.player_with(winner).clone()),
            WinState::DeadHeat => GameStatus::DeadHeat,
        }
    }

    /// Every cell the piece on `address` could move to this turn.
    ///
    /// Empty if the cell holds no piece.
    #[instrument(skip(self))]
    pub fn reachable_from(&self, address: &str) -> Result<BTreeSet<Coordinate>, MoveError> {
        let board = self.state.board();
        let from = address::parse(address, board.width(), board.height())?;
        MoveValidator::reachable(board, from)
    }

    /// Current status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Player whose move it is.
    ///
    /// After the game ends this is the player who made the last move.
    pub fn active_player(&self) -> &Player {
        self.player_with(self.active)
    }

    /// Both players, player one first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Player moving `color` this game.
    pub fn player_with(&self, color: Color) -> &Player {
        if self.players[0].color == color {
            &self.players[0]
        } else {
            &self.players[1]
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Moves of the current game, oldest first.
    pub fn history(&self) -> &[Move] {
        self.state.history()
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Serializable picture of the session.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(
            self.state.board(),
            &self.players,
            self.active_player(),
            &self.status,
            self.state.history(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn always_first() -> StepRng {
        StepRng::new(0, 0)
    }

    fn never_first() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    #[test]
    fn test_player_one_takes_first_colour() {
        let session = GameSession::with_rng(GameConfig::default(), always_first()).unwrap();
        assert_eq!(session.players()[0].color(), Color::White);
        assert_eq!(session.active_player().name(), "Player 1");
    }

    #[test]
    fn test_player_two_takes_first_colour() {
        let session = GameSession::with_rng(GameConfig::default(), never_first()).unwrap();
        assert_eq!(session.players()[0].color(), Color::Black);
        assert_eq!(session.players()[1].color(), Color::White);
        assert_eq!(session.active_player().name(), "Player 2");
    }

    #[test]
    fn test_first_move_leaves_just_started() {
        let mut session = GameSession::with_rng(GameConfig::default(), always_first()).unwrap();
        assert_eq!(session.status(), &GameStatus::JustStarted);
        let status = session.submit_move("e3", "E4").unwrap();
        assert_eq!(status, GameStatus::InProgress);
        assert_eq!(session.active_player().color(), Color::Black);
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut session = GameSession::with_rng(GameConfig::default(), always_first()).unwrap();
        let before = session.state().clone();
        assert_eq!(
            session.submit_move("A6", "A5"),
            Err(MoveError::WrongOwner {
                at: Coordinate::new(0, 5),
                owner: Color::Black
            })
        );
        assert_eq!(session.state(), &before);
        assert_eq!(session.active_player().color(), Color::White);
        assert_eq!(session.status(), &GameStatus::JustStarted);
    }

    #[test]
    fn test_bad_address_is_reported() {
        let mut session = GameSession::with_rng(GameConfig::default(), always_first()).unwrap();
        assert!(matches!(
            session.submit_move("Z3", "E4"),
            Err(MoveError::UnknownAddress { .. })
        ));
    }

    #[test]
    fn test_start_game_clears_history() {
        let mut session = GameSession::with_rng(GameConfig::default(), always_first()).unwrap();
        session.submit_move("E3", "E4").unwrap();
        session.start_game();
        assert!(session.history().is_empty());
        assert_eq!(session.status(), &GameStatus::JustStarted);
        assert_eq!(session.board(), &session.state().starting_board());
    }

    #[test]
    fn test_reachable_from_address() {
        let session = GameSession::with_rng(GameConfig::default(), always_first()).unwrap();
        let reachable = session.reachable_from("E3").unwrap();
        assert_eq!(
            reachable,
            BTreeSet::from([Coordinate::new(4, 3), Coordinate::new(3, 2)])
        );
        assert!(session.reachable_from("D4").unwrap().is_empty());
    }
}
