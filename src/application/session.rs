use crate::application::engine::PuzzleEngine;
use crate::domain::cursor::Direction;
use crate::domain::player::Player;
use crate::domain::ports::ScoreboardBox;
use crate::error::{CrosswordError, Result};
use log::{info, warn};

/// A player action, already translated from whatever input device produced it.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    Select { row: isize, col: isize },
    Type(char),
    Backspace,
    Move(Direction),
    Check,
    Reset,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Outcome {
    /// The engine state changed (or a no-op was absorbed).
    Updated,
    /// A check found at least one missing or wrong letter.
    Unsolved,
    /// A check found the puzzle solved. `wins` is the new total on the check
    /// that recorded the win and `None` on repeat checks.
    Solved { wins: Option<u64> },
}

/// One player's play-through of a puzzle.
///
/// The session drives a [`PuzzleEngine`] and reports the first solved check
/// (per reset) to the scoreboard.
pub struct PlaySession {
    engine: PuzzleEngine,
    scoreboard: ScoreboardBox,
    player: Player,
    complete: bool,
    win_recorded: bool,
}

impl PlaySession {
    /// Starts a session; fails when the player is not allowed to play.
    pub fn new(engine: PuzzleEngine, scoreboard: ScoreboardBox, player: Player) -> Result<Self> {
        if !player.can_play {
            return Err(CrosswordError::Unauthorized(player.id));
        }
        Ok(Self {
            engine,
            scoreboard,
            player,
            complete: false,
            win_recorded: false,
        })
    }

    pub fn engine(&self) -> &PuzzleEngine {
        &self.engine
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Result of the most recent check, cleared by a reset.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Applies a command to the engine.
    ///
    /// Engine operations never fail; only recording a win can.
    pub async fn apply(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::Select { row, col } => self.engine.select(row, col),
            Command::Type(ch) => self.engine.type_letter(ch),
            Command::Backspace => self.engine.backspace(),
            Command::Move(direction) => {
                let (d_row, d_col) = direction.delta();
                self.engine.move_directional(d_row, d_col);
            }
            Command::Reset => {
                self.engine.reset();
                self.complete = false;
                self.win_recorded = false;
            }
            Command::Check => return self.check().await,
        }
        Ok(Outcome::Updated)
    }

    async fn check(&mut self) -> Result<Outcome> {
        self.complete = self.engine.check();
        if !self.complete {
            return Ok(Outcome::Unsolved);
        }
        if self.win_recorded {
            return Ok(Outcome::Solved { wins: None });
        }

        let wins = self
            .scoreboard
            .record_win(&self.player.id)
            .await
            .inspect_err(|e| warn!("Failed to record win for {}: {e}", self.player.id))?;
        self.win_recorded = true;
        info!(
            "{} solved {:?} ({wins} wins)",
            self.player.id,
            self.engine.definition().title
        );
        Ok(Outcome::Solved { wins: Some(wins) })
    }

    /// The player's current win total.
    pub async fn wins(&self) -> Result<u64> {
        self.scoreboard.wins(&self.player.id).await
    }
}
