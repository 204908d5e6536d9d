//! Application layer containing the play logic.
//!
//! `PuzzleEngine` is the synchronous crossword engine; `PlaySession` wraps it
//! for one player and forwards solved puzzles to a scoreboard.

pub mod engine;
pub mod session;
