use crate::error::Result;
use async_trait::async_trait;

/// Where solved puzzles are reported.
///
/// Implementations count wins per player id. How they are stored or
/// transmitted is up to the adapter.
#[async_trait]
pub trait Scoreboard: Send + Sync {
    /// Adds one win for `player` and returns the new total.
    async fn record_win(&self, player: &str) -> Result<u64>;
    /// Current win total for `player`; zero when unknown.
    async fn wins(&self, player: &str) -> Result<u64>;
}

pub type ScoreboardBox = Box<dyn Scoreboard>;
