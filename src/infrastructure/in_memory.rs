use crate::domain::ports::Scoreboard;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory scoreboard.
///
/// Uses `Arc<RwLock<HashMap<String, u64>>>` so clones share the same tallies.
/// Wins are lost when the process exits.
#[derive(Default, Clone)]
pub struct InMemoryScoreboard {
    wins: Arc<RwLock<HashMap<String, u64>>>,
}

impl InMemoryScoreboard {
    /// Creates a new, empty in-memory scoreboard.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Scoreboard for InMemoryScoreboard {
    async fn record_win(&self, player: &str) -> Result<u64> {
        let mut wins = self.wins.write().await;
        let count = wins.entry(player.to_string()).or_insert(0);
        *count += 1;
        Ok(*count)
    }

    async fn wins(&self, player: &str) -> Result<u64> {
        let wins = self.wins.read().await;
        Ok(wins.get(player).copied().unwrap_or(0))
    }
}
