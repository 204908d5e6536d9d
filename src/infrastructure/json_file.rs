use crate::domain::ports::Scoreboard;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// A scoreboard persisted as a JSON object mapping player id to win count.
///
/// The file is read and rewritten on every win, so tallies survive restarts.
/// A missing file counts as an empty scoreboard.
pub struct JsonFileScoreboard {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileScoreboard {
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<BTreeMap<String, u64>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.is_empty() => Ok(BTreeMap::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, tallies: &BTreeMap<String, u64>) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(tallies)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

#[async_trait]
impl Scoreboard for JsonFileScoreboard {
    async fn record_win(&self, player: &str) -> Result<u64> {
        let _guard = self.lock.lock().await;
        let mut tallies = self.load().await?;
        let count = tallies.entry(player.to_string()).or_insert(0);
        *count += 1;
        let count = *count;
        self.save(&tallies).await?;
        Ok(count)
    }

    async fn wins(&self, player: &str) -> Result<u64> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.get(player).copied().unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CrosswordError;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_json_file_scoreboard_persists_across_instances() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scores.json");

        let scoreboard = JsonFileScoreboard::open(&path);
        assert_eq!(scoreboard.wins("alice").await.unwrap(), 0);
        assert_eq!(scoreboard.record_win("alice").await.unwrap(), 1);
        drop(scoreboard);

        let reopened = JsonFileScoreboard::open(&path);
        assert_eq!(reopened.record_win("alice").await.unwrap(), 2);
        assert_eq!(reopened.wins("bob").await.unwrap(), 0);

        let contents = std::fs::read_to_string(&path).unwrap();
        let tallies: BTreeMap<String, u64> = serde_json::from_str(&contents).unwrap();
        assert_eq!(tallies.get("alice"), Some(&2));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scores.json");
        std::fs::write(&path, "not json").unwrap();

        let scoreboard = JsonFileScoreboard::open(&path);
        assert!(matches!(
            scoreboard.record_win("alice").await,
            Err(CrosswordError::JsonError(_))
        ));
    }
}
