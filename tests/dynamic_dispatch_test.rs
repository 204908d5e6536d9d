use crossword_engine::domain::ports::ScoreboardBox;
use crossword_engine::infrastructure::in_memory::InMemoryScoreboard;
use crossword_engine::infrastructure::json_file::JsonFileScoreboard;
use tempfile::tempdir;

#[tokio::test]
async fn test_scoreboards_as_trait_objects() {
    let dir = tempdir().unwrap();
    let memory: ScoreboardBox = Box::new(InMemoryScoreboard::new());
    let file: ScoreboardBox = Box::new(JsonFileScoreboard::open(dir.path().join("scores.json")));

    // Verify Send + Sync by spawning tasks
    let memory_handle = tokio::spawn(async move {
        memory.record_win("alice").await.unwrap();
        memory.wins("alice").await.unwrap()
    });

    let file_handle = tokio::spawn(async move {
        file.record_win("bob").await.unwrap();
        file.record_win("bob").await.unwrap();
        file.wins("bob").await.unwrap()
    });

    assert_eq!(memory_handle.await.unwrap(), 1);
    assert_eq!(file_handle.await.unwrap(), 2);
}
