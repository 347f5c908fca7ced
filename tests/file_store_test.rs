use anyhow::Result;
use serde_json::json;
use tempfile::TempDir;
use visit_counter::config::toml_config::FileConfig;
use visit_counter::{FixedClock, Handler, JsonFileStore, ReadVisitCount, VisitStore, WriteVisitRecord};

#[tokio::test]
async fn test_records_survive_reopening_the_store() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("visit_details.jsonl");
    let clock = FixedClock::at(2024, 1, 5, 15, 22, 10).unwrap();

    {
        let writer = WriteVisitRecord::new(JsonFileStore::new(&path), clock);
        writer.handle(json!({"add": "5"})).await?;
        writer.handle(json!({"add": 6})).await?;
    }

    let reopened = JsonFileStore::new(&path);
    assert_eq!(reopened.count_records().await?, 2);

    let records = reopened.load_records().await?;
    assert_eq!(records[0].visit, "5");
    assert_eq!(records[1].visit, "6");
    assert_eq!(records[1].timestamp, "05-Jan-24 03:22:10 PM");

    let body = ReadVisitCount::new(reopened, clock)
        .handle(json!({}))
        .await?
        .body_json()?;
    assert_eq!(body["visitsCount"], "2");

    Ok(())
}

#[tokio::test]
async fn test_failed_write_leaves_file_untouched() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("visit_details.jsonl");
    let writer = WriteVisitRecord::new(JsonFileStore::new(&path), FixedClock::at(2024, 1, 5, 8, 0, 0).unwrap());

    assert!(writer.handle(json!({})).await.is_err());
    assert!(!path.exists());
    Ok(())
}

#[tokio::test]
async fn test_toml_config_points_at_store() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store_path = temp_dir.path().join("from_toml.jsonl");
    let normalized_path = store_path.to_string_lossy().replace('\\', "/");

    let config_path = temp_dir.path().join("visit-counter.toml");
    tokio::fs::write(
        &config_path,
        format!(
            r#"
[store]
path = "{}"

[logging]
level = "info"
"#,
            normalized_path
        ),
    )
    .await?;

    let config = FileConfig::from_file(&config_path)?;
    assert_eq!(config.store.path.as_deref(), Some(normalized_path.as_str()));
    assert_eq!(config.log_level(), Some("info"));

    let store = JsonFileStore::new(config.store.path.clone().unwrap_or_default());
    WriteVisitRecord::new(store.clone(), FixedClock::at(2024, 1, 5, 8, 0, 0).unwrap())
        .handle(json!({"add": "toml"}))
        .await?;
    assert_eq!(store.count_records().await?, 1);

    Ok(())
}
