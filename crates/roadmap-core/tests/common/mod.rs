use roadmap_core::{Level, RoadmapPayload, RoadmapStore, RoadmapStoreBuilder};
use tempfile::TempDir;

/// Helper function to create a test store
#[allow(dead_code)]
pub async fn create_test_store() -> (TempDir, RoadmapStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let store = RoadmapStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create store");
    (temp_dir, store)
}

/// Helper function to build a valid payload
#[allow(dead_code)]
pub fn sample_payload(title: &str, category: &str) -> RoadmapPayload {
    RoadmapPayload {
        title: title.to_string(),
        description: format!("{title} description"),
        category: category.to_string(),
        level: Level::Beginner,
        duration: "2 weeks".to_string(),
        instructor: "John Smith".to_string(),
        skills: vec!["Angular".to_string(), "MongoDB".to_string()],
        course_ids: vec![
            "angular-fundamentals".to_string(),
            "mongodb-essentials".to_string(),
        ],
        course_count: 2,
    }
}
