mod common;

use common::{create_test_store, sample_payload};
use roadmap_core::{
    catalog::sample_courses, CatalogService, Id, Level, ListRoadmaps, LoadOutcome,
    RoadmapComposer, RoadmapStoreBuilder, SubmissionSink,
};
use tempfile::TempDir;

#[tokio::test]
async fn test_builder_creates_parent_directories() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested").join("dir").join("roadmap.db");

    let store = RoadmapStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create store");

    assert!(db_path.exists());
    assert_eq!(store.database_path(), db_path.as_path());
}

#[tokio::test]
async fn test_compose_and_submit_workflow() {
    let (_temp_dir, store) = create_test_store().await;

    let mut composer = RoadmapComposer::default();
    let outcome = composer.load_catalog(&CatalogService::default()).await;
    assert!(matches!(outcome, LoadOutcome::Applied { .. }));

    composer.set_category_filter(Some("Frontend"));
    composer.toggle_course("angular-fundamentals").unwrap();
    composer.toggle_course("react-advanced").unwrap();
    composer.toggle_course("git-workflow").unwrap();
    composer.reorder(2, 0).unwrap();

    let form = composer.form_mut();
    form.title = "Frontend Engineer".to_string();
    form.description = "Modern web UIs".to_string();
    form.category = "Frontend".to_string();
    form.level = Some(Level::Intermediate);

    let payload = composer.submit().expect("Roadmap should be valid");
    let saved = store.submit(&payload).await.expect("Failed to save roadmap");

    assert_eq!(
        saved.payload.course_ids,
        vec!["git-workflow", "angular-fundamentals", "react-advanced"]
    );
    // 10 + 40 + 30 hours
    assert_eq!(saved.payload.duration, "2 weeks");
    assert_eq!(saved.payload.instructor, "John Smith");

    let loaded = store
        .get_roadmap(&Id { id: saved.id })
        .await
        .expect("Failed to get roadmap")
        .expect("Roadmap should exist");
    assert_eq!(loaded.payload, payload);
}

#[tokio::test]
async fn test_list_and_delete_through_store() {
    let (_temp_dir, store) = create_test_store().await;
    let first = store
        .save_roadmap(&sample_payload("One", "Backend"))
        .await
        .unwrap();
    store
        .save_roadmap(&sample_payload("Two", "DevOps"))
        .await
        .unwrap();

    let all = store.list_roadmaps(&ListRoadmaps::default()).await.unwrap();
    assert_eq!(all.len(), 2);

    let devops = store
        .list_roadmaps(&ListRoadmaps {
            category: Some("DevOps".to_string()),
            title: None,
        })
        .await
        .unwrap();
    assert_eq!(devops.len(), 1);
    assert_eq!(devops[0].title, "Two");

    let deleted = store
        .delete_roadmap(&Id { id: first.id })
        .await
        .unwrap()
        .expect("Roadmap should have existed");
    assert_eq!(deleted.payload.title, "One");
    assert!(store
        .delete_roadmap(&Id { id: first.id })
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_rejected_submission_never_reaches_store() {
    let (_temp_dir, store) = create_test_store().await;
    let mut composer = RoadmapComposer::new(sample_courses());
    composer.toggle_course("git-workflow").unwrap();

    let rejected = composer.submit().unwrap_err();
    assert!(!rejected.missing_fields().is_empty());
    assert!(store
        .list_roadmaps(&ListRoadmaps::default())
        .await
        .unwrap()
        .is_empty());
}
