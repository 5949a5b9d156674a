use cirrus_client::{SyncError, SyncResponseProcessor};
use cirrus_entity::{
    PresenceResponse, PresenceState, PresenceSyncResponse, SyncEvent, SyncResponse, UserPresence,
    event_type,
};
use cirrus_surrealdb::test_utils::{TestDatabase, create_test_database};
use cirrus_surrealdb::{PresenceRepository, RoomSummaryRepository};
use pretty_assertions::assert_eq;
use serde_json::json;

async fn setup() -> TestDatabase {
    match create_test_database().await {
        Ok(db) => db,
        Err(e) => panic!("Failed to create test database: {}", e),
    }
}

fn sync_response(next_batch: &str, events: Vec<SyncEvent>) -> SyncResponse {
    SyncResponse {
        next_batch: next_batch.to_string(),
        presence: Some(PresenceSyncResponse::new(events)),
    }
}

fn presence_event(sender: &str, content: serde_json::Value) -> SyncEvent {
    SyncEvent::new(event_type::PRESENCE).with_sender(sender).with_content(content)
}

#[tokio::test]
async fn test_presence_event_is_stored_and_linked_to_direct_room() {
    let test_db = setup().await;
    test_db.seed_direct_rooms(&[("!dm:x", "@a:x")]).await.expect("Failed to seed rooms");
    let processor = SyncResponseProcessor::new(test_db.db.clone());

    let report = processor
        .process(&sync_response(
            "s1",
            vec![presence_event(
                "@a:x",
                json!({ "presence": "online", "last_active_ago": 50, "currently_active": true }),
            )],
        ))
        .await
        .expect("Failed to process sync response");
    assert_eq!(report.presence_written, 1);
    assert_eq!(report.next_batch, "s1");

    let expected = UserPresence {
        user_id: "@a:x".to_string(),
        presence: PresenceState::Online,
        last_active_ago: Some(50),
        status_msg: None,
        currently_active: Some(true),
        avatar_url: None,
    };
    let presences = PresenceRepository::new(test_db.db.clone())
        .get_all()
        .await
        .expect("Failed to list presence");
    assert_eq!(presences, vec![expected.clone()]);

    let linked = RoomSummaryRepository::new(test_db.db.clone())
        .get_direct_user_presence("!dm:x")
        .await
        .expect("Failed to read room summary");
    assert_eq!(linked, Some(expected));
}

#[tokio::test]
async fn test_non_presence_events_leave_store_unchanged() {
    let test_db = setup().await;
    test_db.seed_direct_rooms(&[("!dm:x", "@a:x")]).await.expect("Failed to seed rooms");
    let processor = SyncResponseProcessor::new(test_db.db.clone());

    let message = SyncEvent::new(event_type::ROOM_MESSAGE)
        .with_sender("@a:x")
        .with_content(json!({ "msgtype": "m.text", "body": "hello" }));
    let report = processor
        .process(&sync_response("s1", vec![message]))
        .await
        .expect("Failed to process sync response");

    assert_eq!(report.presence_written, 0);
    let presences = PresenceRepository::new(test_db.db.clone())
        .get_all()
        .await
        .expect("Failed to list presence");
    assert!(presences.is_empty());

    let summary = RoomSummaryRepository::new(test_db.db.clone())
        .get_by_room_id("!dm:x")
        .await
        .expect("Failed to read room summary")
        .expect("Expected room summary");
    assert_eq!(summary.direct_user_presence, None);
}

#[tokio::test]
async fn test_malformed_events_are_skipped_and_batch_continues() {
    let test_db = setup().await;
    let processor = SyncResponseProcessor::new(test_db.db.clone());

    let events = vec![
        SyncEvent::new(event_type::PRESENCE).with_content(json!({ "presence": "online" })),
        presence_event("@b:x", json!({ "presence": "away" })),
        presence_event("@c:x", json!({ "presence": "unavailable", "status_msg": "brb" })),
    ];
    let report = processor
        .process(&sync_response("s1", events))
        .await
        .expect("Failed to process sync response");
    assert_eq!(report.presence_written, 1);

    let repo = PresenceRepository::new(test_db.db.clone());
    assert_eq!(repo.get_user_presence("@b:x").await.expect("Failed to get presence"), None);
    let stored = repo
        .get_user_presence("@c:x")
        .await
        .expect("Failed to get presence")
        .expect("Expected presence for @c:x");
    assert_eq!(stored.presence, PresenceState::Unavailable);
    assert_eq!(stored.status_msg.as_deref(), Some("brb"));
}

#[tokio::test]
async fn test_last_write_wins_within_one_batch() {
    let test_db = setup().await;
    test_db.seed_direct_rooms(&[("!dm:x", "@a:x")]).await.expect("Failed to seed rooms");
    let processor = SyncResponseProcessor::new(test_db.db.clone());

    let events = vec![
        presence_event(
            "@a:x",
            json!({ "presence": "unavailable", "status_msg": "away", "last_active_ago": 1000 }),
        ),
        presence_event("@a:x", json!({ "presence": "online", "currently_active": true })),
    ];
    processor
        .process(&sync_response("s1", events))
        .await
        .expect("Failed to process sync response");

    let mut expected = UserPresence::new("@a:x", PresenceState::Online);
    expected.currently_active = Some(true);

    let stored = PresenceRepository::new(test_db.db.clone())
        .get_user_presence("@a:x")
        .await
        .expect("Failed to get presence");
    assert_eq!(stored, Some(expected.clone()));

    let linked = RoomSummaryRepository::new(test_db.db.clone())
        .get_direct_user_presence("!dm:x")
        .await
        .expect("Failed to read room summary");
    assert_eq!(linked, Some(expected));
}

#[tokio::test]
async fn test_processing_same_batch_twice_is_idempotent() {
    let test_db = setup().await;
    let processor = SyncResponseProcessor::new(test_db.db.clone());
    let repo = PresenceRepository::new(test_db.db.clone());
    let response = sync_response(
        "s1",
        vec![presence_event("@a:x", json!({ "presence": "offline", "last_active_ago": 9000 }))],
    );

    processor.process(&response).await.expect("Failed to process sync response");
    let once = repo.get_all().await.expect("Failed to list presence");

    processor.process(&response).await.expect("Failed to process sync response");
    let twice = repo.get_all().await.expect("Failed to list presence");

    assert_eq!(once, twice);
    assert_eq!(twice.len(), 1);
}

#[tokio::test]
async fn test_next_batch_is_persisted_with_the_cycle() {
    let test_db = setup().await;
    let processor = SyncResponseProcessor::new(test_db.db.clone());
    assert_eq!(processor.next_batch().await.expect("Failed to read token"), None);

    let body = json!({
        "next_batch": "s72595_4483_1934",
        "presence": {
            "events": [{
                "type": "m.presence",
                "sender": "@example:localhost",
                "content": { "presence": "online", "status_msg": "Making cupcakes" }
            }]
        }
    })
    .to_string();
    let report = processor.process_json(&body).await.expect("Failed to process sync body");

    assert_eq!(report.presence_written, 1);
    assert_eq!(
        processor.next_batch().await.expect("Failed to read token").as_deref(),
        Some("s72595_4483_1934")
    );
}

#[tokio::test]
async fn test_invalid_sync_body_is_rejected() {
    let test_db = setup().await;
    let processor = SyncResponseProcessor::new(test_db.db.clone());

    let result = processor.process_json("{\"presence\": {}}").await;
    assert!(matches!(result, Err(SyncError::InvalidResponse(_))));
    assert_eq!(processor.next_batch().await.expect("Failed to read token"), None);
}

#[tokio::test]
async fn test_fetched_presence_updates_direct_room() {
    let test_db = setup().await;
    test_db
        .seed_direct_rooms(&[("!dm:example.org", "@bob:example.org")])
        .await
        .expect("Failed to seed rooms");
    let processor = SyncResponseProcessor::new(test_db.db.clone());

    let response = PresenceResponse {
        presence: PresenceState::Unavailable,
        last_active_ago: Some(420845),
        status_msg: Some("I am here.".to_string()),
        currently_active: None,
    };
    let stored = processor
        .store_presence_response("@bob:example.org", response)
        .await
        .expect("Failed to store fetched presence");

    let linked = RoomSummaryRepository::new(test_db.db.clone())
        .get_direct_user_presence("!dm:example.org")
        .await
        .expect("Failed to read room summary");
    assert_eq!(linked, Some(stored));
}
