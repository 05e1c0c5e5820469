//! Backend interchangeability tests
//!
//! Runs identical operation sequences against both storage backends through
//! the shared `Storage` contract and checks that the externally observable
//! results match: ordering, identifiers, uniqueness enforcement, and absent
//! optional fields. Timestamps are backend-assigned and excluded from the
//! comparison.

use cdao_core::{ContactMessageStore, DashboardStore, Storage, SubscriberStore};
use cdao_server::storage::{Database, MemoryStore};
use cdao_types::NewContactMessage;
use tempfile::TempDir;

async fn sqlite_store(dir: &TempDir) -> Database {
    let path = dir.path().join("parity.db");
    Database::connect(path.to_str().expect("utf-8 temp path"))
        .await
        .expect("Failed to open SQLite store")
}

/// Create a@x.com and b@x.com, retry a@x.com, then list.
///
/// Returns (assigned ids, listed emails, duplicate rejected).
async fn run_subscriber_sequence(store: &dyn Storage) -> (Vec<i64>, Vec<String>, bool) {
    let a = store.create_subscriber("a@x.com").await.unwrap();
    let b = store.create_subscriber("b@x.com").await.unwrap();

    let duplicate_rejected = store
        .create_subscriber("a@x.com")
        .await
        .err()
        .map(|e| e.is_duplicate())
        .unwrap_or(false);

    let emails = store
        .list_subscribers()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.email)
        .collect();

    (vec![a.id, b.id], emails, duplicate_rejected)
}

/// Submit two messages, one with optional fields and one without, then list.
///
/// Returns (ids, organizations, phones) in listed order.
async fn run_contact_sequence(
    store: &dyn Storage,
) -> (Vec<i64>, Vec<Option<String>>, Vec<Option<String>>) {
    let first = store
        .create_contact_message(NewContactMessage {
            name: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            subject: "General".to_string(),
            message: "Hi".to_string(),
            organization: None,
            phone: None,
            privacy_agreed: 1,
        })
        .await
        .unwrap();

    let second = store
        .create_contact_message(NewContactMessage {
            name: "Sam".to_string(),
            email: "sam@x.com".to_string(),
            subject: "Partnership".to_string(),
            message: "Hello".to_string(),
            organization: Some("Helix Health".to_string()),
            phone: Some("+44 20 7946 0000".to_string()),
            privacy_agreed: 1,
        })
        .await
        .unwrap();

    let listed = store.list_contact_messages().await.unwrap();
    let organizations = listed.iter().map(|m| m.organization.clone()).collect();
    let phones = listed.iter().map(|m| m.phone.clone()).collect();
    let ids = vec![first.id, second.id];

    (ids, organizations, phones)
}

#[tokio::test]
async fn subscriber_sequence_matches_across_backends() {
    let memory = MemoryStore::new();
    let from_memory = run_subscriber_sequence(&memory).await;

    let dir = TempDir::new().unwrap();
    let db = sqlite_store(&dir).await;
    let from_sqlite = run_subscriber_sequence(&db).await;

    assert_eq!(from_memory, from_sqlite);

    let (ids, emails, duplicate_rejected) = from_memory;
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(emails, vec!["b@x.com", "a@x.com"]);
    assert!(duplicate_rejected);
}

#[tokio::test]
async fn contact_sequence_matches_across_backends() {
    let memory = MemoryStore::new();
    let from_memory = run_contact_sequence(&memory).await;

    let dir = TempDir::new().unwrap();
    let db = sqlite_store(&dir).await;
    let from_sqlite = run_contact_sequence(&db).await;

    assert_eq!(from_memory, from_sqlite);

    let (ids, organizations, phones) = from_memory;
    assert_eq!(ids, vec![1, 2]);
    // Newest first: the second message with optional fields leads
    assert_eq!(
        organizations,
        vec![Some("Helix Health".to_string()), None]
    );
    assert_eq!(phones, vec![Some("+44 20 7946 0000".to_string()), None]);
}

#[tokio::test]
async fn demo_reads_match_across_backends() {
    let memory = MemoryStore::new();
    let dir = TempDir::new().unwrap();
    let db = sqlite_store(&dir).await;

    assert_eq!(
        memory.list_deals().await.unwrap(),
        db.list_deals().await.unwrap()
    );
    assert_eq!(
        memory.list_metrics().await.unwrap(),
        db.list_metrics().await.unwrap()
    );
    assert_eq!(
        memory.list_activities().await.unwrap(),
        db.list_activities().await.unwrap()
    );
}

#[tokio::test]
async fn ascending_ids_follow_creation_order() {
    let memory = MemoryStore::new();
    let dir = TempDir::new().unwrap();
    let db = sqlite_store(&dir).await;

    for store in [&memory as &dyn Storage, &db as &dyn Storage] {
        for email in ["one@x.com", "two@x.com", "three@x.com"] {
            store.create_subscriber(email).await.unwrap();
        }

        let mut listed = store.list_subscribers().await.unwrap();
        listed.sort_by_key(|s| s.id);
        let emails: Vec<&str> = listed.iter().map(|s| s.email.as_str()).collect();
        assert_eq!(emails, vec!["one@x.com", "two@x.com", "three@x.com"]);
        assert_eq!(
            listed.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }
}
