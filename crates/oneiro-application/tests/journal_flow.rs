//! End-to-end journal flows over the mock backend.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;

use oneiro_application::JournalUseCase;
use oneiro_core::dream::{DreamPatch, Mood, MoodFilter, NewDream};
use oneiro_infrastructure::MockDreamRepository;

fn usecase() -> JournalUseCase {
    let repository = MockDreamRepository::seeded().with_latency(Duration::ZERO);
    JournalUseCase::with_repository(Arc::new(repository))
}

fn draft(title: &str) -> NewDream {
    NewDream {
        title: title.to_string(),
        content: "Wandering an endless corridor of doors.".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 1, 12).unwrap(),
        mood: Mood::Neutral,
        tags: vec!["doors".to_string()],
        symbols: vec!["corridor".to_string()],
        clarity: 3,
        lucid: false,
        ai_insight: None,
    }
}

#[tokio::test]
async fn loading_hydrates_the_store_with_the_backend_journal() {
    let journal = usecase();
    let loaded = journal.load_user_dreams("user-1").await.unwrap();
    assert_eq!(loaded, 6);

    let store = journal.store();
    let stats = store.stats().await;
    assert_eq!(stats.total, 6);
    assert_eq!(stats.lucid_count, 2);

    // The store's view filter sees the hydrated records.
    store.set_search_term("flying").await;
    let hits = store.filtered_dreams().await;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "dream-1");
}

#[tokio::test]
async fn recording_mirrors_the_backend_copy_into_the_store() {
    let journal = usecase();
    journal.load_user_dreams("user-1").await.unwrap();

    let recorded = journal.record_dream(draft("Corridor of Doors")).await.unwrap();

    let store_copy = journal.store().dream_by_id(&recorded.id).await.unwrap();
    assert_eq!(store_copy, recorded);
    // Mirrored entry sits at the head of the journal.
    assert_eq!(journal.store().dreams().await[0].id, recorded.id);
}

#[tokio::test]
async fn revision_applies_to_both_copies_and_rejects_unknown_ids() {
    let journal = usecase();
    journal.load_user_dreams("user-1").await.unwrap();

    let patch = DreamPatch {
        mood: Some(Mood::Anxious),
        ..DreamPatch::default()
    };
    let updated = journal.revise_dream("dream-2", patch.clone()).await.unwrap();
    assert_eq!(updated.unwrap().mood, Mood::Anxious);
    assert_eq!(
        journal.store().dream_by_id("dream-2").await.unwrap().mood,
        Mood::Anxious
    );

    let missing = journal.revise_dream("missing", patch).await.unwrap();
    assert!(missing.is_none());
    assert_eq!(journal.store().dreams().await.len(), 6);
}

#[tokio::test]
async fn discarding_clears_a_matching_selection() {
    let journal = usecase();
    journal.load_user_dreams("user-1").await.unwrap();

    let store = journal.store();
    let selected = store.dream_by_id("dream-5").await.unwrap();
    store.set_current_dream(Some(selected)).await;

    assert!(journal.discard_dream("dream-5").await.unwrap());
    assert!(store.current_dream().await.is_none());
    assert_eq!(store.dreams().await.len(), 5);

    assert!(!journal.discard_dream("dream-5").await.unwrap());
}

#[tokio::test]
async fn backend_search_covers_symbols_and_mood_filter_stays_in_store() {
    let journal = usecase();
    journal.load_user_dreams("user-1").await.unwrap();

    let hits = journal.search_backend("food").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "dream-3");

    let store = journal.store();
    store.set_selected_mood(MoodFilter::Only(Mood::Positive)).await;
    let positives = store.filtered_dreams().await;
    assert_eq!(positives.len(), 3);
    assert!(positives.iter().all(|d| d.mood == Mood::Positive));
}
