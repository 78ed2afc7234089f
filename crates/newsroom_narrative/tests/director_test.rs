use newsroom_core::StoryRecordBuilder;
use newsroom_narrative::{AdvanceOutcome, ArcDirector, DIRECTION_RULE};
use newsroom_storage::{ArcScript, ArcStatus, ContentDocument, ContentStore, NarrativeMeta};
use std::collections::BTreeMap;
use tempfile::TempDir;

fn two_day_document(day: u32) -> ContentDocument {
    let mut arc = ArcScript::default();
    arc.insert(1, "Remy", "Spot the couch on the nature strip.");
    arc.insert(1, "Swoop", "Report on the couch from above.");
    arc.insert(2, "Swoop", "The couch has moved overnight.");
    let mut arcs = BTreeMap::new();
    arcs.insert("X".to_string(), arc);
    ContentDocument::new(NarrativeMeta::new("X", day), arcs, Vec::new())
}

#[test]
fn advance_moves_forward_then_holds_at_final_day() {
    let dir = TempDir::new().unwrap();
    let store = ContentStore::new(dir.path().join("stories.json"));
    let mut director = ArcDirector::new(store.clone(), two_day_document(1)).unwrap();

    assert_eq!(
        director.advance().unwrap(),
        AdvanceOutcome::Advanced { from: 1, to: 2 }
    );
    assert_eq!(director.day(), 2);
    assert_eq!(director.status(), ArcStatus::Active);

    let outcome = director.advance().unwrap();
    assert_eq!(outcome, AdvanceOutcome::ArcComplete { day: 2 });
    assert!(outcome.is_complete());
    assert_eq!(director.day(), 2);

    let reloaded = store.load().unwrap();
    assert_eq!(*reloaded.meta().day(), 2);
    assert_eq!(*reloaded.meta().status(), ArcStatus::Complete);
}

#[test]
fn advance_keeps_hand_written_arc_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stories.json");
    std::fs::write(
        &path,
        r#"{
            "edition": "weekend",
            "meta": { "current_arc": "X", "day": 1, "status": "active" },
            "arcs": { "X": { "title": "The Hard Rubbish War", "days": {
                "1": { "Remy": "one" },
                "2": { "Remy": "two" }
            } } }
        }"#,
    )
    .unwrap();
    let store = ContentStore::new(&path);

    let mut director = ArcDirector::open(store.clone()).unwrap();
    director.advance().unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["arcs"]["X"]["title"], "The Hard Rubbish War");
    assert_eq!(raw["edition"], "weekend");
    assert_eq!(raw["meta"]["day"], 2);
}

#[test]
fn advance_persists_even_when_nothing_changes() {
    let dir = TempDir::new().unwrap();
    let store = ContentStore::new(dir.path().join("stories.json"));
    assert!(!store.exists());

    let mut director = ArcDirector::open(store.clone()).unwrap();
    // Seed arc has no script at all.
    assert_eq!(
        director.advance().unwrap(),
        AdvanceOutcome::ArcComplete { day: 1 }
    );
    assert!(store.exists());
    assert_eq!(store.load().unwrap().meta().current_arc(), "hard_rubbish_war");
}

#[test]
fn direction_is_empty_for_persona_without_entry() {
    let dir = TempDir::new().unwrap();
    let store = ContentStore::new(dir.path().join("stories.json"));
    let director = ArcDirector::new(store, two_day_document(2)).unwrap();

    // Swoop has an entry on day 2, Remy does not.
    assert_eq!(director.direction("Remy"), "");
    assert!(!director.direction("Swoop").is_empty());
}

#[test]
fn direction_is_wrapped_with_arc_and_day() {
    let dir = TempDir::new().unwrap();
    let store = ContentStore::new(dir.path().join("stories.json"));
    let director = ArcDirector::new(store, two_day_document(1)).unwrap();

    let direction = director.direction("remy");

    assert!(direction.starts_with("\n\n*** SPECIAL PLOT INSTRUCTION (STORY ARC X, DAY 1) ***\n"));
    assert!(direction.contains("Spot the couch on the nature strip."));
    assert!(direction.ends_with(DIRECTION_RULE));
}

#[test]
fn missing_arc_or_day_yields_no_instruction() {
    let dir = TempDir::new().unwrap();
    let store = ContentStore::new(dir.path().join("stories.json"));

    let unknown_arc = ContentDocument::new(
        NarrativeMeta::new("no_such_arc", 1),
        two_day_document(1).arcs().clone(),
        Vec::new(),
    );
    let director = ArcDirector::new(store.clone(), unknown_arc).unwrap();
    assert_eq!(director.direction("Remy"), "");
    assert_eq!(director.scripted_days(), 0);

    let past_script = ArcDirector::new(store, two_day_document(7)).unwrap();
    assert_eq!(past_script.direction("Swoop"), "");
}

#[test]
fn day_zero_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stories.json");
    std::fs::write(&path, r#"{ "meta": { "current_arc": "X", "day": 0 } }"#).unwrap();

    assert!(ArcDirector::open(ContentStore::new(&path)).is_err());
}

#[test]
fn corrupt_store_is_surfaced() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stories.json");
    std::fs::write(&path, "{{{").unwrap();

    assert!(ArcDirector::open(ContentStore::new(&path)).is_err());
}

#[test]
fn advance_saves_stories_added_during_the_run() {
    let dir = TempDir::new().unwrap();
    let store = ContentStore::new(dir.path().join("stories.json"));
    let mut director = ArcDirector::new(store.clone(), two_day_document(1)).unwrap();

    director.document_mut().publish([StoryRecordBuilder::default()
        .section("news")
        .headline("Couch Sighted")
        .body("Witnesses report a floral print.")
        .build()
        .unwrap()]);
    director.advance().unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(raw["meta"]["day"], 2);
    assert_eq!(raw["stories"][0]["headline"], "Couch Sighted");
    assert_eq!(raw["arcs"]["X"]["days"]["2"]["Swoop"], "The couch has moved overnight.");
}
