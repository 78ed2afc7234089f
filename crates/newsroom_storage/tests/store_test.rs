use newsroom_core::StoryRecordBuilder;
use newsroom_storage::{
    ArcScript, ArcStatus, ContentDocument, ContentStore, ImageDarkroom, NarrativeMeta, load_roster,
};
use std::collections::BTreeMap;
use tempfile::TempDir;

fn story(section: &str, headline: &str) -> newsroom_core::StoryRecord {
    StoryRecordBuilder::default()
        .section(section)
        .headline(headline)
        .body("Body text.")
        .build()
        .unwrap()
}

#[test]
fn missing_document_loads_seed_state() {
    let dir = TempDir::new().unwrap();
    let store = ContentStore::new(dir.path().join("stories.json"));

    let document = store.load().unwrap();

    assert_eq!(document.meta().current_arc(), "hard_rubbish_war");
    assert_eq!(*document.meta().day(), 1);
    assert_eq!(*document.meta().status(), ArcStatus::Active);
    assert!(document.arcs().is_empty());
    assert!(document.stories().is_empty());
    assert!(!store.exists());
}

#[test]
fn corrupt_document_is_an_error_not_a_reset() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stories.json");
    std::fs::write(&path, "{ \"meta\": { \"day\": ").unwrap();

    let err = ContentStore::new(&path).load().unwrap_err();

    match err.kind() {
        newsroom_error::NewsroomErrorKind::Store(e) => assert!(e.is_corrupt()),
        other => panic!("unexpected error: {other}"),
    }
    // Untouched on disk
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "{ \"meta\": { \"day\": "
    );
}

#[test]
fn scalar_document_is_corrupt() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stories.json");
    std::fs::write(&path, "42").unwrap();

    assert!(ContentStore::new(&path).load().is_err());
}

#[test]
fn legacy_story_array_is_lifted_into_canonical_shape() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stories.json");
    std::fs::write(
        &path,
        r#"[{ "section": "news", "headline": "Bin Chicken Elected", "body": "Landslide." }]"#,
    )
    .unwrap();
    let store = ContentStore::new(&path);

    let document = store.load().unwrap();
    assert_eq!(document.stories().len(), 1);
    assert_eq!(*document.meta().day(), 1);

    store.save(&document).unwrap();
    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert!(raw.is_object());
    assert_eq!(raw["meta"]["current_arc"], "hard_rubbish_war");
    assert_eq!(raw["stories"][0]["headline"], "Bin Chicken Elected");
}

#[test]
fn save_then_load_preserves_arcs_and_story_order() {
    let dir = TempDir::new().unwrap();
    let store = ContentStore::new(dir.path().join("nested").join("stories.json"));

    let mut arc = ArcScript::default();
    arc.insert(1, "Remy", "Notice the couch.");
    arc.insert(2, "Remy", "Claim the couch.");
    let mut arcs = BTreeMap::new();
    arcs.insert("couch_saga".to_string(), arc);
    let document = ContentDocument::new(
        NarrativeMeta::new("couch_saga", 2),
        arcs,
        vec![story("news", "First"), story("sport", "Second")],
    );

    store.save(&document).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, document);
    assert_eq!(loaded.stories()[0].headline(), "First");
    assert_eq!(loaded.stories()[1].headline(), "Second");
    assert_eq!(
        loaded.active_arc().and_then(|a| a.day(2)).and_then(|d| d.get("Remy")),
        Some(&"Claim the couch.".to_string())
    );
    assert!(!dir.path().join("nested").join("stories.json.tmp").exists());
}

#[test]
fn day_keys_are_strings_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stories.json");
    std::fs::write(
        &path,
        r#"{
            "meta": { "current_arc": "hard_rubbish_war", "day": 3, "status": "active" },
            "arcs": { "hard_rubbish_war": { "days": {
                "1": { "Remy": "one" },
                "3": { "Remy": "three" },
                "10": { "Remy": "ten" }
            } } }
        }"#,
    )
    .unwrap();

    let document = ContentStore::new(&path).load().unwrap();
    let arc = document.active_arc().unwrap();

    assert!(arc.has_day(3));
    assert!(!arc.has_day(2));
    assert_eq!(arc.last_day(), Some(10));
    assert!(document.stories().is_empty());
}

#[test]
fn unknown_document_keys_survive_a_rewrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stories.json");
    std::fs::write(
        &path,
        r#"{
            "edition": "weekend",
            "meta": { "current_arc": "X", "day": 1, "status": "active", "editor_note": "hold the couch" },
            "arcs": { "X": { "title": "The Hard Rubbish War", "days": { "1": { "Remy": "one" } } } },
            "stories": []
        }"#,
    )
    .unwrap();
    let store = ContentStore::new(&path);

    let mut document = store.load().unwrap();
    document.meta_mut().set_day(2);
    store.save(&document).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["edition"], "weekend");
    assert_eq!(raw["meta"]["editor_note"], "hold the couch");
    assert_eq!(raw["meta"]["day"], 2);
    assert_eq!(raw["arcs"]["X"]["title"], "The Hard Rubbish War");
    assert_eq!(raw["arcs"]["X"]["days"]["1"]["Remy"], "one");

    let reloaded = store.load().unwrap();
    assert_eq!(
        reloaded.active_arc().unwrap().extra().get("title"),
        Some(&serde_json::json!("The Hard Rubbish War"))
    );
    assert!(reloaded.extra().contains_key("edition"));
}

#[test]
fn missing_roster_is_empty_and_corrupt_roster_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("writers.json");

    assert!(load_roster(&path).unwrap().is_empty());

    std::fs::write(&path, "not json").unwrap();
    assert!(load_roster(&path).is_err());

    std::fs::write(&path, r#"{ "Remy": { "name": "Remy", "title": "Editor" } }"#).unwrap();
    let roster = load_roster(&path).unwrap();
    assert_eq!(roster.get("REMY").unwrap().title(), "Editor");
}

#[test]
fn darkroom_names_files_by_headline_and_hash() {
    let dir = TempDir::new().unwrap();
    let darkroom = ImageDarkroom::new(dir.path().join("images"), "images/");

    let first = darkroom
        .develop("Croc Spotted in Local Pool!!", b"png bytes")
        .unwrap();
    let again = darkroom
        .develop("Croc Spotted in Local Pool!!", b"png bytes")
        .unwrap();
    let other = darkroom
        .develop("Croc Spotted in Local Pool!!", b"other bytes")
        .unwrap();

    assert!(first.starts_with("images/CrocSpottedinLocalPo_"));
    assert!(first.ends_with(".png"));
    assert_eq!(first, again);
    assert_ne!(first, other);

    let file = dir.path().join(first.trim_start_matches("images/"));
    assert_eq!(std::fs::read(file).unwrap(), b"png bytes");
}

#[test]
fn darkroom_handles_headlines_without_alphanumerics() {
    let name = ImageDarkroom::file_name("!!! ???", b"x");
    assert!(name.starts_with("story_"));
}
