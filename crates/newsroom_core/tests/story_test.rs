use newsroom_core::{
    ArticleDraft, ArticleDraftBuilder, SectionKey, StoryFormat, StoryRecord, WriterRoster,
};

#[test]
fn story_defaults_apply_to_missing_and_null_fields() {
    let story: StoryRecord = serde_json::from_str(
        r#"{
            "section": "news",
            "headline": "Ibis Opens Gallery",
            "body": "The bins were curated.",
            "format": null,
            "featured": null,
            "image": null
        }"#,
    )
    .unwrap();

    assert_eq!(*story.format(), StoryFormat::Standard);
    assert!(!*story.featured());
    assert!(story.image().is_none());
    assert!(story.writer_key().is_none());
    assert_eq!(story.subtext_or_empty(), "");
}

#[test]
fn story_accepts_legacy_image_prompt_field() {
    let story: StoryRecord = serde_json::from_str(
        r#"{ "section": "arts", "headline": "h", "body": "b", "image_prompt": "an ibis in a beret" }"#,
    )
    .unwrap();

    assert_eq!(story.visual_prompt().as_deref(), Some("an ibis in a beret"));
}

#[test]
fn story_preserves_unknown_fields_on_round_trip() {
    let story: StoryRecord = serde_json::from_str(
        r#"{ "section": "sport", "headline": "h", "body": "b", "source_headline": "Pies win" }"#,
    )
    .unwrap();

    let json = serde_json::to_value(&story).unwrap();
    assert_eq!(json["source_headline"], "Pies win");
    assert_eq!(json["format"], "standard");
    assert!(json["image"].is_null());
}

#[test]
fn validate_reports_first_missing_field() {
    let story: StoryRecord =
        serde_json::from_str(r#"{ "section": "news", "headline": "  ", "body": "b" }"#).unwrap();
    assert_eq!(story.validate(), Err("headline"));

    let story: StoryRecord =
        serde_json::from_str(r#"{ "headline": "h", "body": "b" }"#).unwrap();
    assert_eq!(story.validate(), Err("section"));
}

#[test]
fn set_image_clears_needs_image() {
    let mut story: StoryRecord =
        serde_json::from_str(r#"{ "section": "news", "headline": "h", "body": "b" }"#).unwrap();
    assert!(story.needs_image());
    story.set_image("images/Croc_ab12cd34.png");
    assert!(!story.needs_image());
}

#[test]
fn draft_becomes_story_without_image() {
    let draft = ArticleDraftBuilder::default()
        .headline("Magpie Sees Everything")
        .body("I saw it!")
        .format(StoryFormat::Meme)
        .featured(true)
        .subtext(Some("and it was shiny".to_string()))
        .build()
        .unwrap();

    let story = draft.into_story(SectionKey::new("local"), "Swoop");
    assert_eq!(story.section().as_str(), "local");
    assert_eq!(story.writer_key().as_deref(), Some("Swoop"));
    assert_eq!(*story.format(), StoryFormat::Meme);
    assert!(*story.featured());
    assert!(story.image().is_none());
    assert!(story.validate().is_ok());
}

#[test]
fn placeholder_draft_is_complete_and_obvious() {
    let draft = ArticleDraft::placeholder("Buster", "British Bulldog");
    assert!(draft.is_complete());
    assert!(draft.headline().contains("Napping"));
    assert_eq!(draft.visual_prompt().as_deref(), Some("Sleeping British Bulldog"));
}

#[test]
fn roster_entries_default_name_and_title() {
    let roster: WriterRoster =
        serde_json::from_str(r#"{ "Webster": { "image": "webster.png" } }"#).unwrap();
    let entry = roster.get("WEBSTER").unwrap();
    assert_eq!(entry.name(), "Staff");
    assert_eq!(entry.title(), "");
    assert_eq!(entry.image().as_deref(), Some("webster.png"));
}
