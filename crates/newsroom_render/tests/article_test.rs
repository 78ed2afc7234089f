use newsroom_core::{StoryFormat, StoryRecord, StoryRecordBuilder, WriterEntry, WriterRoster};
use newsroom_render::{ArticleRenderer, LayoutType, SectionEntryBuilder, SectionRegistry, SiteStyle};

fn registry() -> SectionRegistry {
    SectionRegistry::new(vec![
        SectionEntryBuilder::default()
            .key("backpage")
            .display_name("Troppo")
            .layout(LayoutType::Terminal)
            .build()
            .unwrap(),
    ])
    .unwrap()
}

fn roster() -> WriterRoster {
    let mut roster = WriterRoster::new();
    roster.insert(
        "Dazza",
        WriterEntry::new(
            "Dazza",
            "Northern Correspondent",
            Some("img/dazza.png".to_string()),
        ),
    );
    roster
}

fn story(format: StoryFormat) -> StoryRecord {
    StoryRecordBuilder::default()
        .section("backpage")
        .writer_key(Some("DAZZA".to_string()))
        .headline("Croc Spotted at Servo")
        .body("First it was the pies.\n\nThen it was the ice.")
        .subtext(Some("Nobody checked the freezer".to_string()))
        .format(format)
        .build()
        .unwrap()
}

#[test]
fn standard_story_without_image_emits_no_story_image() {
    let (registry, roster, style) = (registry(), roster(), SiteStyle::default());
    let renderer = ArticleRenderer::new(&registry, &roster, &style);

    let html = renderer.render(&story(StoryFormat::Standard)).unwrap();

    assert!(!html.contains("story-img"));
    assert!(!html.contains("meme-img"));
    assert!(html.contains("<h2>Croc Spotted at Servo</h2>"));
    assert!(html.contains("<p>First it was the pies.</p>"));
    assert!(html.contains("<p>Then it was the ice.</p>"));
    assert!(html.contains("Troppo"));
    assert!(html.contains("layout-terminal"));
    assert!(html.contains("Northern Correspondent"));
    assert!(html.contains("img/dazza.png"));
}

#[test]
fn standard_story_with_image_emits_it() {
    let (registry, roster, style) = (registry(), roster(), SiteStyle::default());
    let renderer = ArticleRenderer::new(&registry, &roster, &style);
    let mut story = story(StoryFormat::Standard);
    story.set_image("images/croc.png");

    let html = renderer.render(&story).unwrap();

    assert!(html.contains("<img src=\"images/croc.png\" class=\"story-img\""));
}

#[test]
fn unknown_writer_falls_back_to_staff() {
    let (registry, style) = (registry(), SiteStyle::default());
    let roster = WriterRoster::new();
    let renderer = ArticleRenderer::new(&registry, &roster, &style);

    let byline = renderer.byline(Some("Ghost"));
    assert_eq!(byline.name(), "Staff");
    assert_eq!(byline.title(), "");
    assert_eq!(byline.portrait(), style.placeholder_portrait());
    assert_eq!(renderer.byline(None), byline);

    let first = renderer.render(&story(StoryFormat::Standard)).unwrap();
    let second = renderer.render(&story(StoryFormat::Standard)).unwrap();
    assert_eq!(first, second);
    assert!(first.contains("<span class=\"writer-name\">Staff</span><span></span>"));
    assert!(first.contains(style.placeholder_portrait().as_str()));
}

#[test]
fn debate_renders_exactly_like_standard() {
    let (registry, roster, style) = (registry(), roster(), SiteStyle::default());
    let renderer = ArticleRenderer::new(&registry, &roster, &style);

    assert_eq!(
        renderer.render(&story(StoryFormat::Debate)).unwrap(),
        renderer.render(&story(StoryFormat::Standard)).unwrap()
    );
}

#[test]
fn soliloquy_uses_portrait_and_keeps_body_verbatim() {
    let (registry, roster, style) = (registry(), roster(), SiteStyle::default());
    let renderer = ArticleRenderer::new(&registry, &roster, &style);

    let html = renderer.render(&story(StoryFormat::Soliloquy)).unwrap();

    assert!(html.contains("class=\"soliloquy-image-large\""));
    assert!(html.contains("img/dazza.png"));
    assert!(!html.contains("writer-block"));
    assert!(html.contains(
        "<div class=\"soliloquy-box\">First it was the pies.\n\nThen it was the ice.</div>"
    ));
}

#[test]
fn meme_overlays_headline_and_subtext() {
    let (registry, roster, style) = (registry(), roster(), SiteStyle::default());
    let renderer = ArticleRenderer::new(&registry, &roster, &style);
    let mut story = story(StoryFormat::Meme);

    let without_image = renderer.render(&story).unwrap();
    assert!(!without_image.contains("meme-img"));
    assert!(without_image.contains("meme-blank"));
    assert!(without_image.contains("<div class=\"writer-block\">"));
    assert!(without_image.contains("<span class=\"writer-name\">Dazza</span><span>Northern Correspondent</span>"));
    assert!(without_image.contains("img/dazza.png"));
    let label = without_image.find("section-label").unwrap();
    let writer = without_image.find("writer-block").unwrap();
    let overlay = without_image.find("meme-container").unwrap();
    assert!(label < writer && writer < overlay);

    story.set_image("images/meme.png");
    let html = renderer.render(&story).unwrap();
    assert!(!html.contains("<h2>"));
    assert!(html.contains("<div class=\"meme-text meme-top\">Croc Spotted at Servo</div>"));
    assert!(html.contains("<div class=\"meme-text meme-bottom\">Nobody checked the freezer</div>"));
    assert!(html.contains("class=\"meme-img\""));
    assert!(html.contains("<p class=\"meme-caption\">"));

    let unsigned = ArticleRenderer::new(&registry, &WriterRoster::new(), &style)
        .render(&story)
        .unwrap();
    assert!(unsigned.contains("<span class=\"writer-name\">Staff</span><span></span>"));
}

#[test]
fn text_is_escaped() {
    let (registry, roster, style) = (registry(), roster(), SiteStyle::default());
    let renderer = ArticleRenderer::new(&registry, &roster, &style);
    let story = StoryRecordBuilder::default()
        .section("backpage")
        .headline("<b>Fish & Chips</b>")
        .body("\"Quote\"")
        .build()
        .unwrap();

    let html = renderer.render(&story).unwrap();

    assert!(html.contains("&lt;b&gt;Fish &amp; Chips&lt;/b&gt;"));
    assert!(html.contains("&quot;Quote&quot;"));
    assert!(!html.contains("<b>"));
}

#[test]
fn incomplete_story_is_an_error() {
    let (registry, roster, style) = (registry(), roster(), SiteStyle::default());
    let renderer = ArticleRenderer::new(&registry, &roster, &style);
    let story = StoryRecordBuilder::default()
        .section("backpage")
        .headline("No body")
        .build()
        .unwrap();

    let err = renderer.render(&story).unwrap_err();
    assert!(err.to_string().contains("body"));
}

#[test]
fn meme_with_only_overlay_text_is_incomplete() {
    let (registry, roster, style) = (registry(), roster(), SiteStyle::default());
    let renderer = ArticleRenderer::new(&registry, &roster, &style);
    let story = StoryRecordBuilder::default()
        .section("backpage")
        .headline("Top text")
        .subtext(Some("Bottom text".to_string()))
        .format(StoryFormat::Meme)
        .build()
        .unwrap();

    let err = renderer.render(&story).unwrap_err();
    assert!(err.to_string().contains("body"));
}
