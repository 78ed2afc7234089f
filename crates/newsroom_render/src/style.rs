//! Site-wide presentation settings.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Site identity and fallbacks shared by every page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into), default)]
#[serde(default)]
pub struct SiteStyle {
    /// Masthead title, also the `<title>` suffix
    title: String,
    /// Line under the masthead title
    tagline: String,
    /// Masthead image URL
    header_logo: String,
    /// Portrait used when a writer has none or is unknown
    placeholder_portrait: String,
    /// Heading and navigation label of the index page
    front_page_title: String,
    /// Shown on the index page when nothing is featured
    no_featured_message: String,
}

impl Default for SiteStyle {
    fn default() -> Self {
        Self {
            title: "The Remy Digest".to_string(),
            tagline: "Factual Receipts. Fictional Coping Mechanisms.".to_string(),
            header_logo: "https://storage.googleapis.com/remys-digest-public-assets/static/Professor%20Dachshund%20Desk%20Scene.jpg".to_string(),
            placeholder_portrait: "https://placehold.co/60x60/png?text=Writer".to_string(),
            front_page_title: "Front Page".to_string(),
            no_featured_message: "No featured stories today.".to_string(),
        }
    }
}

/// Stylesheet embedded in every page.
pub(crate) const STYLESHEET: &str = r#"
body { font-family: 'Merriweather', serif; background-color: #F5F1E6; color: #1a1a1a; margin: 0; padding: 0; }
header { padding: 20px; border-bottom: 3px double #1a1a1a; background-color: #F5F1E6; display: flex; align-items: center; justify-content: center; gap: 20px; }
.header-logo { height: 120px; width: auto; border: 2px solid #1a1a1a; box-shadow: 4px 4px 0px #000; }
.header-text { text-align: left; }
h1 { font-family: 'UnifrakturMaguntia', cursive; font-size: 4rem; margin: 0; line-height: 1; }
.tagline { font-style: italic; margin-top: 5px; font-size: 1.1rem; }
nav { text-align: center; padding: 15px 0; border-bottom: 1px solid #1a1a1a; background-color: #Eae5d6; }
.nav-item { color: #1a1a1a; text-decoration: none; margin: 0 15px; font-weight: 900; text-transform: uppercase; font-size: 0.9rem; }
.nav-item:hover, .nav-item.current { color: #B93B3B; text-decoration: underline; }
.nav-desk { font-style: italic; font-size: 0.8rem; margin-left: 10px; }
.container { max-width: 800px; margin: 30px auto; padding: 0 20px; }
.page-title { border-bottom: 2px solid black; }
.section-label { background: black; color: white; padding: 2px 5px; text-transform: uppercase; font-size: 0.7rem; }
.writer-block { display: flex; align-items: center; margin-bottom: 15px; border-bottom: 1px dotted #ccc; padding-bottom: 10px; }
.writer-img { width: 60px; height: 60px; border-radius: 50%; border: 2px solid #1a1a1a; margin-right: 15px; object-fit: cover; }
.writer-name { font-weight: 900; text-transform: uppercase; display: block; }
.story-card { padding-bottom: 40px; margin-bottom: 40px; border-bottom: 1px solid #1a1a1a; }
.layout-lead h2 { font-size: 2rem; }
.layout-warning { border-left: 6px solid #B93B3B; padding-left: 15px; }
.layout-mystic h2 { font-style: italic; }
.story-img { width: 100%; border: 1px solid #1a1a1a; margin: 15px 0; filter: sepia(15%); }
p { font-size: 1.1rem; line-height: 1.6; color: #222; margin-bottom: 15px; }
.soliloquy-container { margin: 20px 0; }
.soliloquy-image-large { width: 100%; display: block; border: 3px solid #000; margin-bottom: -3px; position: relative; z-index: 2; }
.soliloquy-box { font-family: 'Patrick Hand', cursive; font-size: 1.4rem; background: #fff; padding: 25px; border: 3px solid #000; box-shadow: 8px 8px 0px rgba(0,0,0,0.8); white-space: pre-wrap; line-height: 1.4; position: relative; z-index: 1; }
.meme-container { position: relative; display: inline-block; width: 100%; margin: 20px 0; }
.meme-blank { min-height: 300px; background-color: #1a1a1a; }
.meme-img { width: 100%; display: block; }
.meme-text { position: absolute; left: 0; width: 100%; text-align: center; font-family: 'Anton', sans-serif; color: white; font-size: 2.5rem; text-transform: uppercase; text-shadow: -2px -2px 0 #000, 2px -2px 0 #000, -2px 2px 0 #000, 2px 2px 0 #000; line-height: 1.1; pointer-events: none; padding: 0 10px; box-sizing: border-box; }
.meme-top { top: 10px; }
.meme-bottom { bottom: 10px; }
.meme-caption { text-align: center; font-weight: bold; }
.comic-img { width: 100%; display: block; border: 2px solid black; }
"#;
