//! Per-story HTML fragments.

use crate::escape::escape_html;
use crate::{SectionRegistry, SiteStyle};
use derive_getters::Getters;
use newsroom_core::{STAFF_NAME, StoryFormat, StoryRecord, WriterRoster};
use newsroom_error::{NewsroomResult, RenderError, RenderErrorKind};

/// Byline details resolved for a story.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Byline {
    /// Writer name
    name: String,
    /// Writer title, possibly empty
    title: String,
    /// Portrait URL
    portrait: String,
}

/// Renders one story into an HTML fragment.
///
/// The branch is chosen by the story's [`StoryFormat`]: `standard` and
/// `debate` share the standard layout, `soliloquy` and `meme` have their own.
/// All text is HTML-escaped; the body keeps its line structure.
#[derive(Debug, Clone, Copy)]
pub struct ArticleRenderer<'a> {
    registry: &'a SectionRegistry,
    roster: &'a WriterRoster,
    style: &'a SiteStyle,
}

impl<'a> ArticleRenderer<'a> {
    /// Create a renderer over the given registry, roster and style.
    pub fn new(
        registry: &'a SectionRegistry,
        roster: &'a WriterRoster,
        style: &'a SiteStyle,
    ) -> Self {
        Self {
            registry,
            roster,
            style,
        }
    }

    /// Resolve the byline for a writer key.
    ///
    /// Unknown or missing keys resolve to `Staff`, an empty title and the
    /// placeholder portrait. A rostered writer without a portrait also gets
    /// the placeholder.
    pub fn byline(&self, writer_key: Option<&str>) -> Byline {
        match writer_key.and_then(|key| self.roster.get(key)) {
            Some(writer) => Byline {
                name: if writer.name().trim().is_empty() {
                    STAFF_NAME.to_string()
                } else {
                    writer.name().clone()
                },
                title: writer.title().clone(),
                portrait: writer
                    .image()
                    .clone()
                    .filter(|image| !image.trim().is_empty())
                    .unwrap_or_else(|| self.style.placeholder_portrait().clone()),
            },
            None => Byline {
                name: STAFF_NAME.to_string(),
                title: String::new(),
                portrait: self.style.placeholder_portrait().clone(),
            },
        }
    }

    /// Render a story.
    ///
    /// # Errors
    ///
    /// Returns [`RenderErrorKind::MissingField`] if the story has a blank
    /// section, headline or body.
    pub fn render(&self, story: &StoryRecord) -> NewsroomResult<String> {
        story.validate().map_err(|field| {
            RenderError::new(RenderErrorKind::MissingField(field.to_string()))
        })?;

        let html = match story.format() {
            StoryFormat::Soliloquy => self.render_soliloquy(story),
            StoryFormat::Meme => self.render_meme(story),
            StoryFormat::Standard | StoryFormat::Debate => self.render_standard(story),
        };
        Ok(html)
    }

    fn open_card(&self, story: &StoryRecord) -> String {
        format!(
            "<div class=\"story-card layout-{}\">\n<span class=\"section-label\">{}</span>\n",
            self.registry.layout(story.section()),
            escape_html(&self.registry.display_name(story.section()))
        )
    }

    fn render_standard(&self, story: &StoryRecord) -> String {
        let byline = self.byline(story.writer_key().as_deref());
        let mut html = self.open_card(story);

        html.push_str(&format!("<h2>{}</h2>\n", escape_html(story.headline())));
        html.push_str(&writer_block(&byline));
        if let Some(image) = story.image() {
            html.push_str(&format!(
                "<img src=\"{}\" class=\"story-img\" alt=\"{}\">\n",
                escape_html(image),
                escape_html(story.headline())
            ));
        }
        for paragraph in paragraphs(story.body()) {
            html.push_str(&format!("<p>{}</p>\n", escape_html(paragraph)));
        }

        html.push_str("</div>\n");
        html
    }

    fn render_soliloquy(&self, story: &StoryRecord) -> String {
        let byline = self.byline(story.writer_key().as_deref());
        let mut html = self.open_card(story);

        html.push_str(&format!("<h2>{}</h2>\n", escape_html(story.headline())));
        html.push_str(&format!(
            "<div class=\"soliloquy-container\">\n<img src=\"{}\" class=\"soliloquy-image-large\" alt=\"{}\">\n<div class=\"soliloquy-box\">{}</div>\n</div>\n",
            escape_html(byline.portrait()),
            escape_html(byline.name()),
            escape_html(story.body())
        ));

        html.push_str("</div>\n");
        html
    }

    fn render_meme(&self, story: &StoryRecord) -> String {
        let byline = self.byline(story.writer_key().as_deref());
        let mut html = self.open_card(story);
        html.push_str(&writer_block(&byline));

        match story.image() {
            Some(image) => html.push_str(&format!(
                "<div class=\"meme-container\">\n<img src=\"{}\" class=\"meme-img\" alt=\"{}\">\n",
                escape_html(image),
                escape_html(story.headline())
            )),
            None => html.push_str("<div class=\"meme-container meme-blank\">\n"),
        }
        html.push_str(&format!(
            "<div class=\"meme-text meme-top\">{}</div>\n<div class=\"meme-text meme-bottom\">{}</div>\n</div>\n",
            escape_html(story.headline()),
            escape_html(story.subtext_or_empty())
        ));
        let body: Vec<&str> = paragraphs(story.body()).collect();
        if !body.is_empty() {
            html.push_str(&format!(
                "<p class=\"meme-caption\">{}</p>\n",
                body.iter()
                    .map(|line| escape_html(line))
                    .collect::<Vec<_>>()
                    .join("<br>\n")
            ));
        }

        html.push_str("</div>\n");
        html
    }
}

fn writer_block(byline: &Byline) -> String {
    format!(
        "<div class=\"writer-block\">\n<img src=\"{}\" class=\"writer-img\" alt=\"{}\">\n<div><span class=\"writer-name\">{}</span><span>{}</span></div>\n</div>\n",
        escape_html(byline.portrait()),
        escape_html(byline.name()),
        escape_html(byline.name()),
        escape_html(byline.title())
    )
}

/// Non-blank lines of a body, trimmed.
fn paragraphs(body: &str) -> impl Iterator<Item = &str> {
    body.lines().map(str::trim).filter(|line| !line.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_split_on_newlines_and_skip_blanks() {
        let lines: Vec<&str> = paragraphs("One.\n\n  Two.  \r\nThree.").collect();
        assert_eq!(lines, ["One.", "Two.", "Three."]);
    }
}
