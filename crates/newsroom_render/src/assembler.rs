//! Whole-site assembly.

use crate::escape::escape_html;
use crate::registry::INDEX_SLUG;
use crate::{ArticleRenderer, NavLink, PageTemplate, SectionRegistry, SiteStyle, StaticContent};
use derive_getters::Getters;
use newsroom_core::{SectionKey, StoryRecord, WriterRoster};
use newsroom_error::{NewsroomResult, RenderError, RenderErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A section that gets its own page.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct SectionPage {
    /// Key stories are filed under (first spelling seen for unregistered keys)
    key: SectionKey,
    /// Page name
    slug: String,
    /// Heading and navigation label
    display_name: String,
    /// Desk the section is grouped under
    desk: Option<String>,
    /// Fixed content replacing the story list
    static_content: Option<StaticContent>,
}

/// A finished page, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct RenderedPage {
    /// Page name
    slug: String,
    /// File name inside the output directory
    file_name: String,
    /// Page heading
    title: String,
    /// Complete document
    html: String,
}

/// Lays out the whole site: one page per section plus the front page.
///
/// Section order is the registry's order, followed by sections that only
/// appear on stories, in the order they first appear. Stories keep their
/// stored order within a page. Output contains no timestamps, so the same
/// stories always produce the same bytes.
#[derive(Debug, Clone, Copy)]
pub struct PageAssembler<'a> {
    registry: &'a SectionRegistry,
    style: &'a SiteStyle,
}

impl<'a> PageAssembler<'a> {
    /// Create an assembler.
    pub fn new(registry: &'a SectionRegistry, style: &'a SiteStyle) -> Self {
        Self { registry, style }
    }

    /// Sections that get a page, in display order.
    pub fn sections(&self, stories: &[StoryRecord]) -> Vec<SectionPage> {
        let mut pages: Vec<SectionPage> = Vec::new();

        for entry in self.registry.entries() {
            let slug = entry.slug();
            let has_stories = stories.iter().any(|s| s.section().slug() == slug);
            if *entry.always_present() || has_stories {
                pages.push(SectionPage {
                    key: entry.key().clone(),
                    display_name: self.registry.display_name(entry.key()),
                    desk: entry.desk().clone(),
                    static_content: entry.static_content().clone(),
                    slug,
                });
            }
        }

        for story in stories {
            let key = story.section();
            let slug = key.slug();
            if pages.iter().any(|p| p.slug == slug) {
                continue;
            }
            if SectionRegistry::is_reserved(&slug) {
                warn!(section = %key, "Section key cannot name a page, stories only reach the front page");
                continue;
            }
            warn!(section = %key, "Section not registered, using raw key as heading");
            pages.push(SectionPage {
                key: key.clone(),
                display_name: self.registry.display_name(key),
                desk: None,
                static_content: None,
                slug,
            });
        }

        pages
    }

    /// Render every page.
    #[tracing::instrument(skip(self, stories, roster), fields(stories = stories.len(), writers = roster.len()))]
    pub fn assemble(&self, stories: &[StoryRecord], roster: &WriterRoster) -> Vec<RenderedPage> {
        let renderer = ArticleRenderer::new(self.registry, roster, self.style);
        let sections = self.sections(stories);
        let nav: Vec<NavLink> = sections
            .iter()
            .map(|s| NavLink::new(&s.slug, &s.display_name, s.desk.clone()))
            .collect();
        let template = PageTemplate::new(self.style, &nav);

        let mut pages = Vec::with_capacity(sections.len() + 1);

        let featured: Vec<&StoryRecord> = stories.iter().filter(|s| *s.featured()).collect();
        debug!(featured = featured.len(), "Rendering front page");
        let rendered: Vec<Option<String>> = featured
            .iter()
            .map(|story| render_isolated(&renderer, story))
            .collect();
        // Placeholder whenever nothing featured survived rendering
        let front = if rendered.iter().all(Option::is_none) {
            format!("<p>{}</p>\n", escape_html(self.style.no_featured_message()))
        } else {
            rendered
                .into_iter()
                .map(|html| html.unwrap_or_else(|| OMITTED_STORY.to_string()))
                .collect()
        };
        pages.push(page(
            &template,
            INDEX_SLUG,
            self.style.front_page_title(),
            &front,
        ));

        for section in &sections {
            let content = match &section.static_content {
                Some(content) => render_static(content, &section.display_name),
                None => stories
                    .iter()
                    .filter(|s| s.section().slug() == section.slug)
                    .map(|story| {
                        render_isolated(&renderer, story)
                            .unwrap_or_else(|| OMITTED_STORY.to_string())
                    })
                    .collect(),
            };
            pages.push(page(
                &template,
                &section.slug,
                &section.display_name,
                &content,
            ));
        }

        pages
    }

    /// Render every page and write it into `output_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderErrorKind::OutputDirectory`] or
    /// [`RenderErrorKind::PageWrite`] on filesystem failures.
    #[tracing::instrument(skip(self, stories, roster, output_dir), fields(output = %output_dir.display()))]
    pub fn publish(
        &self,
        stories: &[StoryRecord],
        roster: &WriterRoster,
        output_dir: &Path,
    ) -> NewsroomResult<Vec<PathBuf>> {
        std::fs::create_dir_all(output_dir).map_err(|e| {
            RenderError::new(RenderErrorKind::OutputDirectory(format!(
                "{}: {}",
                output_dir.display(),
                e
            )))
        })?;

        let mut written = Vec::new();
        for rendered in self.assemble(stories, roster) {
            let path = output_dir.join(&rendered.file_name);
            std::fs::write(&path, &rendered.html).map_err(|e| {
                RenderError::new(RenderErrorKind::PageWrite(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            })?;
            info!(page = %rendered.file_name, title = %rendered.title, "Wrote page");
            written.push(path);
        }

        Ok(written)
    }
}

fn page(template: &PageTemplate<'_>, slug: &str, title: &str, content: &str) -> RenderedPage {
    RenderedPage {
        slug: slug.to_string(),
        file_name: format!("{}.html", slug),
        title: title.to_string(),
        html: template.render(slug, title, content),
    }
}

const OMITTED_STORY: &str = "<!-- story omitted: incomplete record -->\n";

fn render_isolated(renderer: &ArticleRenderer<'_>, story: &StoryRecord) -> Option<String> {
    match renderer.render(story) {
        Ok(html) => Some(html),
        Err(e) => {
            warn!(
                section = %story.section(),
                headline = %story.headline(),
                error = %e,
                "Skipping story that failed to render"
            );
            None
        }
    }
}

fn render_static(content: &StaticContent, display_name: &str) -> String {
    let heading = if content.heading().trim().is_empty() {
        display_name
    } else {
        content.heading().as_str()
    };
    let mut html = String::from("<div class=\"story-card layout-special\">\n");
    html.push_str(&format!("<h2>{}</h2>\n", escape_html(heading)));
    if !content.caption().trim().is_empty() {
        html.push_str(&format!("<p><i>{}</i></p>\n", escape_html(content.caption())));
    }
    html.push_str(&format!(
        "<img src=\"{}\" class=\"comic-img\" alt=\"{}\">\n",
        escape_html(content.image()),
        escape_html(content.alt())
    ));
    html.push_str("</div>\n");
    html
}
