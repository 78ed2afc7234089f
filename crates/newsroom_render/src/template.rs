//! Shared page chrome: head, masthead, navigation.

use crate::SiteStyle;
use crate::escape::escape_html;
use crate::style::STYLESHEET;
use derive_getters::Getters;

const FONTS: &str = "https://fonts.googleapis.com/css2?family=Merriweather:ital,wght@0,300;0,700;1,300&family=UnifrakturMaguntia&family=Anton&family=Patrick+Hand&display=swap";

/// One entry in the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct NavLink {
    /// Page slug; the file is `{slug}.html`
    slug: String,
    /// Link text
    label: String,
    /// Desk heading shown before this link when it opens a new desk
    desk: Option<String>,
}

impl NavLink {
    /// Create a navigation entry.
    pub fn new(slug: impl Into<String>, label: impl Into<String>, desk: Option<String>) -> Self {
        Self {
            slug: slug.into(),
            label: label.into(),
            desk,
        }
    }

    /// File name the link points to.
    pub fn href(&self) -> String {
        format!("{}.html", self.slug)
    }
}

/// Wraps page content in the shared header, navigation and container.
#[derive(Debug, Clone, Copy)]
pub struct PageTemplate<'a> {
    style: &'a SiteStyle,
    nav: &'a [NavLink],
}

impl<'a> PageTemplate<'a> {
    /// Create a template. `nav` excludes the front page link, which is always first.
    pub fn new(style: &'a SiteStyle, nav: &'a [NavLink]) -> Self {
        Self { style, nav }
    }

    /// Render a complete page.
    pub fn render(&self, current_slug: &str, title: &str, content: &str) -> String {
        let mut html = String::with_capacity(content.len() + STYLESHEET.len() + 2048);

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str(&format!(
            "<title>{} | {}</title>\n",
            escape_html(title),
            escape_html(self.style.title())
        ));
        html.push_str(&format!(
            "<link href=\"{}\" rel=\"stylesheet\">\n",
            escape_html(FONTS)
        ));
        html.push_str(&format!("<style>{}</style>\n", STYLESHEET));
        html.push_str("</head>\n<body>\n");

        html.push_str(&format!(
            "<header>\n<img src=\"{}\" class=\"header-logo\" alt=\"{}\">\n<div class=\"header-text\">\n<h1>{}</h1>\n<div class=\"tagline\">&quot;{}&quot;</div>\n</div>\n</header>\n",
            escape_html(self.style.header_logo()),
            escape_html(self.style.title()),
            escape_html(self.style.title()),
            escape_html(self.style.tagline())
        ));

        html.push_str("<nav>\n");
        html.push_str(&self.nav_item("index", self.style.front_page_title(), current_slug));
        let mut last_desk: Option<&str> = None;
        for link in self.nav {
            let desk = link.desk.as_deref();
            if desk.is_some() && desk != last_desk {
                html.push_str(&format!(
                    "<span class=\"nav-desk\">{}</span>\n",
                    escape_html(desk.unwrap_or_default())
                ));
            }
            last_desk = desk;
            html.push_str(&self.nav_item(&link.slug, &link.label, current_slug));
        }
        html.push_str("</nav>\n");

        html.push_str(&format!(
            "<div class=\"container\">\n<h3 class=\"page-title\">{}</h3>\n{}</div>\n",
            escape_html(title),
            content
        ));
        html.push_str("</body>\n</html>\n");
        html
    }

    fn nav_item(&self, slug: &str, label: &str, current_slug: &str) -> String {
        let class = if slug == current_slug {
            "nav-item current"
        } else {
            "nav-item"
        };
        format!(
            "<a href=\"{}.html\" class=\"{}\">{}</a>\n",
            escape_html(slug),
            class,
            escape_html(label)
        )
    }
}
