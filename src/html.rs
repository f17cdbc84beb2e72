//! Static HTML rendering of a display surface.
//!
//! Produces one self-contained page: the filter bar in `#filter-container`
//! and the catalog (or the fallback message) in `#learning-hub-container`.
//! Hidden cards and sections are emitted with the `hidden` class rather than
//! dropped, so the markup mirrors the surface exactly.

use crate::view::{Card, DisplaySurface, FilterButton, RenderedCatalog, RootContent, SectionView};
use std::fmt::Write;

pub const ROOT_CONTAINER_ID: &str = "learning-hub-container";
pub const FILTER_CONTAINER_ID: &str = "filter-container";

/// Escape text for use in element content or a double-quoted attribute.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn class_list(base: &str, extra: &[(&str, bool)]) -> String {
    let mut classes = base.to_string();
    for (name, on) in extra {
        if *on {
            classes.push(' ');
            classes.push_str(name);
        }
    }
    classes
}

fn write_button(out: &mut String, button: &FilterButton) {
    let _ = writeln!(
        out,
        "<button class=\"{}\" data-filter=\"{label}\">{label}</button>",
        class_list("filter-btn", &[("active", button.active)]),
        label = escape(button.label()),
    );
}

fn write_card(out: &mut String, card: &Card) {
    let mut style = format!("animation-delay: {}ms", card.animation_delay_ms);
    if let Some(glow) = card.glow {
        let _ = write!(style, "; --mouse-x: {}px; --mouse-y: {}px", glow.x, glow.y);
    }
    let _ = writeln!(
        out,
        "<a class=\"{}\" href=\"{}\" target=\"_blank\" style=\"{}\" data-tags=\"{}\">",
        class_list("resource-card", &[("hidden", !card.visible)]),
        escape(&card.url),
        escape(&style),
        escape(&card.raw_tags.join(",")),
    );
    let _ = writeln!(
        out,
        "<h3><i class=\"bx {}\"></i> {}</h3>",
        card.icon,
        escape(&card.name)
    );
    let _ = writeln!(out, "<p>{}</p>", escape(&card.description));
    out.push_str("<div class=\"tags\">");
    for tag in &card.raw_tags {
        let _ = write!(out, "<span>{}</span>", escape(tag));
    }
    out.push_str("</div>\n</a>\n");
}

fn write_section(out: &mut String, section: &SectionView, rendered: &RenderedCatalog) {
    let _ = writeln!(
        out,
        "<div class=\"{}\">",
        class_list("learning-section", &[("hidden", !section.visible)])
    );
    let _ = writeln!(
        out,
        "<h2>{}</h2><p>{}</p>",
        escape(&section.title),
        escape(&section.description)
    );
    out.push_str("<div class=\"resources-container\">\n");
    for card in section.cards.iter().filter_map(|id| rendered.card(*id)) {
        write_card(out, card);
    }
    out.push_str("</div>\n</div>\n");
}

/// Markup for the filter-bar container's children.
pub fn render_filter_bar(surface: &DisplaySurface) -> String {
    let mut out = String::new();
    for button in &surface.filter_bar {
        write_button(&mut out, button);
    }
    out
}

/// Markup for the root container's children.
pub fn render_root(surface: &DisplaySurface) -> String {
    let mut out = String::new();
    match &surface.root {
        RootContent::Empty => {}
        RootContent::Message(message) => {
            let _ = writeln!(out, "<p>{}</p>", escape(message));
        }
        RootContent::Catalog(rendered) => {
            for section in &rendered.sections {
                write_section(&mut out, section, rendered);
            }
        }
    }
    out
}

/// A complete HTML document for `surface`.
pub fn render_page(surface: &DisplaySurface, title: &str) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape(title));
    out.push_str(
        "<link rel=\"stylesheet\" href=\"https://unpkg.com/boxicons@2.1.4/css/boxicons.min.css\">\n",
    );
    out.push_str("<link rel=\"stylesheet\" href=\"style.css\">\n</head>\n<body>\n");
    let _ = writeln!(out, "<div id=\"{FILTER_CONTAINER_ID}\">");
    out.push_str(&render_filter_bar(surface));
    out.push_str("</div>\n");
    let _ = writeln!(out, "<div id=\"{ROOT_CONTAINER_ID}\">");
    out.push_str(&render_root(surface));
    out.push_str("</div>\n</body>\n</html>\n");
    out
}
