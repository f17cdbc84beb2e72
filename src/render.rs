//! Catalog to view-entity rendering.
//!
//! One pass over the catalog produces one `SectionView` per section and one
//! `Card` per resource, in catalog order. Card ids are assigned across the
//! whole pass, not per section; the id only drives the staggered entrance
//! animation.

use crate::catalog::{Catalog, Resource};
use crate::view::{Card, CardId, DisplaySurface, RenderedCatalog, SectionView};
use tracing::info;

/// Entrance animation stagger between consecutive cards.
pub const ANIMATION_STEP_MS: u64 = 70;

pub const DEFAULT_ICON: &str = "bx-link-external";

// First matching keyword group wins.
const ICON_RULES: &[(&[&str], &str)] = &[
    (&["youtube", "video"], "bxl-youtube"),
    (&["course"], "bxs-school"),
    (&["website", "platform", "docs"], "bx-globe"),
    (&["article"], "bxs-file-doc"),
];

/// Pick an icon class for a resource type by case-insensitive keyword.
pub fn icon_for_type(kind: &str) -> &'static str {
    let kind = kind.to_lowercase();
    ICON_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| kind.contains(keyword)))
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

fn build_card(resource: &Resource, id: CardId) -> Card {
    Card {
        id,
        name: resource.name.clone(),
        url: resource.url.clone(),
        kind: resource.kind.clone(),
        description: resource.description.clone(),
        raw_tags: resource.tags.clone(),
        icon: icon_for_type(&resource.kind),
        animation_delay_ms: id.0 as u64 * ANIMATION_STEP_MS,
        visible: true,
        glow: None,
    }
}

/// Build view entities for `catalog` without touching any surface.
pub fn build_views(catalog: &Catalog) -> RenderedCatalog {
    let mut rendered = RenderedCatalog::default();
    for section in &catalog.sections {
        let mut card_ids = Vec::with_capacity(section.resources.len());
        for resource in &section.resources {
            let id = CardId(rendered.cards.len());
            rendered.cards.push(build_card(resource, id));
            card_ids.push(id);
        }
        rendered.sections.push(SectionView {
            title: section.title.clone(),
            description: section.description.clone(),
            cards: card_ids,
            visible: true,
        });
    }
    rendered
}

/// Render `catalog` onto `surface`, discarding whatever was there before.
pub fn render(surface: &mut DisplaySurface, catalog: &Catalog) {
    let rendered = build_views(catalog);
    info!(
        sections = rendered.sections.len(),
        cards = rendered.cards.len(),
        "rendered catalog"
    );
    surface.show_catalog(rendered);
}
