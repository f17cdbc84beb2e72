//! View entities and the display surface they live on.
//!
//! Cards and section views are created once per render and never recreated;
//! afterwards only their visibility flags (and the cosmetic glow position)
//! change. A section refers to its cards by `CardId`, an index into the
//! render-wide card list.

use crate::category::FilterSelection;
use serde::Serialize;

/// Position of a card in `RenderedCatalog::cards`; also its creation index.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
#[serde(transparent)]
pub struct CardId(pub usize);

/// Pointer position relative to a card's top-left corner, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GlowPosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Rendered view of one resource.
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub url: String,
    pub kind: String,
    pub description: String,
    /// Tags copied verbatim from the resource, order and duplicates kept.
    pub raw_tags: Vec<String>,
    pub icon: &'static str,
    pub animation_delay_ms: u64,
    pub visible: bool,
    pub glow: Option<GlowPosition>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Rendered view of one section.
pub struct SectionView {
    pub title: String,
    pub description: String,
    pub cards: Vec<CardId>,
    /// Derived: true iff at least one of `cards` is visible.
    pub visible: bool,
}

impl SectionView {
    pub fn has_visible_card(&self, cards: &[Card]) -> bool {
        self.cards
            .iter()
            .any(|id| cards.get(id.0).is_some_and(|card| card.visible))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
/// Everything one render pass produced.
pub struct RenderedCatalog {
    pub cards: Vec<Card>,
    pub sections: Vec<SectionView>,
}

impl RenderedCatalog {
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.0)
    }

    pub fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(id.0)
    }

    pub fn visible_cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|card| card.visible)
    }

    pub fn visible_sections(&self) -> impl Iterator<Item = &SectionView> {
        self.sections.iter().filter(|section| section.visible)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// One button in the filter bar.
pub struct FilterButton {
    pub selection: FilterSelection,
    pub active: bool,
}

impl FilterButton {
    pub fn label(&self) -> &'static str {
        self.selection.label()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
/// Content of the root container.
pub enum RootContent {
    #[default]
    Empty,
    Catalog(RenderedCatalog),
    Message(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
/// The root container plus the separate filter-bar container.
pub struct DisplaySurface {
    pub root: RootContent,
    pub filter_bar: Vec<FilterButton>,
}

impl DisplaySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the root content with a freshly rendered catalog.
    pub fn show_catalog(&mut self, rendered: RenderedCatalog) {
        self.root = RootContent::Catalog(rendered);
    }

    /// Replace everything with a single message; no cards or buttons remain.
    pub fn show_message(&mut self, message: impl Into<String>) {
        self.root = RootContent::Message(message.into());
        self.filter_bar.clear();
    }

    pub fn rendered(&self) -> Option<&RenderedCatalog> {
        match &self.root {
            RootContent::Catalog(rendered) => Some(rendered),
            _ => None,
        }
    }

    pub fn rendered_mut(&mut self) -> Option<&mut RenderedCatalog> {
        match &mut self.root {
            RootContent::Catalog(rendered) => Some(rendered),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match &self.root {
            RootContent::Message(message) => Some(message),
            _ => None,
        }
    }

    pub fn active_button(&self) -> Option<&FilterButton> {
        self.filter_bar.iter().find(|button| button.active)
    }
}
