//! Filter bar construction and card/section visibility.
//!
//! `build_filters` and `apply_filter` are free functions over explicit card
//! and section slices so they can be exercised without any surface. The
//! `FilterController` adds the one piece of UI state, the active selection,
//! and keeps the filter-bar buttons in sync with it.

use crate::category::{Category, FilterSelection};
use crate::classify::classify;
use crate::view::{Card, DisplaySurface, FilterButton, SectionView};
use std::collections::BTreeSet;
use tracing::debug;

/// Categories present on at least one card, in master order, after "Show All".
pub fn build_filters(cards: &[Card]) -> Vec<FilterSelection> {
    let present: BTreeSet<Category> = cards
        .iter()
        .flat_map(|card| classify(&card.raw_tags))
        .collect();

    std::iter::once(FilterSelection::ShowAll)
        .chain(
            Category::ALL
                .into_iter()
                .filter(|category| present.contains(category))
                .map(FilterSelection::Only),
        )
        .collect()
}

/// Set card visibility for `selection`, then derive section visibility.
///
/// Cards are always updated in full before any section is, and the result
/// depends only on `selection` and the cards' raw tags.
pub fn apply_filter(selection: FilterSelection, cards: &mut [Card], sections: &mut [SectionView]) {
    for card in cards.iter_mut() {
        card.visible = selection.admits(&classify(&card.raw_tags));
    }
    for section in sections.iter_mut() {
        section.visible = section.has_visible_card(cards);
    }
    debug!(
        selection = %selection,
        visible_cards = cards.iter().filter(|card| card.visible).count(),
        visible_sections = sections.iter().filter(|section| section.visible).count(),
        "applied filter"
    );
}

/// Owns the active selection and the filter-bar buttons on a surface.
#[derive(Debug, Default)]
pub struct FilterController {
    active: FilterSelection,
}

impl FilterController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> FilterSelection {
        self.active
    }

    /// Build the filter bar from the rendered cards and show everything.
    ///
    /// Does nothing when the surface holds no rendered catalog.
    pub fn install(&mut self, surface: &mut DisplaySurface) {
        let Some(rendered) = surface.rendered_mut() else {
            return;
        };
        self.active = FilterSelection::ShowAll;
        for card in rendered.cards.iter_mut() {
            card.visible = true;
        }
        for section in rendered.sections.iter_mut() {
            section.visible = true;
        }
        let selections = build_filters(&rendered.cards);
        surface.filter_bar = selections
            .into_iter()
            .map(|selection| FilterButton {
                selection,
                active: selection == FilterSelection::ShowAll,
            })
            .collect();
    }

    /// Make `selection` the active filter and recompute visibility.
    pub fn select(&mut self, surface: &mut DisplaySurface, selection: FilterSelection) {
        self.active = selection;
        for button in surface.filter_bar.iter_mut() {
            button.active = button.selection == selection;
        }
        if let Some(rendered) = surface.rendered_mut() {
            apply_filter(selection, &mut rendered.cards, &mut rendered.sections);
        }
    }
}
