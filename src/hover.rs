//! Cosmetic pointer-tracking glow on cards.
//!
//! Observation is delegated at the root: every pointer move over the root
//! container arrives here with the closest card under the pointer (if any),
//! so hidden-then-reshown cards keep working without re-registration.

use crate::view::{CardId, GlowPosition, RenderedCatalog};

/// Card bounding box in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerTarget {
    Card { id: CardId, bounds: BoundingBox },
    /// Pointer is over the root but not over any card.
    Elsewhere,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub client_x: f64,
    pub client_y: f64,
    pub target: PointerTarget,
}

#[derive(Debug, Default)]
pub struct HoverDecorator;

impl HoverDecorator {
    /// Record the pointer position relative to the targeted card.
    ///
    /// Returns the card that was updated, or `None` when the event was not
    /// over a known card.
    pub fn handle(&self, rendered: &mut RenderedCatalog, event: &PointerEvent) -> Option<CardId> {
        let PointerTarget::Card { id, bounds } = event.target else {
            return None;
        };
        let card = rendered.card_mut(id)?;
        card.glow = Some(GlowPosition {
            x: event.client_x - bounds.left,
            y: event.client_y - bounds.top,
        });
        Some(id)
    }
}
