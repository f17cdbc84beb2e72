//! Application controller.
//!
//! `LearningHub` owns the display surface and every piece of mutable state the
//! page has: the rendered cards and sections (inside the surface), the active
//! filter, and the registered event handlers. Events are applied one at a
//! time and in full before handlers are told about them.

use crate::catalog::{Catalog, CatalogLoader};
use crate::category::FilterSelection;
use crate::error::LoadError;
use crate::filter::FilterController;
use crate::hover::{HoverDecorator, PointerEvent};
use crate::render::render;
use crate::view::{CardId, DisplaySurface};
use tracing::{error, info};

/// Shown in place of the whole page when the catalog cannot be loaded.
pub const FALLBACK_MESSAGE: &str = "Sorry, we could not load the learning resources.";

/// Discrete user input delivered to the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UiEvent {
    FilterSelected(FilterSelection),
    PointerMoved(PointerEvent),
}

type FilterHandler = Box<dyn FnMut(FilterSelection, &DisplaySurface)>;
type PointerHandler = Box<dyn FnMut(&PointerEvent, Option<CardId>)>;

#[derive(Default)]
pub struct LearningHub {
    surface: DisplaySurface,
    filters: FilterController,
    hover: Option<HoverDecorator>,
    filter_handlers: Vec<FilterHandler>,
    pointer_handlers: Vec<PointerHandler>,
}

impl LearningHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load, render, and wire filters and hover tracking.
    ///
    /// On failure the surface is replaced with `FALLBACK_MESSAGE`, nothing else
    /// is wired, and the error is returned for the caller to report.
    pub async fn initialize(&mut self, loader: &CatalogLoader) -> Result<(), LoadError> {
        match loader.load().await {
            Ok(catalog) => {
                self.show(&catalog);
                Ok(())
            }
            Err(err) => {
                error!(location = %loader.location(), error = %err, "initialization failed");
                self.fail();
                Err(err)
            }
        }
    }

    /// Render an already-loaded catalog and wire filters and hover tracking.
    pub fn show(&mut self, catalog: &Catalog) {
        render(&mut self.surface, catalog);
        self.filters.install(&mut self.surface);
        self.hover = Some(HoverDecorator);
        info!(
            filters = self.surface.filter_bar.len(),
            "learning hub ready"
        );
    }

    fn fail(&mut self) {
        self.hover = None;
        self.filters = FilterController::new();
        self.surface.show_message(FALLBACK_MESSAGE);
    }

    /// Register a handler called after each filter selection has been applied.
    pub fn on_filter_selected<F>(&mut self, handler: F)
    where
        F: FnMut(FilterSelection, &DisplaySurface) + 'static,
    {
        self.filter_handlers.push(Box::new(handler));
    }

    /// Register a handler called after each pointer move has been processed,
    /// with the card whose glow changed (if any).
    pub fn on_pointer_move<F>(&mut self, handler: F)
    where
        F: FnMut(&PointerEvent, Option<CardId>) + 'static,
    {
        self.pointer_handlers.push(Box::new(handler));
    }

    pub fn dispatch(&mut self, event: UiEvent) {
        match event {
            UiEvent::FilterSelected(selection) => self.select_filter(selection),
            UiEvent::PointerMoved(pointer) => self.pointer_moved(&pointer),
        }
    }

    pub fn select_filter(&mut self, selection: FilterSelection) {
        if self.surface.rendered().is_none() {
            return;
        }
        self.filters.select(&mut self.surface, selection);
        for handler in self.filter_handlers.iter_mut() {
            handler(selection, &self.surface);
        }
    }

    pub fn pointer_moved(&mut self, event: &PointerEvent) {
        let Some(hover) = &self.hover else {
            return;
        };
        let updated = match self.surface.rendered_mut() {
            Some(rendered) => hover.handle(rendered, event),
            None => None,
        };
        for handler in self.pointer_handlers.iter_mut() {
            handler(event, updated);
        }
    }

    pub fn surface(&self) -> &DisplaySurface {
        &self.surface
    }

    pub fn active_filter(&self) -> FilterSelection {
        self.filters.active()
    }
}
