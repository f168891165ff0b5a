//! Render surfaces.
//!
//! The page is reached only through these traits. The browser bridge
//! implements them over real elements; tests implement them over plain
//! structs. Each renderer applies one view description to one surface.

use crate::dispatch::Effect;
use crate::view::{BadgeView, ModalView, SectionView, SizesView};
use catalog_core::id::SectionId;

/// A category section: its collapsed marker and its toggle glyph.
pub trait SectionSurface {
    type Error;

    fn set_collapsed(&mut self, collapsed: bool) -> Result<(), Self::Error>;
    fn set_glyph(&mut self, glyph: &str) -> Result<(), Self::Error>;
}

/// A product card's image area.
pub trait CardSurface {
    type Error;

    /// Make sure the image sits inside its positioning wrapper. Creates the
    /// wrapper on first call only; returns `true` when it was created.
    fn ensure_image_wrapper(&mut self) -> Result<bool, Self::Error>;
    fn hide_stock_text(&mut self) -> Result<(), Self::Error>;
    /// Remove a badge injected by an earlier pass, if any.
    fn remove_badge(&mut self) -> Result<(), Self::Error>;
    fn append_badge(&mut self, label: &str) -> Result<(), Self::Error>;
}

/// The shared product modal. Slots missing from the markup are skipped by
/// the implementation.
pub trait ModalSurface {
    type Error;

    fn set_image(&mut self, src: &str, alt: &str) -> Result<(), Self::Error>;
    fn set_name(&mut self, name: &str) -> Result<(), Self::Error>;
    fn set_price(&mut self, price: &str) -> Result<(), Self::Error>;
    /// `Some(label)` shows the stock indicator with that text; `None` hides it.
    fn set_stock_indicator(&mut self, label: Option<&str>) -> Result<(), Self::Error>;
    fn set_sizes_visible(&mut self, visible: bool) -> Result<(), Self::Error>;
    fn clear_sizes(&mut self) -> Result<(), Self::Error>;
    fn push_size(&mut self, token: &str) -> Result<(), Self::Error>;
    fn push_placeholder(&mut self, text: &str) -> Result<(), Self::Error>;
    fn set_open(&mut self, open: bool) -> Result<(), Self::Error>;
}

/// The whole page as seen by dispatched effects.
pub trait PageSurface {
    type Error;
    type Section: SectionSurface<Error = Self::Error>;
    type Modal: ModalSurface<Error = Self::Error>;

    fn section_mut(&mut self, id: SectionId) -> Option<&mut Self::Section>;
    /// `None` when the page has no modal root.
    fn modal_mut(&mut self) -> Option<&mut Self::Modal>;
    fn set_scroll_locked(&mut self, locked: bool) -> Result<(), Self::Error>;
}

// ─── Renderers ───────────────────────────────────────────────────────────

/// Apply a section view: marker first, then glyph.
pub fn render_section<S: SectionSurface>(surface: &mut S, view: &SectionView) -> Result<(), S::Error> {
    surface.set_collapsed(view.collapsed)?;
    surface.set_glyph(&view.glyph)
}

/// Re-render a card's stock badge. Safe to repeat: the wrapper is created
/// once and any earlier badge is removed before a new one is added.
pub fn render_card_badge<S: CardSurface>(surface: &mut S, view: &BadgeView) -> Result<(), S::Error> {
    if surface.ensure_image_wrapper()? {
        log::trace!("image wrapper created");
    }
    if view.hide_stock_text {
        surface.hide_stock_text()?;
    }
    surface.remove_badge()?;
    if let Some(label) = &view.badge {
        surface.append_badge(label)?;
    }
    Ok(())
}

/// Populate the modal from a view and show it.
pub fn render_modal<S: ModalSurface>(surface: &mut S, view: &ModalView) -> Result<(), S::Error> {
    if let Some(image) = &view.image {
        surface.set_image(&image.src, &image.alt)?;
    }
    if let Some(name) = &view.name {
        surface.set_name(name)?;
    }
    if let Some(price) = &view.price {
        surface.set_price(price)?;
    }
    surface.set_stock_indicator(view.stock_indicator.as_deref())?;

    match &view.sizes {
        SizesView::Hidden => surface.set_sizes_visible(false)?,
        SizesView::Tokens(tokens) => {
            surface.set_sizes_visible(true)?;
            surface.clear_sizes()?;
            for token in tokens {
                surface.push_size(token.trim())?;
            }
        }
        SizesView::Placeholder(text) => {
            surface.set_sizes_visible(true)?;
            surface.clear_sizes()?;
            surface.push_placeholder(text)?;
        }
    }
    surface.set_open(true)
}

/// Apply dispatched effects in order. Effects aimed at elements the page
/// lacks are skipped; the first surface error aborts the rest.
pub fn apply_effects<P: PageSurface>(page: &mut P, effects: &[Effect]) -> Result<(), P::Error> {
    for effect in effects {
        match effect {
            Effect::RenderSection { section, view } => {
                if let Some(surface) = page.section_mut(*section) {
                    render_section(surface, view)?;
                }
            }
            Effect::ShowModal(view) => {
                if let Some(modal) = page.modal_mut() {
                    render_modal(modal, view)?;
                }
            }
            Effect::HideModal => {
                if let Some(modal) = page.modal_mut() {
                    modal.set_open(false)?;
                }
            }
            Effect::ScrollLock(locked) => page.set_scroll_locked(*locked)?,
        }
    }
    Ok(())
}
