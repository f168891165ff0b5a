//! Input abstraction layer.
//!
//! Normalizes the page's click and keyboard events into a `CatalogEvent`
//! consumed by the dispatcher. The bridge does the DOM lookups; everything
//! here is plain data.

use catalog_core::id::{CardId, SectionId};

/// Which part of a product card a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardHit {
    /// The injected stock badge. Never opens the modal.
    Badge,
    /// Anywhere else on the card.
    Body,
}

/// A normalized catalog interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEvent {
    /// Toggle control of a category section clicked.
    ToggleClicked(SectionId),

    /// A product card clicked.
    CardClicked { card: CardId, hit: CardHit },

    /// The modal's close control clicked.
    CloseClicked,

    /// Click anywhere inside the modal overlay. `on_backdrop` is true when
    /// the target is the overlay itself rather than its content.
    ModalClicked { on_backdrop: bool },

    /// Key pressed on the document (`KeyboardEvent.key`).
    Key { key: String },
}

impl CatalogEvent {
    /// A card click; `on_badge` when the target element carries the badge class.
    pub fn card_click(card: CardId, on_badge: bool) -> Self {
        let hit = if on_badge { CardHit::Badge } else { CardHit::Body };
        Self::CardClicked { card, hit }
    }

    pub fn key(key: &str) -> Self {
        Self::Key {
            key: key.to_string(),
        }
    }
}
