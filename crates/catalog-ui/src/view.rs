//! View projection: model → what the page should show.
//!
//! Pure functions from catalog state to view descriptions. Surfaces apply
//! these; nothing here touches markup.

use catalog_core::config::LabelConfig;
use catalog_core::model::{ProductCard, ProductImage, SectionState};
use catalog_core::sizes::SizeList;
use serde::Serialize;

/// How a category section renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    pub collapsed: bool,
    pub glyph: String,
}

pub fn section_view(state: SectionState, labels: &LabelConfig) -> SectionView {
    let glyph = match state {
        SectionState::Open => &labels.open_glyph,
        SectionState::Closed => &labels.closed_glyph,
    };
    SectionView {
        collapsed: state.is_collapsed(),
        glyph: glyph.clone(),
    }
}

/// How a product card's image area renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeView {
    /// Hide the card's own stock text; the badge supersedes it.
    pub hide_stock_text: bool,
    /// Badge label, present only for out-of-stock cards.
    pub badge: Option<String>,
}

/// Cards without an image get no badge treatment at all.
pub fn badge_view(card: &ProductCard, labels: &LabelConfig) -> Option<BadgeView> {
    card.image.as_ref()?;
    Some(BadgeView {
        hide_stock_text: card.has_stock_text,
        badge: card
            .stock
            .is_out_of_stock()
            .then(|| labels.badge.clone()),
    })
}

/// Contents of the modal's sizes section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum SizesView {
    /// Out of stock: the whole section is hidden and its list left as is.
    Hidden,
    /// One badge per size token.
    Tokens(SizeList),
    /// In stock with no recognizable sizes.
    Placeholder(String),
}

/// Modal contents for one product. Absent fields leave the matching slot
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalView {
    pub image: Option<ProductImage>,
    pub name: Option<String>,
    pub price: Option<String>,
    /// Stock indicator label; `Some` exactly when `sizes` is `Hidden`.
    pub stock_indicator: Option<String>,
    pub sizes: SizesView,
}

pub fn modal_view(card: &ProductCard, labels: &LabelConfig) -> ModalView {
    let (stock_indicator, sizes) = if card.stock.is_out_of_stock() {
        (Some(labels.modal_out_of_stock.clone()), SizesView::Hidden)
    } else {
        let tokens = card.sizes();
        let sizes = if tokens.is_empty() {
            SizesView::Placeholder(labels.no_sizes.clone())
        } else {
            SizesView::Tokens(tokens)
        };
        (None, sizes)
    };

    ModalView {
        image: card.image.clone(),
        name: card.name.clone(),
        price: card.price.clone(),
        stock_indicator,
        sizes,
    }
}
