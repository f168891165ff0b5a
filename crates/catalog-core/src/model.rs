//! In-memory catalog model.
//!
//! The page markup is scanned once into plain `*Markup` records; the catalog
//! is built from those records and carries explicit state (`StockStatus`,
//! `SectionState`) instead of inferring it from class names later on.
//! Everything downstream (dispatch, view projection) reads this model.

use crate::config::LabelConfig;
use crate::id::{CardId, SectionId};
use crate::sizes::{self, SizeList};
use serde::{Deserialize, Serialize};

// ─── Scan records ────────────────────────────────────────────────────────

/// Image source and alternative text of a product card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    pub src: String,
    pub alt: String,
}

/// Raw facts read from one category section's markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionMarkup {
    pub has_toggle: bool,
    pub has_products: bool,
}

/// Raw facts read from one product card's markup, before interpretation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardMarkup {
    pub image: Option<ProductImage>,
    /// Untrimmed text of the name heading.
    pub name: Option<String>,
    /// Untrimmed text of the price element.
    pub price: Option<String>,
    /// One entry per stock-indicator element: whether it carries the
    /// no-stock flag.
    pub stock_flags: Vec<bool>,
    /// Paragraph texts of the info block; `None` when the card has no info
    /// block at all.
    pub info_paragraphs: Option<Vec<String>>,
}

// ─── States ──────────────────────────────────────────────────────────────

/// Availability of a product. Exactly one holds per card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StockStatus {
    #[default]
    InStock,
    OutOfStock,
}

impl StockStatus {
    /// A card is out of stock when any of its stock indicators is flagged.
    pub fn from_flags(flags: &[bool]) -> Self {
        if flags.iter().any(|flagged| *flagged) {
            Self::OutOfStock
        } else {
            Self::InStock
        }
    }

    pub fn is_out_of_stock(self) -> bool {
        self == Self::OutOfStock
    }
}

/// Collapse state of a category section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionState {
    #[default]
    Open,
    Closed,
}

impl SectionState {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    pub fn is_collapsed(self) -> bool {
        self == Self::Closed
    }
}

// ─── Records ─────────────────────────────────────────────────────────────

/// Where a card's size information came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "camelCase")]
pub enum SizeSource {
    /// No info block, no matching paragraph, or the card is out of stock.
    #[default]
    Absent,
    /// Text following the size label (already trimmed, possibly empty).
    Labeled(String),
    /// A paragraph mentions sizes but no label text could be taken from it
    /// (different wording, or nothing after the label). Contributes no sizes.
    Unlabeled(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySection {
    pub id: SectionId,
    pub has_toggle: bool,
    pub has_products: bool,
}

impl CategorySection {
    /// Only sections with both a toggle control and a product container
    /// take part in toggling.
    pub fn is_togglable(&self) -> bool {
        self.has_toggle && self.has_products
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: CardId,
    pub image: Option<ProductImage>,
    /// Trimmed name text.
    pub name: Option<String>,
    /// Trimmed price text.
    pub price: Option<String>,
    pub stock: StockStatus,
    /// Whether the card carries an inline stock-text element.
    pub has_stock_text: bool,
    pub size_source: SizeSource,
}

impl ProductCard {
    pub fn from_markup(id: CardId, markup: CardMarkup, labels: &LabelConfig) -> Self {
        let stock = StockStatus::from_flags(&markup.stock_flags);
        let size_source = match (&markup.info_paragraphs, stock) {
            (Some(paragraphs), StockStatus::InStock) => {
                size_source_of(paragraphs, &labels.size_label)
            }
            _ => SizeSource::Absent,
        };

        Self {
            id,
            image: markup.image,
            name: markup.name.map(|n| sizes::trim_text(&n).to_string()),
            price: markup.price.map(|p| sizes::trim_text(&p).to_string()),
            stock,
            has_stock_text: !markup.stock_flags.is_empty(),
            size_source,
        }
    }

    /// Size tokens shown in the modal. Recomputed on every call; out-of-stock
    /// cards never have sizes.
    pub fn sizes(&self) -> SizeList {
        match (&self.size_source, self.stock) {
            (SizeSource::Labeled(text), StockStatus::InStock) => sizes::parse_sizes(text),
            _ => SizeList::new(),
        }
    }
}

fn size_source_of(paragraphs: &[String], label: &str) -> SizeSource {
    let texts = paragraphs.iter().map(String::as_str);
    if let Some(line) = sizes::find_size_line(texts, label) {
        return match sizes::extract_size_label(line, label) {
            Some(value) => SizeSource::Labeled(value.to_string()),
            None => SizeSource::Unlabeled(line.to_string()),
        };
    }

    let stem = label.trim_end_matches(':').to_lowercase();
    if stem.is_empty() {
        return SizeSource::Absent;
    }
    paragraphs
        .iter()
        .find(|p| starts_word(&p.to_lowercase(), &stem))
        .map_or(SizeSource::Absent, |p| SizeSource::Unlabeled(p.clone()))
}

/// `needle` occurs in `haystack` at the start of a word (`"Talles"` yes,
/// `"Detalle"` no).
fn starts_word(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(i, _)| {
        !haystack[..i]
            .chars()
            .next_back()
            .is_some_and(char::is_alphanumeric)
    })
}

// ─── Catalog ─────────────────────────────────────────────────────────────

/// Every section and card on the page, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub sections: Vec<CategorySection>,
    pub cards: Vec<ProductCard>,
}

impl Catalog {
    pub fn from_markup<S, C>(sections: S, cards: C, labels: &LabelConfig) -> Self
    where
        S: IntoIterator<Item = SectionMarkup>,
        C: IntoIterator<Item = CardMarkup>,
    {
        let sections: Vec<CategorySection> = sections
            .into_iter()
            .enumerate()
            .map(|(i, markup)| CategorySection {
                id: SectionId(i as u32),
                has_toggle: markup.has_toggle,
                has_products: markup.has_products,
            })
            .collect();
        let cards: Vec<ProductCard> = cards
            .into_iter()
            .enumerate()
            .map(|(i, markup)| ProductCard::from_markup(CardId(i as u32), markup, labels))
            .collect();
        log::debug!(
            "catalog built: {} sections, {} cards",
            sections.len(),
            cards.len()
        );

        Self { sections, cards }
    }

    pub fn card(&self, id: CardId) -> Option<&ProductCard> {
        self.cards.get(id.index())
    }

    pub fn section(&self, id: SectionId) -> Option<&CategorySection> {
        self.sections.get(id.index())
    }

    pub fn togglable_sections(&self) -> impl Iterator<Item = &CategorySection> {
        self.sections.iter().filter(|s| s.is_togglable())
    }

    pub fn out_of_stock(&self) -> impl Iterator<Item = &ProductCard> {
        self.cards.iter().filter(|c| c.stock.is_out_of_stock())
    }
}
