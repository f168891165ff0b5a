//! In-memory surfaces that record what the renderers did to them.

#![allow(dead_code)]

use catalog_core::config::LabelConfig;
use catalog_core::id::SectionId;
use catalog_core::model::{Catalog, CardMarkup, ProductImage, SectionMarkup};
use catalog_ui::surface::{CardSurface, ModalSurface, PageSurface, SectionSurface};
use std::convert::Infallible;

// ─── Fixtures ────────────────────────────────────────────────────────────

pub fn product(name: &str, out_of_stock: bool, info: &[&str]) -> CardMarkup {
    CardMarkup {
        image: Some(ProductImage {
            src: format!("/img/{}.webp", name.to_lowercase()),
            alt: name.to_string(),
        }),
        name: Some(format!(" {name} ")),
        price: Some(" $ 18.900 ".to_string()),
        stock_flags: vec![out_of_stock],
        info_paragraphs: Some(info.iter().map(|p| p.to_string()).collect()),
    }
}

/// Two sections (one without a toggle) and four cards:
/// 0 in stock with sizes, 1 out of stock, 2 in stock without sizes,
/// 3 without an image.
pub fn sample_catalog() -> Catalog {
    let mut imageless = product("Medias", false, &["Talle: único"]);
    imageless.image = None;
    Catalog::from_markup(
        [
            SectionMarkup {
                has_toggle: true,
                has_products: true,
            },
            SectionMarkup {
                has_toggle: false,
                has_products: true,
            },
        ],
        [
            product("Remera", false, &["100% algodón", "Talle: S - M - L"]),
            product("Buzo", true, &["Talle: XL"]),
            product("Gorra", false, &["Ajustable"]),
            imageless,
        ],
        &LabelConfig::default(),
    )
}

// ─── Card ────────────────────────────────────────────────────────────────

/// Mirrors the parts of a card's markup the badge renderer touches.
#[derive(Debug, Default)]
pub struct FakeCard {
    pub wrappers: usize,
    pub stock_text_hidden: bool,
    pub badges: Vec<String>,
}

impl CardSurface for FakeCard {
    type Error = Infallible;

    fn ensure_image_wrapper(&mut self) -> Result<bool, Infallible> {
        if self.wrappers == 0 {
            self.wrappers = 1;
            return Ok(true);
        }
        Ok(false)
    }

    fn hide_stock_text(&mut self) -> Result<(), Infallible> {
        self.stock_text_hidden = true;
        Ok(())
    }

    fn remove_badge(&mut self) -> Result<(), Infallible> {
        if !self.badges.is_empty() {
            self.badges.remove(0);
        }
        Ok(())
    }

    fn append_badge(&mut self, label: &str) -> Result<(), Infallible> {
        self.badges.push(label.to_string());
        Ok(())
    }
}

// ─── Section ─────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct FakeSection {
    pub collapsed: bool,
    pub glyph: String,
}

impl SectionSurface for FakeSection {
    type Error = Infallible;

    fn set_collapsed(&mut self, collapsed: bool) -> Result<(), Infallible> {
        self.collapsed = collapsed;
        Ok(())
    }

    fn set_glyph(&mut self, glyph: &str) -> Result<(), Infallible> {
        self.glyph = glyph.to_string();
        Ok(())
    }
}

// ─── Modal ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SizeEntry {
    Badge(String),
    Placeholder(String),
}

#[derive(Debug, Default)]
pub struct FakeModal {
    pub open: bool,
    pub image: Option<(String, String)>,
    pub name: Option<String>,
    pub price: Option<String>,
    pub stock_indicator: Option<String>,
    pub sizes_visible: Option<bool>,
    pub sizes: Vec<SizeEntry>,
}

impl ModalSurface for FakeModal {
    type Error = Infallible;

    fn set_image(&mut self, src: &str, alt: &str) -> Result<(), Infallible> {
        self.image = Some((src.to_string(), alt.to_string()));
        Ok(())
    }

    fn set_name(&mut self, name: &str) -> Result<(), Infallible> {
        self.name = Some(name.to_string());
        Ok(())
    }

    fn set_price(&mut self, price: &str) -> Result<(), Infallible> {
        self.price = Some(price.to_string());
        Ok(())
    }

    fn set_stock_indicator(&mut self, label: Option<&str>) -> Result<(), Infallible> {
        self.stock_indicator = label.map(str::to_string);
        Ok(())
    }

    fn set_sizes_visible(&mut self, visible: bool) -> Result<(), Infallible> {
        self.sizes_visible = Some(visible);
        Ok(())
    }

    fn clear_sizes(&mut self) -> Result<(), Infallible> {
        self.sizes.clear();
        Ok(())
    }

    fn push_size(&mut self, token: &str) -> Result<(), Infallible> {
        self.sizes.push(SizeEntry::Badge(token.to_string()));
        Ok(())
    }

    fn push_placeholder(&mut self, text: &str) -> Result<(), Infallible> {
        self.sizes.push(SizeEntry::Placeholder(text.to_string()));
        Ok(())
    }

    fn set_open(&mut self, open: bool) -> Result<(), Infallible> {
        self.open = open;
        Ok(())
    }
}

// ─── Page ────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct FakePage {
    pub sections: Vec<FakeSection>,
    pub modal: Option<FakeModal>,
    pub scroll_locked: bool,
}

impl FakePage {
    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self {
            sections: catalog.sections.iter().map(|_| FakeSection::default()).collect(),
            modal: Some(FakeModal::default()),
            scroll_locked: false,
        }
    }

    pub fn modal(&self) -> &FakeModal {
        self.modal.as_ref().expect("page has a modal")
    }
}

impl PageSurface for FakePage {
    type Error = Infallible;
    type Section = FakeSection;
    type Modal = FakeModal;

    fn section_mut(&mut self, id: SectionId) -> Option<&mut FakeSection> {
        self.sections.get_mut(id.index())
    }

    fn modal_mut(&mut self) -> Option<&mut FakeModal> {
        self.modal.as_mut()
    }

    fn set_scroll_locked(&mut self, locked: bool) -> Result<(), Infallible> {
        self.scroll_locked = locked;
        Ok(())
    }
}
