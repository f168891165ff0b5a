//! Stock badge renderer.
//!
//! Wraps each card image in a positioning container, hides the inline
//! stock text and overlays a "no stock" badge on out-of-stock cards.

use crate::dom::{BridgeError, query_all, set_display};
use crate::page::CatalogPage;
use catalog_core::config::MarkupConfig;
use catalog_ui::surface::{CardSurface, render_card_badge};
use catalog_ui::view::badge_view;
use std::rc::Rc;
use web_sys::{Document, Element, Node};

/// A product card element and the parts of it the badge renderer touches.
#[derive(Debug, Clone)]
pub struct DomCard {
    card: Element,
    image: Option<Element>,
    wrapper: Option<Element>,
    document: Document,
    markup: Rc<MarkupConfig>,
}

impl DomCard {
    pub fn new(card: Element, image: Option<Element>, document: Document, markup: Rc<MarkupConfig>) -> Self {
        Self {
            card,
            image,
            wrapper: None,
            document,
            markup,
        }
    }

    pub fn element(&self) -> &Element {
        &self.card
    }

    fn badge_host(&self) -> &Element {
        self.wrapper.as_ref().unwrap_or(&self.card)
    }
}

impl CardSurface for DomCard {
    type Error = BridgeError;

    fn ensure_image_wrapper(&mut self) -> Result<bool, BridgeError> {
        if self.wrapper.is_some() {
            return Ok(false);
        }
        let Some(image) = &self.image else {
            return Ok(false);
        };
        let Some(parent) = image.parent_element() else {
            return Ok(false);
        };
        if parent.class_list().contains(&self.markup.image_wrapper_class) {
            self.wrapper = Some(parent);
            return Ok(false);
        }

        let wrapper = self.document.create_element("div")?;
        wrapper.set_class_name(&self.markup.image_wrapper_class);
        let image_node: &Node = image;
        parent.insert_before(&wrapper, Some(image_node))?;
        wrapper.append_child(image_node)?;
        self.wrapper = Some(wrapper);
        Ok(true)
    }

    fn hide_stock_text(&mut self) -> Result<(), BridgeError> {
        for stock in query_all(&self.card, &self.markup.stock_selector)? {
            set_display(&stock, "none")?;
        }
        Ok(())
    }

    fn remove_badge(&mut self) -> Result<(), BridgeError> {
        let selector = format!(".{}", self.markup.badge_class);
        for badge in query_all(self.badge_host(), &selector)? {
            badge.remove();
        }
        Ok(())
    }

    fn append_badge(&mut self, label: &str) -> Result<(), BridgeError> {
        let badge = self.document.create_element("span")?;
        badge.set_class_name(&self.markup.badge_class_list());
        badge.set_text_content(Some(label));
        self.badge_host().append_child(&badge)?;
        Ok(())
    }
}

/// Run one badge pass over every card. A failing card is logged and
/// skipped. Returns the number of badges shown.
pub fn render_badges(page: &mut CatalogPage) -> usize {
    let CatalogPage { controller, dom } = page;
    let labels = controller.labels();
    let mut shown = 0;
    for (card, surface) in controller.catalog().cards.iter().zip(dom.cards.iter_mut()) {
        let Some(view) = badge_view(card, labels) else {
            continue;
        };
        match render_card_badge(surface, &view) {
            Ok(()) if view.badge.is_some() => shown += 1,
            Ok(()) => {}
            Err(err) => log::warn!("badge render failed for {}: {err}", card.id),
        }
    }
    log::debug!("{shown} stock badges rendered");
    shown
}
