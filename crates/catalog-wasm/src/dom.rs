//! DOM lookups and the one-time markup scan.

use catalog_core::config::MarkupConfig;
use catalog_core::model::{CardMarkup, ProductImage, SectionMarkup};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, NodeList};

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for BridgeError {
    fn from(value: JsValue) -> Self {
        Self::Js(js_error_message(&value))
    }
}

/// Best-effort text for a thrown JS value.
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

// ─── Queries ─────────────────────────────────────────────────────────────

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query(root: &Element, selector: &str) -> Result<Option<Element>, BridgeError> {
    Ok(root.query_selector(selector)?)
}

pub fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, BridgeError> {
    Ok(elements(&root.query_selector_all(selector)?))
}

pub fn query_document_all(document: &Document, selector: &str) -> Result<Vec<Element>, BridgeError> {
    Ok(elements(&document.query_selector_all(selector)?))
}

/// Set inline `display`. Non-HTML elements have no inline style and are left alone.
pub fn set_display(element: &Element, value: &str) -> Result<(), BridgeError> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        html.style().set_property("display", value)?;
    }
    Ok(())
}

fn text_of(element: &Element) -> String {
    element.text_content().unwrap_or_default()
}

// ─── Scan ────────────────────────────────────────────────────────────────

/// Read one section. Returns the toggle element alongside the record so the
/// bridge can bind it later.
pub fn scan_section(
    section: &Element,
    markup: &MarkupConfig,
) -> Result<(SectionMarkup, Option<Element>), BridgeError> {
    let toggle = query(section, &markup.toggle_selector)?;
    let has_products = query(section, &markup.products_selector)?.is_some();
    let record = SectionMarkup {
        has_toggle: toggle.is_some(),
        has_products,
    };
    Ok((record, toggle))
}

/// Read one product card. Returns the image element alongside the record.
pub fn scan_card(
    card: &Element,
    markup: &MarkupConfig,
) -> Result<(CardMarkup, Option<Element>), BridgeError> {
    let image_el = query(card, &markup.image_selector)?;
    let stock_flags = query_all(card, &markup.stock_selector)?
        .iter()
        .map(|stock| stock.class_list().contains(&markup.no_stock_class))
        .collect();
    let info_paragraphs = match query(card, &markup.info_selector)? {
        Some(info) => Some(
            query_all(&info, &markup.info_paragraph_selector)?
                .iter()
                .map(text_of)
                .collect(),
        ),
        None => None,
    };
    let record = CardMarkup {
        image: image_el.as_ref().map(image_of),
        name: query(card, &markup.name_selector)?.as_ref().map(text_of),
        price: query(card, &markup.price_selector)?.as_ref().map(text_of),
        stock_flags,
        info_paragraphs,
    };
    Ok((record, image_el))
}

/// `src` is the resolved URL for real `<img>` elements, the raw attribute otherwise.
fn image_of(element: &Element) -> ProductImage {
    match element.dyn_ref::<HtmlImageElement>() {
        Some(img) => ProductImage {
            src: img.src(),
            alt: img.alt(),
        },
        None => ProductImage {
            src: element.get_attribute("src").unwrap_or_default(),
            alt: element.get_attribute("alt").unwrap_or_default(),
        },
    }
}
