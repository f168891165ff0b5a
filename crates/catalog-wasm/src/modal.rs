//! Product modal: the shared detail overlay and its listeners.

use crate::dom::{BridgeError, query, set_display};
use crate::page::{SharedPage, listen};
use catalog_core::config::MarkupConfig;
use catalog_core::id::CardId;
use catalog_ui::CatalogEvent;
use catalog_ui::surface::ModalSurface;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlImageElement, KeyboardEvent, Node};

/// The modal root and its content slots. Slots absent from the markup are
/// `None` and skipped on render.
#[derive(Debug, Clone)]
pub struct DomModal {
    root: Element,
    close_button: Option<Element>,
    image: Option<HtmlImageElement>,
    name: Option<Element>,
    price: Option<Element>,
    stock: Option<Element>,
    sizes: Option<Element>,
    sizes_section: Option<Element>,
    document: Document,
    markup: Rc<MarkupConfig>,
}

impl DomModal {
    /// Look up the modal by id. `Ok(None)` when the page has no modal root.
    pub fn find(document: &Document, markup: Rc<MarkupConfig>) -> Result<Option<Self>, BridgeError> {
        let Some(root) = document.get_element_by_id(&markup.modal_id) else {
            return Ok(None);
        };
        let by_id = |id: &str| document.get_element_by_id(id);
        let modal = Self {
            close_button: by_id(&markup.close_button_id),
            image: by_id(&markup.modal_image_id).and_then(|e| e.dyn_into::<HtmlImageElement>().ok()),
            name: by_id(&markup.modal_name_id),
            price: by_id(&markup.modal_price_id),
            stock: by_id(&markup.modal_stock_id),
            sizes: by_id(&markup.modal_sizes_id),
            sizes_section: query(&root, &markup.modal_sizes_section_selector)?,
            root,
            document: document.clone(),
            markup,
        };
        Ok(Some(modal))
    }

    fn create(&self, tag: &str, text: &str) -> Result<Element, BridgeError> {
        let element = self.document.create_element(tag)?;
        element.set_text_content(Some(text));
        Ok(element)
    }
}

impl ModalSurface for DomModal {
    type Error = BridgeError;

    fn set_image(&mut self, src: &str, alt: &str) -> Result<(), BridgeError> {
        if let Some(image) = &self.image {
            image.set_src(src);
            image.set_alt(alt);
        }
        Ok(())
    }

    fn set_name(&mut self, name: &str) -> Result<(), BridgeError> {
        if let Some(el) = &self.name {
            el.set_text_content(Some(name));
        }
        Ok(())
    }

    fn set_price(&mut self, price: &str) -> Result<(), BridgeError> {
        if let Some(el) = &self.price {
            el.set_text_content(Some(price));
        }
        Ok(())
    }

    fn set_stock_indicator(&mut self, label: Option<&str>) -> Result<(), BridgeError> {
        let Some(stock) = &self.stock else {
            return Ok(());
        };
        match label {
            Some(label) => {
                stock.set_text_content(Some(label));
                stock.set_class_name(&self.markup.modal_stock_class_list());
                set_display(stock, "block")
            }
            None => set_display(stock, "none"),
        }
    }

    fn set_sizes_visible(&mut self, visible: bool) -> Result<(), BridgeError> {
        match &self.sizes_section {
            Some(section) => set_display(section, if visible { "block" } else { "none" }),
            None => Ok(()),
        }
    }

    fn clear_sizes(&mut self) -> Result<(), BridgeError> {
        if let Some(list) = &self.sizes {
            list.set_inner_html("");
        }
        Ok(())
    }

    fn push_size(&mut self, token: &str) -> Result<(), BridgeError> {
        let Some(list) = &self.sizes else {
            return Ok(());
        };
        let badge = self.create("span", token)?;
        badge.set_class_name(&self.markup.size_badge_class);
        list.append_child(&badge)?;
        Ok(())
    }

    fn push_placeholder(&mut self, text: &str) -> Result<(), BridgeError> {
        let Some(list) = &self.sizes else {
            return Ok(());
        };
        let note = self.create("p", text)?;
        note.set_attribute(
            "style",
            &format!(
                "color: {}; font-size: {};",
                self.markup.placeholder_color, self.markup.placeholder_font_size
            ),
        )?;
        list.append_child(&note)?;
        Ok(())
    }

    fn set_open(&mut self, open: bool) -> Result<(), BridgeError> {
        let classes = self.root.class_list();
        if open {
            classes.add_1(&self.markup.modal_open_class)?;
        } else {
            classes.remove_1(&self.markup.modal_open_class)?;
        }
        Ok(())
    }
}

/// Wire card clicks, the close control, backdrop clicks and Escape.
/// Without a modal root nothing is bound and `Ok(false)` is returned.
pub fn init_modal(page: &SharedPage, document: &Document) -> Result<bool, BridgeError> {
    let (root, close_button, cards, badge_class) = {
        let page = page.borrow();
        let Some(modal) = &page.dom.modal else {
            log::debug!("no modal root on this page; product modal disabled");
            return Ok(false);
        };
        let cards: Vec<Element> = page.dom.cards.iter().map(|c| c.element().clone()).collect();
        (
            modal.root.clone(),
            modal.close_button.clone(),
            cards,
            page.markup().badge_class.clone(),
        )
    };

    for (i, card) in cards.iter().enumerate() {
        let id = CardId(i as u32);
        let badge_class = badge_class.clone();
        listen(card, "click", page, move |event| {
            // `classList` rather than `className`: SVG targets expose the
            // latter as an SVGAnimatedString.
            let on_badge = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .is_some_and(|el| el.class_list().contains(&badge_class));
            Some(CatalogEvent::card_click(id, on_badge))
        })?;
    }

    if let Some(close) = &close_button {
        listen(close, "click", page, |_| Some(CatalogEvent::CloseClicked))?;
    }

    let backdrop = root.clone();
    listen(&root, "click", page, move |event| {
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        Some(CatalogEvent::ModalClicked {
            on_backdrop: backdrop.is_same_node(target.as_ref()),
        })
    })?;

    listen(document, "keydown", page, |event| {
        event
            .dyn_ref::<KeyboardEvent>()
            .map(|key| CatalogEvent::key(&key.key()))
    })?;

    log::debug!("product modal bound to {} cards", cards.len());
    Ok(true)
}
