//! The enhanced page: scanned catalog, its controller and the DOM handles
//! the controller's effects are applied to.

use crate::badges::DomCard;
use crate::dom::{BridgeError, query_document_all, scan_card, scan_section};
use crate::modal::DomModal;
use crate::sections::DomSection;
use catalog_core::config::{CatalogConfig, MarkupConfig};
use catalog_core::id::SectionId;
use catalog_core::model::Catalog;
use catalog_ui::surface::{PageSurface, apply_effects};
use catalog_ui::view::ModalView;
use catalog_ui::{CatalogController, CatalogEvent, Effect, ModalState};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, EventTarget, HtmlElement};

pub type SharedPage = Rc<RefCell<CatalogPage>>;

// ─── DOM page ────────────────────────────────────────────────────────────

/// Element handles, indexed the same way as the catalog model.
#[derive(Debug)]
pub struct DomPage {
    /// `None` for sections without a toggle control.
    pub(crate) sections: Vec<Option<DomSection>>,
    pub(crate) cards: Vec<DomCard>,
    pub(crate) modal: Option<DomModal>,
    body: Option<HtmlElement>,
    markup: Rc<MarkupConfig>,
}

impl PageSurface for DomPage {
    type Error = BridgeError;
    type Section = DomSection;
    type Modal = DomModal;

    fn section_mut(&mut self, id: SectionId) -> Option<&mut DomSection> {
        self.sections.get_mut(id.index())?.as_mut()
    }

    fn modal_mut(&mut self) -> Option<&mut DomModal> {
        self.modal.as_mut()
    }

    fn set_scroll_locked(&mut self, locked: bool) -> Result<(), BridgeError> {
        let Some(body) = &self.body else {
            return Ok(());
        };
        let style = body.style();
        if locked {
            style.set_property("overflow", "hidden")?;
        } else {
            style.remove_property("overflow")?;
        }
        Ok(())
    }
}

// ─── Catalog page ────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct CatalogPage {
    pub(crate) controller: CatalogController,
    pub(crate) dom: DomPage,
}

impl CatalogPage {
    /// Read the whole page once and build the catalog model from it.
    pub fn scan(document: &Document, config: CatalogConfig) -> Result<Self, BridgeError> {
        let CatalogConfig { markup, labels, .. } = config;
        let markup = Rc::new(markup);

        let mut section_records = Vec::new();
        let mut sections = Vec::new();
        for element in query_document_all(document, &markup.section_selector)? {
            let (record, toggle) = scan_section(&element, &markup)?;
            section_records.push(record);
            sections.push(toggle.map(|t| DomSection::new(element, t, &markup.collapsed_class)));
        }

        let mut card_records = Vec::new();
        let mut cards = Vec::new();
        for element in query_document_all(document, &markup.card_selector)? {
            let (record, image) = scan_card(&element, &markup)?;
            card_records.push(record);
            cards.push(DomCard::new(element, image, document.clone(), Rc::clone(&markup)));
        }

        let catalog = Catalog::from_markup(section_records, card_records, &labels);
        let dom = DomPage {
            sections,
            cards,
            modal: DomModal::find(document, Rc::clone(&markup))?,
            body: document.body(),
            markup,
        };
        Ok(Self {
            controller: CatalogController::new(catalog, labels),
            dom,
        })
    }

    pub fn controller(&self) -> &CatalogController {
        &self.controller
    }

    pub fn markup(&self) -> &MarkupConfig {
        &self.dom.markup
    }

    /// One badge pass over every card. Returns the number of badges shown.
    pub fn render_badges(&mut self) -> usize {
        crate::badges::render_badges(self)
    }

    pub fn initialize_sections(&mut self) {
        let effects = self.controller.initialize();
        self.apply(&effects);
    }

    pub fn handle(&mut self, event: &CatalogEvent) {
        let effects = self.controller.handle(event);
        self.apply(&effects);
    }

    fn apply(&mut self, effects: &[Effect]) {
        if let Err(err) = apply_effects(&mut self.dom, effects) {
            log::warn!("page update failed: {err}");
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<'a> {
    ok: bool,
    catalog: &'a Catalog,
    /// Collapsed flag per section, in document order.
    collapsed: Vec<bool>,
    modal: ModalState,
    open_view: Option<ModalView>,
}

impl CatalogPage {
    /// Catalog and UI state as JSON: `{"ok":true,"catalog":..,"collapsed":..,
    /// "modal":..,"openView":..}`.
    pub fn snapshot_json(&self) -> String {
        let catalog = self.controller.catalog();
        let state = self.controller.state();
        let snapshot = Snapshot {
            ok: true,
            catalog,
            collapsed: catalog
                .sections
                .iter()
                .map(|s| state.section(s.id).is_some_and(|st| st.is_collapsed()))
                .collect(),
            modal: state.modal(),
            open_view: self.controller.open_modal_view(),
        };
        serde_json::to_string(&snapshot)
            .unwrap_or_else(|e| crate::error_json(&format!("Serialization error: {e}")))
    }
}

// ─── Listeners ───────────────────────────────────────────────────────────

/// Feed one event to the page. Events arriving while the page is already
/// borrowed are dropped.
pub fn dispatch(page: &SharedPage, event: &CatalogEvent) {
    match page.try_borrow_mut() {
        Ok(mut page) => page.handle(event),
        Err(_) => log::warn!("dropped {event:?}: page busy"),
    }
}

/// Attach a listener for the page's lifetime. `to_event` turns the DOM
/// event into a catalog event, or `None` to ignore it.
pub fn listen<F>(target: &EventTarget, kind: &str, page: &SharedPage, to_event: F) -> Result<(), BridgeError>
where
    F: Fn(&Event) -> Option<CatalogEvent> + 'static,
{
    let page = Rc::clone(page);
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Some(event) = to_event(&event) {
            dispatch(&page, &event);
        }
    });
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
