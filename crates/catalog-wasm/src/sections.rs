//! Section toggler: collapsible category sections.

use crate::dom::BridgeError;
use crate::page::{SharedPage, listen};
use catalog_core::id::SectionId;
use catalog_ui::CatalogEvent;
use catalog_ui::surface::SectionSurface;
use web_sys::Element;

/// A togglable section element and its toggle control.
#[derive(Debug, Clone)]
pub struct DomSection {
    section: Element,
    toggle: Element,
    collapsed_class: String,
}

impl DomSection {
    pub fn new(section: Element, toggle: Element, collapsed_class: &str) -> Self {
        Self {
            section,
            toggle,
            collapsed_class: collapsed_class.to_string(),
        }
    }

    pub fn toggle(&self) -> &Element {
        &self.toggle
    }
}

impl SectionSurface for DomSection {
    type Error = BridgeError;

    fn set_collapsed(&mut self, collapsed: bool) -> Result<(), BridgeError> {
        let classes = self.section.class_list();
        if collapsed {
            classes.add_1(&self.collapsed_class)?;
        } else {
            classes.remove_1(&self.collapsed_class)?;
        }
        Ok(())
    }

    fn set_glyph(&mut self, glyph: &str) -> Result<(), BridgeError> {
        self.toggle.set_text_content(Some(glyph));
        Ok(())
    }
}

/// Render every togglable section open and attach its click listener.
/// Returns the number of sections wired.
pub fn init_sections(page: &SharedPage) -> Result<usize, BridgeError> {
    let toggles: Vec<(SectionId, Element)> = {
        let mut page = page.borrow_mut();
        page.initialize_sections();
        page.controller
            .catalog()
            .togglable_sections()
            .filter_map(|section| {
                let dom = page.dom.sections.get(section.id.index())?.as_ref()?;
                Some((section.id, dom.toggle().clone()))
            })
            .collect()
    };
    for (id, toggle) in &toggles {
        let id = *id;
        listen(toggle, "click", page, move |_| {
            Some(CatalogEvent::ToggleClicked(id))
        })?;
    }
    log::debug!("{} section toggles bound", toggles.len());
    Ok(toggles.len())
}
