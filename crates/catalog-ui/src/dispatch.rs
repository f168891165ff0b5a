//! Interaction state machine.
//!
//! `dispatch` maps (state, event) to a new state plus the `Effect`s the page
//! must apply. The modal has two states, `Closed` and `Open { card }`;
//! sections flip between `Open` and `Closed`. No markup is read here: the
//! catalog model is the only input besides the event.

use crate::input::{CardHit, CatalogEvent};
use crate::keys::{KeyAction, KeyMap};
use crate::view::{ModalView, SectionView, modal_view, section_view};
use catalog_core::config::LabelConfig;
use catalog_core::id::{CardId, SectionId};
use catalog_core::model::{Catalog, SectionState};
use serde::Serialize;

/// State of the single shared modal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum ModalState {
    #[default]
    Closed,
    Open { card: CardId },
}

/// Something the page must do after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    RenderSection { section: SectionId, view: SectionView },
    ShowModal(Box<ModalView>),
    HideModal,
    /// Lock (`true`) or restore (`false`) page scrolling.
    ScrollLock(bool),
}

/// Transient UI state, reset on every page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogState {
    /// Indexed by `SectionId`.
    sections: Vec<SectionState>,
    modal: ModalState,
}

impl CatalogState {
    /// All sections open, modal closed.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            sections: vec![SectionState::Open; catalog.sections.len()],
            modal: ModalState::Closed,
        }
    }

    pub fn section(&self, id: SectionId) -> Option<SectionState> {
        self.sections.get(id.index()).copied()
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn is_modal_open(&self) -> bool {
        matches!(self.modal, ModalState::Open { .. })
    }

    /// Page scroll is locked exactly while the modal is open.
    pub fn scroll_locked(&self) -> bool {
        self.is_modal_open()
    }
}

/// Effects that bring every togglable section to its initial open state.
/// Calling it again resets sections that were collapsed.
pub fn initialize(state: &mut CatalogState, catalog: &Catalog, labels: &LabelConfig) -> Vec<Effect> {
    catalog
        .togglable_sections()
        .filter_map(|section| {
            let slot = state.sections.get_mut(section.id.index())?;
            *slot = SectionState::Open;
            Some(Effect::RenderSection {
                section: section.id,
                view: section_view(SectionState::Open, labels),
            })
        })
        .collect()
}

/// Apply one event to the state, returning the effects to render.
pub fn dispatch(
    state: &mut CatalogState,
    catalog: &Catalog,
    labels: &LabelConfig,
    event: &CatalogEvent,
) -> Vec<Effect> {
    match event {
        CatalogEvent::ToggleClicked(id) => toggle_section(state, catalog, labels, *id),
        CatalogEvent::CardClicked { card, hit } => match hit {
            CardHit::Badge => Vec::new(),
            CardHit::Body => open_modal(state, catalog, labels, *card),
        },
        CatalogEvent::CloseClicked => close_modal(state),
        CatalogEvent::ModalClicked { on_backdrop } => {
            if *on_backdrop {
                close_modal(state)
            } else {
                Vec::new()
            }
        }
        CatalogEvent::Key { key } => match KeyMap::resolve(key) {
            Some(KeyAction::CloseModal) => close_modal(state),
            None => Vec::new(),
        },
    }
}

fn toggle_section(
    state: &mut CatalogState,
    catalog: &Catalog,
    labels: &LabelConfig,
    id: SectionId,
) -> Vec<Effect> {
    if !catalog.section(id).is_some_and(|s| s.is_togglable()) {
        return Vec::new();
    }
    let Some(slot) = state.sections.get_mut(id.index()) else {
        return Vec::new();
    };
    *slot = slot.toggled();
    log::debug!("{id} -> {slot:?}");
    vec![Effect::RenderSection {
        section: id,
        view: section_view(*slot, labels),
    }]
}

fn open_modal(
    state: &mut CatalogState,
    catalog: &Catalog,
    labels: &LabelConfig,
    id: CardId,
) -> Vec<Effect> {
    let Some(card) = catalog.card(id) else {
        return Vec::new();
    };
    // Re-opening while open re-populates the same modal.
    state.modal = ModalState::Open { card: id };
    log::debug!("modal open for {id}");
    vec![
        Effect::ShowModal(Box::new(modal_view(card, labels))),
        Effect::ScrollLock(true),
    ]
}

fn close_modal(state: &mut CatalogState) -> Vec<Effect> {
    if !state.is_modal_open() {
        return Vec::new();
    }
    state.modal = ModalState::Closed;
    log::debug!("modal closed");
    vec![Effect::HideModal, Effect::ScrollLock(false)]
}

/// Owns the catalog model and its UI state; the bridge feeds it events.
#[derive(Debug, Clone)]
pub struct CatalogController {
    catalog: Catalog,
    labels: LabelConfig,
    state: CatalogState,
}

impl CatalogController {
    pub fn new(catalog: Catalog, labels: LabelConfig) -> Self {
        let state = CatalogState::new(&catalog);
        Self {
            catalog,
            labels,
            state,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn labels(&self) -> &LabelConfig {
        &self.labels
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn initialize(&mut self) -> Vec<Effect> {
        initialize(&mut self.state, &self.catalog, &self.labels)
    }

    pub fn handle(&mut self, event: &CatalogEvent) -> Vec<Effect> {
        dispatch(&mut self.state, &self.catalog, &self.labels, event)
    }

    /// Modal contents for the currently open card, if any.
    pub fn open_modal_view(&self) -> Option<ModalView> {
        match self.state.modal {
            ModalState::Open { card } => self
                .catalog
                .card(card)
                .map(|c| modal_view(c, &self.labels)),
            ModalState::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::SizesView;
    use catalog_core::model::{CardMarkup, ProductImage, SectionMarkup};
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        let card = |out: bool, sizes: &str| CardMarkup {
            image: Some(ProductImage::default()),
            name: Some("Short".into()),
            price: Some("$ 9.000".into()),
            stock_flags: vec![out],
            info_paragraphs: Some(vec![format!("Talle: {sizes}")]),
        };
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
            [card(false, "S - M"), card(true, "L")],
            &LabelConfig::default(),
        )
    }

    fn controller() -> CatalogController {
        CatalogController::new(catalog(), LabelConfig::default())
    }

    #[test]
    fn initialize_opens_togglable_sections_only() {
        let mut ctl = controller();
        let effects = ctl.initialize();
        assert_eq!(
            effects,
            vec![Effect::RenderSection {
                section: SectionId(0),
                view: SectionView {
                    collapsed: false,
                    glyph: "−".into()
                }
            }]
        );
    }

    #[test]
    fn toggle_parity() {
        let mut ctl = controller();
        ctl.initialize();
        for clicks in 1..=5 {
            ctl.handle(&CatalogEvent::ToggleClicked(SectionId(0)));
            let expected = if clicks % 2 == 1 {
                SectionState::Closed
            } else {
                SectionState::Open
            };
            assert_eq!(ctl.state().section(SectionId(0)), Some(expected), "after {clicks}");
        }
    }

    #[test]
    fn reinitialize_resets_to_open() {
        let mut ctl = controller();
        ctl.handle(&CatalogEvent::ToggleClicked(SectionId(0)));
        assert_eq!(ctl.state().section(SectionId(0)), Some(SectionState::Closed));
        ctl.initialize();
        assert_eq!(ctl.state().section(SectionId(0)), Some(SectionState::Open));
    }

    #[test]
    fn toggle_ignores_untogglable_and_unknown_sections() {
        let mut ctl = controller();
        assert!(ctl.handle(&CatalogEvent::ToggleClicked(SectionId(1))).is_empty());
        assert!(ctl.handle(&CatalogEvent::ToggleClicked(SectionId(9))).is_empty());
        assert_eq!(ctl.state().section(SectionId(1)), Some(SectionState::Open));
    }

    #[test]
    fn card_click_opens_modal_and_locks_scroll() {
        let mut ctl = controller();
        let effects = ctl.handle(&CatalogEvent::CardClicked {
            card: CardId(0),
            hit: CardHit::Body,
        });
        assert_eq!(effects.len(), 2);
        assert_eq!(effects[1], Effect::ScrollLock(true));
        match &effects[0] {
            Effect::ShowModal(view) => {
                assert_eq!(view.stock_indicator, None);
                assert!(matches!(view.sizes, SizesView::Tokens(_)));
            }
            other => panic!("expected ShowModal, got {other:?}"),
        }
        assert_eq!(ctl.state().modal(), ModalState::Open { card: CardId(0) });
        assert!(ctl.state().scroll_locked());
    }

    #[test]
    fn badge_click_does_nothing() {
        let mut ctl = controller();
        let effects = ctl.handle(&CatalogEvent::CardClicked {
            card: CardId(1),
            hit: CardHit::Badge,
        });
        assert!(effects.is_empty());
        assert_eq!(ctl.state().modal(), ModalState::Closed);
    }

    #[test]
    fn reopen_switches_card_without_stacking() {
        let mut ctl = controller();
        ctl.handle(&CatalogEvent::CardClicked {
            card: CardId(0),
            hit: CardHit::Body,
        });
        ctl.handle(&CatalogEvent::CardClicked {
            card: CardId(1),
            hit: CardHit::Body,
        });
        assert_eq!(ctl.state().modal(), ModalState::Open { card: CardId(1) });
        let view = ctl.open_modal_view().unwrap();
        assert_eq!(view.sizes, SizesView::Hidden);

        let effects = ctl.handle(&CatalogEvent::CloseClicked);
        assert_eq!(effects, vec![Effect::HideModal, Effect::ScrollLock(false)]);
        assert!(ctl.open_modal_view().is_none());
    }

    #[test]
    fn content_click_keeps_modal_open() {
        let mut ctl = controller();
        ctl.handle(&CatalogEvent::CardClicked {
            card: CardId(0),
            hit: CardHit::Body,
        });
        let effects = ctl.handle(&CatalogEvent::ModalClicked { on_backdrop: false });
        assert!(effects.is_empty());
        assert!(ctl.state().is_modal_open());
    }

    #[test]
    fn close_triggers_while_closed_are_noops() {
        let mut ctl = controller();
        for event in [
            CatalogEvent::CloseClicked,
            CatalogEvent::ModalClicked { on_backdrop: true },
            CatalogEvent::key("Escape"),
        ] {
            assert!(ctl.handle(&event).is_empty(), "{event:?}");
        }
    }

    #[test]
    fn unknown_card_is_ignored() {
        let mut ctl = controller();
        let effects = ctl.handle(&CatalogEvent::CardClicked {
            card: CardId(42),
            hit: CardHit::Body,
        });
        assert!(effects.is_empty());
        assert_eq!(ctl.state().modal(), ModalState::Closed);
    }

    #[test]
    fn other_keys_do_not_close() {
        let mut ctl = controller();
        ctl.handle(&CatalogEvent::CardClicked {
            card: CardId(0),
            hit: CardHit::Body,
        });
        assert!(ctl.handle(&CatalogEvent::key("Enter")).is_empty());
        assert!(ctl.state().is_modal_open());
    }
}
