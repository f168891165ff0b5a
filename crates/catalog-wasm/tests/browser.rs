//! Browser tests: scan a fixture catalog in a real document and drive it.
//!
//! Run with `wasm-pack test --headless --firefox crates/catalog-wasm`.

#![cfg(target_arch = "wasm32")]

use catalog_core::config::CatalogConfig;
use catalog_core::id::{CardId, SectionId};
use catalog_core::model::StockStatus;
use catalog_ui::{CardHit, CatalogEvent, ModalState};
use catalog_wasm::CatalogPage;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE: &str = r#"
<section class="categoria-seccion">
  <button class="toggle-btn">?</button>
  <div class="productos">
    <div class="producto">
      <img src="/img/remera.webp" alt="Remera">
      <h3> Remera </h3>
      <span class="precio">$ 18.900</span>
      <span class="stock">Disponible</span>
      <div class="info"><p>100% algodón</p><p>Talle: S - M</p></div>
    </div>
    <div class="producto">
      <img src="/img/buzo.webp" alt="Buzo">
      <h3>Buzo</h3>
      <span class="precio">$ 32.000</span>
      <span class="stock sin-stock">Agotado</span>
      <div class="info"><p>Talle: L</p></div>
    </div>
  </div>
</section>
<div id="modal-producto">
  <span id="cerrar-modal-producto">×</span>
  <img id="modal-img">
  <h2 id="modal-nombre"></h2>
  <p id="modal-precio"></p>
  <p id="modal-stock"></p>
  <div class="modal-talles-container"><div id="modal-talles"></div></div>
</div>
"#;

/// Fixture markup mounted under `<body>`; removed again on drop.
struct Fixture {
    document: Document,
    host: Element,
}

impl Fixture {
    fn mount() -> Self {
        let document = web_sys::window().unwrap().document().unwrap();
        let host = document.create_element("div").unwrap();
        host.set_inner_html(FIXTURE);
        document.body().unwrap().append_child(&host).unwrap();
        Self { document, host }
    }

    fn page(&self) -> CatalogPage {
        CatalogPage::scan(&self.document, CatalogConfig::default()).unwrap()
    }

    fn one(&self, selector: &str) -> Element {
        self.host.query_selector(selector).unwrap().unwrap()
    }

    fn count(&self, selector: &str) -> u32 {
        self.host.query_selector_all(selector).unwrap().length()
    }

    fn body_overflow(&self) -> String {
        self.document
            .body()
            .unwrap()
            .style()
            .get_property_value("overflow")
            .unwrap()
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.host.remove();
    }
}

#[wasm_bindgen_test]
fn scan_builds_catalog_from_markup() {
    let fixture = Fixture::mount();
    let page = fixture.page();
    let catalog = page.controller().catalog();

    assert_eq!(catalog.sections.len(), 1);
    assert!(catalog.sections[0].is_togglable());
    assert_eq!(catalog.cards.len(), 2);
    assert_eq!(catalog.cards[0].name.as_deref(), Some("Remera"));
    assert_eq!(catalog.cards[0].stock, StockStatus::InStock);
    assert_eq!(catalog.cards[0].sizes().to_vec(), vec!["S", "M"]);
    assert_eq!(catalog.cards[1].stock, StockStatus::OutOfStock);
}

#[wasm_bindgen_test]
fn toggle_flips_marker_and_glyph() {
    let fixture = Fixture::mount();
    let mut page = fixture.page();
    let section = fixture.one(".categoria-seccion");
    let toggle = fixture.one(".toggle-btn");

    page.initialize_sections();
    assert_eq!(toggle.text_content().unwrap(), "\u{2212}");
    assert!(!section.class_list().contains("colapsada"));

    page.handle(&CatalogEvent::ToggleClicked(SectionId(0)));
    assert_eq!(toggle.text_content().unwrap(), "+");
    assert!(section.class_list().contains("colapsada"));

    page.handle(&CatalogEvent::ToggleClicked(SectionId(0)));
    assert!(!section.class_list().contains("colapsada"));
}

#[wasm_bindgen_test]
fn badge_pass_is_idempotent() {
    let fixture = Fixture::mount();
    let mut page = fixture.page();

    assert_eq!(page.render_badges(), 1);
    assert_eq!(page.render_badges(), 1);

    assert_eq!(fixture.count(".producto-imagen-container"), 2);
    assert_eq!(fixture.count(".producto-imagen-container > img"), 2);
    assert_eq!(fixture.count(".stock-badge.sin-stock"), 1);
    let badge = fixture.one(".stock-badge");
    assert_eq!(badge.text_content().unwrap(), "Sin stock");

    let stock = fixture.one(".stock").dyn_into::<HtmlElement>().unwrap();
    assert_eq!(stock.style().get_property_value("display").unwrap(), "none");
}

#[wasm_bindgen_test]
fn modal_opens_with_sizes_and_closes_on_escape() {
    let fixture = Fixture::mount();
    let mut page = fixture.page();
    let modal = fixture.one("#modal-producto");

    page.handle(&CatalogEvent::CardClicked {
        card: CardId(0),
        hit: CardHit::Body,
    });
    assert!(modal.class_list().contains("mostrar"));
    assert_eq!(fixture.one("#modal-nombre").text_content().unwrap(), "Remera");
    assert_eq!(fixture.one("#modal-precio").text_content().unwrap(), "$ 18.900");
    assert_eq!(fixture.count("#modal-talles .modal-talle-badge"), 2);
    assert_eq!(fixture.body_overflow(), "hidden");

    page.handle(&CatalogEvent::key("Escape"));
    assert!(!modal.class_list().contains("mostrar"));
    assert_eq!(fixture.body_overflow(), "");
    assert_eq!(page.controller().state().modal(), ModalState::Closed);
}

#[wasm_bindgen_test]
fn out_of_stock_modal_hides_sizes() {
    let fixture = Fixture::mount();
    let mut page = fixture.page();

    page.handle(&CatalogEvent::CardClicked {
        card: CardId(1),
        hit: CardHit::Body,
    });
    let stock = fixture.one("#modal-stock");
    assert_eq!(stock.text_content().unwrap(), "Sin stock");
    assert_eq!(stock.class_name(), "modal-stock sin-stock");

    let sizes = fixture
        .one(".modal-talles-container")
        .dyn_into::<HtmlElement>()
        .unwrap();
    assert_eq!(sizes.style().get_property_value("display").unwrap(), "none");
}
