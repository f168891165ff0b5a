//! Catalogo WASM bridge.
//!
//! Enhances a server-rendered product catalog once the document is ready:
//! collapsible category sections, "no stock" badges on product images and a
//! shared product detail modal. The page is scanned once into a
//! `catalog_core::Catalog`; listeners then feed events to a
//! `catalog_ui::CatalogController` and apply its effects to the DOM.

mod badges;
mod dom;
mod modal;
mod page;
mod sections;

pub use dom::{BridgeError, js_error_message};
pub use page::{CatalogPage, SharedPage};

use catalog_core::config::CatalogConfig;
use catalog_core::lint::lint_catalog;
use catalog_core::sizes::parse_sizes;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

/// Global a page may set before the module loads to override markup names
/// and labels (JSON string or plain object).
const CONFIG_GLOBAL: &str = "catalogoConfig";

thread_local! {
    static PAGE: RefCell<Option<SharedPage>> = const { RefCell::new(None) };
}

// ─── Bootstrap ───────────────────────────────────────────────────────────

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook_setup();
    let Some(window) = web_sys::window() else {
        return;
    };
    let (config, rejected) = match load_config(&window) {
        Ok(config) => (config, None),
        Err(reason) => (CatalogConfig::default(), Some(reason)),
    };
    init_logging(&config);
    if let Some(reason) = rejected {
        log::error!("ignoring window.{CONFIG_GLOBAL}: {reason}");
    }
    if let Err(err) = bootstrap(&window, config) {
        log::error!("catalog enhancer not started: {err}");
    }
}

fn init_logging(config: &CatalogConfig) {
    match console_level(config) {
        Some(level) => wasm_logger::init(wasm_logger::Config::new(level)),
        None => log::set_max_level(log::LevelFilter::Off),
    }
}

/// Console level for `wasm-logger`; `None` when logging is off.
fn console_level(config: &CatalogConfig) -> Option<log::Level> {
    config
        .log_level_filter()
        .unwrap_or(log::LevelFilter::Info)
        .to_level()
}

fn bootstrap(window: &Window, config: CatalogConfig) -> Result<(), BridgeError> {
    let document = window.document().ok_or(BridgeError::NoDocument)?;
    if document.ready_state() == "loading" {
        let ready_doc = document.clone();
        let on_ready = Closure::once_into_js(move || {
            if let Err(err) = run(&ready_doc, config) {
                log::error!("catalog enhancer failed: {err}");
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        Ok(())
    } else {
        run(&document, config)
    }
}

/// Read `window.catalogoConfig`. Absent means defaults; `Err` carries the
/// reason an override was rejected.
fn load_config(window: &Window) -> Result<CatalogConfig, String> {
    let value = match js_sys::Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL)) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return Ok(CatalogConfig::default()),
    };
    let json = match value.as_string() {
        Some(text) => text,
        None => js_sys::JSON::stringify(&value)
            .map(String::from)
            .map_err(|err| format!("not serializable: {}", js_error_message(&err)))?,
    };
    CatalogConfig::from_json(&json).map_err(|err| err.to_string())
}

/// Store the enhanced page for `catalog_snapshot_json`. A second call on
/// the same page does nothing.
fn run(document: &Document, config: CatalogConfig) -> Result<(), BridgeError> {
    if PAGE.with(|slot| slot.borrow().is_some()) {
        log::debug!("catalog already enhanced");
        return Ok(());
    }
    let page = enhance(document, config)?;
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
    Ok(())
}

/// Scan `document` and run the three enhancers in order: section toggles,
/// stock badges, product modal. A failing enhancer is logged and the rest
/// still run.
///
/// # Errors
/// Returns `BridgeError` when the page cannot be scanned at all.
pub fn enhance(document: &Document, config: CatalogConfig) -> Result<SharedPage, BridgeError> {
    let page: SharedPage = Rc::new(RefCell::new(CatalogPage::scan(document, config)?));
    let diagnostics = lint_catalog(page.borrow().controller().catalog());
    for diag in &diagnostics {
        log::debug!("{} ({:?}): {}", diag.rule, diag.target, diag.message);
    }

    let toggles = sections::init_sections(&page).unwrap_or_else(|err| {
        log::warn!("section toggles not bound: {err}");
        0
    });
    let badges = page.borrow_mut().render_badges();
    let modal = modal::init_modal(&page, document).unwrap_or_else(|err| {
        log::warn!("product modal not bound: {err}");
        false
    });

    log::info!("catalog ready: {toggles} toggles, {badges} badges, modal: {modal}");
    Ok(page)
}

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Catalogo WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

// ─── Standalone JSON helpers ─────────────────────────────────────────────

pub(crate) fn error_json(message: &str) -> String {
    serde_json::json!({ "ok": false, "error": message }).to_string()
}

/// Split a size line into tokens. Returns a JSON array of strings.
#[wasm_bindgen]
pub fn parse_sizes_json(text: &str) -> String {
    serde_json::to_string(&parse_sizes(text)).unwrap_or_else(|_| "[]".to_string())
}

/// Check a config override. Returns JSON `{"ok":true}` or `{"ok":false,"error":"..."}`.
#[wasm_bindgen]
pub fn validate_config_json(json: &str) -> String {
    match CatalogConfig::from_json(json) {
        Ok(_) => r#"{"ok":true}"#.to_string(),
        Err(e) => error_json(&e.to_string()),
    }
}

/// The scanned catalog and current UI state.
/// Returns JSON `{"ok":true,"catalog":{...},"collapsed":[...],"modal":{...},"openView":...}`
/// or `{"ok":false,"error":"..."}`.
#[wasm_bindgen]
pub fn catalog_snapshot_json() -> String {
    PAGE.with(|slot| {
        let slot = slot.borrow();
        let Some(page) = slot.as_ref() else {
            return error_json("catalog not initialized");
        };
        match page.try_borrow() {
            Ok(page) => page.snapshot_json(),
            Err(_) => error_json("catalog busy"),
        }
    })
}
