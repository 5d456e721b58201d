//! Browser host for the scroll-scrub controller.
//!
//! Reads the optional inline TOML config, discovers the hero section and its
//! video, starts the controller, and keeps it alive for the page lifetime.

mod console;
mod dom;
mod page;

use crate::dom::DomPage;
use crate::page::ScrubPage;
use scrub_core::ScrubController;
use scrub_core::config::{AppConfig, parse_config};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{info, warn};
use wasm_bindgen::prelude::*;

thread_local! {
    static PAGE: RefCell<Option<Rc<ScrubPage>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;

    let (config, config_error) = match DomPage::inline_config(&window) {
        Some(text) => match parse_config(&text) {
            Ok(config) => (config, None),
            Err(err) => (AppConfig::default(), Some(format!("{err:#}"))),
        },
        None => (AppConfig::default(), None),
    };

    console::init_tracing(config.log_level.as_filter_str());
    if let Some(err) = config_error {
        warn!("Inline config rejected, using defaults: {err}");
    }

    let dom = DomPage::discover(window, &config)?;
    let preferences = dom.preferences();
    let candidates = dom.candidates();
    let (controller, effects) = ScrubController::start(config, preferences, candidates);
    let active = controller.is_active();

    let page = ScrubPage::new(controller, dom);
    page.run_effects(effects);
    if active {
        page.install_listeners();
    }
    info!(active, "Scroll scrub host started");

    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
    Ok(())
}

/// JSON snapshot of the controller, for debugging from the devtools console.
#[wasm_bindgen(js_name = scrubSnapshot)]
pub fn scrub_snapshot() -> Option<String> {
    PAGE.with(|slot| {
        slot.borrow()
            .as_ref()
            .and_then(|page| serde_json::to_string(&page.snapshot()).ok())
    })
}
