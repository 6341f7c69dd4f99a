mod fetch;
mod leaflet;
mod panel;

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use property_map_core::{cache_busted_url, MapController, MapOptions, TileLayerOptions, DATA_FILE};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;

use crate::leaflet::LeafletHost;
use crate::panel::SharedController;

const MAP_ELEMENT_ID: &str = "map";

fn main() {
    console_error_panic_hook::set_once();
    if let Err(error) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("Failed to start logging: {error}").into());
    }

    let host = match LeafletHost::create(
        MAP_ELEMENT_ID,
        &MapOptions::default(),
        &TileLayerOptions::default(),
    ) {
        Ok(host) => host,
        Err(error) => {
            log::error!("Failed to create map: {error}");
            return;
        }
    };

    let controller: SharedController = Rc::new(RefCell::new(MapController::new(host)));
    spawn_local(load_properties(controller));
}

/// Until this resolves the page shows bare tiles. On failure it stays that way.
async fn load_properties(controller: SharedController) {
    let url = cache_busted_url(DATA_FILE, Utc::now());
    let records = match fetch::fetch_records(&url).await {
        Ok(records) => records,
        Err(error) => {
            log::error!("Failed to load property data: {error}");
            return;
        }
    };

    let summary = controller.borrow_mut().load(records);
    log::info!(
        "Loaded property data: {} markers, {} without coordinates",
        summary.drawn,
        summary.skipped
    );

    if let Err(error) = show_panel(&controller) {
        log::error!("Failed to build owner filter: {error:?}");
    }
}

fn show_panel(controller: &SharedController) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    let container = panel::ensure_container(&document)?;
    let model = controller.borrow().filter_panel();
    panel::render(&document, &container, &model)?;
    panel::bind(&container, controller)
}
