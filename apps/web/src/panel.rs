//! Owner checkboxes overlaid on the map.
//!
//! The DOM is built from a [`FilterPanel`] view-model. Labels only ever reach
//! the page as text nodes or property values, so quotes and angle brackets in
//! owner names cannot change the markup.

use std::cell::RefCell;
use std::rc::Rc;

use property_map_core::{FilterPanel, MapController};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement};

use crate::leaflet::LeafletHost;

const CONTAINER_ID: &str = "owner-filter";
const CHECKBOX_CLASS: &str = "ownerChk";
const CLEAR_ID: &str = "owner-clear";

const WRAPPER_STYLE: &str = "position:absolute; left:8px; top:8px; z-index:1000; \
    background:white; padding:8px; max-height:90vh; overflow:auto; \
    border-radius:6px; box-shadow:0 2px 8px rgba(0,0,0,0.15);";

pub type SharedController = Rc<RefCell<MapController<LeafletHost>>>;

/// Returns the filter container, creating a fixed overlay for it if the page
/// does not already have one.
pub fn ensure_container(document: &Document) -> Result<Element, JsValue> {
    if let Some(existing) = document.get_element_by_id(CONTAINER_ID) {
        return Ok(existing);
    }

    let wrapper = document.create_element("div")?;
    wrapper.set_id("filters");
    wrapper.set_attribute("style", WRAPPER_STYLE)?;

    let container = document.create_element("div")?;
    container.set_id(CONTAINER_ID);
    wrapper.append_child(&container)?;

    document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?
        .append_child(&wrapper)?;

    Ok(container)
}

pub fn render(document: &Document, container: &Element, panel: &FilterPanel) -> Result<(), JsValue> {
    container.set_text_content(None);

    let heading = document.create_element("div")?;
    heading.set_attribute("style", "font-weight:600; margin-bottom:6px;")?;
    heading.set_text_content(Some("Owner"));
    container.append_child(&heading)?;

    let list = document.create_element("div")?;
    list.set_id("owner-filter-list");

    for toggle in &panel.toggles {
        let row = document.create_element("label")?;
        row.set_attribute("style", "display:block; font-size:14px; line-height:1.6;")?;

        let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
        input.set_type("checkbox");
        input.set_class_name(CHECKBOX_CLASS);
        input.set_value(&toggle.label);
        input.set_checked(toggle.checked);

        row.append_child(&input)?;
        row.append_child(&document.create_text_node(&format!(" {}", toggle.label)))?;
        list.append_child(&row)?;
    }

    let clear = document.create_element("button")?;
    clear.set_id(CLEAR_ID);
    clear.set_attribute("style", "margin-top:8px;")?;
    clear.set_text_content(Some("Clear"));
    list.append_child(&clear)?;

    container.append_child(&list)?;
    Ok(())
}

/// Makes every checkbox match the view-model.
pub fn sync(container: &Element, panel: &FilterPanel) -> Result<(), JsValue> {
    let inputs = container.query_selector_all(&format!(".{CHECKBOX_CLASS}"))?;
    for index in 0..inputs.length() {
        let Some(input) = inputs
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlInputElement>().ok())
        else {
            continue;
        };
        let label = input.value();
        let checked = panel
            .toggles
            .iter()
            .any(|toggle| toggle.checked && toggle.label == label);
        input.set_checked(checked);
    }
    Ok(())
}

/// Wires checkbox changes and the clear button to the controller.
pub fn bind(container: &Element, controller: &SharedController) -> Result<(), JsValue> {
    let on_change = Closure::<dyn FnMut(Event)>::new({
        let controller = controller.clone();
        move |event: Event| {
            let Some(input) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            if !input.class_list().contains(CHECKBOX_CLASS) {
                return;
            }
            let summary = controller
                .borrow_mut()
                .set_owner(&input.value(), input.checked());
            log::debug!("owner {:?} -> {}: {summary:?}", input.value(), input.checked());
        }
    });
    container.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();

    let Some(clear) = container.query_selector(&format!("#{CLEAR_ID}"))? else {
        return Ok(());
    };
    let on_clear = Closure::<dyn FnMut(Event)>::new({
        let controller = controller.clone();
        let container = container.clone();
        move |event: Event| {
            event.prevent_default();
            let mut controller = controller.borrow_mut();
            controller.clear_filter();
            if let Err(error) = sync(&container, &controller.filter_panel()) {
                log::error!("failed to reset owner checkboxes: {error:?}");
            }
        }
    });
    clear.add_event_listener_with_callback("click", on_clear.as_ref().unchecked_ref())?;
    on_clear.forget();

    Ok(())
}
