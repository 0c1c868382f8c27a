// ============================================================================
// SETTINGS VIEW - Integración de sensores (solo en memoria)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};
use crate::config::SensorConfig;
use crate::dom::{ElementBuilder, append_child, on_click, on_input};
use crate::models::session::{Action, Page};
use crate::state::AppState;
use crate::views::shared::{dispatch_button, footer_actions, page_container, panel};

pub fn render_settings(state: &AppState) -> Result<Element, JsValue> {
    let dark_mode = state.session.borrow().dark_mode();
    let draft = Rc::new(RefCell::new(state.sensor_settings()));

    let page = page_container("Settings")?;
    let content = panel(dark_mode)?;

    let heading = ElementBuilder::new("h3")?
        .class("font-semibold mb-4")
        .text("Sensor Integration")
        .build();
    append_child(&content, &heading)?;

    let fields = ElementBuilder::new("div")?
        .class("space-y-4")
        .build();

    let mqtt_value = draft.borrow().mqtt_broker_url.clone();
    let mqtt = create_text_field("MQTT Broker URL", &mqtt_value, draft.clone(), |settings, value| {
        settings.mqtt_broker_url = value;
    })?;
    let api_value = draft.borrow().api_endpoint.clone();
    let api = create_text_field("API Endpoint", &api_value, draft.clone(), |settings, value| {
        settings.api_endpoint = value;
    })?;
    append_child(&fields, &mqtt)?;
    append_child(&fields, &api)?;
    append_child(&content, &fields)?;

    let save_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("mt-4 bg-green-600 hover:bg-green-700 text-white px-4 py-2 rounded")
        .text("Save Changes")
        .build();
    {
        let state = state.clone();
        let draft = draft.clone();
        on_click(&save_btn, move |_| {
            let settings = draft.borrow().clone();
            log::info!(
                "💾 [SETTINGS] Guardado en memoria: mqtt={} api={}",
                settings.mqtt_broker_url,
                settings.api_endpoint
            );
            state.set_sensor_settings(settings);
        })?;
    }
    append_child(&content, &save_btn)?;
    append_child(&page, &content)?;

    let back_btn = dispatch_button(
        "Back",
        "bg-gray-600 hover:bg-gray-700 text-white px-4 py-2 rounded",
        Action::Navigate(Page::AdminDashboard),
    )?;
    append_child(&page, &footer_actions(back_btn)?)?;

    Ok(page)
}

fn create_text_field<F>(
    label: &str,
    value: &str,
    draft: Rc<RefCell<SensorConfig>>,
    apply: F,
) -> Result<Element, JsValue>
where
    F: Fn(&mut SensorConfig, String) + 'static,
{
    let label_el = ElementBuilder::new("label")?
        .class("block mb-2")
        .text(label)
        .build();

    let input = ElementBuilder::new("input")?
        .attr("type", "text")?
        .attr("value", value)?
        .class("w-full p-2 border rounded text-gray-900")
        .build();

    let input_el: HtmlInputElement = input.clone().dyn_into()?;
    on_input(&input, move |_| {
        apply(&mut draft.borrow_mut(), input_el.value());
    })?;

    ElementBuilder::new("div")?
        .child(label_el)?
        .child(input)
        .map(ElementBuilder::build)
}
