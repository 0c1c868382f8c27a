// ============================================================================
// DRIVER ROUTE - Ruta de recogida del día
// ============================================================================

use chrono::NaiveTime;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child};
use crate::models::session::{Action, Page};
use crate::utils::constants::{DRIVER_SCHEDULE, ROUTE_MAP_PLACEHOLDER};
use crate::views::shared::{dispatch_button, footer_actions, page_container, panel, placeholder_image};

/// "Downtown - 9:00 AM"
pub fn schedule_entry(location: &str, hour: u32, minute: u32) -> String {
    match NaiveTime::from_hms_opt(hour, minute, 0) {
        Some(time) => format!("{} - {}", location, time.format("%-I:%M %p")),
        None => location.to_string(),
    }
}

pub fn render_driver_route(dark_mode: bool) -> Result<Element, JsValue> {
    let page = page_container("Your Collection Route")?;
    let content = panel(dark_mode)?;

    append_child(&content, &placeholder_image(ROUTE_MAP_PLACEHOLDER, "Collection Route Map")?)?;

    let schedule = ElementBuilder::new("div")?
        .class("mt-4")
        .child(
            ElementBuilder::new("h3")?
                .class("font-semibold")
                .text("Today's Schedule:")
                .build(),
        )?
        .build();

    let list = ElementBuilder::new("ul")?
        .class("list-disc pl-5 mt-2 space-y-1")
        .build();
    for (location, hour, minute) in DRIVER_SCHEDULE {
        let item = ElementBuilder::new("li")?
            .text(&schedule_entry(location, hour, minute))
            .build();
        append_child(&list, &item)?;
    }
    append_child(&schedule, &list)?;
    append_child(&content, &schedule)?;
    append_child(&page, &content)?;

    let report_btn = dispatch_button(
        "View Performance Report",
        "bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded",
        Action::Navigate(Page::Reports),
    )?;
    append_child(&page, &footer_actions(report_btn)?)?;

    Ok(page)
}
