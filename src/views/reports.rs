use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child};
use crate::models::session::{Action, Page};
use crate::utils::constants::REPORT_CHART_PLACEHOLDER;
use crate::views::shared::{dispatch_button, footer_actions, page_container, panel, placeholder_image};

pub fn render_reports(dark_mode: bool) -> Result<Element, JsValue> {
    let page = page_container("Performance Reports")?;
    let content = panel(dark_mode)?;

    append_child(&content, &placeholder_image(REPORT_CHART_PLACEHOLDER, "Report Chart")?)?;

    let efficiency = ElementBuilder::new("p")?
        .class("mt-4")
        .text("Efficiency improvements: 25% reduction in unnecessary trips since implementation.")
        .build();
    let impact = ElementBuilder::new("p")?
        .text("Environmental impact reduced by 18% due to optimized collection routes.")
        .build();
    append_child(&content, &efficiency)?;
    append_child(&content, &impact)?;
    append_child(&page, &content)?;

    // Siempre vuelve al dashboard admin, también para el conductor
    let back_btn = dispatch_button(
        "Back to Dashboard",
        "bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded",
        Action::Navigate(Page::AdminDashboard),
    )?;
    append_child(&page, &footer_actions(back_btn)?)?;

    Ok(page)
}
