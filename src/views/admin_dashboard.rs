// ============================================================================
// ADMIN DASHBOARD - Tarjetas de contenedores con datos en vivo
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child};
use crate::models::bin::BinRecord;
use crate::models::session::{Action, Page};
use crate::state::AppState;
use crate::utils::constants::BIN_GRID_ID;
use crate::views::shared::{dispatch_button, footer_actions, page_container};
use crate::views::theme::{status_class, surface_class};

/// Renderizar dashboard admin completo
pub fn render_admin_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let dark_mode = state.session.borrow().dark_mode();
    let bins = state.bins_snapshot();
    log::debug!("👑 [ADMIN] render_admin_dashboard() con {} contenedores", bins.len());

    let page = page_container("Admin Dashboard")?;

    // El id permite refrescar solo el grid en cada tick
    let grid = ElementBuilder::new("div")?
        .id(BIN_GRID_ID)?
        .class("grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6")
        .build();

    for bin in &bins {
        append_child(&grid, &render_bin_card(bin, dark_mode)?)?;
    }
    append_child(&page, &grid)?;

    let reports_btn = dispatch_button(
        "View Reports",
        "bg-purple-600 hover:bg-purple-700 text-white px-4 py-2 rounded",
        Action::Navigate(Page::Reports),
    )?;
    append_child(&page, &footer_actions(reports_btn)?)?;

    Ok(page)
}

/// Tarjeta de un contenedor
pub fn render_bin_card(bin: &BinRecord, dark_mode: bool) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?
        .class(&format!("p-4 rounded-lg shadow-md {}", surface_class(dark_mode)))
        .attr("data-bin-id", &bin.id().to_string())?
        .build();

    let location = ElementBuilder::new("h3")?
        .class("font-semibold")
        .text(bin.location())
        .build();
    append_child(&card, &location)?;

    let fill = ElementBuilder::new("p")?
        .text("Fill Level: ")
        .child(
            ElementBuilder::new("strong")?
                .text(&format!("{}%", bin.fill_level()))
                .build(),
        )?
        .build();
    append_child(&card, &fill)?;

    // Barra de progreso
    let bar = ElementBuilder::new("div")?
        .class("h-full bg-blue-500")
        .attr("style", &format!("width: {}%", bin.fill_level()))?
        .build();
    let track = ElementBuilder::new("div")?
        .class("w-full h-2 bg-gray-300 rounded-full overflow-hidden mt-1")
        .child(bar)?
        .build();
    append_child(&card, &track)?;

    let badge = ElementBuilder::new("span")?
        .class(&format!("inline-block px-2 py-1 rounded {}", status_class(bin.status())))
        .text(bin.status().label())
        .build();
    let status = ElementBuilder::new("p")?
        .class("mt-2")
        .text("Status: ")
        .child(badge)?
        .build();
    append_child(&card, &status)?;

    let last_collected = ElementBuilder::new("p")?
        .text(&format!("Last Collected: {}", bin.last_collected().format("%Y-%m-%d")))
        .build();
    append_child(&card, &last_collected)?;

    Ok(card)
}
