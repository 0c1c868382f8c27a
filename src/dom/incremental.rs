// ============================================================================
// INCREMENTAL UPDATES - Actualizar solo partes del DOM
// ============================================================================
// Si el elemento destino no existe, se devuelve un error "needs full render"
// y el llamador hace un re-render completo.
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::state::AppState;
use crate::utils::constants::BIN_GRID_ID;
use crate::views::admin_dashboard::render_bin_card;

pub const NEEDS_FULL_RENDER: &str = "needs full render";

/// Re-pintar las tarjetas de contenedores con el último snapshot
pub fn update_bin_grid(state: &AppState) -> Result<(), JsValue> {
    let grid = get_element_by_id(BIN_GRID_ID)
        .ok_or_else(|| JsValue::from_str(&format!("Bin grid not found, {}", NEEDS_FULL_RENDER)))?;

    let dark_mode = state.session.borrow().dark_mode();
    let bins = state.bins_snapshot();

    set_inner_html(&grid, "");
    for bin in &bins {
        let card = render_bin_card(bin, dark_mode)?;
        append_child(&grid, &card)?;
    }

    log::debug!("🔄 [UPDATE] Grid actualizado ({} contenedores)", bins.len());
    Ok(())
}
