// ============================================================================
// APP VIEW - Raíz: navbar (si hay sesión) + página actual
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child};
use crate::models::session::Page;
use crate::state::AppState;
use crate::views::{
    render_admin_dashboard, render_driver_route, render_login, render_navbar, render_reports,
    render_settings,
};
use crate::views::theme::root_class;

pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let session = state.session();

    let root = ElementBuilder::new("div")?
        .class(root_class(session.dark_mode()))
        .attr("data-page", session.current_page().id())?
        .build();

    if session.is_logged_in() {
        append_child(&root, &render_navbar(&session)?)?;
    }

    let page = match session.current_page() {
        Page::Login => render_login(session.dark_mode())?,
        Page::AdminDashboard => render_admin_dashboard(state)?,
        Page::DriverInterface => render_driver_route(session.dark_mode())?,
        Page::Reports => render_reports(session.dark_mode())?,
        Page::Settings => render_settings(state)?,
    };
    append_child(&root, &page)?;

    Ok(root)
}
