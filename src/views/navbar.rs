// ============================================================================
// NAVBAR - Header con enlaces según rol + toggle de tema
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child, get_attribute, on_click};
use crate::models::navigation::{nav_links_for, NavLink};
use crate::models::session::{Action, Page, Session};
use crate::utils::constants::APP_TITLE;
use crate::views::theme::surface_class;

pub fn render_navbar(session: &Session) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("header")?
        .class(&format!(
            "px-6 py-4 shadow-md flex justify-between items-center {}",
            surface_class(session.dark_mode())
        ))
        .build();

    let title = ElementBuilder::new("h1")?
        .class("text-xl font-bold")
        .text(APP_TITLE)
        .build();
    append_child(&header, &title)?;

    let nav = ElementBuilder::new("nav")?
        .class("flex space-x-4")
        .build();

    for link in nav_links_for(session.role()) {
        let button = render_nav_button(link, session.dark_mode())?;
        append_child(&nav, &button)?;
    }

    append_child(&header, &nav)?;
    Ok(header)
}

/// Los enlaces de página llevan `data-page`; el toggle de tema no
fn render_nav_button(link: NavLink, dark_mode: bool) -> Result<Element, JsValue> {
    let mut builder = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("hover:underline")
        .text(link.label(dark_mode));

    if let Action::Navigate(page) = link.action() {
        builder = builder.attr("data-page", page.id())?;
    }

    let button = builder.build();
    let target = button.clone();
    on_click(&button, move |_| {
        let action = match get_attribute(&target, "data-page") {
            Some(page_id) => Action::Navigate(Page::from_id(&page_id)),
            None => Action::ToggleDarkMode,
        };
        crate::dispatch(action);
    })?;

    Ok(button)
}
