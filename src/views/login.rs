// ============================================================================
// LOGIN VIEW - Selección de rol (sin autenticación real)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child};
use crate::models::session::{Action, Role};
use crate::views::shared::dispatch_button;
use crate::views::theme::surface_class;

/// Renderizar vista de login
pub fn render_login(dark_mode: bool) -> Result<Element, JsValue> {
    log::debug!("🎬 [LOGIN] render_login() llamado");

    let screen = ElementBuilder::new("div")?
        .class("flex flex-col items-center justify-center min-h-screen px-4")
        .build();

    let title = ElementBuilder::new("h2")?
        .class("text-3xl font-bold mb-6")
        .text("Login")
        .build();
    append_child(&screen, &title)?;

    let card = ElementBuilder::new("div")?
        .class(&format!("w-full max-w-sm p-6 rounded-lg shadow-lg {}", surface_class(dark_mode)))
        .build();

    let form = ElementBuilder::new("form")?
        .class("space-y-4")
        .build();

    // Campos decorativos: no se validan
    append_child(&form, &create_form_group("Username", "text", "Enter username")?)?;
    append_child(&form, &create_form_group("Password", "password", "Enter password")?)?;

    let admin_btn = dispatch_button(
        "Login as Admin",
        "w-full mt-4 bg-blue-600 hover:bg-blue-700 text-white p-2 rounded",
        Action::Login(Role::Admin),
    )?;
    let driver_btn = dispatch_button(
        "Login as Driver",
        "w-full mt-2 bg-green-600 hover:bg-green-700 text-white p-2 rounded",
        Action::Login(Role::Driver),
    )?;
    append_child(&form, &admin_btn)?;
    append_child(&form, &driver_btn)?;

    append_child(&card, &form)?;
    append_child(&screen, &card)?;
    Ok(screen)
}

fn create_form_group(label: &str, input_type: &str, placeholder: &str) -> Result<Element, JsValue> {
    let label_el = ElementBuilder::new("label")?
        .class("block mb-2")
        .text(label)
        .build();

    let input = ElementBuilder::new("input")?
        .attr("type", input_type)?
        .attr("placeholder", placeholder)?
        .class("w-full p-2 border rounded text-gray-900")
        .build();

    ElementBuilder::new("div")?
        .child(label_el)?
        .child(input)
        .map(ElementBuilder::build)
}
