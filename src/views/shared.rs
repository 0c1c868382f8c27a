// ============================================================================
// SHARED - Piezas comunes de las páginas
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child, on_click};
use crate::models::session::Action;
use crate::views::theme::surface_class;

/// Botón que despacha una acción al controlador
pub fn dispatch_button(label: &str, class: &str, action: Action) -> Result<Element, JsValue> {
    let button = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class(class)
        .text(label)
        .build();

    on_click(&button, move |_| crate::dispatch(action))?;
    Ok(button)
}

/// Contenedor de página con título h2
pub fn page_container(title: &str) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?
        .class("p-6")
        .build();

    let heading = ElementBuilder::new("h2")?
        .class("text-2xl font-bold mb-6")
        .text(title)
        .build();

    append_child(&page, &heading)?;
    Ok(page)
}

/// Panel con sombra según tema
pub fn panel(dark_mode: bool) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class(&format!("p-6 rounded-lg shadow-md {}", surface_class(dark_mode)))
        .build())
}

/// Fila de acciones al pie de la página
pub fn footer_actions(button: Element) -> Result<Element, JsValue> {
    ElementBuilder::new("div")?
        .class("mt-8")
        .child(button)
        .map(ElementBuilder::build)
}

/// Imagen de relleno (mapa / gráfico)
pub fn placeholder_image(src: &str, alt: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("img")?
        .attr("src", src)?
        .attr("alt", alt)?
        .class("w-full h-auto rounded")
        .build())
}
