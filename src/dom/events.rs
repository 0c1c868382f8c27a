// ============================================================================
// EVENTS - Clicks que despachan acciones e inputs de Settings
// ============================================================================
// Cada re-render vacía #app, así que los nodos con listeners se descartan en la
// siguiente acción. El timer de simulación no pasa por aquí.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, InputEvent, MouseEvent};

/// Botones de login, navbar, "View Reports", "Back" y "Save Changes"
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback(
        "click",
        closure.as_ref().unchecked_ref(),
    )?;
    closure.forget();
    Ok(())
}

/// Campos MQTT / API de Settings
pub fn on_input<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(InputEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(InputEvent)>);
    element.add_event_listener_with_callback(
        "input",
        closure.as_ref().unchecked_ref(),
    )?;
    closure.forget();
    Ok(())
}
