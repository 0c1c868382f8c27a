// ============================================================================
// SMART WASTE MANAGEMENT - FRONTEND MVVM (RUST PURO + WASM)
// ============================================================================
// - Views: funciones que renderizan DOM (sin lógica)
// - ViewModels: controlador, dispatch de acciones + timer de simulación
// - Services: scheduler del timer
// - State: Rc<RefCell> compartido entre vistas y timer
// - Models: contenedores, sesión, navegación
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::app::App;
use crate::config::CONFIG;
use crate::dom::incremental::NEEDS_FULL_RENDER;
use crate::models::session::Action;
use crate::state::app_state::UpdateType;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() { log::Level::Debug } else { log::Level::Warn };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🚀 Smart Waste Management - Rust Puro + MVVM ({})", CONFIG.environment);

    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Despachar una acción del usuario (login, navegación, tema)
pub fn dispatch(action: Action) {
    APP.with(|app_cell| match app_cell.try_borrow_mut() {
        Ok(mut guard) => match guard.as_mut() {
            Some(app) => {
                if let Err(e) = app.dispatch(action) {
                    log::error!("❌ [APP] Error aplicando {:?}: {:?}", action, e);
                }
            }
            None => log::warn!("⚠️ [APP] App no está inicializada"),
        },
        Err(_) => log::warn!("⚠️ [APP] App ocupada, acción {:?} descartada", action),
    });
}

/// Función pública para re-renderizar la app (re-render completo)
pub fn rerender_app() {
    rerender_app_with_type(UpdateType::FullRender);
}

/// Función pública para actualizar la app con tipo específico
pub fn rerender_app_with_type(update_type: UpdateType) {
    let needs_full_render = match update_type {
        UpdateType::Incremental(inc_type) => APP.with(|app_cell| match app_cell.try_borrow() {
            Ok(guard) => match guard.as_ref() {
                Some(app) => match app.update_incremental(inc_type) {
                    Ok(()) => false,
                    Err(e) => {
                        let needs_full = format!("{:?}", e).contains(NEEDS_FULL_RENDER);
                        if !needs_full {
                            log::error!("❌ [UPDATE] Error en actualización incremental: {:?}", e);
                        }
                        needs_full
                    }
                },
                None => false,
            },
            Err(_) => false,
        }),
        UpdateType::FullRender => true,
    };

    if needs_full_render {
        APP.with(|app_cell| {
            if let Ok(mut guard) = app_cell.try_borrow_mut() {
                if let Some(app) = guard.as_mut() {
                    if let Err(e) = app.render() {
                        log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
                    }
                }
            }
        });
    }
}

/// Re-render completo llamable desde JavaScript
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}
