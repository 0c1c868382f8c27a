// ============================================================================
// APP - Aplicación principal (dueña del estado y del timer)
// ============================================================================

use std::rc::Rc;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::dom::incremental::update_bin_grid;
use crate::models::session::Action;
use crate::services::IntervalScheduler;
use crate::state::app_state::{AppState, IncrementalUpdate, UpdateType};
use crate::utils::constants::ROOT_ELEMENT_ID;
use crate::viewmodels::AppViewModel;
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    view_model: AppViewModel<IntervalScheduler>,
    root: Element,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(ROOT_ELEMENT_ID)
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new(&CONFIG);
        log::info!(
            "🗑️ [APP] {} contenedores cargados, tick cada {} ms",
            state.bins.borrow().len(),
            state.simulation.tick_interval_ms
        );

        // Cada tick solo refresca el grid del dashboard
        let on_tick: Rc<dyn Fn()> = Rc::new(|| {
            crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::BinGrid));
        });

        let view_model = AppViewModel::new(
            state,
            IntervalScheduler,
            ChaCha8Rng::from_entropy(),
            on_tick,
        );

        Ok(Self { view_model, root })
    }

    /// Renderizar aplicación
    pub fn render(&mut self) -> Result<(), JsValue> {
        set_inner_html(&self.root, "");
        let app_view = render_app(self.view_model.state())?;
        append_child(&self.root, &app_view)?;
        Ok(())
    }

    /// Aplicar acción del usuario y re-renderizar
    pub fn dispatch(&mut self, action: Action) -> Result<(), JsValue> {
        self.view_model.dispatch(action);
        self.render()
    }

    /// Obtener referencia al estado
    pub fn state(&self) -> &AppState {
        self.view_model.state()
    }

    /// Actualización incremental del DOM (solo elementos específicos)
    pub fn update_incremental(&self, update_type: IncrementalUpdate) -> Result<(), JsValue> {
        match update_type {
            IncrementalUpdate::BinGrid => update_bin_grid(self.state()),
        }
    }
}
