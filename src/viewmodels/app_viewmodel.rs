// ============================================================================
// APP VIEWMODEL - Controlador: estado + timer de simulación
// ============================================================================
// Todas las acciones del usuario pasan por `dispatch`. Después de cada
// transición el timer se sincroniza con la página actual: corre solo en el
// dashboard admin y se cancela en la misma transición que lo abandona.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use rand_chacha::ChaCha8Rng;
use crate::models::session::{Action, Page, Transition};
use crate::services::simulation_timer::{SimulationTimer, TickScheduler};
use crate::state::AppState;

pub struct AppViewModel<S: TickScheduler> {
    state: AppState,
    timer: SimulationTimer<S>,
    rng: Rc<RefCell<ChaCha8Rng>>,
    on_tick: Rc<dyn Fn()>,
}

impl<S: TickScheduler> AppViewModel<S> {
    /// `on_tick` se llama después de cada tick (p.ej. para refrescar el grid)
    pub fn new(state: AppState, scheduler: S, rng: ChaCha8Rng, on_tick: Rc<dyn Fn()>) -> Self {
        let period_ms = state.simulation.tick_interval_ms;
        let mut vm = Self {
            state,
            timer: SimulationTimer::new(scheduler, period_ms),
            rng: Rc::new(RefCell::new(rng)),
            on_tick,
        };
        vm.sync_timer();
        vm
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn is_simulating(&self) -> bool {
        self.timer.is_running()
    }

    pub fn dispatch(&mut self, action: Action) -> Transition {
        let transition = self.state.apply(action);
        if transition.from != transition.to {
            log::info!("🧭 [NAV] {} -> {}", transition.from.id(), transition.to.id());
        }
        self.sync_timer();
        transition
    }

    fn sync_timer(&mut self) {
        if self.state.session.borrow().current_page() == Page::AdminDashboard {
            let state = self.state.clone();
            let rng = self.rng.clone();
            let on_tick = self.on_tick.clone();
            self.timer.start(move || {
                state.tick_bins(&mut *rng.borrow_mut());
                log::debug!("📡 [SIM] Tick aplicado a {} contenedores", state.bins.borrow().len());
                on_tick();
            });
        } else {
            self.timer.stop();
        }
    }
}
