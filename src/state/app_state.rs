// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use rand::Rng;
use crate::config::{AppConfig, SensorConfig, SimulationConfig};
use crate::models::bin::BinRecord;
use crate::models::session::{Action, Session, Transition};
use crate::state::bin_store::BinStore;

/// Tipo de actualización del DOM
#[derive(Clone, Debug)]
pub enum UpdateType {
    /// Actualización incremental (solo elementos específicos)
    Incremental(IncrementalUpdate),
    /// Re-render completo (cambio de página, tema, login)
    FullRender,
}

/// Tipo de actualización incremental específica
#[derive(Clone, Copy, Debug)]
pub enum IncrementalUpdate {
    /// Tarjetas de contenedores después de un tick
    BinGrid,
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub session: Rc<RefCell<Session>>,
    pub bins: Rc<RefCell<BinStore>>,
    pub sensor_settings: Rc<RefCell<SensorConfig>>,
    pub simulation: SimulationConfig,
}

impl AppState {
    /// Crear nuevo estado de aplicación
    pub fn new(config: &AppConfig) -> Self {
        Self {
            session: Rc::new(RefCell::new(Session::new())),
            bins: Rc::new(RefCell::new(BinStore::with_sample_data(config.thresholds))),
            sensor_settings: Rc::new(RefCell::new(config.sensor.clone())),
            simulation: config.simulation,
        }
    }

    /// Copia de la sesión actual
    pub fn session(&self) -> Session {
        self.session.borrow().clone()
    }

    /// Copia de los contenedores para renderizar
    pub fn bins_snapshot(&self) -> Vec<BinRecord> {
        self.bins.borrow().snapshot()
    }

    /// Único punto de mutación de la sesión
    pub fn apply(&self, action: Action) -> Transition {
        self.session.borrow_mut().apply(action)
    }

    /// Aplicar un tick de simulación a todos los contenedores
    pub fn tick_bins<R: Rng + ?Sized>(&self, rng: &mut R) {
        self.bins.borrow_mut().tick(rng, &self.simulation);
    }

    pub fn sensor_settings(&self) -> SensorConfig {
        self.sensor_settings.borrow().clone()
    }

    /// Guardar valores de Settings en memoria (no hay persistencia)
    pub fn set_sensor_settings(&self, settings: SensorConfig) {
        *self.sensor_settings.borrow_mut() = settings;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::{Page, Role};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn clones_share_the_same_state() {
        let state = AppState::default();
        let view_copy = state.clone();

        state.apply(Action::Login(Role::Admin));
        assert_eq!(view_copy.session().current_page(), Page::AdminDashboard);

        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..100 {
            state.tick_bins(&mut rng);
        }
        assert!(view_copy.bins_snapshot().iter().all(|b| b.fill_level() == 100));
    }

    #[test]
    fn snapshot_is_detached_from_later_ticks() {
        let state = AppState::default();
        let before = state.bins_snapshot();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..50 {
            state.tick_bins(&mut rng);
        }
        assert_eq!(before[0].fill_level(), 85);
    }

    #[test]
    fn sensor_settings_are_kept_in_memory() {
        let state = AppState::default();
        let mut settings = state.sensor_settings();
        settings.mqtt_broker_url = "mqtt://sensors.local".to_string();
        state.set_sensor_settings(settings);

        assert_eq!(state.clone().sensor_settings().mqtt_broker_url, "mqtt://sensors.local");
    }
}
