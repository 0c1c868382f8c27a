use serde::{Deserialize, Serialize};

pub const DEFAULT_TICK_INTERVAL_MS: u32 = 5000;
pub const DEFAULT_MAX_FILL_INCREMENT: u8 = 2;
pub const DEFAULT_FULL_THRESHOLD: u8 = 90;
pub const DEFAULT_MODERATE_THRESHOLD: u8 = 50;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub enable_logging: bool,
    pub simulation: SimulationConfig,
    pub thresholds: StatusThresholds,
    pub sensor: SensorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            enable_logging: true,
            simulation: SimulationConfig::default(),
            thresholds: StatusThresholds::default(),
            sensor: SensorConfig::default(),
        }
    }
}

/// Parámetros del timer que simula lecturas de sensores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub tick_interval_ms: u32,
    pub max_fill_increment: u8,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            max_fill_increment: DEFAULT_MAX_FILL_INCREMENT,
        }
    }
}

/// Umbrales del clasificador de estado.
///
/// `Full` si el nivel es estrictamente mayor que `full_above`, `Moderate` si es
/// estrictamente mayor que `moderate_above`, `Low` en cualquier otro caso.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusThresholds {
    pub full_above: u8,
    pub moderate_above: u8,
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self {
            full_above: DEFAULT_FULL_THRESHOLD,
            moderate_above: DEFAULT_MODERATE_THRESHOLD,
        }
    }
}

impl StatusThresholds {
    /// Devuelve los umbrales si son coherentes, o los valores por defecto
    pub fn validated(self) -> Self {
        if self.moderate_above < self.full_above && self.full_above <= 100 {
            self
        } else {
            Self::default()
        }
    }
}

/// Valores que muestra la pantalla Settings (integración de sensores)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorConfig {
    pub mqtt_broker_url: String,
    pub api_endpoint: String,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            mqtt_broker_url: "mqtt://broker.example.com".to_string(),
            api_endpoint: "https://api.smartwaste.com/data".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            simulation: SimulationConfig {
                tick_interval_ms: option_env!("TICK_INTERVAL_MS")
                    .and_then(|v| v.parse().ok())
                    .filter(|ms: &u32| *ms > 0)
                    .unwrap_or(DEFAULT_TICK_INTERVAL_MS),
                max_fill_increment: option_env!("MAX_FILL_INCREMENT")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_MAX_FILL_INCREMENT),
            },
            thresholds: StatusThresholds {
                full_above: option_env!("FULL_THRESHOLD")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_FULL_THRESHOLD),
                moderate_above: option_env!("MODERATE_THRESHOLD")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_MODERATE_THRESHOLD),
            }
            .validated(),
            sensor: SensorConfig {
                mqtt_broker_url: option_env!("MQTT_BROKER_URL")
                    .map(str::to_string)
                    .unwrap_or(defaults.sensor.mqtt_broker_url),
                api_endpoint: option_env!("API_ENDPOINT")
                    .map(str::to_string)
                    .unwrap_or(defaults.sensor.api_endpoint),
            },
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_constants() {
        let config = AppConfig::default();
        assert_eq!(config.simulation.tick_interval_ms, 5000);
        assert_eq!(config.simulation.max_fill_increment, 2);
        assert_eq!(config.thresholds.full_above, 90);
        assert_eq!(config.thresholds.moderate_above, 50);
        assert_eq!(config.sensor.mqtt_broker_url, "mqtt://broker.example.com");
    }

    #[test]
    fn inverted_thresholds_fall_back_to_defaults() {
        let inverted = StatusThresholds { full_above: 40, moderate_above: 60 };
        assert_eq!(inverted.validated(), StatusThresholds::default());

        let out_of_range = StatusThresholds { full_above: 120, moderate_above: 50 };
        assert_eq!(out_of_range.validated(), StatusThresholds::default());

        let custom = StatusThresholds { full_above: 80, moderate_above: 30 };
        assert_eq!(custom.validated(), custom);
    }
}
