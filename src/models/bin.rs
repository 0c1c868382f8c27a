// ============================================================================
// BIN MODEL - Contenedor de residuos + clasificador de estado
// ============================================================================

use chrono::NaiveDate;
use serde::Serialize;
use crate::config::StatusThresholds;

pub const MAX_FILL_LEVEL: u8 = 100;

/// Estado derivado del nivel de llenado
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum BinStatus {
    Low,
    Moderate,
    Full,
}

impl BinStatus {
    /// Clasificar con los umbrales por defecto (>90 Full, >50 Moderate)
    pub fn classify(fill_level: u8) -> Self {
        Self::classify_with(fill_level, &StatusThresholds::default())
    }

    pub fn classify_with(fill_level: u8, thresholds: &StatusThresholds) -> Self {
        if fill_level > thresholds.full_above {
            BinStatus::Full
        } else if fill_level > thresholds.moderate_above {
            BinStatus::Moderate
        } else {
            BinStatus::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BinStatus::Full => "Full",
            BinStatus::Moderate => "Moderate",
            BinStatus::Low => "Low",
        }
    }
}

impl std::fmt::Display for BinStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Un contenedor físico con su lectura de sensor.
///
/// `status` solo cambia a través de [`BinRecord::set_fill_level`], que siempre
/// reclasifica, por lo que nunca queda desincronizado de `fill_level`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinRecord {
    id: u32,
    location: String,
    fill_level: u8,
    last_collected: NaiveDate,
    status: BinStatus,
}

impl BinRecord {
    pub fn new(
        id: u32,
        location: impl Into<String>,
        fill_level: u8,
        last_collected: NaiveDate,
        thresholds: &StatusThresholds,
    ) -> Self {
        let fill_level = fill_level.min(MAX_FILL_LEVEL);
        Self {
            id,
            location: location.into(),
            fill_level,
            last_collected,
            status: BinStatus::classify_with(fill_level, thresholds),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn fill_level(&self) -> u8 {
        self.fill_level
    }

    pub fn last_collected(&self) -> NaiveDate {
        self.last_collected
    }

    pub fn status(&self) -> BinStatus {
        self.status
    }

    /// Establecer nivel (limitado a 100) y recalcular estado
    pub fn set_fill_level(&mut self, fill_level: u8, thresholds: &StatusThresholds) {
        self.fill_level = fill_level.min(MAX_FILL_LEVEL);
        self.status = BinStatus::classify_with(self.fill_level, thresholds);
    }
}
