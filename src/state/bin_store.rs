// ============================================================================
// BIN STORE - Colección en memoria de contenedores
// ============================================================================

use chrono::NaiveDate;
use rand::Rng;
use crate::config::{SimulationConfig, StatusThresholds};
use crate::models::bin::{BinRecord, MAX_FILL_LEVEL};
use crate::utils::constants::SAMPLE_BINS;

/// Colección ordenada (orden de creación). Sin altas, bajas ni reordenamiento.
#[derive(Debug, Clone)]
pub struct BinStore {
    bins: Vec<BinRecord>,
    thresholds: StatusThresholds,
}

impl BinStore {
    pub fn new(bins: Vec<BinRecord>, thresholds: StatusThresholds) -> Self {
        Self { bins, thresholds }
    }

    /// Los 5 contenedores de demostración
    pub fn with_sample_data(thresholds: StatusThresholds) -> Self {
        let bins = SAMPLE_BINS
            .iter()
            .map(|(id, location, fill_level, last_collected)| {
                let date = last_collected
                    .parse::<NaiveDate>()
                    .unwrap_or_else(|e| {
                        log::warn!("⚠️ [BINS] Fecha inválida '{}' para {}: {}", last_collected, location, e);
                        NaiveDate::default()
                    });
                BinRecord::new(*id, *location, *fill_level, date, &thresholds)
            })
            .collect();
        Self::new(bins, thresholds)
    }

    pub fn bins(&self) -> &[BinRecord] {
        &self.bins
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Copia para el render (nunca ve un tick a medias)
    pub fn snapshot(&self) -> Vec<BinRecord> {
        self.bins.clone()
    }

    /// Un paso de simulación: cada nivel sube entre 0 y `max_fill_increment`, tope 100
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R, simulation: &SimulationConfig) {
        for bin in self.bins.iter_mut() {
            let bump = rng.gen_range(0..=simulation.max_fill_increment);
            let next = bin.fill_level().saturating_add(bump).min(MAX_FILL_LEVEL);
            bin.set_fill_level(next, &self.thresholds);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bin::BinStatus;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn store() -> BinStore {
        BinStore::with_sample_data(StatusThresholds::default())
    }

    #[test]
    fn sample_data_has_five_bins_in_order() {
        let store = store();
        let ids: Vec<u32> = store.bins().iter().map(|b| b.id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(store.bins()[2].location(), "East Village");
        assert_eq!(
            store.bins()[3].last_collected(),
            NaiveDate::from_ymd_opt(2024, 3, 12).unwrap()
        );
    }

    #[test]
    fn sample_statuses_are_derived() {
        let statuses: Vec<BinStatus> = store().bins().iter().map(|b| b.status()).collect();
        assert_eq!(
            statuses,
            vec![BinStatus::Moderate, BinStatus::Moderate, BinStatus::Low, BinStatus::Full, BinStatus::Low]
        );
    }

    #[test]
    fn tick_stays_between_previous_value_and_100() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let simulation = SimulationConfig::default();
        let mut store = store();

        for _ in 0..200 {
            let before = store.snapshot();
            store.tick(&mut rng, &simulation);
            for (old, new) in before.iter().zip(store.bins()) {
                assert!(new.fill_level() >= old.fill_level());
                assert!(new.fill_level() <= 100);
                assert!(new.fill_level() - old.fill_level() <= simulation.max_fill_increment);
                assert_eq!(new.status(), BinStatus::classify(new.fill_level()));
            }
        }

        // Tras 200 ticks con incremento esperado 1, todos saturan
        assert!(store.bins().iter().all(|b| b.fill_level() == 100));
    }

    #[test]
    fn tick_keeps_order_and_identity() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut store = store();
        store.tick(&mut rng, &SimulationConfig::default());

        let locations: Vec<&str> = store.bins().iter().map(|b| b.location()).collect();
        assert_eq!(locations, vec!["Downtown", "Northside", "East Village", "West End", "Uptown"]);
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn zero_increment_leaves_levels_untouched() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let simulation = SimulationConfig { max_fill_increment: 0, ..SimulationConfig::default() };
        let mut store = store();
        let before = store.snapshot();

        store.tick(&mut rng, &simulation);
        assert_eq!(store.bins(), before.as_slice());
    }

    #[test]
    fn full_bin_stays_at_100() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let thresholds = StatusThresholds::default();
        let mut store = BinStore::new(vec![BinRecord::new(9, "Depot", 100, date, &thresholds)], thresholds);
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        for _ in 0..10 {
            store.tick(&mut rng, &SimulationConfig::default());
            assert_eq!(store.bins()[0].fill_level(), 100);
            assert_eq!(store.bins()[0].status(), BinStatus::Full);
        }
    }
}
