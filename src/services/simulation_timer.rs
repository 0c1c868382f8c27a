// ============================================================================
// SIMULATION TIMER - Intervalo que simula lecturas de sensores
// ============================================================================
// Como máximo una instancia activa. Parar = soltar el handle: gloo cancela el
// Interval en su Drop, así que no queda ningún tick pendiente.
// ============================================================================

use gloo_timers::callback::Interval;

/// Fuente de callbacks periódicos. El callback deja de ejecutarse cuando se
/// suelta el handle devuelto.
pub trait TickScheduler {
    type Handle;

    fn schedule(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;
}

/// Scheduler del navegador (setInterval via gloo_timers)
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalScheduler;

impl TickScheduler for IntervalScheduler {
    type Handle = Interval;

    fn schedule(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, tick)
    }
}

pub struct SimulationTimer<S: TickScheduler> {
    scheduler: S,
    period_ms: u32,
    handle: Option<S::Handle>,
}

impl<S: TickScheduler> SimulationTimer<S> {
    pub fn new(scheduler: S, period_ms: u32) -> Self {
        Self {
            scheduler,
            period_ms,
            handle: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Iniciar si no hay otro activo. Devuelve `false` si ya estaba corriendo.
    pub fn start<F>(&mut self, tick: F) -> bool
    where
        F: FnMut() + 'static,
    {
        if self.handle.is_some() {
            log::debug!("⏰ [SIM] Timer ya activo, no se apila otro");
            return false;
        }

        log::info!("⏰ [SIM] Simulación iniciada cada {} ms", self.period_ms);
        self.handle = Some(self.scheduler.schedule(self.period_ms, Box::new(tick)));
        true
    }

    /// Cancelar inmediatamente. Devuelve `false` si no había timer.
    pub fn stop(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                drop(handle);
                log::info!("⏹️ [SIM] Simulación detenida");
                true
            }
            None => false,
        }
    }
}

/// Reloj manual para tests: los callbacks solo corren al llamar `advance`.
#[cfg(test)]
pub(crate) mod manual {
    use super::TickScheduler;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct Slot {
        period_ms: u32,
        elapsed_ms: u32,
        active: Rc<Cell<bool>>,
        tick: Box<dyn FnMut()>,
    }

    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        slots: Rc<RefCell<Vec<Slot>>>,
    }

    pub struct ManualHandle {
        active: Rc<Cell<bool>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.active.set(false);
        }
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn active_count(&self) -> usize {
            self.slots.borrow().iter().filter(|s| s.active.get()).count()
        }

        /// Avanzar el reloj y disparar los intervalos vencidos
        pub fn advance(&self, ms: u32) {
            let mut slots = self.slots.borrow_mut();
            slots.retain(|s| s.active.get());
            for slot in slots.iter_mut() {
                slot.elapsed_ms += ms;
                while slot.elapsed_ms >= slot.period_ms && slot.active.get() {
                    slot.elapsed_ms -= slot.period_ms;
                    (slot.tick)();
                }
            }
        }
    }

    impl TickScheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> ManualHandle {
            let active = Rc::new(Cell::new(true));
            self.slots.borrow_mut().push(Slot {
                period_ms: period_ms.max(1),
                elapsed_ms: 0,
                active: active.clone(),
                tick,
            });
            ManualHandle { active }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::manual::ManualScheduler;
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let count = Rc::new(Cell::new(0));
        let inner = count.clone();
        (count, move || inner.set(inner.get() + 1))
    }

    #[test]
    fn fires_once_per_period() {
        let clock = ManualScheduler::new();
        let mut timer = SimulationTimer::new(clock.clone(), 5000);
        let (count, tick) = counter();

        assert!(timer.start(tick));
        clock.advance(4999);
        assert_eq!(count.get(), 0);
        clock.advance(1);
        assert_eq!(count.get(), 1);
        clock.advance(15000);
        assert_eq!(count.get(), 4);
    }

    #[test]
    fn second_start_does_not_stack() {
        let clock = ManualScheduler::new();
        let mut timer = SimulationTimer::new(clock.clone(), 5000);
        let (count, tick) = counter();
        let (extra, extra_tick) = counter();

        assert!(timer.start(tick));
        assert!(!timer.start(extra_tick));
        assert_eq!(clock.active_count(), 1);

        clock.advance(10000);
        assert_eq!(count.get(), 2);
        assert_eq!(extra.get(), 0);
    }

    #[test]
    fn stop_cancels_pending_ticks() {
        let clock = ManualScheduler::new();
        let mut timer = SimulationTimer::new(clock.clone(), 5000);
        let (count, tick) = counter();

        timer.start(tick);
        clock.advance(4000);
        assert!(timer.stop());
        assert!(!timer.is_running());
        clock.advance(20000);
        assert_eq!(count.get(), 0);
        assert!(!timer.stop());
    }

    #[test]
    fn restart_does_not_carry_elapsed_time() {
        let clock = ManualScheduler::new();
        let mut timer = SimulationTimer::new(clock.clone(), 5000);
        let count = Rc::new(Cell::new(0));

        let first = count.clone();
        timer.start(move || first.set(first.get() + 1));
        clock.advance(4000);
        timer.stop();

        let second = count.clone();
        timer.start(move || second.set(second.get() + 1));
        clock.advance(4000);
        assert_eq!(count.get(), 0);
        clock.advance(1000);
        assert_eq!(count.get(), 1);
    }
}
