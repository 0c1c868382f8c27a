pub mod simulation_timer;

pub use simulation_timer::{IntervalScheduler, SimulationTimer, TickScheduler};
