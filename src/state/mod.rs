// ============================================================================
// STATE MODULE - State Management con Rc<RefCell>
// ============================================================================

pub mod app_state;
pub mod bin_store;

pub use app_state::*;
pub use bin_store::*;
