pub mod bin;
pub mod navigation;
pub mod session;

pub use bin::{BinRecord, BinStatus, MAX_FILL_LEVEL};
pub use navigation::{nav_links_for, NavLink};
pub use session::{Action, Page, Role, Session, Transition};
