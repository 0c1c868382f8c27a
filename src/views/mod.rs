pub mod app;
pub mod admin_dashboard;
pub mod driver_route;
pub mod login;
pub mod navbar;
pub mod reports;
pub mod settings;
pub mod shared;
pub mod theme;

pub use app::render_app;
pub use admin_dashboard::{render_admin_dashboard, render_bin_card};
pub use driver_route::render_driver_route;
pub use login::render_login;
pub use navbar::render_navbar;
pub use reports::render_reports;
pub use settings::render_settings;
