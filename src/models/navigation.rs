// ============================================================================
// NAVIGATION - Enlaces de la barra superior según rol
// ============================================================================

use crate::models::session::{Action, Page, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLink {
    Dashboard,
    Reports,
    MyRoute,
    Settings,
    ThemeToggle,
}

impl NavLink {
    /// Texto del botón. El toggle muestra el modo al que se cambiaría.
    pub fn label(&self, dark_mode: bool) -> &'static str {
        match self {
            NavLink::Dashboard => "Dashboard",
            NavLink::Reports => "Reports",
            NavLink::MyRoute => "My Route",
            NavLink::Settings => "Settings",
            NavLink::ThemeToggle => {
                if dark_mode { "Light Mode" } else { "Dark Mode" }
            }
        }
    }

    pub fn action(&self) -> Action {
        match self {
            NavLink::Dashboard => Action::Navigate(Page::AdminDashboard),
            NavLink::Reports => Action::Navigate(Page::Reports),
            NavLink::MyRoute => Action::Navigate(Page::DriverInterface),
            NavLink::Settings => Action::Navigate(Page::Settings),
            NavLink::ThemeToggle => Action::ToggleDarkMode,
        }
    }
}

/// Enlaces visibles para un rol (sin rol no hay barra)
pub fn nav_links_for(role: Option<Role>) -> Vec<NavLink> {
    let mut links = match role {
        None => return Vec::new(),
        Some(Role::Admin) => vec![NavLink::Dashboard, NavLink::Reports],
        Some(Role::Driver) => vec![NavLink::MyRoute],
    };
    links.push(NavLink::Settings);
    links.push(NavLink::ThemeToggle);
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_gets_dashboard_and_reports() {
        assert_eq!(
            nav_links_for(Some(Role::Admin)),
            vec![NavLink::Dashboard, NavLink::Reports, NavLink::Settings, NavLink::ThemeToggle]
        );
    }

    #[test]
    fn driver_gets_my_route_only() {
        assert_eq!(
            nav_links_for(Some(Role::Driver)),
            vec![NavLink::MyRoute, NavLink::Settings, NavLink::ThemeToggle]
        );
    }

    #[test]
    fn logged_out_has_no_links() {
        assert!(nav_links_for(None).is_empty());
    }

    #[test]
    fn theme_toggle_label_follows_mode() {
        assert_eq!(NavLink::ThemeToggle.label(false), "Dark Mode");
        assert_eq!(NavLink::ThemeToggle.label(true), "Light Mode");
        assert_eq!(NavLink::ThemeToggle.action(), Action::ToggleDarkMode);
        assert_eq!(NavLink::MyRoute.action(), Action::Navigate(Page::DriverInterface));
    }
}
