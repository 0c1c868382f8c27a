// ============================================================================
// SESSION MODEL - Máquina de estados de vistas (reducer)
// ============================================================================

use serde::{Deserialize, Serialize};

/// Rol de la sesión
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Driver,
}

impl Role {
    /// Página de aterrizaje después del login
    pub fn home_page(&self) -> Page {
        match self {
            Role::Admin => Page::AdminDashboard,
            Role::Driver => Page::DriverInterface,
        }
    }
}

/// Pantallas de la aplicación
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    Login,
    AdminDashboard,
    DriverInterface,
    Reports,
    Settings,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Login,
        Page::AdminDashboard,
        Page::DriverInterface,
        Page::Reports,
        Page::Settings,
    ];

    /// Identificador usado en atributos `data-page`
    pub fn id(&self) -> &'static str {
        match self {
            Page::Login => "login",
            Page::AdminDashboard => "admin-dashboard",
            Page::DriverInterface => "driver-interface",
            Page::Reports => "reports",
            Page::Settings => "settings",
        }
    }

    /// Parsear identificador. Cualquier valor desconocido vuelve a `Login`.
    pub fn from_id(id: &str) -> Page {
        match Page::ALL.iter().find(|page| page.id() == id) {
            Some(page) => *page,
            None => {
                log::warn!("⚠️ [NAV] Página desconocida '{}', volviendo a login", id);
                Page::Login
            }
        }
    }
}

/// Acciones que puede disparar el usuario. Única vía de mutación de la sesión.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Login(Role),
    Navigate(Page),
    ToggleDarkMode,
}

/// Resultado de aplicar una acción
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Page,
    pub to: Page,
}

impl Transition {
    pub fn entered(&self, page: Page) -> bool {
        self.from != page && self.to == page
    }

    pub fn left(&self, page: Page) -> bool {
        self.from == page && self.to != page
    }
}

/// Estado de sesión: página actual, rol y preferencia de tema
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    role: Option<Role>,
    current_page: Page,
    dark_mode: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            role: None,
            current_page: Page::Login,
            dark_mode: false,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Logueado si y solo si hay rol
    pub fn is_logged_in(&self) -> bool {
        self.role.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Páginas que la barra de navegación ofrece a esta sesión.
    /// Solo informativo: las transiciones no se bloquean.
    pub fn is_offered(&self, page: Page) -> bool {
        match (self.role, page) {
            (None, Page::Login) => true,
            (None, _) => false,
            (Some(_), Page::Settings) => true,
            (Some(Role::Admin), Page::AdminDashboard | Page::Reports) => true,
            (Some(Role::Driver), Page::DriverInterface | Page::Reports) => true,
            (Some(_), _) => false,
        }
    }

    /// Aplicar acción y devolver la transición resultante
    pub fn apply(&mut self, action: Action) -> Transition {
        let from = self.current_page;

        match action {
            Action::Login(role) => {
                self.role = Some(role);
                self.current_page = role.home_page();
                log::info!("🔐 [NAV] Login como {:?}", role);
            }
            Action::Navigate(page) => {
                if !self.is_offered(page) {
                    log::warn!("⚠️ [NAV] {:?} no se ofrece al rol {:?}, navegando igualmente", page, self.role);
                }
                self.current_page = page;
            }
            Action::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
                log::debug!("🌓 [NAV] dark_mode = {}", self.dark_mode);
            }
        }

        Transition { from, to: self.current_page }
    }
}
