// Datos de demostración y constantes de la UI

/// Contenedores iniciales: (id, ubicación, nivel %, última recogida)
pub const SAMPLE_BINS: [(u32, &str, u8, &str); 5] = [
    (1, "Downtown", 85, "2024-03-15"),
    (2, "Northside", 60, "2024-03-14"),
    (3, "East Village", 30, "2024-03-13"),
    (4, "West End", 95, "2024-03-12"),
    (5, "Uptown", 45, "2024-03-16"),
];

/// Ruta del conductor: (ubicación, hora, minuto)
pub const DRIVER_SCHEDULE: [(&str, u32, u32); 5] = [
    ("Downtown", 9, 0),
    ("Northside", 10, 30),
    ("East Village", 12, 0),
    ("West End", 13, 30),
    ("Uptown", 15, 0),
];

pub const APP_TITLE: &str = "Smart Waste Management";

pub const ROUTE_MAP_PLACEHOLDER: &str = "https://placehold.co/800x400?text=Route+Map";
pub const REPORT_CHART_PLACEHOLDER: &str = "https://placehold.co/800x400?text=Data+Visualization+Chart";

// IDs de elementos del DOM
pub const ROOT_ELEMENT_ID: &str = "app";
pub const BIN_GRID_ID: &str = "bin-grid";
