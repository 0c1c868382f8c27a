// Clases CSS (Tailwind) según tema y estado

use crate::models::bin::BinStatus;

pub fn root_class(dark_mode: bool) -> &'static str {
    if dark_mode {
        "min-h-screen bg-gray-900 text-white transition-colors duration-300"
    } else {
        "min-h-screen bg-gray-50 text-gray-900 transition-colors duration-300"
    }
}

/// Fondo de tarjetas, paneles y header
pub fn surface_class(dark_mode: bool) -> &'static str {
    if dark_mode { "bg-gray-800" } else { "bg-white" }
}

/// Badge de estado. Cualquier etiqueta desconocida cae en gris.
pub fn status_badge_class(label: &str) -> &'static str {
    match label {
        "Full" => "bg-red-500 text-white",
        "Moderate" => "bg-yellow-500 text-black",
        "Low" => "bg-green-500 text-white",
        _ => "bg-gray-500 text-white",
    }
}

pub fn status_class(status: BinStatus) -> &'static str {
    status_badge_class(status.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_per_status() {
        assert_eq!(status_class(BinStatus::Full), "bg-red-500 text-white");
        assert_eq!(status_class(BinStatus::Moderate), "bg-yellow-500 text-black");
        assert_eq!(status_class(BinStatus::Low), "bg-green-500 text-white");
    }

    #[test]
    fn unknown_label_is_neutral() {
        assert_eq!(status_badge_class("Overflowing"), "bg-gray-500 text-white");
        assert_eq!(status_badge_class(""), "bg-gray-500 text-white");
    }

    #[test]
    fn surfaces_follow_theme() {
        assert_eq!(surface_class(true), "bg-gray-800");
        assert_eq!(surface_class(false), "bg-white");
        assert!(root_class(true).contains("bg-gray-900"));
        assert!(root_class(false).contains("bg-gray-50"));
    }
}
