//! Display Formatting
//!
//! Helpers for card text that must never panic on partial data.

/// Shown when a lote has no descripcion
const DESCRIPCION_FALLBACK: &str = "Sin descripción disponible.";

/// Path where lote photos are published, derived from the id by convention.
pub fn lote_image_path(id_lote: u32) -> String {
    format!("/images/lote{}.jpg", id_lote)
}

/// The lote's descripcion, or the fixed placeholder when absent or empty.
pub fn descripcion_or_fallback(descripcion: &Option<String>) -> &str {
    match descripcion {
        Some(d) if !d.is_empty() => d,
        _ => DESCRIPCION_FALLBACK,
    }
}

/// Format a price with a `$` prefix and es-CO style separators: thousands
/// grouped with `.`, cents after `,` only when present. Absent prices render
/// as the empty string.
pub fn format_precio(precio: Option<f64>) -> String {
    match precio {
        Some(p) => format!("${}", group_thousands(p)),
        None => String::new(),
    }
}

fn group_thousands(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let entero = cents / 100;
    let frac = cents % 100;

    let digits = entero.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let mut out = String::new();
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&grouped);
    if frac > 0 {
        out.push_str(&format!(",{:02}", frac));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_path_derives_from_id() {
        assert_eq!(lote_image_path(1), "/images/lote1.jpg");
        assert_eq!(lote_image_path(42), "/images/lote42.jpg");
    }

    #[test]
    fn test_precio_groups_thousands() {
        assert_eq!(format_precio(Some(150000000.0)), "$150.000.000");
        assert_eq!(format_precio(Some(1234.0)), "$1.234");
        assert_eq!(format_precio(Some(500.0)), "$500");
    }

    #[test]
    fn test_precio_shows_cents_only_when_present() {
        assert_eq!(format_precio(Some(1234.5)), "$1.234,50");
        assert_eq!(format_precio(Some(99.99)), "$99,99");
        assert_eq!(format_precio(Some(1000.0)), "$1.000");
    }

    #[test]
    fn test_absent_precio_renders_empty() {
        assert_eq!(format_precio(None), "");
    }

    #[test]
    fn test_zero_precio() {
        assert_eq!(format_precio(Some(0.0)), "$0");
    }

    #[test]
    fn test_descripcion_passes_through_when_present() {
        let descripcion = Some("Lote esquinero".to_string());
        assert_eq!(descripcion_or_fallback(&descripcion), "Lote esquinero");
    }

    #[test]
    fn test_empty_descripcion_shows_placeholder() {
        assert_eq!(
            descripcion_or_fallback(&Some(String::new())),
            "Sin descripción disponible."
        );
    }

    #[test]
    fn test_missing_descripcion_shows_placeholder() {
        assert_eq!(descripcion_or_fallback(&None), "Sin descripción disponible.");
    }
}
