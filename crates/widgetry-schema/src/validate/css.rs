//! Structural checks for CSS-valued property strings.
//!
//! Style-valued properties reach the consuming renderer as raw CSS
//! strings, so lengths must be `<number><unit>` and colors must be hex,
//! `rgb()`/`rgba()`, or a named keyword.

/// CSS length units accepted for Length-valued properties.
const LENGTH_UNITS: &[&str] = &[
    "%", "ch", "em", "pt", "px", "rem", "vh", "vmax", "vmin", "vw",
];

/// Ensure a string parses as a CSS length.
pub fn validate_length(s: &str) -> Result<(), String> {
    if s.is_empty() {
        return Err("length is empty".to_string());
    }

    // unitless zero and keyword sizing are valid lengths
    if s == "0" || s == "auto" {
        return Ok(());
    }

    // longest suffix wins, so "4rem" matches "rem" rather than "em"
    let unit = LENGTH_UNITS
        .iter()
        .filter(|unit| s.ends_with(*unit))
        .max_by_key(|unit| unit.len());

    let Some(unit) = unit else {
        return Err(format!("length '{s}' has no recognised CSS unit"));
    };

    let number = &s[..s.len() - unit.len()];
    if number.is_empty() || number.parse::<f64>().is_err() {
        return Err(format!("length '{s}' must be `<number><unit>`"));
    }

    Ok(())
}

/// Ensure a string parses as a CSS color: `#` hex, `rgb()`/`rgba()`, or a
/// named color keyword.
pub fn validate_color(s: &str) -> Result<(), String> {
    if s.is_empty() {
        return Err("color is empty".to_string());
    }

    if let Some(hex) = s.strip_prefix('#') {
        if !matches!(hex.len(), 3 | 4 | 6 | 8) {
            return Err(format!("hex color '{s}' must have 3, 4, 6 or 8 digits"));
        }
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("hex color '{s}' contains non-hexadecimal characters"));
        }

        return Ok(());
    }

    let lower = s.to_ascii_lowercase();
    if (lower.starts_with("rgb(") || lower.starts_with("rgba(")) && lower.ends_with(')') {
        return Ok(());
    }

    // named keyword
    if s.chars().all(|c| c.is_ascii_alphabetic()) {
        return Ok(());
    }

    Err(format!("color '{s}' is not a hex, rgb(), or named color"))
}
