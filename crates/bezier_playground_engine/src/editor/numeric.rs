//! Parsen und Formatieren der Koordinaten-Zahlenfelder.

use crate::error::EditorError;

/// Zahlenformat eines Editors: der quadratische Editor nimmt Ganzzahlen,
/// der kubische Fließkommazahlen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    Integer,
    Float,
}

impl NumberFormat {
    /// Parst eine Feldeingabe.
    ///
    /// Gelesen wird die längste gültige Zahl am Anfang, der Rest wird
    /// ignoriert (`"12abc"` → 12, `"7px"` → 7). `Integer` liest nur Vorzeichen
    /// und Ziffern (`"12.7"` → 12, `"1e3"` → 1). Ohne lesbare Zahl oder bei
    /// nicht-endlichem Wert ist das Ergebnis ein Fehler.
    pub fn parse(self, input: &str) -> Result<f32, EditorError> {
        let trimmed = input.trim_start();
        leading_number(trimmed, self)
            .and_then(|number| number.parse::<f32>().ok())
            .filter(|v| v.is_finite())
            .ok_or_else(|| EditorError::InvalidCoordinate {
                input: input.to_string(),
            })
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Längster Präfix, der eine Zahl im gegebenen Format bildet.
fn leading_number(input: &str, format: NumberFormat) -> Option<&str> {
    let bytes = input.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut has_digits = int_digits > 0;

    if format == NumberFormat::Float {
        if bytes.get(end) == Some(&b'.') {
            let frac_digits = count_digits(&bytes[end + 1..]);
            if has_digits || frac_digits > 0 {
                end += 1 + frac_digits;
                has_digits = true;
            }
        }
        if has_digits && matches!(bytes.get(end), Some(b'e' | b'E')) {
            let mut exp = end + 1;
            if matches!(bytes.get(exp), Some(b'+' | b'-')) {
                exp += 1;
            }
            let exp_digits = count_digits(&bytes[exp..]);
            if exp_digits > 0 {
                end = exp + exp_digits;
            }
        }
    }

    has_digits.then(|| &input[..end])
}

/// Anzeige-Text eines Koordinatenwerts (ohne überflüssiges `.0`).
pub fn format_coordinate(value: f32) -> String {
    format!("{value}")
}
