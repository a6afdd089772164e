//! Fehlertypen der Engine.

use crate::core::CurveDegree;

/// Fehler, die beim Aufbau oder Editieren einer Kurve auftreten können.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditorError {
    /// Anzahl der Punkte passt nicht zum Kurven-Grad
    #[error("{degree:?}-Kurve erwartet {expected} Punkte, erhalten: {actual}")]
    PointCountMismatch {
        degree: CurveDegree,
        expected: usize,
        actual: usize,
    },
    /// Eingabe im Koordinatenfeld ist keine gültige (endliche) Zahl
    #[error("Ungültige Koordinate: {input:?}")]
    InvalidCoordinate { input: String },
    /// Unbekannter Kurventyp in der gespeicherten Präferenz
    #[error("Unbekannter Kurventyp: {value:?}")]
    UnknownCurveType { value: String },
}
