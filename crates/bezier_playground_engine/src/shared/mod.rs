//! Geteilte Konfiguration (Konstanten + serialisierbare Optionen).

mod options;

pub use options::*;
