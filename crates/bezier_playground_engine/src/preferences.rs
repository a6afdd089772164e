//! Präferenz-Speicher für die gewählte Kurvenart.
//!
//! Der Speicher ist eine injizierte Schnittstelle (`PreferenceStore`), damit
//! die Kurvenauswahl nicht an einen konkreten Mechanismus gebunden ist.

use crate::core::CurveDegree;
use crate::error::EditorError;
use std::path::PathBuf;
use std::str::FromStr;

/// Fester Schlüssel der gespeicherten Kurvenart.
pub const SELECTED_CURVE_KEY: &str = "selectedCurve";

/// Ein einzelner String-Wert unter einem festen Schlüssel.
pub trait PreferenceStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, value: &str);
}

/// Flüchtiger Speicher (Tests, Fallback ohne Dateisystem).
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    value: Option<String>,
    save_count: usize,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Speicher mit vorbelegtem Wert.
    pub fn with_value(value: &str) -> Self {
        Self {
            value: Some(value.to_string()),
            save_count: 0,
        }
    }

    /// Anzahl der `save`-Aufrufe seit dem Erstellen.
    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, value: &str) {
        self.value = Some(value.to_string());
        self.save_count += 1;
    }
}

/// TOML-Datei mit `key = "value"`-Einträgen; schreibt bei jedem `save`.
///
/// Andere Schlüssel in derselben Datei bleiben erhalten. Eine nicht lesbare
/// Datei wird vor dem Überschreiben nach `<pfad>.bak` gesichert.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
    key: String,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>, key: &str) -> Self {
        Self {
            path: path.into(),
            key: key.to_string(),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn read_table(&self) -> Option<toml::Table> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        match toml::from_str::<toml::Table>(&content) {
            Ok(table) => Some(table),
            Err(e) => {
                log::warn!(
                    "Präferenz-Datei fehlerhaft ({}): {}",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }

    /// Pfad der Sicherungskopie einer fehlerhaften Präferenz-Datei.
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".bak");
        PathBuf::from(name)
    }

    /// Sichert eine vorhandene, nicht lesbare Datei, bevor sie überschrieben wird.
    fn backup_unreadable(&self) {
        if !self.path.exists() {
            return;
        }
        let backup = self.backup_path();
        match std::fs::copy(&self.path, &backup) {
            Ok(_) => log::warn!(
                "Präferenz-Datei wird neu geschrieben, alter Inhalt gesichert: {}",
                backup.display()
            ),
            Err(e) => log::warn!(
                "Präferenz-Datei wird neu geschrieben, Sicherung fehlgeschlagen ({}): {}",
                backup.display(),
                e
            ),
        }
    }

    fn write_table(&self, table: &toml::Table) -> anyhow::Result<()> {
        let content = toml::to_string(table)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Option<String> {
        self.read_table()?
            .get(&self.key)
            .and_then(|v| v.as_str())
            .map(str::to_string)
    }

    fn save(&mut self, value: &str) {
        let mut table = self.read_table().unwrap_or_else(|| {
            self.backup_unreadable();
            toml::Table::new()
        });
        table.insert(self.key.clone(), toml::Value::String(value.to_string()));
        if let Err(e) = self.write_table(&table) {
            log::warn!(
                "Präferenz konnte nicht gespeichert werden ({}): {:#}",
                self.path.display(),
                e
            );
        }
    }
}

/// Reiter der Kurvenauswahl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurveTab {
    #[default]
    Quadratic,
    Cubic,
}

impl CurveTab {
    pub const ALL: [CurveTab; 2] = [CurveTab::Quadratic, CurveTab::Cubic];

    /// Gespeicherter Wert.
    pub const fn as_str(self) -> &'static str {
        match self {
            CurveTab::Quadratic => "quadratic",
            CurveTab::Cubic => "cubic",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CurveTab::Quadratic => "Bézier: Quadratisch",
            CurveTab::Cubic => "Bézier: Kubisch",
        }
    }

    pub const fn degree(self) -> CurveDegree {
        match self {
            CurveTab::Quadratic => CurveDegree::Quadratic,
            CurveTab::Cubic => CurveDegree::Cubic,
        }
    }
}

impl FromStr for CurveTab {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quadratic" => Ok(CurveTab::Quadratic),
            "cubic" => Ok(CurveTab::Cubic),
            other => Err(EditorError::UnknownCurveType {
                value: other.to_string(),
            }),
        }
    }
}

/// Kurvenauswahl mit injiziertem Speicher.
///
/// Liest den gespeicherten Wert einmal beim Mounten (Default: quadratisch)
/// und schreibt bei jeder Änderung.
pub struct CurveTypeSelector {
    store: Box<dyn PreferenceStore>,
    selected: CurveTab,
}

impl CurveTypeSelector {
    pub fn mount(store: Box<dyn PreferenceStore>) -> Self {
        let selected = match store.load() {
            Some(value) => value.parse::<CurveTab>().unwrap_or_else(|e: EditorError| {
                log::warn!("{e}, verwende {}", CurveTab::default().as_str());
                CurveTab::default()
            }),
            None => CurveTab::default(),
        };
        log::debug!("Kurvenauswahl geladen: {}", selected.as_str());
        Self { store, selected }
    }

    pub fn selected(&self) -> CurveTab {
        self.selected
    }

    /// Wählt einen Reiter. Gibt `true` zurück, wenn sich die Auswahl geändert hat.
    pub fn select(&mut self, tab: CurveTab) -> bool {
        if tab == self.selected {
            return false;
        }
        self.selected = tab;
        self.store.save(tab.as_str());
        true
    }

    /// Unmount: gibt den Speicher für das nächste Mounten zurück.
    pub fn into_store(self) -> Box<dyn PreferenceStore> {
        self.store
    }
}

impl std::fmt::Debug for CurveTypeSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurveTypeSelector")
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Teilt den Zustand mit dem Test, damit Schreibzugriffe sichtbar bleiben.
    #[derive(Clone, Default)]
    struct SharedStore(Rc<RefCell<MemoryPreferenceStore>>);

    impl PreferenceStore for SharedStore {
        fn load(&self) -> Option<String> {
            self.0.borrow().load()
        }

        fn save(&mut self, value: &str) {
            self.0.borrow_mut().save(value);
        }
    }

    #[test]
    fn test_mount_without_value_defaults_to_quadratic() {
        let selector = CurveTypeSelector::mount(Box::new(MemoryPreferenceStore::new()));
        assert_eq!(selector.selected(), CurveTab::Quadratic);
    }

    #[test]
    fn test_mount_reads_saved_value() {
        let selector = CurveTypeSelector::mount(Box::new(MemoryPreferenceStore::with_value("cubic")));
        assert_eq!(selector.selected(), CurveTab::Cubic);
    }

    #[test]
    fn test_mount_with_unknown_value_falls_back() {
        let selector =
            CurveTypeSelector::mount(Box::new(MemoryPreferenceStore::with_value("hexic")));
        assert_eq!(selector.selected(), CurveTab::Quadratic);
    }

    #[test]
    fn test_select_writes_every_change() {
        let shared = SharedStore::default();
        let mut selector = CurveTypeSelector::mount(Box::new(shared.clone()));

        assert!(selector.select(CurveTab::Cubic));
        assert!(!selector.select(CurveTab::Cubic));
        assert!(selector.select(CurveTab::Quadratic));

        let store = shared.0.borrow();
        assert_eq!(store.save_count(), 2);
        assert_eq!(store.load().as_deref(), Some("quadratic"));
    }

    #[test]
    fn test_remount_reads_value_from_returned_store() {
        let mut selector = CurveTypeSelector::mount(Box::new(MemoryPreferenceStore::new()));
        selector.select(CurveTab::Cubic);

        let remounted = CurveTypeSelector::mount(selector.into_store());
        assert_eq!(remounted.selected(), CurveTab::Cubic);
    }

    #[test]
    fn test_file_store_persists_and_keeps_other_keys() {
        let path = std::env::temp_dir().join("test_bezier_playground_prefs.toml");
        std::fs::write(&path, "theme = \"dark\"\n").expect("Testdatei schreiben");

        let mut store = FilePreferenceStore::new(&path, SELECTED_CURVE_KEY);
        assert_eq!(store.load(), None);
        store.save("cubic");

        let reopened = FilePreferenceStore::new(&path, SELECTED_CURVE_KEY);
        assert_eq!(reopened.load().as_deref(), Some("cubic"));
        let content = std::fs::read_to_string(&path).expect("Datei lesbar");
        assert!(content.contains("theme"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_file_store_missing_file_loads_none() {
        let path = std::env::temp_dir().join("test_bezier_playground_prefs_missing.toml");
        let _ = std::fs::remove_file(&path);
        let store = FilePreferenceStore::new(&path, SELECTED_CURVE_KEY);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_file_store_backs_up_malformed_file_before_save() {
        let path = std::env::temp_dir().join("test_bezier_playground_prefs_broken.toml");
        let broken = "theme = \"dark\"\nthis is not toml\n";
        std::fs::write(&path, broken).expect("Testdatei schreiben");

        let mut store = FilePreferenceStore::new(&path, SELECTED_CURVE_KEY);
        store.save("cubic");

        assert_eq!(store.load().as_deref(), Some("cubic"));
        let backup = std::fs::read_to_string(store.backup_path()).expect("Sicherung lesbar");
        assert_eq!(backup, broken);
        let _ = std::fs::remove_file(store.backup_path());
        let _ = std::fs::remove_file(&path);
    }
}
