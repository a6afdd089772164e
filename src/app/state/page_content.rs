use super::Page;
use bezier_playground_engine::{
    CurveDegree, CurveEditor, CurveTypeSelector, EditorOptions, MemoryPreferenceStore,
    PreferenceStore,
};

/// Starttempo des Metronoms in BPM.
pub const DEFAULT_TEMPO_BPM: u32 = 120;

/// Adressiert einen gemounteten Kurven-Editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorSlot {
    /// Der eine Editor der Curvature-Seite
    Curvature,
    SplinesQuadratic,
    SplinesCubic,
}

impl EditorSlot {
    pub const ALL: [EditorSlot; 3] = [
        EditorSlot::Curvature,
        EditorSlot::SplinesQuadratic,
        EditorSlot::SplinesCubic,
    ];

    /// Anzeigename in der Statusleiste.
    pub const fn label(self) -> &'static str {
        match self {
            EditorSlot::Curvature => "Kurve",
            EditorSlot::SplinesQuadratic => "Splines (quadratisch)",
            EditorSlot::SplinesCubic => "Splines (kubisch)",
        }
    }

    /// Editoren, die sich eine Seite teilen.
    pub const fn is_splines(self) -> bool {
        matches!(self, EditorSlot::SplinesQuadratic | EditorSlot::SplinesCubic)
    }
}

/// Zwei Editoren nebeneinander mit gemeinsamer Canvas-Begrenzung.
#[derive(Debug, Clone)]
pub struct SplinesState {
    pub quadratic: CurveEditor,
    pub cubic: CurveEditor,
}

impl SplinesState {
    fn new(options: &EditorOptions) -> Self {
        Self {
            quadratic: CurveEditor::new(CurveDegree::Quadratic, options),
            cubic: CurveEditor::new(CurveDegree::Cubic, options),
        }
    }

    /// Gemeinsamer Schalter; beide Editoren werden immer zusammen gesetzt.
    pub fn enforce_bounds(&self) -> bool {
        self.quadratic.enforce_bounds()
    }
}

/// Inhalt der aktiven Seite. Lebt genau so lange wie die Seite gemountet ist.
#[derive(Debug)]
pub enum PageContent {
    /// Home, Platzhalter und NotFound
    Static,
    Curvature {
        selector: CurveTypeSelector,
        editor: CurveEditor,
    },
    Splines(SplinesState),
    Metronome {
        tempo_bpm: u32,
    },
}

impl PageContent {
    /// Mountet den Inhalt für `page` mit Standardwerten.
    ///
    /// Die Curvature-Seite übernimmt den Präferenz-Speicher aus `preferences`.
    pub fn mount(
        page: Page,
        options: &EditorOptions,
        preferences: &mut Option<Box<dyn PreferenceStore>>,
    ) -> Self {
        match page {
            Page::Curvature => {
                let store = preferences
                    .take()
                    .unwrap_or_else(|| Box::new(MemoryPreferenceStore::new()));
                let selector = CurveTypeSelector::mount(store);
                let editor = CurveEditor::new(selector.selected().degree(), options);
                PageContent::Curvature { selector, editor }
            }
            Page::Splines => PageContent::Splines(SplinesState::new(options)),
            Page::Metronome => PageContent::Metronome {
                tempo_bpm: DEFAULT_TEMPO_BPM,
            },
            Page::Home
            | Page::VideoWall
            | Page::Sequences
            | Page::BikeGeo
            | Page::AudioAnalysis
            | Page::NotFound => PageContent::Static,
        }
    }

    /// Verwirft den Inhalt; ein gehaltener Präferenz-Speicher geht zurück.
    pub fn unmount(self, preferences: &mut Option<Box<dyn PreferenceStore>>) {
        if let PageContent::Curvature { selector, .. } = self {
            *preferences = Some(selector.into_store());
        }
    }

    pub fn editor(&self, slot: EditorSlot) -> Option<&CurveEditor> {
        match (self, slot) {
            (PageContent::Curvature { editor, .. }, EditorSlot::Curvature) => Some(editor),
            (PageContent::Splines(s), EditorSlot::SplinesQuadratic) => Some(&s.quadratic),
            (PageContent::Splines(s), EditorSlot::SplinesCubic) => Some(&s.cubic),
            _ => None,
        }
    }

    pub fn editor_mut(&mut self, slot: EditorSlot) -> Option<&mut CurveEditor> {
        match (self, slot) {
            (PageContent::Curvature { editor, .. }, EditorSlot::Curvature) => Some(editor),
            (PageContent::Splines(s), EditorSlot::SplinesQuadratic) => Some(&mut s.quadratic),
            (PageContent::Splines(s), EditorSlot::SplinesCubic) => Some(&mut s.cubic),
            _ => None,
        }
    }

    /// Alle gemounteten Editoren in Anzeigereihenfolge.
    pub fn editors(&self) -> Vec<(EditorSlot, &CurveEditor)> {
        match self {
            PageContent::Curvature { editor, .. } => vec![(EditorSlot::Curvature, editor)],
            PageContent::Splines(s) => vec![
                (EditorSlot::SplinesQuadratic, &s.quadratic),
                (EditorSlot::SplinesCubic, &s.cubic),
            ],
            PageContent::Static | PageContent::Metronome { .. } => Vec::new(),
        }
    }

    /// Editor mit laufender Geste (Punkt- oder Feld-Drag), falls vorhanden.
    pub fn active_slot(&self) -> Option<EditorSlot> {
        self.editors()
            .into_iter()
            .find(|(_, editor)| !editor.state().is_idle())
            .map(|(slot, _)| slot)
    }
}
