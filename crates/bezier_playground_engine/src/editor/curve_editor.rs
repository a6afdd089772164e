//! `CurveEditor`: Punktspeicher + Interaktion + Relativ-Modus + Rendering.

use super::interaction::{hit_test, FieldDragOrigin, InteractionState};
use super::numeric::NumberFormat;
use super::relative::RelativeLink;
use crate::core::{Axis, BoundsPolicy, Curve, CurveDegree};
use crate::render::{render_curve, CurveStyle, DrawList, DrawSurface};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Ein interaktiver Editor für genau eine Kurve.
///
/// Alle Zeigerpositionen sind Canvas-lokal. Jede Mutation erhöht die
/// `revision`, woran der Aufrufer erkennt, dass neu gezeichnet werden muss.
#[derive(Debug, Clone)]
pub struct CurveEditor {
    curve: Curve,
    state: InteractionState,
    bounds: BoundsPolicy,
    relative: RelativeLink,
    number_format: NumberFormat,
    hit_radius: f32,
    revision: u64,
}

impl CurveEditor {
    /// Erstellt einen Editor mit den Standardpunkten des Grads.
    ///
    /// Der quadratische Editor parst Ganzzahlen, der kubische Fließkommazahlen.
    pub fn new(degree: CurveDegree, options: &EditorOptions) -> Self {
        let number_format = match degree {
            CurveDegree::Quadratic => NumberFormat::Integer,
            CurveDegree::Cubic => NumberFormat::Float,
        };
        Self::with_curve(Curve::with_defaults(degree), number_format, options)
    }

    /// Erstellt einen Editor für eine bereits aufgebaute Kurve.
    pub fn with_curve(curve: Curve, number_format: NumberFormat, options: &EditorOptions) -> Self {
        Self {
            curve,
            state: InteractionState::Idle,
            bounds: BoundsPolicy::new(options.canvas_size()),
            relative: RelativeLink::default(),
            number_format,
            hit_radius: options.hit_radius_px,
            revision: 0,
        }
    }

    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    pub fn degree(&self) -> CurveDegree {
        self.curve.degree()
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn number_format(&self) -> NumberFormat {
        self.number_format
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn enforce_bounds(&self) -> bool {
        self.bounds.enabled
    }

    pub fn is_relative(&self) -> bool {
        self.relative.is_enabled()
    }

    pub fn relative_link(&self) -> &RelativeLink {
        &self.relative
    }

    /// Relativ-Modus und Feld-Drag gibt es nur im kubischen Editor.
    pub fn supports_relative(&self) -> bool {
        self.degree() == CurveDegree::Cubic
    }

    pub fn supports_field_drag(&self) -> bool {
        self.degree() == CurveDegree::Cubic
    }

    /// Übernimmt geänderte Optionen (Canvas-Größe, Pick-Radius).
    pub fn apply_options(&mut self, options: &EditorOptions) {
        self.bounds.canvas_size = options.canvas_size();
        self.hit_radius = options.hit_radius_px;
        self.revision += 1;
    }

    // ── Zeiger ──────────────────────────────────────────────────

    /// Zeiger gedrückt: greift den ersten Punkt im Pick-Radius.
    ///
    /// Nur aus `Idle` heraus; gibt den gegriffenen Index zurück.
    pub fn pointer_pressed(&mut self, pos: Vec2) -> Option<usize> {
        if !self.state.is_idle() {
            return None;
        }
        let index = hit_test(self.curve.points(), pos, self.hit_radius)?;
        self.state = InteractionState::DraggingPoint { index };
        log::debug!("Drag gestartet: P{index}");
        Some(index)
    }

    /// Zeiger bewegt. Gibt `true` zurück, wenn sich die Kurve geändert hat.
    pub fn pointer_moved(&mut self, pos: Vec2) -> bool {
        match self.state {
            InteractionState::Idle => false,
            InteractionState::DraggingPoint { index } => {
                let pos = self.bounds.apply(pos);
                self.write_point(index, pos);
                true
            }
            InteractionState::DraggingField {
                index,
                axis,
                origin,
            } => {
                let point = axis.with(self.curve.get(index), origin.value_at(pos.y));
                self.write_point(index, point);
                true
            }
        }
    }

    /// Zeiger losgelassen: beendet jeden Drag, egal wo der Zeiger ist.
    pub fn pointer_released(&mut self) -> bool {
        if self.state.is_idle() {
            return false;
        }
        log::debug!("Drag beendet: {:?}", self.state);
        self.state = InteractionState::Idle;
        true
    }

    /// Startet die Vertikal-Drag-Geste auf einem Koordinatenfeld.
    pub fn begin_field_drag(&mut self, index: usize, axis: Axis, pointer: Vec2) -> bool {
        if !self.supports_field_drag() || !self.state.is_idle() {
            return false;
        }
        let origin = FieldDragOrigin {
            initial_value: axis.get(self.curve.get(index)),
            initial_y: pointer.y,
        };
        self.state = InteractionState::DraggingField {
            index,
            axis,
            origin,
        };
        log::debug!("Feld-Drag gestartet: P{index} {}", axis.label());
        true
    }

    // ── Zahlenfelder ────────────────────────────────────────────

    /// Übernimmt eine Texteingabe. Ungültige Eingaben werden ignoriert.
    pub fn enter_text(&mut self, index: usize, axis: Axis, text: &str) -> bool {
        match self.number_format.parse(text) {
            Ok(value) => self.set_coordinate(index, axis, value),
            Err(e) => {
                log::debug!("Eingabe ignoriert (P{index} {}): {e}", axis.label());
                false
            }
        }
    }

    /// Schreibt eine Koordinate direkt (ohne Bounds-Policy).
    pub fn set_coordinate(&mut self, index: usize, axis: Axis, value: f32) -> bool {
        if !value.is_finite() {
            return false;
        }
        let point = axis.with(self.curve.get(index), value);
        self.write_point(index, point);
        true
    }

    // ── Modi ────────────────────────────────────────────────────

    /// Schaltet den Relativ-Modus. Beim Einschalten werden Offsets neu erfasst.
    pub fn set_relative(&mut self, on: bool) -> bool {
        if on == self.is_relative() {
            return false;
        }
        if on {
            if !self.relative.enable(&self.curve) {
                return false;
            }
        } else {
            self.relative.disable();
        }
        log::debug!("Relativ-Modus: {on}");
        self.revision += 1;
        true
    }

    pub fn toggle_relative(&mut self) -> bool {
        self.set_relative(!self.is_relative())
    }

    pub fn set_enforce_bounds(&mut self, on: bool) {
        if self.bounds.enabled != on {
            self.bounds.enabled = on;
            log::debug!("Canvas-Begrenzung: {on}");
        }
    }

    // ── Rendering ───────────────────────────────────────────────

    /// Zeichnet die Kurve neu. Ohne Fläche: stiller No-op.
    pub fn render(&self, surface: Option<&mut dyn DrawSurface>, style: &CurveStyle) {
        let Some(surface) = surface else {
            return;
        };
        render_curve(surface, &self.curve, self.is_relative(), style);
    }

    /// Zeichnet in eine neue `DrawList`.
    pub fn draw_list(&self, style: &CurveStyle) -> DrawList {
        let mut list = DrawList::new();
        self.render(Some(&mut list as &mut dyn DrawSurface), style);
        list
    }

    fn write_point(&mut self, index: usize, point: Vec2) {
        self.curve.set(index, point);
        self.relative.sync(&mut self.curve, Some(index));
        self.revision += 1;
    }
}
