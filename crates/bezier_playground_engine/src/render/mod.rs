//! Renderer: zeichnet Kontrollpolygon, Kurve und beschriftete Punkte
//! gegen die abstrakte Zeichenfläche `DrawSurface`.

mod curve_renderer;
mod draw_list;
mod surface;

pub use curve_renderer::{render_curve, CurveStyle};
pub use draw_list::{DrawCommand, DrawList};
pub use surface::{DrawSurface, Stroke};
