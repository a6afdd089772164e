//! UI-Komponenten: Navigation, Seiten, Kurven-Editoren, Status-Bar.
//!
//! Liest nur den AppState und gibt `AppIntent`s zurück; mutiert wird
//! ausschließlich über den Controller.

pub mod canvas;
pub mod curve_panel;
pub mod nav;
pub mod pages;
pub mod status;

pub use canvas::EguiSurface;
pub use curve_panel::render_curve_panel;
pub use nav::render_nav;
pub use pages::render_page;
pub use status::render_status_bar;
