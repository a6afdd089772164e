/// Seiten der Navigations-Shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Curvature,
    Splines,
    VideoWall,
    Sequences,
    BikeGeo,
    Metronome,
    AudioAnalysis,
    /// Unbekannter Pfad
    NotFound,
}

impl Page {
    /// Alle Seiten, die im Navigations-Dropdown erscheinen.
    pub const NAVIGABLE: [Page; 8] = [
        Page::Home,
        Page::Curvature,
        Page::Splines,
        Page::VideoWall,
        Page::Sequences,
        Page::BikeGeo,
        Page::Metronome,
        Page::AudioAnalysis,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Curvature => "/curves",
            Page::Splines => "/splines",
            Page::VideoWall => "/video-wall",
            Page::Sequences => "/sequences",
            Page::BikeGeo => "/bike-geo",
            Page::Metronome => "/metronome",
            Page::AudioAnalysis => "/audio-analysis",
            Page::NotFound => "/404",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Curvature => "Curvature",
            Page::Splines => "Splines",
            Page::VideoWall => "VideoWall",
            Page::Sequences => "Sequences",
            Page::BikeGeo => "BikeGeo",
            Page::Metronome => "Metronome",
            Page::AudioAnalysis => "Audio Analysers",
            Page::NotFound => "Not Found",
        }
    }

    /// Löst einen Pfad auf; unbekannte Pfade landen auf `NotFound`.
    ///
    /// Ein abschließender Schrägstrich wird ignoriert (`/curves/` == `/curves`).
    pub fn from_path(path: &str) -> Page {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" if trimmed.starts_with('/') => "/",
            other => other,
        };
        Self::NAVIGABLE
            .into_iter()
            .find(|page| page.path() == normalized)
            .unwrap_or(Page::NotFound)
    }
}
