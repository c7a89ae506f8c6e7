//! Injection settings.

/// Base type a class must derive from to opt in to generation.
pub const DEFAULT_MARKER: &str = "C4";

/// How a base class spelling is compared with the marker.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum MarkerMatch {
    /// The base is spelled exactly as the marker, ignoring a leading `::`.
    #[default]
    Exact,
    /// An unqualified marker also matches the last `::` segment of a base,
    /// so `C4` accepts `lib::C4`.
    Suffix,
}

/// Settings for one [`inject`](crate::inject) run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InjectConfig {
    /// Marker base type, qualified (`ns::C4`) or not (`C4`).
    pub marker: String,
    pub marker_match: MarkerMatch,
}

impl InjectConfig {
    pub fn with_marker(marker: impl Into<String>) -> Self {
        InjectConfig {
            marker: marker.into(),
            marker_match: MarkerMatch::Exact,
        }
    }

    #[must_use]
    pub fn matching(mut self, marker_match: MarkerMatch) -> Self {
        self.marker_match = marker_match;
        self
    }
}

impl Default for InjectConfig {
    fn default() -> Self {
        InjectConfig::with_marker(DEFAULT_MARKER)
    }
}
