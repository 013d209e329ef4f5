/// Annotation that registers a type for reflection.
pub const DEFAULT_MARKER: &str = "io.quarkus.runtime.annotations.RegisterForReflection";

/// Overrides the marker annotation when set to a non-empty value.
pub const MARKER_ENV: &str = "REFLECTSCOPE_MARKER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Fully qualified name of the marker annotation.
    pub marker: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}

impl ScanConfig {
    pub fn from_env() -> Self {
        match std::env::var(MARKER_ENV) {
            Ok(marker) if !marker.trim().is_empty() => Self {
                marker: marker.trim().to_string(),
            },
            _ => Self::default(),
        }
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }
}
