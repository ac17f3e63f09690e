//! Pipeline configuration.

use serde::{Deserialize, Serialize};

/// Tuning knobs for a [`FrameRenderer`](crate::FrameRenderer).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RendererConfig {
    /// Frames allowed past arrival before the conversion backlog drops new
    /// ones.
    pub max_scheduled: i64,
    /// Finished bitmaps allowed in flight toward the display at once.
    pub max_running: i64,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            max_scheduled: 5,
            max_running: 2,
        }
    }
}

impl RendererConfig {
    /// Load configuration from a JSON string.
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_allow_a_small_backlog() {
        let config = RendererConfig::default();
        assert!(config.max_scheduled > config.max_running);
        assert!(config.max_running >= 1);
    }

    #[test]
    fn test_from_json() {
        let config =
            RendererConfig::from_json(r#"{"max_scheduled": 3, "max_running": 1}"#).unwrap();
        assert_eq!(config.max_scheduled, 3);
        assert_eq!(config.max_running, 1);
    }
}
