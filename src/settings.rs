//! Engine settings
//!
//! Persisted as JSON next to the puzzle. Missing fields take their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::clues::ClueSet;
use crate::consts::DEFAULT_MAX_TRACE_STEPS;
use crate::error::Result;
use crate::sim::{GridState, Session};

/// Engine settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Step bound for a single laser trace
    pub max_trace_steps: usize,
    /// Clue numbers shown around the grid
    pub clues: ClueSet,
    /// Print clues next to the dot values
    pub show_clues: bool,
    /// Mirror layout to start from (10 lines of `.`, `\` and `/`)
    pub layout: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_trace_steps: DEFAULT_MAX_TRACE_STEPS,
            clues: ClueSet::hall_of_mirrors_3(),
            show_clues: true,
            layout: None,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Using default settings ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Build a session honouring these settings
    pub fn session(&self) -> Result<Session> {
        let grid = match &self.layout {
            Some(text) => GridState::from_layout(text)?,
            None => GridState::new(),
        };
        Ok(Session::with_grid(grid).with_max_trace_steps(self.max_trace_steps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::sim::{Cell, MirrorKind};

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("hall_of_mirrors_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let settings = Settings::load(temp_path("missing"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("roundtrip");
        let settings = Settings {
            max_trace_steps: 100,
            show_clues: false,
            ..Default::default()
        };
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_malformed_file_uses_defaults() {
        let path = temp_path("malformed");
        std::fs::write(&path, "{ not json").unwrap();
        let loaded = Settings::load(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn test_partial_json() {
        let settings: Settings = serde_json::from_str(r#"{"show_clues": false}"#).unwrap();
        assert!(!settings.show_clues);
        assert_eq!(settings.max_trace_steps, DEFAULT_MAX_TRACE_STEPS);
        assert_eq!(settings.clues, ClueSet::hall_of_mirrors_3());
    }

    #[test]
    fn test_session_from_layout() {
        let settings = Settings {
            layout: Some(format!("\\.........\n{}", "..........\n".repeat(9))),
            ..Default::default()
        };
        let session = settings.session().unwrap();
        assert_eq!(
            session.mirror_at(Cell::new(1, 1).unwrap()),
            MirrorKind::UpRight
        );

        let bad = Settings {
            layout: Some("///".into()),
            ..Default::default()
        };
        assert!(matches!(bad.session(), Err(EngineError::Layout(_))));
    }
}
