//! Viewer configuration.

use gazecast_gaze::SessionConfig;
use std::{fs, path::Path};
use tracing::warn;

const DEFAULT_CONFIG_PATH: &str = "config/viewer.toml";

/// Load the session configuration from an explicit path, or from the
/// default location, falling back to defaults on any error.
pub fn load(path: Option<&Path>) -> SessionConfig {
    let default_path = Path::new(DEFAULT_CONFIG_PATH);
    let path = path.unwrap_or(default_path);
    match fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<SessionConfig>(&contents) {
            Ok(cfg) => cfg,
            Err(err) => {
                warn!("Failed to parse {}: {err}. Using defaults", path.display());
                SessionConfig::default()
            }
        },
        Err(err) => {
            if path != default_path {
                warn!("Failed to read {}: {err}. Using defaults", path.display());
            } else if err.kind() != std::io::ErrorKind::NotFound {
                warn!("Failed to read {}: {err}. Using defaults", path.display());
            }
            SessionConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_fills_remaining_fields_from_defaults() {
        let path = std::env::temp_dir().join(format!(
            "gazecast_viewer_config_{}.toml",
            std::process::id()
        ));
        fs::write(&path, "fov_degrees = 90.0\nhover_activate_ms = 500.0\n").unwrap();

        let cfg = load(Some(&path));
        assert_eq!(cfg.fov_degrees, 90.0);
        assert_eq!(cfg.hover_activate_ms, 500.0);
        assert_eq!(cfg.drag_sensitivity, SessionConfig::default().drag_sensitivity);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = Path::new("/nonexistent/gazecast/viewer.toml");
        assert_eq!(load(Some(path)), SessionConfig::default());
    }
}
