use std::path::PathBuf;

use log::{info, warn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Background color the frame is cleared to, RGBA in [0, 1].
    #[serde(default = "RenderSettings::default_clear_color")]
    pub clear_color: [f32; 4],
    /// Optional path to a tagged two-section shader file. The built-in scene
    /// shader is used when unset.
    #[serde(default)]
    pub shader_path: Option<PathBuf>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            clear_color: Self::default_clear_color(),
            shader_path: None,
        }
    }
}

impl RenderSettings {
    pub fn load() -> Self {
        Self::load_from_path("settings.json")
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Self {
        use std::fs;

        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<RenderSettings>(&contents) {
                Ok(settings) => {
                    info!("Loaded render settings from {:?}", path);
                    settings.validate()
                }
                Err(err) => {
                    warn!(
                        "Failed to parse {:?} ({}). Falling back to default render settings.",
                        path, err
                    );
                    RenderSettings::default()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!(
                    "Render settings file {:?} not found. Using default settings.",
                    path
                );
                RenderSettings::default()
            }
            Err(err) => {
                warn!(
                    "Failed to read {:?} ({}). Falling back to default render settings.",
                    path, err
                );
                RenderSettings::default()
            }
        }
    }

    fn validate(mut self) -> Self {
        if self.clear_color.iter().any(|c| !c.is_finite()) {
            warn!("Clear color must be finite. Using the default color.");
            self.clear_color = Self::default_clear_color();
        } else if self.clear_color.iter().any(|c| !(0.0..=1.0).contains(c)) {
            warn!("Clear color components must be within [0, 1]. Clamping.");
            for component in &mut self.clear_color {
                *component = component.clamp(0.0, 1.0);
            }
        }

        self
    }

    const fn default_clear_color() -> [f32; 4] {
        [0.027, 0.184, 0.372, 1.0]
    }
}
