//! Backdrop settings
//!
//! Defaults reproduce the shipped look. Overrides are read as JSON from
//! LocalStorage in the browser, or from the file named by
//! `RISHI_BACKDROP_SETTINGS` on native.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Particle field configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackdropSettings {
    /// Number of particles (fixed for the life of a field)
    pub particle_count: usize,
    /// Pairs strictly closer than this are joined by a line
    pub connection_distance: f64,
    /// Velocity components are drawn from [-speed/2, speed/2)
    pub speed: f64,
    /// Radius range [min, max)
    pub radius_min: f64,
    pub radius_max: f64,

    // === Style ===
    /// Particle fill (any CSS color)
    pub particle_color: String,
    /// Connection stroke (any CSS color)
    pub connection_color: String,
    pub connection_line_width: f64,
}

impl Default for BackdropSettings {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            connection_distance: CONNECTION_DISTANCE,
            speed: SPEED,
            radius_min: PARTICLE_RADIUS_MIN,
            radius_max: PARTICLE_RADIUS_MAX,

            particle_color: PARTICLE_COLOR.to_string(),
            connection_color: CONNECTION_COLOR.to_string(),
            connection_line_width: CONNECTION_LINE_WIDTH,
        }
    }
}

impl BackdropSettings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "rishi_backdrop_settings";

    /// Environment variable naming a JSON override file (native)
    pub const ENV_VAR: &'static str = "RISHI_BACKDROP_SETTINGS";

    /// Parse a JSON override. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check every value is usable by the simulation
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.particle_count > MAX_PARTICLE_COUNT {
            return Err(SettingsError::Invalid {
                field: "particle_count",
                reason: format!("{} exceeds the cap of {}", self.particle_count, MAX_PARTICLE_COUNT),
            });
        }
        for (field, value) in [
            ("connection_distance", self.connection_distance),
            ("speed", self.speed),
            ("connection_line_width", self.connection_line_width),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SettingsError::Invalid {
                    field,
                    reason: format!("{} must be a finite, non-negative number", value),
                });
            }
        }
        if !(self.radius_min.is_finite() && self.radius_max.is_finite())
            || self.radius_min <= 0.0
            || self.radius_max < self.radius_min
        {
            return Err(SettingsError::Invalid {
                field: "radius_min",
                reason: format!(
                    "radius range [{}, {}) must be positive and ordered",
                    self.radius_min, self.radius_max
                ),
            });
        }
        Ok(())
    }

    /// Whether the O(n²) connection pass is past its designed ceiling
    pub fn exceeds_pairwise_ceiling(&self) -> bool {
        self.particle_count > PAIRWISE_PARTICLE_CEILING
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded backdrop settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored backdrop settings: {}", e),
                }
            }
        }

        Self::default()
    }

    /// Load settings from the override file, if one is configured
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            return Self::default();
        };

        match std::fs::read_to_string(&path)
            .map_err(SettingsError::from)
            .and_then(|json| Self::from_json(&json))
        {
            Ok(settings) => {
                log::info!("Loaded backdrop settings from {}", path);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring backdrop settings in {}: {}", path, e);
                Self::default()
            }
        }
    }
}
