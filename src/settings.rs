//! Field settings
//!
//! Persisted in LocalStorage, separately from any page preferences.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::renderer::Rgba;

/// How particles respond to a nearby pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PointerMode {
    /// Drift toward the pointer
    #[default]
    Attract,
    /// Drift away from the pointer
    Repel,
}

impl PointerMode {
    /// Sign applied to the particle→pointer displacement
    #[inline]
    pub fn sign(&self) -> f32 {
        match self {
            PointerMode::Attract => 1.0,
            PointerMode::Repel => -1.0,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("area per particle must be at least {min}, got {0}", min = MIN_AREA_PER_PARTICLE)]
    AreaPerParticle(f32),
    #[error("link distance must be positive and finite, got {0}")]
    LinkDistance(f32),
    #[error("pointer radius must be positive and finite, got {0}")]
    PointerRadius(f32),
    #[error("max speed must be within [0, {limit}], got {0}", limit = SPEED_LIMIT)]
    MaxSpeed(f32),
    #[error("radius range [{min}, {max}) is empty, negative or unbounded")]
    RadiusRange { min: f32, max: f32 },
    #[error("malformed settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Densest allowed field: one particle per 10x10 px
pub const MIN_AREA_PER_PARTICLE: f32 = 100.0;
/// Fastest allowed spawn speed (px/frame)
pub const SPEED_LIMIT: f32 = 50.0;

/// Tunable field parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSettings {
    // === Density ===
    /// Surface area per particle (px²)
    pub area_per_particle: f32,

    // === Links ===
    /// Max distance for a connecting line
    pub link_distance: f32,
    /// Line alpha at zero distance
    pub link_max_alpha: f32,

    // === Pointer ===
    /// Influence radius around the pointer
    pub pointer_radius: f32,
    /// Fraction of the displacement applied per frame
    pub pointer_strength: f32,
    pub pointer_mode: PointerMode,

    // === Spawning ===
    /// Max per-axis speed (px/frame)
    pub max_speed: f32,
    pub min_radius: f32,
    pub max_radius: f32,

    // === Colors ===
    pub particle_color: Rgba,
    /// Alpha is replaced per line by the distance falloff
    pub link_color: Rgba,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            area_per_particle: AREA_PER_PARTICLE,

            link_distance: LINK_DISTANCE,
            link_max_alpha: LINK_MAX_ALPHA,

            pointer_radius: POINTER_RADIUS,
            pointer_strength: POINTER_STRENGTH,
            pointer_mode: PointerMode::Attract,

            max_speed: MAX_SPEED,
            min_radius: MIN_RADIUS,
            max_radius: MAX_RADIUS,

            particle_color: Rgba::new(255, 0, 0, 0.5),
            link_color: Rgba::new(0, 102, 255, 1.0),
        }
    }
}

impl FieldSettings {
    /// Check that every parameter yields a well-defined field
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.area_per_particle >= MIN_AREA_PER_PARTICLE) {
            return Err(SettingsError::AreaPerParticle(self.area_per_particle));
        }
        if !(self.link_distance > 0.0 && self.link_distance.is_finite()) {
            return Err(SettingsError::LinkDistance(self.link_distance));
        }
        if !(self.pointer_radius > 0.0 && self.pointer_radius.is_finite()) {
            return Err(SettingsError::PointerRadius(self.pointer_radius));
        }
        if !(0.0..=SPEED_LIMIT).contains(&self.max_speed) {
            return Err(SettingsError::MaxSpeed(self.max_speed));
        }
        if !(self.min_radius >= 0.0 && self.min_radius < self.max_radius && self.max_radius.is_finite())
        {
            return Err(SettingsError::RadiusRange {
                min: self.min_radius,
                max: self.max_radius,
            });
        }
        Ok(())
    }

    /// Parse and validate settings; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }

    /// LocalStorage key
    pub const STORAGE_KEY: &'static str = "particle_field_settings";

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
                        log::info!("Loaded field settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored field settings: {}", e),
                }
            }
        }

        log::info!("Using default field settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

}
