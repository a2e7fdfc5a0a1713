//! Generation parameters and construction-time validation.
//!
//! Everything the pipeline consumes is gathered into one immutable
//! [`IslandConfig`]. Validation happens once, up front: the per-cell math
//! downstream is total over the accepted domain, so no arithmetic guard is
//! needed inside the hot loops.

use serde::{Deserialize, Serialize};

use crate::shape::ShapeVariant;

/// Divisors smaller than this are treated as a configuration error rather
/// than letting NaN/infinity propagate into the height field.
pub const MIN_DIVISOR: f32 = 1e-6;

// =============================================================================
// PARAMETER GROUPS
// =============================================================================

/// Layered-noise parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoiseParams {
    /// Zoom of the noise; higher = larger features.
    pub scale: f32,
    /// Number of noise layers. Zero disables noise (constant 0.5 field).
    pub octaves: u32,
    /// Amplitude multiplier per octave (0.0-1.0).
    pub persistence: f32,
    /// Frequency multiplier per octave.
    pub lacunarity: f32,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            scale: 50.0,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }
}

/// Height-shaping parameters applied after noise and silhouette masking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeightParams {
    /// Exponent on the noise value; higher = pointier peaks.
    pub peak_sharpness: f32,
    /// Overall height scale.
    pub height_multiplier: f32,
    /// Lifts or lowers the entire island.
    pub base_elevation: f32,
}

impl Default for HeightParams {
    fn default() -> Self {
        Self {
            peak_sharpness: 1.5,
            height_multiplier: 1.0,
            base_elevation: 0.0,
        }
    }
}

/// Shoreline parameters driving the beach and cliff masks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShoreParams {
    /// Height at which terrain is considered underwater.
    pub water_level: f32,
    /// Height band above water level over which the beach mask fades out.
    pub beach_width: f32,
    /// Slope below which the cliff mask is zero. Must be < 1.
    pub cliff_slope_threshold: f32,
}

impl Default for ShoreParams {
    fn default() -> Self {
        Self {
            water_level: 0.15,
            beach_width: 0.08,
            cliff_slope_threshold: 0.35,
        }
    }
}

/// Mesh construction parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeshParams {
    /// Side length of the mesh in world units; the grid is centered on the
    /// origin.
    pub world_size: f32,
    /// World-space height of a cell at height 1.0.
    pub max_height: f32,
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            world_size: 512.0,
            max_height: 100.0,
        }
    }
}

// =============================================================================
// TOP-LEVEL CONFIG
// =============================================================================

/// Complete configuration for one generation run. Immutable once validated;
/// generation is a pure function of (config, seed).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IslandConfig {
    /// Grid resolution per axis (vertices, not quads). Must be >= 2.
    pub resolution: usize,
    pub noise: NoiseParams,
    pub shape: ShapeVariant,
    pub height: HeightParams,
    pub shore: ShoreParams,
    pub mesh: MeshParams,
}

impl Default for IslandConfig {
    fn default() -> Self {
        Self {
            resolution: 256,
            noise: NoiseParams::default(),
            shape: ShapeVariant::default(),
            height: HeightParams::default(),
            shore: ShoreParams::default(),
            mesh: MeshParams::default(),
        }
    }
}

impl IslandConfig {
    /// Check every parameter the pipeline divides by or otherwise assumes,
    /// so downstream math stays total.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolution < 2 {
            return Err(ConfigError::ResolutionTooSmall(self.resolution));
        }

        check_finite("noise.scale", self.noise.scale)?;
        check_divisor("noise.scale", self.noise.scale)?;
        check_positive("noise.persistence", self.noise.persistence)?;
        check_positive("noise.lacunarity", self.noise.lacunarity)?;

        check_finite("height.peak_sharpness", self.height.peak_sharpness)?;
        if self.height.peak_sharpness < 0.0 {
            return Err(ConfigError::NegativeParameter("height.peak_sharpness"));
        }
        check_finite("height.height_multiplier", self.height.height_multiplier)?;
        check_finite("height.base_elevation", self.height.base_elevation)?;

        check_finite("shore.water_level", self.shore.water_level)?;
        check_divisor("shore.beach_width", self.shore.beach_width)?;
        check_finite("shore.cliff_slope_threshold", self.shore.cliff_slope_threshold)?;
        if !(0.0..1.0).contains(&self.shore.cliff_slope_threshold) {
            return Err(ConfigError::ThresholdOutOfRange(
                self.shore.cliff_slope_threshold,
            ));
        }

        check_positive("mesh.world_size", self.mesh.world_size)?;
        check_finite("mesh.max_height", self.mesh.max_height)?;

        self.shape.validate()?;

        Ok(())
    }
}

pub(crate) fn check_finite(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFiniteParameter(name))
    }
}

/// Finite and strictly positive.
pub(crate) fn check_positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    check_finite(name, value)?;
    if value <= 0.0 {
        return Err(ConfigError::NegativeParameter(name));
    }
    Ok(())
}

/// Finite, non-negative, and far enough from zero to divide by.
pub(crate) fn check_divisor(name: &'static str, value: f32) -> Result<(), ConfigError> {
    check_finite(name, value)?;
    if value < MIN_DIVISOR {
        return Err(ConfigError::DivisorTooSmall(name));
    }
    Ok(())
}

// =============================================================================
// ERRORS
// =============================================================================

/// Errors reported by construction-time validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    ResolutionTooSmall(usize),
    NonFiniteParameter(&'static str),
    NegativeParameter(&'static str),
    DivisorTooSmall(&'static str),
    ThresholdOutOfRange(f32),
    IslandCountZero,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ResolutionTooSmall(r) => {
                write!(f, "resolution must be at least 2, got {}", r)
            }
            ConfigError::NonFiniteParameter(name) => {
                write!(f, "parameter {} must be finite", name)
            }
            ConfigError::NegativeParameter(name) => {
                write!(f, "parameter {} must be positive", name)
            }
            ConfigError::DivisorTooSmall(name) => {
                write!(
                    f,
                    "parameter {} is used as a divisor and must be at least {}",
                    name, MIN_DIVISOR
                )
            }
            ConfigError::ThresholdOutOfRange(v) => {
                write!(f, "cliff slope threshold must be in [0, 1), got {}", v)
            }
            ConfigError::IslandCountZero => {
                write!(f, "archipelago island count must be at least 1")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
