//! Generation entry point.
//!
//! The host owns the config and calls [`generate`] explicitly whenever it
//! wants fresh terrain — there is no auto-regeneration lifecycle and no
//! hidden current-mesh state. Every call returns freshly allocated output
//! owned by the caller.

use crate::compositor::{compose, IslandFields};
use crate::config::{ConfigError, IslandConfig};
use crate::grid::ScalarField;
use crate::mesh::{build_mesh, Mesh};
use crate::noise_field::SmoothNoise;

/// One complete generated island: heightfield, shore masks, surface mesh.
#[derive(Clone, Debug)]
pub struct Island {
    pub height: ScalarField,
    pub beach: ScalarField,
    pub cliff: ScalarField,
    pub mesh: Mesh,
}

/// Validate `config` and run the full pipeline for `seed`.
///
/// Pure function of its inputs: identical (config, seed) pairs yield
/// identical output.
pub fn generate(config: &IslandConfig, seed: u64) -> Result<Island, ConfigError> {
    config.validate()?;

    let noise = SmoothNoise::new();
    let IslandFields {
        height,
        beach,
        cliff,
    } = compose(config, &noise, seed);
    let mesh = build_mesh(&height, &config.mesh);

    Ok(Island {
        height,
        beach,
        cliff,
        mesh,
    })
}

impl Island {
    /// Fraction of cells above `water_level`.
    pub fn land_fraction(&self, water_level: f32) -> f32 {
        let total = self.height.as_slice().len();
        let land = self
            .height
            .as_slice()
            .iter()
            .filter(|&&h| h > water_level)
            .count();
        land as f32 / total as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_rejects_invalid_config() {
        let mut config = IslandConfig::default();
        config.resolution = 0;
        assert_eq!(
            generate(&config, 1).unwrap_err(),
            ConfigError::ResolutionTooSmall(0)
        );
    }

    #[test]
    fn test_generate_shapes_match_resolution() {
        let config = IslandConfig {
            resolution: 16,
            ..IslandConfig::default()
        };
        let island = generate(&config, 9).unwrap();
        assert_eq!(island.height.resolution(), 16);
        assert_eq!(island.beach.resolution(), 16);
        assert_eq!(island.cliff.resolution(), 16);
        assert_eq!(island.mesh.positions.len(), 16 * 16);
        assert_eq!(island.mesh.indices.len(), 6 * 15 * 15);
    }

    #[test]
    fn test_generate_deterministic_end_to_end() {
        let config = IslandConfig {
            resolution: 20,
            ..IslandConfig::default()
        };
        let a = generate(&config, 4242).unwrap();
        let b = generate(&config, 4242).unwrap();
        assert_eq!(a.height.as_slice(), b.height.as_slice());
        assert_eq!(a.mesh, b.mesh);
    }

    #[test]
    fn test_land_fraction_bounds() {
        let config = IslandConfig {
            resolution: 32,
            ..IslandConfig::default()
        };
        let island = generate(&config, 3).unwrap();
        let fraction = island.land_fraction(config.shore.water_level);
        assert!((0.0..=1.0).contains(&fraction));
    }
}
