//! Height compositing and derived shore masks.
//!
//! Combines the layered-noise field with the silhouette mask into the
//! final heightfield, then derives the beach and cliff masks in the same
//! raster pass.
//!
//! The pass runs in strict row-major order (y outer, x inner) and this is
//! load-bearing: the cliff slope estimate reads neighbors from the height
//! grid *as it is being filled*. Left (x-1) and down (y-1) neighbors are
//! already written; right (x+1) and up (y+1) neighbors still hold their
//! initial 0.0 except at grid edges, where the cell's own height stands in.
//! The resulting asymmetric slope is part of the output contract — it is
//! not a gradient over the completed field, and restructuring into a
//! completed-field two-pass estimate would change every cliff value.

use crate::config::IslandConfig;
use crate::grid::{normalized_coord, ScalarField};
use crate::noise_field::{generate_scalar_field, SmoothNoise};
use crate::util::{clamp01, inverse_lerp};

/// The three fields produced by one compositing pass. Freshly allocated
/// per call; every value is clamped to [0, 1].
#[derive(Clone, Debug)]
pub struct IslandFields {
    pub height: ScalarField,
    pub beach: ScalarField,
    pub cliff: ScalarField,
}

/// Compose the heightfield and both shore masks for `seed`.
///
/// The noise field is synthesized first (parallel, per-cell independent);
/// the compositing pass itself is sequential because of the partial-read
/// slope estimate described in the module docs.
pub fn compose(config: &IslandConfig, noise: &SmoothNoise, seed: u64) -> IslandFields {
    let r = config.resolution;
    let noise_field = generate_scalar_field(noise, &config.noise, r, seed);

    let mut height = ScalarField::new_with(r, 0.0);
    let mut beach = ScalarField::new_with(r, 0.0);
    let mut cliff = ScalarField::new_with(r, 0.0);

    let shaping = &config.height;
    let shore = &config.shore;

    for y in 0..r {
        let ny = normalized_coord(y, r);
        for x in 0..r {
            let nx = normalized_coord(x, r);

            let noise_value = noise_field.get(x, y);
            let shape_mask = config.shape.mask(noise, nx, ny);

            // powf(0) with a positive exponent is 0, so fully masked
            // cells stay flat regardless of sharpness.
            let shaped = noise_value.powf(shaping.peak_sharpness);
            let h = clamp01(
                shaped * shape_mask * shaping.height_multiplier + shaping.base_elevation,
            );

            // Written before the neighbor reads below so edge substitution
            // sees the current cell's height.
            height.set(x, y, h);

            let water_dist = clamp01((h - shore.water_level) / shore.beach_width);
            beach.set(x, y, 1.0 - water_dist);

            let left = if x > 0 { height.get(x - 1, y) } else { h };
            let right = if x < r - 1 { height.get(x + 1, y) } else { h };
            let down = if y > 0 { height.get(x, y - 1) } else { h };
            let up = if y < r - 1 { height.get(x, y + 1) } else { h };

            let dx = right - left;
            let dy = up - down;
            let slope = (dx * dx + dy * dy).sqrt();

            cliff.set(
                x,
                y,
                inverse_lerp(shore.cliff_slope_threshold, 1.0, slope),
            );
        }
    }

    IslandFields {
        height,
        beach,
        cliff,
    }
}
