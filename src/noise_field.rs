//! Seeded multi-octave noise field synthesis.
//!
//! The scalar field is the raw material the compositor shapes into an
//! island: layered smooth noise, remapped to [0, 1]. Seeds decorrelate
//! islands purely through coordinate offsets drawn from a seeded generator;
//! the underlying noise function itself is never reseeded.

use noise::{NoiseFn, Perlin};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::config::NoiseParams;
use crate::grid::ScalarField;
use crate::util::clamp01;

/// Offsets are drawn from ±OFFSET_RANGE so distinct seeds land in distant,
/// uncorrelated regions of the noise domain.
const OFFSET_RANGE: f64 = 10_000.0;

/// All consumers share one noise function; only offsets vary per seed.
const NOISE_FUNCTION_SEED: u32 = 1;

/// Deterministic smooth 2D noise, continuous and defined for all real
/// inputs, presented in [0, 1].
pub struct SmoothNoise {
    perlin: Perlin,
}

impl SmoothNoise {
    pub fn new() -> Self {
        Self {
            perlin: Perlin::new(NOISE_FUNCTION_SEED),
        }
    }

    /// Sample at (x, y), remapped from Perlin's native [-1, 1] to [0, 1].
    pub fn sample01(&self, x: f64, y: f64) -> f32 {
        (self.perlin.get([x, y]) as f32 + 1.0) * 0.5
    }
}

impl Default for SmoothNoise {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive the two per-seed coordinate offsets. Drawn once, in a fixed
/// order, from a ChaCha8 stream so the mapping seed -> offsets is stable
/// across platforms.
pub fn seed_offsets(seed: u64) -> (f64, f64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let offset_x = rng.gen_range(-OFFSET_RANGE..OFFSET_RANGE);
    let offset_y = rng.gen_range(-OFFSET_RANGE..OFFSET_RANGE);
    (offset_x, offset_y)
}

/// Generate the R×R layered-noise field for `seed`.
///
/// Each cell accumulates `octaves` layers: frequency scaled by
/// `lacunarity^o`, amplitude by `persistence^o`, each sample recentered to
/// [-1, 1]. The sum is then remapped from a *nominal* [-1, 1] to [0, 1]
/// with a clamped linear remap — deliberately not renormalized by the true
/// achievable amplitude, so multi-octave output is biased toward
/// mid-range. Zero octaves yields the constant 0.5 field.
///
/// Every cell is independent; rows are filled in parallel.
pub fn generate_scalar_field(
    noise: &SmoothNoise,
    params: &NoiseParams,
    resolution: usize,
    seed: u64,
) -> ScalarField {
    let (offset_x, offset_y) = seed_offsets(seed);
    let scale = params.scale as f64;
    let persistence = params.persistence as f64;
    let lacunarity = params.lacunarity as f64;

    let data: Vec<f32> = (0..resolution)
        .into_par_iter()
        .flat_map_iter(|y| {
            (0..resolution).map(move |x| {
                let mut value = 0.0f64;
                let mut amplitude = 1.0f64;
                let mut frequency = 1.0f64;

                for _ in 0..params.octaves {
                    let sample_x = (x as f64 + offset_x) / scale * frequency;
                    let sample_y = (y as f64 + offset_y) / scale * frequency;

                    let centered = noise.sample01(sample_x, sample_y) as f64 * 2.0 - 1.0;
                    value += centered * amplitude;

                    amplitude *= persistence;
                    frequency *= lacunarity;
                }

                // Nominal [-1, 1] -> [0, 1].
                clamp01((value as f32 + 1.0) * 0.5)
            })
        })
        .collect();

    ScalarField::from_vec(resolution, data)
}
