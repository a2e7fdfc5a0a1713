//! Island silhouette masks.
//!
//! A shape mask maps normalized [-1, 1] coordinates to a silhouette value
//! in [0, 1] — membership before any height shaping. The variant set is
//! closed: dispatch is a total match over the tag, and each variant carries
//! exactly its own parameter record, so invalid tags cannot reach per-cell
//! evaluation.

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::config::{check_divisor, check_finite, ConfigError};
use crate::noise_field::SmoothNoise;
use crate::util::{clamp01, smoothstep};

/// Floor for the Irregular variant's noise-modulated radius: keeps the
/// circle formula total when the perturbation drives the radius to zero or
/// below mid-field.
const MIN_EFFECTIVE_RADIUS: f32 = 1e-4;

/// Silhouette variants. Distances are Euclidean throughout; every variant
/// is total over all real inputs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ShapeVariant {
    /// Radial falloff from the center.
    Circle { radius: f32 },
    /// Ring: outer circle minus inner circle, with the ring's own edge
    /// sharpened by a smoothstep.
    Donut { radius: f32, inner_radius: f32 },
    /// Difference of two horizontally offset circles carves the opening.
    Crescent {
        radius: f32,
        center_shift: f32,
        bend_amount: f32,
    },
    /// Union (max, not sum) of sub-islands evenly spaced on a ring.
    Archipelago {
        radius: f32,
        island_count: u32,
        spread: f32,
    },
    /// Circle evaluated at noise-perturbed coordinates.
    NoiseWarped {
        radius: f32,
        warp_strength: f32,
        warp_frequency: f32,
    },
    /// Circle with a noise-modulated radius: coastline jitter without
    /// coordinate distortion.
    Irregular {
        radius: f32,
        irregular_amount: f32,
        irregular_frequency: f32,
    },
}

impl Default for ShapeVariant {
    fn default() -> Self {
        ShapeVariant::Circle { radius: 1.0 }
    }
}

fn circle_mask(x: f32, y: f32, radius: f32) -> f32 {
    let dist = (x * x + y * y).sqrt();
    clamp01(1.0 - dist / radius)
}

impl ShapeVariant {
    /// Silhouette value at normalized coordinates (x, y).
    pub fn mask(&self, noise: &SmoothNoise, x: f32, y: f32) -> f32 {
        match *self {
            ShapeVariant::Circle { radius } => circle_mask(x, y, radius),

            ShapeVariant::Donut {
                radius,
                inner_radius,
            } => {
                let outer = circle_mask(x, y, radius);
                let inner = circle_mask(x, y, inner_radius);
                let ring = clamp01(outer - inner);
                ring * smoothstep(0.5, 1.0, ring)
            }

            ShapeVariant::Crescent {
                radius,
                center_shift,
                bend_amount,
            } => {
                let cx = x - center_shift;
                let main = circle_mask(cx, y, radius);
                let shifted = circle_mask(cx - bend_amount, y, radius);
                clamp01(main - shifted)
            }

            ShapeVariant::Archipelago {
                radius,
                island_count,
                spread,
            } => {
                let mut mask = 0.0f32;
                for i in 0..island_count {
                    let angle = i as f32 * TAU / island_count as f32;
                    let dx = x - angle.cos() * spread;
                    let dy = y - angle.sin() * spread;
                    mask = mask.max(circle_mask(dx, dy, radius));
                }
                mask
            }

            ShapeVariant::NoiseWarped {
                radius,
                warp_strength,
                warp_frequency,
            } => {
                // Swapped sampling axes decorrelate the two perturbations.
                let f = warp_frequency as f64;
                let wx = signed_noise(noise, x as f64 * f, y as f64 * f) * warp_strength;
                let wy = signed_noise(noise, y as f64 * f, x as f64 * f) * warp_strength;
                circle_mask(x + wx, y + wy, radius)
            }

            ShapeVariant::Irregular {
                radius,
                irregular_amount,
                irregular_frequency,
            } => {
                let f = irregular_frequency as f64;
                let jitter = signed_noise(noise, x as f64 * f, y as f64 * f) * 0.5;
                let effective = (radius + jitter * irregular_amount).max(MIN_EFFECTIVE_RADIUS);
                circle_mask(x, y, effective)
            }
        }
    }

    /// Validate the active variant's parameter record. Parameters belonging
    /// to other variants do not exist here, so nothing else is checked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            ShapeVariant::Circle { radius } => check_divisor("shape.radius", radius),

            ShapeVariant::Donut {
                radius,
                inner_radius,
            } => {
                check_divisor("shape.radius", radius)?;
                check_divisor("shape.inner_radius", inner_radius)
            }

            ShapeVariant::Crescent {
                radius,
                center_shift,
                bend_amount,
            } => {
                check_divisor("shape.radius", radius)?;
                check_finite("shape.center_shift", center_shift)?;
                check_finite("shape.bend_amount", bend_amount)
            }

            ShapeVariant::Archipelago {
                radius,
                island_count,
                spread,
            } => {
                check_divisor("shape.radius", radius)?;
                check_finite("shape.spread", spread)?;
                if island_count == 0 {
                    return Err(ConfigError::IslandCountZero);
                }
                Ok(())
            }

            ShapeVariant::NoiseWarped {
                radius,
                warp_strength,
                warp_frequency,
            } => {
                check_divisor("shape.radius", radius)?;
                check_finite("shape.warp_strength", warp_strength)?;
                check_frequency("shape.warp_frequency", warp_frequency)
            }

            ShapeVariant::Irregular {
                radius,
                irregular_amount,
                irregular_frequency,
            } => {
                check_divisor("shape.radius", radius)?;
                check_finite("shape.irregular_amount", irregular_amount)?;
                check_frequency("shape.irregular_frequency", irregular_frequency)
            }
        }
    }

    /// Build a variant with default parameters from a tag string.
    ///
    /// Unrecognized tags fall back to Circle. This is a deliberate,
    /// documented parse-time default (the enum itself stays closed).
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "donut" => ShapeVariant::Donut {
                radius: 1.0,
                inner_radius: 0.4,
            },
            "crescent" => ShapeVariant::Crescent {
                radius: 1.0,
                center_shift: 0.0,
                bend_amount: 0.5,
            },
            "archipelago" => ShapeVariant::Archipelago {
                radius: 0.6,
                island_count: 3,
                spread: 0.5,
            },
            "noise_warped" | "noisewarped" | "warped" => ShapeVariant::NoiseWarped {
                radius: 1.0,
                warp_strength: 0.2,
                warp_frequency: 3.0,
            },
            "irregular" => ShapeVariant::Irregular {
                radius: 1.0,
                irregular_amount: 0.35,
                irregular_frequency: 3.0,
            },
            _ => ShapeVariant::Circle { radius: 1.0 },
        }
    }

    /// Short name of the active variant.
    pub fn tag(&self) -> &'static str {
        match self {
            ShapeVariant::Circle { .. } => "circle",
            ShapeVariant::Donut { .. } => "donut",
            ShapeVariant::Crescent { .. } => "crescent",
            ShapeVariant::Archipelago { .. } => "archipelago",
            ShapeVariant::NoiseWarped { .. } => "noise_warped",
            ShapeVariant::Irregular { .. } => "irregular",
        }
    }
}

/// Noise recentered to [-1, 1].
fn signed_noise(noise: &SmoothNoise, x: f64, y: f64) -> f32 {
    noise.sample01(x, y) * 2.0 - 1.0
}

/// Frequencies must be finite and non-negative (zero is legal: the
/// perturbation just becomes constant).
fn check_frequency(name: &'static str, value: f32) -> Result<(), ConfigError> {
    check_finite(name, value)?;
    if value < 0.0 {
        return Err(ConfigError::NegativeParameter(name));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noise() -> SmoothNoise {
        SmoothNoise::new()
    }

    fn sample_points() -> Vec<(f32, f32)> {
        let mut points = Vec::new();
        for iy in 0..9 {
            for ix in 0..9 {
                points.push((ix as f32 / 4.0 - 1.0, iy as f32 / 4.0 - 1.0));
            }
        }
        points
    }

    #[test]
    fn test_circle_values() {
        let n = noise();
        let circle = ShapeVariant::Circle { radius: 1.0 };
        assert_eq!(circle.mask(&n, 0.0, 0.0), 1.0);
        assert_eq!(circle.mask(&n, 1.0, 0.0), 0.0);
        assert!((circle.mask(&n, 0.5, 0.0) - 0.5).abs() < 1e-6);
        // Outside the radius the mask clamps to zero, never negative.
        assert_eq!(circle.mask(&n, 3.0, 4.0), 0.0);
    }

    #[test]
    fn test_circle_radial_symmetry() {
        let n = noise();
        let circle = ShapeVariant::Circle { radius: 0.8 };
        for &(x, y) in &sample_points() {
            assert_eq!(circle.mask(&n, x, y), circle.mask(&n, -x, -y));
        }
    }

    #[test]
    fn test_donut_bounded_by_outer_circle() {
        let n = noise();
        let donut = ShapeVariant::Donut {
            radius: 1.0,
            inner_radius: 0.4,
        };
        let circle = ShapeVariant::Circle { radius: 1.0 };
        for &(x, y) in &sample_points() {
            assert!(donut.mask(&n, x, y) <= circle.mask(&n, x, y) + 1e-6);
        }
    }

    #[test]
    fn test_donut_hole_at_center() {
        let n = noise();
        let donut = ShapeVariant::Donut {
            radius: 1.0,
            inner_radius: 0.4,
        };
        // At the center both circles saturate to 1, so the ring is 0.
        assert_eq!(donut.mask(&n, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_donut_edge_sharpening() {
        let n = noise();
        let donut = ShapeVariant::Donut {
            radius: 1.0,
            inner_radius: 0.01,
        };
        // ring = 0.5 lands exactly on the smoothstep's lower edge, so the
        // sharpened value collapses to 0.
        assert_eq!(donut.mask(&n, 0.5, 0.0), 0.0);
        // Close to the (tiny) inner radius the ring survives sharpening.
        assert!(donut.mask(&n, 0.05, 0.0) > 0.85);
    }

    #[test]
    fn test_crescent_carves_opening() {
        let n = noise();
        let crescent = ShapeVariant::Crescent {
            radius: 1.0,
            center_shift: 0.0,
            bend_amount: 0.5,
        };
        // On the carved side the shifted circle dominates.
        assert_eq!(crescent.mask(&n, 0.5, 0.0), 0.0);
        // Opposite side keeps positive mass.
        assert!(crescent.mask(&n, -0.5, 0.0) > 0.0);
    }

    #[test]
    fn test_crescent_center_shift_translates() {
        let n = noise();
        let base = ShapeVariant::Crescent {
            radius: 1.0,
            center_shift: 0.0,
            bend_amount: 0.5,
        };
        let shifted = ShapeVariant::Crescent {
            radius: 1.0,
            center_shift: 0.25,
            bend_amount: 0.5,
        };
        for &(x, y) in &sample_points() {
            assert_eq!(shifted.mask(&n, x, y), base.mask(&n, x - 0.25, y));
        }
    }

    #[test]
    fn test_archipelago_is_union_of_circles() {
        let n = noise();
        let radius = 0.4;
        let spread = 0.5;
        let count = 4;
        let arch = ShapeVariant::Archipelago {
            radius,
            island_count: count,
            spread,
        };
        for &(x, y) in &sample_points() {
            let mask = arch.mask(&n, x, y);
            // Zero iff every sub-island distance exceeds its radius.
            let outside_all = (0..count).all(|i| {
                let angle = i as f32 * TAU / count as f32;
                let dx = x - angle.cos() * spread;
                let dy = y - angle.sin() * spread;
                (dx * dx + dy * dy).sqrt() >= radius
            });
            assert_eq!(mask == 0.0, outside_all, "at ({}, {})", x, y);
        }
    }

    #[test]
    fn test_archipelago_union_does_not_brighten() {
        let n = noise();
        // Heavily overlapping islands: max keeps the mask within [0, 1].
        let arch = ShapeVariant::Archipelago {
            radius: 1.5,
            island_count: 8,
            spread: 0.1,
        };
        for &(x, y) in &sample_points() {
            assert!(arch.mask(&n, x, y) <= 1.0);
        }
    }

    #[test]
    fn test_noise_warped_bounded() {
        let n = noise();
        let warped = ShapeVariant::NoiseWarped {
            radius: 1.0,
            warp_strength: 0.3,
            warp_frequency: 3.0,
        };
        for &(x, y) in &sample_points() {
            let v = warped.mask(&n, x, y);
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_irregular_total_under_extreme_jitter() {
        let n = noise();
        // Amount large enough to drive the effective radius negative
        // without the floor; the mask must stay in [0, 1].
        let irregular = ShapeVariant::Irregular {
            radius: 0.2,
            irregular_amount: 2.0,
            irregular_frequency: 5.0,
        };
        for &(x, y) in &sample_points() {
            let v = irregular.mask(&n, x, y);
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_irregular_matches_circle_with_zero_amount() {
        let n = noise();
        let irregular = ShapeVariant::Irregular {
            radius: 0.9,
            irregular_amount: 0.0,
            irregular_frequency: 3.0,
        };
        let circle = ShapeVariant::Circle { radius: 0.9 };
        for &(x, y) in &sample_points() {
            assert_eq!(irregular.mask(&n, x, y), circle.mask(&n, x, y));
        }
    }

    #[test]
    fn test_from_tag_known_variants() {
        assert_eq!(ShapeVariant::from_tag("donut").tag(), "donut");
        assert_eq!(ShapeVariant::from_tag("Crescent").tag(), "crescent");
        assert_eq!(ShapeVariant::from_tag("noise_warped").tag(), "noise_warped");
    }

    #[test]
    fn test_from_tag_falls_back_to_circle() {
        assert_eq!(ShapeVariant::from_tag("hexagon").tag(), "circle");
        assert_eq!(ShapeVariant::from_tag("").tag(), "circle");
    }

    #[test]
    fn test_validate_rejects_tiny_radius() {
        let circle = ShapeVariant::Circle { radius: 0.0 };
        assert!(circle.validate().is_err());
        let donut = ShapeVariant::Donut {
            radius: 1.0,
            inner_radius: 1e-9,
        };
        assert!(donut.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_island_count() {
        let arch = ShapeVariant::Archipelago {
            radius: 0.5,
            island_count: 0,
            spread: 0.5,
        };
        assert_eq!(arch.validate(), Err(ConfigError::IslandCountZero));
    }
}
