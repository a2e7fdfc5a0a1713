//! Small scalar helpers shared across the pipeline.

/// Clamp to [0, 1].
pub fn clamp01(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

/// Linear remap of `v` from [a, b] to [0, 1], clamped at both ends.
/// Callers guarantee `b > a` (validation rejects degenerate ranges).
pub fn inverse_lerp(a: f32, b: f32, v: f32) -> f32 {
    clamp01((v - a) / (b - a))
}

/// Hermite smoothstep between edges `a` and `b`.
pub fn smoothstep(a: f32, b: f32, v: f32) -> f32 {
    let t = inverse_lerp(a, b, v);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_lerp_clamps() {
        assert_eq!(inverse_lerp(0.0, 2.0, 1.0), 0.5);
        assert_eq!(inverse_lerp(0.0, 2.0, -1.0), 0.0);
        assert_eq!(inverse_lerp(0.0, 2.0, 5.0), 1.0);
    }

    #[test]
    fn test_smoothstep_endpoints() {
        assert_eq!(smoothstep(0.5, 1.0, 0.5), 0.0);
        assert_eq!(smoothstep(0.5, 1.0, 1.0), 1.0);
        assert_eq!(smoothstep(0.5, 1.0, 0.75), 0.5);
    }
}
