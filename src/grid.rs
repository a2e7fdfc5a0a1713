//! Dense square scalar grids used for heightfields and shore masks.

/// A square R×R grid of scalars, stored row-major.
///
/// Unlike an equirectangular world map, an island grid is bounded on all
/// four sides: there is no coordinate wrapping. Out-of-range access is a
/// caller bug and panics via the underlying slice index.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarField {
    resolution: usize,
    data: Vec<f32>,
}

impl ScalarField {
    /// Create a field filled with `value`.
    pub fn new_with(resolution: usize, value: f32) -> Self {
        Self {
            resolution,
            data: vec![value; resolution * resolution],
        }
    }

    /// Wrap an existing row-major buffer. `data.len()` must equal
    /// `resolution * resolution`.
    pub fn from_vec(resolution: usize, data: Vec<f32>) -> Self {
        assert_eq!(
            data.len(),
            resolution * resolution,
            "buffer length does not match resolution"
        );
        Self { resolution, data }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.resolution && y < self.resolution);
        y * self.resolution + x
    }

    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    /// Row-major view of the raw values.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Iterate over all cells with their coordinates, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        let resolution = self.resolution;
        self.data.iter().enumerate().map(move |(idx, &val)| {
            let x = idx % resolution;
            let y = idx / resolution;
            (x, y, val)
        })
    }

    /// Minimum and maximum value over the field.
    pub fn min_max(&self) -> (f32, f32) {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for &v in &self.data {
            min = min.min(v);
            max = max.max(v);
        }
        (min, max)
    }
}

/// Map a grid index to the [-1, 1] normalized coordinate used by shape
/// masks. The denominator is `resolution - 1` so the extreme rows and
/// columns land exactly on ±1.
pub fn normalized_coord(i: usize, resolution: usize) -> f32 {
    i as f32 / (resolution - 1) as f32 * 2.0 - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_layout() {
        let mut field = ScalarField::new_with(3, 0.0);
        field.set(2, 0, 1.0);
        field.set(0, 1, 2.0);
        assert_eq!(field.as_slice()[2], 1.0);
        assert_eq!(field.as_slice()[3], 2.0);
    }

    #[test]
    fn test_iter_coordinates() {
        let field = ScalarField::new_with(2, 0.5);
        let cells: Vec<_> = field.iter().collect();
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0], (0, 0, 0.5));
        assert_eq!(cells[3], (1, 1, 0.5));
    }

    #[test]
    fn test_normalized_coord_hits_extremes() {
        assert_eq!(normalized_coord(0, 64), -1.0);
        assert_eq!(normalized_coord(63, 64), 1.0);
        // Denominator is R-1, not R: midpoint of an odd grid is exactly 0.
        assert_eq!(normalized_coord(2, 5), 0.0);
    }

    #[test]
    fn test_min_max() {
        let field = ScalarField::from_vec(2, vec![0.25, 0.75, 0.5, 0.1]);
        assert_eq!(field.min_max(), (0.1, 0.75));
    }
}
