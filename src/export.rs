//! PNG previews of generated fields.
//!
//! CLI-side glue: the library itself never touches the filesystem. The
//! grayscale heightmap is the classic preview; the shore composite tints
//! the beach and cliff masks over the terrain for a quick sanity check.

use image::{ImageBuffer, Rgb, RgbImage};

use crate::grid::ScalarField;

/// Export a field as a grayscale PNG. Values are expected in [0, 1].
pub fn export_grayscale(field: &ScalarField, path: &str) -> Result<(), image::ImageError> {
    let r = field.resolution() as u32;
    let mut img: RgbImage = ImageBuffer::new(r, r);

    for (x, y, val) in field.iter() {
        let v = (val.clamp(0.0, 1.0) * 255.0) as u8;
        img.put_pixel(x as u32, y as u32, Rgb([v, v, v]));
    }

    img.save(path)
}

/// Export a composite preview: water below `water_level`, terrain shaded
/// by height, sand tinted by the beach mask, rock darkened by the cliff
/// mask.
pub fn export_shore_composite(
    height: &ScalarField,
    beach: &ScalarField,
    cliff: &ScalarField,
    water_level: f32,
    path: &str,
) -> Result<(), image::ImageError> {
    let r = height.resolution() as u32;
    let mut img: RgbImage = ImageBuffer::new(r, r);

    for (x, y, h) in height.iter() {
        let beach = beach.get(x, y);
        let cliff = cliff.get(x, y);

        let color = if h <= water_level {
            let depth = (water_level - h) / water_level.max(1e-6);
            shade([30, 90, 160], 1.0 - depth * 0.5)
        } else {
            let grass = shade([70, 140, 60], 0.6 + h * 0.4);
            let sand = [210, 190, 140];
            let rock = [95, 90, 85];
            let mut c = lerp_color(grass, sand, beach);
            c = lerp_color(c, rock, cliff);
            c
        };

        img.put_pixel(x as u32, y as u32, Rgb(color));
    }

    img.save(path)
}

fn shade(color: [u8; 3], factor: f32) -> [u8; 3] {
    let f = factor.clamp(0.0, 1.0);
    [
        (color[0] as f32 * f) as u8,
        (color[1] as f32 * f) as u8,
        (color[2] as f32 * f) as u8,
    ]
}

fn lerp_color(a: [u8; 3], b: [u8; 3], t: f32) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    [
        (a[0] as f32 + (b[0] as f32 - a[0] as f32) * t) as u8,
        (a[1] as f32 + (b[1] as f32 - a[1] as f32) * t) as u8,
        (a[2] as f32 + (b[2] as f32 - a[2] as f32) * t) as u8,
    ]
}
