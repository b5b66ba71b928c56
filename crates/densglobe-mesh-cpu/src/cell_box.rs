use std::f32::consts::PI;

use densglobe_geom::{Mat4, Vec3, lerp};
use serde::Deserialize;

use crate::color::broadcast_into;

/// Six faces, two triangles each, no shared vertices.
pub const BOX_VERTEX_COUNT: usize = 36;

/// Sizing, placement and shading parameters for the per-cell boxes.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoxStyle {
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
    /// Globe radius the boxes stand on.
    pub radius: f32,
    /// Calibration added to the longitude rotation (radians).
    pub lon_offset: f32,
    /// Calibration added to the latitude rotation (radians).
    pub lat_offset: f32,
    /// Lightness at amount 0 and amount 1.
    pub lightness: [f32; 2],
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            width: 0.005,
            height: 0.005,
            min_depth: 0.01,
            max_depth: 0.5,
            radius: 1.0,
            lon_offset: PI * 0.5,
            lat_offset: PI * -0.135,
            lightness: [0.4, 1.0],
        }
    }
}

/// Unit cube centred on the origin as a flat triangle list, wound
/// counter-clockwise seen from outside.
pub fn unit_box() -> [Vec3; BOX_VERTEX_COUNT] {
    const X: Vec3 = Vec3::new(0.5, 0.0, 0.0);
    const Y: Vec3 = Vec3::new(0.0, 0.5, 0.0);
    const Z: Vec3 = Vec3::new(0.0, 0.0, 0.5);
    // (outward normal, u, v) with u x v == normal
    let faces = [
        (X, Y, Z),
        (-X, Z, Y),
        (Y, Z, X),
        (-Y, X, Z),
        (Z, X, Y),
        (-Z, Y, X),
    ];
    let mut out = [Vec3::ZERO; BOX_VERTEX_COUNT];
    for (f, (n, u, v)) in faces.into_iter().enumerate() {
        let a = n - u - v;
        let b = n + u - v;
        let c = n + u + v;
        let d = n - u + v;
        out[f * 6..f * 6 + 6].copy_from_slice(&[a, b, c, a, c, d]);
    }
    out
}

/// Transform placing the box of cell (`lat_index`, `lon_index`) on the globe.
///
/// Outermost first: turn about the polar (Y) axis to the longitude, tilt about
/// the equatorial (X) axis to the latitude, push out to the surface, scale to
/// the box footprint and extrusion, then lift by half a unit so the box grows
/// from its base instead of its centre.
pub fn cell_transform(
    style: &BoxStyle,
    lat_index: usize,
    lon_index: usize,
    xllcorner: f32,
    yllcorner: f32,
    amount: f32,
) -> Mat4 {
    let lon = (lon_index as f32 + xllcorner).to_radians() + style.lon_offset;
    let lat = (lat_index as f32 + yllcorner).to_radians() + style.lat_offset;
    let depth = lerp(style.min_depth, style.max_depth, amount);
    Mat4::chain(&[
        Mat4::rotation_y(lon),
        Mat4::rotation_x(lat),
        Mat4::translation(Vec3::new(0.0, 0.0, style.radius)),
        Mat4::scale(Vec3::new(style.width, style.height, depth)),
        Mat4::translation(Vec3::new(0.0, 0.0, 0.5)),
    ])
}

/// One box with its transform baked into the positions and a flat colour.
#[derive(Clone, Debug, PartialEq)]
pub struct CellBoxGeometry {
    /// xyz per vertex.
    pub positions: Vec<f32>,
    /// rgb per vertex.
    pub colors: Vec<u8>,
}

impl CellBoxGeometry {
    pub fn new(transform: &Mat4, rgb: [u8; 3]) -> Self {
        let mut positions = Vec::with_capacity(BOX_VERTEX_COUNT * 3);
        for p in unit_box() {
            positions.extend_from_slice(&transform.transform_point(p).to_array());
        }
        let mut colors = Vec::with_capacity(BOX_VERTEX_COUNT * 3);
        broadcast_into(rgb, BOX_VERTEX_COUNT, &mut colors);
        Self { positions, colors }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    fn tri_normal(t: &[Vec3]) -> Vec3 {
        let e1 = t[1] - t[0];
        let e2 = t[2] - t[0];
        Vec3::new(
            e1.y * e2.z - e1.z * e2.y,
            e1.z * e2.x - e1.x * e2.z,
            e1.x * e2.y - e1.y * e2.x,
        )
    }

    #[test]
    fn unit_box_faces_point_outward() {
        let verts = unit_box();
        for tri in verts.chunks(3) {
            let centroid = (tri[0] + tri[1] + tri[2]) * (1.0 / 3.0);
            assert!(tri_normal(tri).dot(centroid) > 0.0);
            for v in tri {
                assert!(v.x.abs() == 0.5 || v.y.abs() == 0.5 || v.z.abs() == 0.5);
                assert!(v.x.abs() <= 0.5 && v.y.abs() <= 0.5 && v.z.abs() <= 0.5);
            }
        }
    }

    #[test]
    fn box_base_sits_on_sphere_and_extrudes_outward() {
        let style = BoxStyle {
            lon_offset: 0.0,
            lat_offset: 0.0,
            ..BoxStyle::default()
        };
        let m = cell_transform(&style, 0, 0, 0.0, 0.0, 1.0);
        // base centre at radius, top centre at radius + max_depth along +Z
        assert!(close(m.transform_point(Vec3::new(0.0, 0.0, -0.5)), Vec3::new(0.0, 0.0, 1.0)));
        assert!(close(m.transform_point(Vec3::new(0.0, 0.0, 0.5)), Vec3::new(0.0, 0.0, 1.5)));
    }

    #[test]
    fn depth_interpolates_between_min_and_max() {
        let style = BoxStyle::default();
        for (amount, expect) in [(0.0, 0.01), (0.5, 0.255), (1.0, 0.5)] {
            let m = cell_transform(&style, 12, 40, -180.0, -60.0, amount);
            let base = m.transform_point(Vec3::new(0.0, 0.0, -0.5));
            let top = m.transform_point(Vec3::new(0.0, 0.0, 0.5));
            assert!((base.length() - 1.0).abs() < 1e-5);
            assert!(((top - base).length() - expect).abs() < 1e-5);
        }
    }

    #[test]
    fn longitude_turns_about_polar_axis() {
        let style = BoxStyle {
            lon_offset: 0.0,
            lat_offset: 0.0,
            ..BoxStyle::default()
        };
        let m = cell_transform(&style, 0, 90, 0.0, 0.0, 0.0);
        let base = m.transform_point(Vec3::new(0.0, 0.0, -0.5));
        assert!(close(base, Vec3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn geometry_has_flat_color() {
        let g = CellBoxGeometry::new(&Mat4::IDENTITY, [10, 20, 30]);
        assert_eq!(g.vertex_count(), BOX_VERTEX_COUNT);
        assert_eq!(g.colors.len(), BOX_VERTEX_COUNT * 3);
        assert!(g.colors.chunks(3).all(|c| c == [10, 20, 30]));
    }
}
