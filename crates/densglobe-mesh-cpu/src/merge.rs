use crate::cell_box::CellBoxGeometry;

/// All boxes of one dataset in a single position/colour buffer pair.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MergedGeometry {
    pub positions: Vec<f32>,
    pub colors: Vec<u8>,
}

impl MergedGeometry {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }
}

/// Concatenates boxes in order; vertices are never shared or deduplicated.
pub fn merge_geometries(parts: &[CellBoxGeometry]) -> MergedGeometry {
    let verts: usize = parts.iter().map(CellBoxGeometry::vertex_count).sum();
    let mut out = MergedGeometry {
        positions: Vec::with_capacity(verts * 3),
        colors: Vec::with_capacity(verts * 3),
    };
    for part in parts {
        out.positions.extend_from_slice(&part.positions);
        out.colors.extend_from_slice(&part.colors);
    }
    out
}
