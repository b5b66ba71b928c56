use densglobe_grid::DatasetDescriptor;

use crate::cell_box::{BoxStyle, CellBoxGeometry, cell_transform};
use crate::color::amount_color;
use crate::error::MeshError;

/// True if the cell is missing in any of `all`. Such cells are dropped from
/// every dataset so all merged buffers keep the same vertex layout.
#[inline]
pub fn missing_in_any(all: &[DatasetDescriptor], row: usize, col: usize) -> bool {
    all.iter().any(|d| d.dataset.is_missing(row, col))
}

/// One box per cell of `target` that is defined in every dataset of `all`,
/// in row-major order.
pub fn build_box_field(
    target: &DatasetDescriptor,
    all: &[DatasetDescriptor],
    style: &BoxStyle,
) -> Result<Vec<CellBoxGeometry>, MeshError> {
    let grid = &target.dataset;
    let expected = grid.shape();
    if let Some(other) = all.iter().find(|d| d.dataset.shape() != expected) {
        return Err(MeshError::Incompatible {
            name: other.name.clone(),
            expected,
            found: other.dataset.shape(),
        });
    }
    let Some(range) = grid.range() else {
        log::warn!("dataset {:?} has no defined cells", target.name);
        return Ok(Vec::new());
    };
    if range.is_degenerate() {
        log::warn!(
            "dataset {:?} is uniform ({}); every box gets amount 0",
            target.name,
            range.min
        );
    }

    let (xll, yll) = (grid.meta.xllcorner, grid.meta.yllcorner);
    let mut boxes = Vec::new();
    for lat in 0..grid.rows() {
        for (lon, cell) in grid.row(lat).iter().enumerate() {
            let Some(value) = *cell else { continue };
            if missing_in_any(all, lat, lon) {
                continue;
            }
            let amount = range.normalize(value);
            let transform = cell_transform(style, lat, lon, xll, yll, amount);
            let rgb = amount_color(target.hue_range, style.lightness, amount);
            boxes.push(CellBoxGeometry::new(&transform, rgb));
        }
    }
    Ok(boxes)
}
