//! CPU geometry for the density globe: per-cell boxes with baked transforms,
//! merged per-dataset buffers, and the morph-target mesh built from them.
#![forbid(unsafe_code)]

pub mod box_field;
pub mod cell_box;
pub mod color;
pub mod error;
pub mod merge;
pub mod morph;

pub use box_field::{build_box_field, missing_in_any};
pub use cell_box::{BOX_VERTEX_COUNT, BoxStyle, CellBoxGeometry, cell_transform, unit_box};
pub use color::{amount_color, broadcast_into, hsl_to_rgb, rgb_to_u8};
pub use error::MeshError;
pub use merge::{MergedGeometry, merge_geometries};
pub use morph::{ColorBinding, MAX_MORPH_TARGETS, MorphColorSet, MorphMesh, MorphTarget, assemble_morph_mesh};

use densglobe_grid::DatasetDescriptor;

/// Runs the full geometry pipeline: one box field per dataset, merged, then
/// assembled into a morph mesh with dataset 0 as the base.
pub fn build_globe_mesh(
    datasets: &[DatasetDescriptor],
    style: &BoxStyle,
) -> Result<MorphMesh, MeshError> {
    let mut merged = Vec::with_capacity(datasets.len());
    for desc in datasets {
        let boxes = build_box_field(desc, datasets, style)?;
        log::debug!("dataset {:?}: {} boxes", desc.name, boxes.len());
        merged.push((desc.name.clone(), merge_geometries(&boxes)));
    }
    let mesh = assemble_morph_mesh(merged)?;
    log::info!(
        "morph mesh: {} targets, {} vertices ({} boxes)",
        mesh.targets().len(),
        mesh.vertex_count(),
        mesh.vertex_count() / BOX_VERTEX_COUNT
    );
    Ok(mesh)
}
