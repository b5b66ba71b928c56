use serde::Deserialize;

use crate::dataset::GridDataset;
use crate::error::GridError;

/// Binary comparisons available to derived datasets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareOp {
    /// `max(a - b, 0)`: how far `a` exceeds `b`.
    Excess,
    /// Signed `a - b`.
    Difference,
}

impl CompareOp {
    #[inline]
    pub fn apply(self, a: f32, b: f32) -> f32 {
        match self {
            CompareOp::Excess => (a - b).max(0.0),
            CompareOp::Difference => a - b,
        }
    }
}

pub fn ensure_same_shape(a: &GridDataset, b: &GridDataset) -> Result<(), GridError> {
    if a.shape() != b.shape() {
        return Err(GridError::Incompatible {
            left: a.shape(),
            right: b.shape(),
        });
    }
    Ok(())
}

/// Cell-wise `compare(base, other)`. A cell missing in either input stays
/// missing; min/max cover defined outputs only. Metadata is taken from `base`.
pub fn diff_datasets<F>(
    base: &GridDataset,
    other: &GridDataset,
    compare: F,
) -> Result<GridDataset, GridError>
where
    F: Fn(f32, f32) -> f32,
{
    ensure_same_shape(base, other)?;
    let cells = base
        .cells()
        .iter()
        .zip(other.cells())
        .map(|(a, b)| match (a, b) {
            (Some(a), Some(b)) => Some(compare(*a, *b)),
            _ => None,
        })
        .collect();
    Ok(GridDataset::from_cells(
        base.meta.clone(),
        base.rows(),
        base.cols(),
        cells,
    ))
}
