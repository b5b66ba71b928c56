use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Deserialize;

use crate::descriptor::{DatasetDescriptor, DatasetOrigin, HueRange};
use crate::diff::{CompareOp, diff_datasets, ensure_same_shape};
use crate::error::GridError;
use crate::parse::parse_grid;

/// A dataset read from a grid file.
#[derive(Clone, Debug, Deserialize)]
pub struct BaseSpec {
    pub name: String,
    pub hue_range: HueRange,
    pub path: PathBuf,
}

/// A dataset computed cell-wise from two earlier datasets.
#[derive(Clone, Debug, Deserialize)]
pub struct DerivedSpec {
    pub name: String,
    pub hue_range: HueRange,
    pub base: String,
    pub other: String,
    #[serde(default = "default_op")]
    pub op: CompareOp,
}

fn default_op() -> CompareOp {
    CompareOp::Excess
}

pub fn load_base(spec: &BaseSpec, root: &Path) -> Result<DatasetDescriptor, GridError> {
    let path = if spec.path.is_absolute() {
        spec.path.clone()
    } else {
        root.join(&spec.path)
    };
    log::info!("loading dataset {:?} from {}", spec.name, path.display());
    let text = fs::read_to_string(&path).map_err(|source| {
        GridError::Io {
            path: path.clone(),
            source,
        }
        .in_dataset(&spec.name)
    })?;
    let dataset = parse_grid(&text).map_err(|e| e.in_dataset(&spec.name))?;
    if dataset.is_empty() {
        return Err(GridError::Empty.in_dataset(&spec.name));
    }
    let range = dataset.range();
    log::info!(
        "dataset {:?}: {}x{} cells, {} missing, range {:?}",
        spec.name,
        dataset.rows(),
        dataset.cols(),
        dataset.missing_count(),
        range.map(|r| (r.min, r.max))
    );
    Ok(DatasetDescriptor {
        name: spec.name.clone(),
        hue_range: spec.hue_range,
        dataset,
        origin: DatasetOrigin::Loaded { path },
    })
}

/// Loads every base dataset concurrently, then computes the derived ones in
/// declaration order. Any failure aborts the whole load; no partial set is
/// returned. All resulting datasets are checked to share one shape.
pub fn load_all(
    bases: &[BaseSpec],
    derived: &[DerivedSpec],
    root: &Path,
) -> Result<Vec<DatasetDescriptor>, GridError> {
    let mut out: Vec<DatasetDescriptor> = bases
        .par_iter()
        .map(|spec| load_base(spec, root))
        .collect::<Result<Vec<_>, _>>()?;

    if let Some((first, rest)) = out.split_first() {
        for d in rest {
            ensure_same_shape(&first.dataset, &d.dataset).map_err(|e| e.in_dataset(&d.name))?;
        }
    }

    for spec in derived {
        let find = |name: &str| {
            out.iter()
                .find(|d| d.name == name)
                .ok_or_else(|| GridError::UnknownDataset {
                    name: name.to_string(),
                }
                .in_dataset(&spec.name))
        };
        let base = find(&spec.base)?;
        let other = find(&spec.other)?;
        let op = spec.op;
        let dataset = diff_datasets(&base.dataset, &other.dataset, |a, b| op.apply(a, b))
            .map_err(|e| e.in_dataset(&spec.name))?;
        log::info!(
            "derived dataset {:?} = {:?}({:?}, {:?}), range {:?}",
            spec.name,
            op,
            spec.base,
            spec.other,
            dataset.range().map(|r| (r.min, r.max))
        );
        out.push(DatasetDescriptor {
            name: spec.name.clone(),
            hue_range: spec.hue_range,
            dataset,
            origin: DatasetOrigin::Derived {
                base: spec.base.clone(),
                other: spec.other.clone(),
                op,
            },
        });
    }
    Ok(out)
}
