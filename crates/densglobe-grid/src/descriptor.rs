use std::path::PathBuf;

use serde::Deserialize;

use crate::dataset::GridDataset;
use crate::diff::CompareOp;

/// Two hues (in turns, may exceed 1 to wrap) interpolated by normalised amount.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(from = "[f32; 2]")]
pub struct HueRange {
    pub start: f32,
    pub end: f32,
}

impl HueRange {
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn at(&self, t: f32) -> f32 {
        self.start + (self.end - self.start) * t
    }
}

impl From<[f32; 2]> for HueRange {
    fn from(v: [f32; 2]) -> Self {
        Self::new(v[0], v[1])
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DatasetOrigin {
    Loaded {
        path: PathBuf,
    },
    Derived {
        base: String,
        other: String,
        op: CompareOp,
    },
}

/// One displayable dataset.
#[derive(Clone, Debug)]
pub struct DatasetDescriptor {
    pub name: String,
    pub hue_range: HueRange,
    pub dataset: GridDataset,
    pub origin: DatasetOrigin,
}
