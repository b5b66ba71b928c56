//! Grid datasets: text parsing, derived comparison grids, and concurrent loading.
#![forbid(unsafe_code)]

pub mod dataset;
pub mod descriptor;
pub mod diff;
pub mod error;
pub mod load;
pub mod parse;

pub use dataset::{GridDataset, GridMetadata, ValueRange};
pub use descriptor::{DatasetDescriptor, DatasetOrigin, HueRange};
pub use diff::{CompareOp, diff_datasets, ensure_same_shape};
pub use error::GridError;
pub use load::{BaseSpec, DerivedSpec, load_all, load_base};
pub use parse::parse_grid;
