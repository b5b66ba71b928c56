use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum GridError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed dataset: line {line}: token {token:?} {reason}")]
    Malformed {
        line: usize,
        token: String,
        reason: &'static str,
    },
    #[error("malformed dataset: line {line}: row has {found} columns, expected {expected}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error(
        "incompatible datasets: {}x{} vs {}x{}",
        left.0, left.1, right.0, right.1
    )]
    Incompatible {
        left: (usize, usize),
        right: (usize, usize),
    },
    #[error("dataset has no data rows")]
    Empty,
    #[error("unknown dataset {name:?}")]
    UnknownDataset { name: String },
    #[error("dataset {name:?}: {source}")]
    Context {
        name: String,
        #[source]
        source: Box<GridError>,
    },
}

impl GridError {
    pub fn in_dataset(self, name: &str) -> GridError {
        GridError::Context {
            name: name.to_string(),
            source: Box::new(self),
        }
    }

    /// Innermost error, skipping dataset context wrappers.
    pub fn root(&self) -> &GridError {
        match self {
            GridError::Context { source, .. } => source.root(),
            other => other,
        }
    }
}
