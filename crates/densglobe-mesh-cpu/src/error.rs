#[derive(thiserror::Error, Debug)]
pub enum MeshError {
    #[error(
        "incompatible datasets: {name:?} is {}x{}, expected {}x{}",
        found.0, found.1, expected.0, expected.1
    )]
    Incompatible {
        name: String,
        expected: (usize, usize),
        found: (usize, usize),
    },
    #[error("morph target {name:?} has {found} vertices, base has {expected}")]
    TopologyMismatch {
        name: String,
        expected: usize,
        found: usize,
    },
    #[error("{count} morph targets requested, at most {max} are supported")]
    TooManyTargets { count: usize, max: usize },
    #[error("duplicate morph target name {0:?}")]
    DuplicateTarget(String),
    #[error("no geometry to assemble")]
    NoGeometry,
}
