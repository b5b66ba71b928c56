use std::collections::HashSet;

use crate::error::MeshError;
use crate::merge::MergedGeometry;

/// Largest number of datasets the blending vertex stage can mix.
pub const MAX_MORPH_TARGETS: usize = 4;

/// Alternate positions for the base mesh, keyed by name.
#[derive(Clone, Debug, PartialEq)]
pub struct MorphTarget {
    pub name: String,
    pub positions: Vec<f32>,
}

/// Per-vertex colours belonging to the morph target of the same name.
/// Kept apart from the targets because colour is blended by hand in the
/// vertex stage rather than by position morphing.
#[derive(Clone, Debug, PartialEq)]
pub struct MorphColorSet {
    pub target: String,
    pub colors: Vec<u8>,
}

/// Which colour set feeds which blend slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorBinding {
    pub slot: usize,
    pub color_set: usize,
}

#[derive(Clone, Debug)]
pub struct MorphMesh {
    base: MergedGeometry,
    targets: Vec<MorphTarget>,
    colors: Vec<MorphColorSet>,
}

impl MorphMesh {
    #[inline]
    pub fn base(&self) -> &MergedGeometry {
        &self.base
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.base.vertex_count()
    }

    /// Position targets in blend-slot order. Slot 0 repeats the base positions.
    #[inline]
    pub fn targets(&self) -> &[MorphTarget] {
        &self.targets
    }

    #[inline]
    pub fn color_sets(&self) -> &[MorphColorSet] {
        &self.colors
    }

    pub fn color_set_index(&self, target: &str) -> Option<usize> {
        self.colors.iter().position(|c| c.target == target)
    }

    /// Pairs every position target with its colour set by name; slot order
    /// and colour-set order are not assumed to match.
    pub fn color_bindings(&self) -> Vec<ColorBinding> {
        self.targets
            .iter()
            .enumerate()
            .filter_map(|(slot, t)| {
                self.color_set_index(&t.name)
                    .map(|color_set| ColorBinding { slot, color_set })
            })
            .collect()
    }
}

/// Builds the morph mesh. The first geometry is the base; every geometry
/// (base included) becomes a named position target and a colour set.
pub fn assemble_morph_mesh(
    geometries: Vec<(String, MergedGeometry)>,
) -> Result<MorphMesh, MeshError> {
    let Some((_, first)) = geometries.first() else {
        return Err(MeshError::NoGeometry);
    };
    if geometries.len() > MAX_MORPH_TARGETS {
        return Err(MeshError::TooManyTargets {
            count: geometries.len(),
            max: MAX_MORPH_TARGETS,
        });
    }
    let expected = first.vertex_count();
    let base = first.clone();
    {
        let mut seen = HashSet::new();
        for (name, g) in &geometries {
            if !seen.insert(name.as_str()) {
                return Err(MeshError::DuplicateTarget(name.clone()));
            }
            if g.vertex_count() != expected || g.colors.len() != g.positions.len() {
                return Err(MeshError::TopologyMismatch {
                    name: name.clone(),
                    expected,
                    found: g.vertex_count(),
                });
            }
        }
    }

    let mut targets = Vec::with_capacity(geometries.len());
    let mut colors = Vec::with_capacity(geometries.len());
    for (name, g) in geometries {
        colors.push(MorphColorSet {
            target: name.clone(),
            colors: g.colors,
        });
        targets.push(MorphTarget {
            name,
            positions: g.positions,
        });
    }
    Ok(MorphMesh {
        base,
        targets,
        colors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geom(verts: usize, tag: u8) -> MergedGeometry {
        MergedGeometry {
            positions: vec![tag as f32; verts * 3],
            colors: vec![tag; verts * 3],
        }
    }

    #[test]
    fn registers_every_geometry_as_target_and_color_set() {
        let mesh = assemble_morph_mesh(vec![
            ("a".into(), geom(3, 1)),
            ("b".into(), geom(3, 2)),
            ("c".into(), geom(3, 3)),
        ])
        .unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.targets().len(), 3);
        assert_eq!(mesh.targets()[0].positions, mesh.base().positions);
        assert_eq!(mesh.color_set_index("c"), Some(2));
        assert_eq!(mesh.color_sets()[1].colors[0], 2);
        let b = mesh.color_bindings();
        assert_eq!(
            b,
            vec![
                ColorBinding { slot: 0, color_set: 0 },
                ColorBinding { slot: 1, color_set: 1 },
                ColorBinding { slot: 2, color_set: 2 },
            ]
        );
    }

    #[test]
    fn bindings_follow_names_not_positions() {
        let mut mesh =
            assemble_morph_mesh(vec![("a".into(), geom(1, 1)), ("b".into(), geom(1, 2))]).unwrap();
        mesh.colors.reverse();
        assert_eq!(
            mesh.color_bindings(),
            vec![
                ColorBinding { slot: 0, color_set: 1 },
                ColorBinding { slot: 1, color_set: 0 },
            ]
        );
    }

    #[test]
    fn rejects_vertex_count_mismatch() {
        let err = assemble_morph_mesh(vec![("a".into(), geom(2, 1)), ("b".into(), geom(3, 1))])
            .unwrap_err();
        assert!(matches!(
            err,
            MeshError::TopologyMismatch {
                expected: 2,
                found: 3,
                ..
            }
        ));
    }

    #[test]
    fn rejects_too_many_targets_and_empty_input() {
        let many = (0..5).map(|i| (format!("t{i}"), geom(1, 0))).collect();
        assert!(matches!(
            assemble_morph_mesh(many),
            Err(MeshError::TooManyTargets { count: 5, max: 4 })
        ));
        assert!(matches!(assemble_morph_mesh(vec![]), Err(MeshError::NoGeometry)));
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = assemble_morph_mesh(vec![("a".into(), geom(1, 1)), ("a".into(), geom(1, 2))])
            .unwrap_err();
        assert!(matches!(err, MeshError::DuplicateTarget(ref n) if n == "a"));
    }
}
