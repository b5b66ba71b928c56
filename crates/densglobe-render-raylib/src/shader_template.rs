//! Morph-blending vertex stage built by substituting fixed markers in a
//! template, so the number of blended targets is a parameter rather than
//! hand-written GLSL.

use densglobe_mesh_cpu::MAX_MORPH_TARGETS;

pub const INFLUENCES_UNIFORM: &str = "morphTargetInfluences";

pub const MARKER_TARGET_PARS: &str = "#include <morphtarget_pars_vertex>";
pub const MARKER_MORPH_NORMAL: &str = "#include <morphnormal_vertex>";
pub const MARKER_TARGET_VERTEX: &str = "#include <morphtarget_vertex>";
pub const MARKER_COLOR_PARS: &str = "#include <color_pars_vertex>";
pub const MARKER_COLOR_VERTEX: &str = "#include <color_vertex>";

/// Base vertex stage; every marker is replaced before compiling.
pub const BASE_VERTEX: &str = r#"#version 330

in vec3 vertexPosition;
uniform mat4 mvp;

#include <morphtarget_pars_vertex>
#include <color_pars_vertex>

void main()
{
    vec3 transformed = vertexPosition;
#include <morphnormal_vertex>
#include <morphtarget_vertex>
#include <color_vertex>
    gl_Position = mvp*vec4(transformed, 1.0);
}
"#;

pub const FRAGMENT: &str = r#"#version 330

in vec3 vColor;
out vec4 finalColor;

void main()
{
    finalColor = vec4(vColor, 1.0);
}
"#;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ShaderPatchError {
    #[error("shader source has no {0:?} marker")]
    MissingMarker(&'static str),
    #[error("{count} morph targets requested, the blend stage holds at most {max}")]
    TooManyTargets { count: usize, max: usize },
}

#[inline]
pub fn position_attribute(slot: usize) -> String {
    format!("morphTarget{slot}")
}

#[inline]
pub fn color_attribute(slot: usize) -> String {
    format!("morphColor{slot}")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MorphShaderTemplate {
    target_count: usize,
}

impl MorphShaderTemplate {
    pub fn new(target_count: usize) -> Result<Self, ShaderPatchError> {
        if target_count > MAX_MORPH_TARGETS {
            return Err(ShaderPatchError::TooManyTargets {
                count: target_count,
                max: MAX_MORPH_TARGETS,
            });
        }
        Ok(Self { target_count })
    }

    #[inline]
    pub fn target_count(&self) -> usize {
        self.target_count
    }

    /// Weight array sized to the maximum plus one position input per target.
    fn target_pars(&self) -> String {
        let mut s = format!("uniform float {INFLUENCES_UNIFORM}[{MAX_MORPH_TARGETS}];\n");
        for i in 0..self.target_count {
            s.push_str(&format!("in vec3 {};\n", position_attribute(i)));
        }
        s
    }

    fn target_vertex(&self) -> String {
        (0..self.target_count)
            .map(|i| {
                format!(
                    "    transformed += ({} - vertexPosition)*{INFLUENCES_UNIFORM}[{i}];\n",
                    position_attribute(i)
                )
            })
            .collect()
    }

    fn color_pars(&self) -> String {
        let mut s = String::from("out vec3 vColor;\n");
        for i in 0..self.target_count {
            s.push_str(&format!("in vec3 {};\n", color_attribute(i)));
        }
        s
    }

    fn color_vertex(&self) -> String {
        if self.target_count == 0 {
            return "    vColor = vec3(1.0);\n".to_string();
        }
        let terms: Vec<String> = (0..self.target_count)
            .map(|i| format!("{}*{INFLUENCES_UNIFORM}[{i}]", color_attribute(i)))
            .collect();
        format!("    vColor = {};\n", terms.join(" + "))
    }

    /// Replaces the five markers in `source`. Normal morphing is dropped
    /// since the boxes are drawn unlit.
    pub fn patch(&self, source: &str) -> Result<String, ShaderPatchError> {
        let replacements = [
            (MARKER_TARGET_PARS, self.target_pars()),
            (MARKER_MORPH_NORMAL, String::new()),
            (MARKER_TARGET_VERTEX, self.target_vertex()),
            (MARKER_COLOR_PARS, self.color_pars()),
            (MARKER_COLOR_VERTEX, self.color_vertex()),
        ];
        let mut out = source.to_string();
        for (marker, code) in replacements {
            if !out.contains(marker) {
                return Err(ShaderPatchError::MissingMarker(marker));
            }
            out = out.replacen(marker, &code, 1);
        }
        Ok(out)
    }

    pub fn vertex_source(&self) -> Result<String, ShaderPatchError> {
        self.patch(BASE_VERTEX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_targets_blend_positions_and_colors() {
        let vs = MorphShaderTemplate::new(4).unwrap().vertex_source().unwrap();
        assert!(vs.contains("uniform float morphTargetInfluences[4];"));
        for i in 0..4 {
            assert!(vs.contains(&format!("in vec3 morphTarget{i};")));
            assert!(vs.contains(&format!("in vec3 morphColor{i};")));
            assert!(vs.contains(&format!(
                "transformed += (morphTarget{i} - vertexPosition)*morphTargetInfluences[{i}];"
            )));
        }
        assert!(vs.contains(
            "vColor = morphColor0*morphTargetInfluences[0] + morphColor1*morphTargetInfluences[1] \
             + morphColor2*morphTargetInfluences[2] + morphColor3*morphTargetInfluences[3];"
        ));
        assert!(!vs.contains("#include"));
    }

    #[test]
    fn fewer_targets_keep_full_weight_array() {
        let vs = MorphShaderTemplate::new(2).unwrap().vertex_source().unwrap();
        assert!(vs.contains("morphTargetInfluences[4]"));
        assert!(vs.contains("morphTarget1"));
        assert!(!vs.contains("morphTarget2"));
        assert!(!vs.contains("morphColor2"));
    }

    #[test]
    fn rejects_more_targets_than_supported() {
        assert_eq!(
            MorphShaderTemplate::new(5),
            Err(ShaderPatchError::TooManyTargets { count: 5, max: 4 })
        );
    }

    #[test]
    fn missing_marker_is_an_error() {
        let t = MorphShaderTemplate::new(1).unwrap();
        let src = BASE_VERTEX.replace(MARKER_COLOR_VERTEX, "");
        assert_eq!(
            t.patch(&src),
            Err(ShaderPatchError::MissingMarker(MARKER_COLOR_VERTEX))
        );
    }
}
