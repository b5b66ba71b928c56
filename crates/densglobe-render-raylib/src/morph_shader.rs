use std::ffi::CString;

use densglobe_mesh_cpu::MAX_MORPH_TARGETS;
use raylib::prelude::*;

use crate::shader_template::{self, INFLUENCES_UNIFORM, MorphShaderTemplate};

/// Compiled blending shader plus the uniform and attribute locations the
/// morph mesh binds against.
pub struct MorphShader {
    pub shader: raylib::shaders::WeakShader,
    pub loc_influences: i32,
    /// Attribute location of `morphTarget{slot}`.
    pub target_locs: Vec<i32>,
    /// Attribute location of `morphColor{slot}`.
    pub color_locs: Vec<i32>,
}

impl MorphShader {
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread, target_count: usize) -> Option<Self> {
        let template = match MorphShaderTemplate::new(target_count) {
            Ok(t) => t,
            Err(e) => {
                log::error!("morph shader: {}", e);
                return None;
            }
        };
        let vs = match template.vertex_source() {
            Ok(src) => src,
            Err(e) => {
                log::error!("morph shader: {}", e);
                return None;
            }
        };
        let shader_strong =
            rl.load_shader_from_memory(thread, Some(&vs), Some(shader_template::FRAGMENT));
        let shader = unsafe { shader_strong.make_weak() };
        // raylib hands back its default shader when compilation or linking fails.
        let raw: &raylib::ffi::Shader = shader.as_ref();
        if raw.id == unsafe { raylib::ffi::rlGetShaderIdDefault() } {
            log::error!("morph shader failed to compile ({} targets)", target_count);
            return None;
        }
        let loc_influences = shader.get_shader_location(INFLUENCES_UNIFORM);
        let target_locs: Vec<i32> = (0..target_count)
            .map(|i| attribute_location(&shader, &shader_template::position_attribute(i)))
            .collect();
        let color_locs: Vec<i32> = (0..target_count)
            .map(|i| attribute_location(&shader, &shader_template::color_attribute(i)))
            .collect();
        if target_locs.iter().chain(color_locs.iter()).any(|&l| l < 0) {
            log::warn!(
                "morph shader: unresolved attributes targets={:?} colors={:?}",
                target_locs,
                color_locs
            );
        }
        log::info!(
            "morph shader compiled: {} targets, influences loc {}",
            target_count,
            loc_influences
        );
        Some(Self {
            shader,
            loc_influences,
            target_locs,
            color_locs,
        })
    }

    #[inline]
    pub fn target_count(&self) -> usize {
        self.target_locs.len()
    }

    /// Uploads the weights, zero-padding the uniform array to its full size.
    pub fn set_influences(&mut self, weights: &[f32]) {
        let mut padded = [0.0f32; MAX_MORPH_TARGETS];
        for (dst, w) in padded.iter_mut().zip(weights) {
            *dst = *w;
        }
        if self.loc_influences >= 0 {
            self.shader
                .set_shader_value_v(self.loc_influences, &padded[..]);
        }
    }
}

fn attribute_location(shader: &raylib::shaders::WeakShader, name: &str) -> i32 {
    let Ok(cname) = CString::new(name) else {
        return -1;
    };
    let raw: &raylib::ffi::Shader = shader.as_ref();
    unsafe { raylib::ffi::GetShaderLocationAttrib(*raw, cname.as_ptr()) }
}
