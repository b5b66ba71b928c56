use densglobe_mesh_cpu::MorphMesh;
use densglobe_runtime::MorphBinding;
use raylib::prelude::*;

use crate::morph_shader::MorphShader;

const RL_UNSIGNED_BYTE: i32 = 0x1401;
const RL_FLOAT: i32 = 0x1406;

/// Morph mesh resident on the GPU. Base positions live in the raylib mesh;
/// every position target and colour set is an extra vertex buffer attached
/// to the mesh's vertex array.
pub struct GpuMorphMesh {
    pub model: raylib::core::models::Model,
    shader: MorphShader,
    vao: u32,
    target_names: Vec<String>,
    target_vbos: Vec<u32>,
    color_names: Vec<String>,
    color_vbos: Vec<u32>,
    /// Colour set currently feeding each blend slot.
    bound_colors: Vec<Option<usize>>,
    vertex_count: usize,
}

impl GpuMorphMesh {
    pub fn upload(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        cpu: &MorphMesh,
        shader: MorphShader,
    ) -> Option<Self> {
        let base = cpu.base();
        let v_count = base.vertex_count();
        if v_count == 0 {
            log::warn!("morph mesh has no vertices; nothing to upload");
            return None;
        }
        if shader.target_count() != cpu.targets().len() {
            log::error!(
                "shader blends {} targets but mesh has {}",
                shader.target_count(),
                cpu.targets().len()
            );
            return None;
        }
        let mut raw: raylib::ffi::Mesh = unsafe { std::mem::zeroed() };
        raw.vertexCount = v_count as i32;
        raw.triangleCount = (v_count / 3) as i32;
        unsafe {
            let vbytes = (v_count * 3 * std::mem::size_of::<f32>()) as u32;
            raw.vertices = raylib::ffi::MemAlloc(vbytes) as *mut f32;
            std::ptr::copy_nonoverlapping(base.positions.as_ptr(), raw.vertices, v_count * 3);
        }
        let mut mesh = unsafe { raylib::core::models::Mesh::from_raw(raw) };
        unsafe {
            mesh.upload(false);
        }
        let mut model = rl
            .load_model_from_mesh(thread, unsafe { mesh.make_weak() })
            .ok()?;
        if let Some(mat) = model.materials_mut().get_mut(0) {
            let dest = mat.shader_mut();
            let dest_ptr: *mut raylib::ffi::Shader = dest.as_mut();
            let src_ptr: *const raylib::ffi::Shader = shader.shader.as_ref();
            unsafe { std::ptr::copy_nonoverlapping(src_ptr, dest_ptr, 1) };
        }
        let vao = model.meshes().first().map(|m| m.vaoId)?;

        let mut target_vbos = Vec::with_capacity(cpu.targets().len());
        for (slot, t) in cpu.targets().iter().enumerate() {
            let vbo = unsafe { load_vbo(&t.positions) };
            target_vbos.push(vbo);
            let loc = shader.target_locs[slot];
            if loc >= 0 {
                unsafe { attach(vao, vbo, loc as u32, 3, RL_FLOAT, false) };
            }
        }
        let mut color_vbos = Vec::with_capacity(cpu.color_sets().len());
        for set in cpu.color_sets() {
            color_vbos.push(unsafe { load_vbo(&set.colors) });
        }

        let mut gpu = Self {
            model,
            shader,
            vao,
            target_names: cpu.targets().iter().map(|t| t.name.clone()).collect(),
            target_vbos,
            color_names: cpu.color_sets().iter().map(|c| c.target.clone()).collect(),
            color_vbos,
            bound_colors: vec![None; cpu.targets().len()],
            vertex_count: v_count,
        };
        for b in cpu.color_bindings() {
            gpu.bind_color(b.slot, b.color_set);
        }
        log::info!(
            "uploaded morph mesh: {} verts, {} targets, {} colour sets",
            v_count,
            gpu.target_vbos.len(),
            gpu.color_vbos.len()
        );
        Some(gpu)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn draw(&self, d3: &mut impl RaylibDraw3D) {
        d3.draw_model(&self.model, Vector3::zero(), 1.0, Color::WHITE);
    }
}

impl MorphBinding for GpuMorphMesh {
    fn target_count(&self) -> usize {
        self.target_names.len()
    }

    fn target_name(&self, slot: usize) -> Option<&str> {
        self.target_names.get(slot).map(String::as_str)
    }

    fn color_set_index(&self, target: &str) -> Option<usize> {
        self.color_names.iter().position(|n| n == target)
    }

    fn bind_color(&mut self, slot: usize, color_set: usize) {
        if self.bound_colors.get(slot).copied().flatten() == Some(color_set) {
            return;
        }
        let (Some(&loc), Some(&vbo)) = (
            self.shader.color_locs.get(slot),
            self.color_vbos.get(color_set),
        ) else {
            return;
        };
        if loc >= 0 {
            unsafe { attach(self.vao, vbo, loc as u32, 3, RL_UNSIGNED_BYTE, true) };
        }
        self.bound_colors[slot] = Some(color_set);
    }

    fn set_influences(&mut self, weights: &[f32]) {
        self.shader.set_influences(weights);
    }
}

impl Drop for GpuMorphMesh {
    fn drop(&mut self) {
        unsafe {
            for &vbo in self.target_vbos.iter().chain(self.color_vbos.iter()) {
                raylib::ffi::rlUnloadVertexBuffer(vbo);
            }
            let raw: &raylib::ffi::Shader = self.shader.shader.as_ref();
            raylib::ffi::UnloadShader(*raw);
        }
    }
}

unsafe fn load_vbo<T>(data: &[T]) -> u32 {
    let bytes = std::mem::size_of_val(data) as i32;
    unsafe { raylib::ffi::rlLoadVertexBuffer(data.as_ptr() as *const std::ffi::c_void, bytes, false) }
}

/// Points attribute `loc` of `vao` at `vbo`, tightly packed.
unsafe fn attach(vao: u32, vbo: u32, loc: u32, comps: i32, ty: i32, normalized: bool) {
    unsafe {
        raylib::ffi::rlEnableVertexArray(vao);
        raylib::ffi::rlEnableVertexBuffer(vbo);
        raylib::ffi::rlSetVertexAttribute(loc, comps, ty, normalized, 0, 0);
        raylib::ffi::rlEnableVertexAttribute(loc);
        raylib::ffi::rlDisableVertexBuffer();
        raylib::ffi::rlDisableVertexArray();
    }
}
