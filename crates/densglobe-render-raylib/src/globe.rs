use std::path::Path;

use raylib::prelude::*;

/// Backdrop sphere under the boxes. Textured when the image loads, a flat
/// dark sphere otherwise.
pub struct GlobeModel {
    radius: f32,
    textured: Option<(raylib::core::models::Model, raylib::core::texture::Texture2D)>,
    /// Yaw applied to the textured sphere so the image lines up with the
    /// box placement.
    yaw_deg: f32,
}

const FALLBACK_COLOR: Color = Color::new(24, 24, 32, 255);

impl GlobeModel {
    pub fn load(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        texture_path: Option<&Path>,
        radius: f32,
        rings: i32,
        slices: i32,
        yaw_deg: f32,
    ) -> Self {
        let textured = texture_path.and_then(|path| {
            if !path.exists() {
                log::warn!("globe texture {:?} not found; drawing untextured", path);
                return None;
            }
            let tex = match rl.load_texture(thread, &path.to_string_lossy()) {
                Ok(t) => t,
                Err(e) => {
                    log::warn!("globe texture {:?}: {}", path, e);
                    return None;
                }
            };
            tex.set_texture_filter(thread, raylib::consts::TextureFilter::TEXTURE_FILTER_BILINEAR);
            let mesh = Mesh::gen_mesh_sphere(thread, radius, rings, slices);
            let mut model = rl
                .load_model_from_mesh(thread, unsafe { mesh.make_weak() })
                .ok()?;
            if let Some(mat) = model.materials_mut().get_mut(0) {
                mat.set_material_texture(raylib::consts::MaterialMapIndex::MATERIAL_MAP_ALBEDO, &tex);
            }
            log::info!("globe texture loaded from {:?}", path);
            Some((model, tex))
        });
        Self {
            radius,
            textured,
            yaw_deg,
        }
    }

    #[inline]
    pub fn is_textured(&self) -> bool {
        self.textured.is_some()
    }

    pub fn draw(&self, d3: &mut impl RaylibDraw3D) {
        match &self.textured {
            Some((model, _)) => d3.draw_model_ex(
                model,
                Vector3::zero(),
                Vector3::new(0.0, 1.0, 0.0),
                self.yaw_deg,
                Vector3::one(),
                Color::WHITE,
            ),
            None => d3.draw_sphere(Vector3::zero(), self.radius, FALLBACK_COLOR),
        }
    }
}
