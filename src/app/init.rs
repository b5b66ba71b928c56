use std::error::Error;
use std::path::Path;

use densglobe_mesh_cpu::MorphMesh;
use densglobe_render_raylib::{GlobeModel, GpuMorphMesh, MorphShader};
use densglobe_runtime::{CrossfadeController, RedrawReason, RedrawScheduler};
use raylib::prelude::*;

use super::App;
use crate::camera::OrbitCamera;
use crate::config::AppConfig;
use crate::event::EventQueue;
use crate::frame_clock::FrameClock;
use crate::ui::DatasetList;

impl App {
    pub fn new(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        cfg: &AppConfig,
        cpu: &MorphMesh,
        root: &Path,
    ) -> Result<Self, Box<dyn Error>> {
        let slots = cpu.targets().len();
        let shader = MorphShader::load(rl, thread, slots).ok_or("morph shader unavailable")?;
        let mesh = GpuMorphMesh::upload(rl, thread, cpu, shader).ok_or("morph mesh upload failed")?;

        let texture = cfg.globe.texture.as_ref().map(|p| {
            if p.is_absolute() {
                p.clone()
            } else {
                root.join(p)
            }
        });
        let globe = GlobeModel::load(
            rl,
            thread,
            texture.as_deref(),
            cfg.globe.radius,
            cfg.globe.rings,
            cfg.globe.slices,
            cfg.globe.texture_yaw_deg,
        );

        unsafe {
            raylib::ffi::rlSetClipPlanes(cfg.camera.near as f64, cfg.camera.far as f64);
        }

        let names = slot_names(cfg, cpu.targets().iter().map(|t| t.name.as_str()))?;
        let widths: Vec<i32> = names
            .iter()
            .map(|n| rl.measure_text(n, DatasetList::FONT))
            .collect();
        let list = DatasetList::new(names, &widths);

        let crossfade = CrossfadeController::with_selected(
            slots,
            cfg.crossfade.duration,
            cfg.crossfade.ease,
            0,
        );
        let mut redraw = RedrawScheduler::new();
        redraw.request(RedrawReason::Startup);

        let [r, g, b] = cfg.window.background;
        log::info!(
            "ready: {} datasets, {} vertices, globe {}",
            slots,
            mesh.vertex_count(),
            if globe.is_textured() { "textured" } else { "untextured" }
        );
        Ok(Self {
            cam: OrbitCamera::new(&cfg.camera),
            mesh,
            globe,
            crossfade,
            redraw,
            list,
            queue: EventQueue::new(),
            background: Color::new(r, g, b, 255),
            continuous: true,
            clock: FrameClock::new(),
        })
    }
}

/// List labels in blend-slot order, taken from the config. The built mesh must
/// carry its targets in that same order or clicks would select the wrong slot.
fn slot_names<'a>(
    cfg: &AppConfig,
    built: impl IntoIterator<Item = &'a str>,
) -> Result<Vec<String>, Box<dyn Error>> {
    let names = cfg.dataset_names();
    let built: Vec<&str> = built.into_iter().collect();
    if names.len() != built.len() || names.iter().zip(&built).any(|(a, b)| a != b) {
        return Err(format!(
            "mesh targets {:?} do not match configured datasets {:?}",
            built, names
        )
        .into());
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_configured_slot_order() {
        let cfg = AppConfig::default();
        let names =
            slot_names(&cfg, ["men", "women", ">50% men", ">50% women"]).unwrap();
        assert_eq!(names, cfg.dataset_names());
    }

    #[test]
    fn reordered_or_missing_targets_are_an_error() {
        let cfg = AppConfig::default();
        assert!(slot_names(&cfg, ["women", "men", ">50% men", ">50% women"]).is_err());
        assert!(slot_names(&cfg, ["men", "women"]).is_err());
    }
}
