use densglobe_render_raylib::{GlobeModel, GpuMorphMesh};
use densglobe_runtime::{CrossfadeController, RedrawScheduler};
use raylib::prelude::*;

use crate::camera::OrbitCamera;
use crate::event::EventQueue;
use crate::frame_clock::FrameClock;
use crate::ui::DatasetList;

pub struct App {
    pub cam: OrbitCamera,
    pub mesh: GpuMorphMesh,
    pub globe: GlobeModel,
    pub crossfade: CrossfadeController,
    pub redraw: RedrawScheduler,
    pub list: DatasetList,
    pub queue: EventQueue,
    pub background: Color,
    /// Whether the loop is running without waiting for input events.
    pub continuous: bool,
    pub clock: FrameClock,
}

impl App {
    /// Time step for animation. Time spent blocked on input never reaches
    /// an animation.
    #[inline]
    pub fn frame_dt(&mut self, rl: &RaylibHandle) -> f32 {
        self.clock.next(rl.get_frame_time(), !self.continuous)
    }

    /// Keeps the loop running while anything is pending or moving, and
    /// blocks on input otherwise.
    pub fn sync_event_waiting(&mut self) {
        let want = self.redraw.is_requested() || self.cam.is_moving();
        if want == self.continuous {
            return;
        }
        self.continuous = want;
        unsafe {
            if want {
                raylib::ffi::DisableEventWaiting();
            } else {
                raylib::ffi::EnableEventWaiting();
            }
        }
        log::trace!("event waiting {}", if want { "off" } else { "on" });
    }
}
