use densglobe_runtime::{CrossfadeState, RedrawReason};
use raylib::prelude::*;

use super::App;
use crate::event::Event;

impl App {
    /// Draws one frame. A crossfade in flight advances here and re-arms
    /// the redraw flag until its weights settle.
    pub fn render(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, dt: f32) {
        if let Some(reason) = self.redraw.take() {
            log::trace!("redraw #{} ({:?})", self.redraw.frames(), reason);
        }

        let mut animating = false;
        if self.crossfade.state() == CrossfadeState::Animating {
            animating = self.crossfade.advance(dt);
            if !animating {
                self.queue.emit_now(Event::CrossfadeSettled {
                    index: self.crossfade.selected(),
                });
            }
        }
        self.crossfade.prepare_frame(&mut self.mesh);

        let camera3d = self.cam.to_camera3d();
        let mut d = rl.begin_drawing(thread);
        d.clear_background(self.background);
        {
            let mut d3 = d.begin_mode3D(camera3d);
            self.globe.draw(&mut d3);
            self.mesh.draw(&mut d3);
        }
        self.list.draw(&mut d);
        drop(d);

        if animating {
            self.redraw.request(RedrawReason::Crossfade);
        }
    }
}
