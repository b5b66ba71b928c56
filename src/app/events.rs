use densglobe_runtime::RedrawReason;

use super::App;
use crate::event::{Event, EventEnvelope};

impl App {
    pub(super) fn handle_event(&mut self, env: EventEnvelope) {
        Self::log_event(env.tick, &env.kind);
        match env.kind {
            Event::Tick => {}
            Event::DatasetSelected { index, .. } => {
                if self.crossfade.select(index) {
                    self.list.set_selected(index);
                    self.redraw.request(RedrawReason::Selection);
                }
            }
            Event::CameraMoved => {
                self.redraw.request(RedrawReason::Camera);
            }
            Event::WindowResized { .. } => {
                self.redraw.request(RedrawReason::Resize);
            }
            Event::CrossfadeSettled { .. } => {}
        }
    }

    fn log_event(tick: u64, ev: &Event) {
        match ev {
            Event::Tick => {
                log::trace!(target: "events", "[tick {}] Tick", tick);
            }
            Event::DatasetSelected { index, via } => {
                log::info!(
                    target: "events",
                    "[tick {}] DatasetSelected index={} via={:?}",
                    tick,
                    index,
                    via
                );
            }
            Event::CameraMoved => {
                log::trace!(target: "events", "[tick {}] CameraMoved", tick);
            }
            Event::WindowResized { width, height } => {
                log::info!(
                    target: "events",
                    "[tick {}] WindowResized {}x{}",
                    tick,
                    width,
                    height
                );
            }
            Event::CrossfadeSettled { index } => {
                log::info!(
                    target: "events",
                    "[tick {}] CrossfadeSettled index={:?}",
                    tick,
                    index
                );
            }
        }
    }
}
