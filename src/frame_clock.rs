/// Longest step an animation advances by in one frame.
pub const MAX_FRAME_DT: f32 = 1.0 / 30.0;

/// Turns raylib's measured frame time into an animation step.
///
/// While input events are awaited, the time spent blocked is reported by
/// `GetFrameTime` one frame late: on the frame after the wake-up. Both the
/// woken frame and the one after it therefore step by zero. Every other step
/// is clamped to [`MAX_FRAME_DT`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    stale: u8,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// `waited` is whether the previous frame ended blocked on input.
    pub fn next(&mut self, raw: f32, waited: bool) -> f32 {
        if waited {
            self.stale = 2;
        }
        if self.stale > 0 {
            self.stale -= 1;
            return 0.0;
        }
        raw.clamp(0.0, MAX_FRAME_DT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use densglobe_runtime::{CrossfadeController, CrossfadeState, Ease};

    #[test]
    fn idle_time_is_dropped_on_wake_and_the_frame_after() {
        let mut clock = FrameClock::new();
        // woken frame, then the first continuous frame carrying the idle time
        let steps: Vec<f32> = [(0.5, true), (1.5167, false), (0.016, false)]
            .into_iter()
            .map(|(raw, waited)| clock.next(raw, waited))
            .collect();
        assert_eq!(steps, vec![0.0, 0.0, 0.016]);
    }

    #[test]
    fn long_frames_are_clamped() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.next(1.0, false), MAX_FRAME_DT);
        assert_eq!(clock.next(-0.1, false), 0.0);
    }

    #[test]
    fn crossfade_started_after_idle_still_animates() {
        let mut clock = FrameClock::new();
        let mut fade = CrossfadeController::with_selected(4, 0.1, Ease::QuadOut, 0);
        assert!(fade.select(2));

        let mut frames = 0;
        let mut feed = |raw: f32, waited: bool, fade: &mut CrossfadeController| {
            frames += 1;
            fade.advance(clock.next(raw, waited))
        };
        assert!(feed(0.5, true, &mut fade));
        assert!(feed(1.5167, false, &mut fade));
        assert_eq!(fade.state(), CrossfadeState::Animating);
        assert_eq!(fade.influences()[0], 1.0);

        assert!(feed(0.016, false, &mut fade));
        let mid = fade.influences()[2];
        assert!(mid > 0.0 && mid < 1.0, "{mid}");

        while feed(0.016, false, &mut fade) {}
        assert!(frames >= 8, "settled after {frames} frames");
        assert_eq!(fade.influences(), &[0.0, 0.0, 1.0, 0.0]);
    }
}
