/// Why a redraw was asked for; only the first reason per tick is kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedrawReason {
    Startup,
    Resize,
    Camera,
    Selection,
    Crossfade,
}

/// Single source of truth for "does the scene need drawing this tick".
/// Any number of requests within one tick collapse into one redraw.
#[derive(Debug, Default)]
pub struct RedrawScheduler {
    pending: Option<RedrawReason>,
    frames: u64,
}

impl RedrawScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the flag. Returns true only for the request that armed it.
    pub fn request(&mut self, reason: RedrawReason) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(reason);
        true
    }

    #[inline]
    pub fn is_requested(&self) -> bool {
        self.pending.is_some()
    }

    /// Clears the flag at the start of a redraw, returning the reason it
    /// was armed with.
    pub fn take(&mut self) -> Option<RedrawReason> {
        let reason = self.pending.take();
        if reason.is_some() {
            self.frames += 1;
        }
        reason
    }

    /// Redraws performed so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_collapse_within_a_tick() {
        let mut s = RedrawScheduler::new();
        assert!(s.request(RedrawReason::Resize));
        assert!(!s.request(RedrawReason::Camera));
        assert!(!s.request(RedrawReason::Selection));
        assert_eq!(s.take(), Some(RedrawReason::Resize));
        assert_eq!(s.take(), None);
        assert_eq!(s.frames(), 1);
    }

    #[test]
    fn rearming_after_take_schedules_again() {
        let mut s = RedrawScheduler::new();
        s.request(RedrawReason::Crossfade);
        s.take();
        assert!(!s.is_requested());
        assert!(s.request(RedrawReason::Crossfade));
        assert!(s.is_requested());
    }
}
