use crate::tween::{Ease, Tween};

/// Seam between the crossfade and whatever holds the blended mesh.
pub trait MorphBinding {
    /// Number of registered position targets (blend slots).
    fn target_count(&self) -> usize;
    /// Name of the position target in `slot`.
    fn target_name(&self, slot: usize) -> Option<&str>;
    /// Index of the colour set registered for `target`.
    fn color_set_index(&self, target: &str) -> Option<usize>;
    /// Makes `color_set` the colour input of blend slot `slot`.
    fn bind_color(&mut self, slot: usize, color_set: usize);
    fn set_influences(&mut self, weights: &[f32]);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrossfadeState {
    Idle,
    Animating,
}

/// Owns the influence vector and animates it toward a one-hot selection.
#[derive(Clone, Debug)]
pub struct CrossfadeController {
    influences: Vec<f32>,
    tween: Tween,
    selected: Option<usize>,
    epsilon: f32,
}

impl CrossfadeController {
    /// All weights start at zero with nothing selected.
    pub fn new(count: usize, duration: f32, ease: Ease) -> Self {
        Self {
            influences: vec![0.0; count],
            tween: Tween::new(duration, ease),
            selected: None,
            epsilon: 1e-4,
        }
    }

    /// Starts idle with `selected` already fully shown.
    pub fn with_selected(count: usize, duration: f32, ease: Ease, selected: usize) -> Self {
        let mut c = Self::new(count, duration, ease);
        if selected < count {
            c.influences = one_hot(count, selected);
            c.selected = Some(selected);
        }
        c
    }

    #[inline]
    pub fn influences(&self) -> &[f32] {
        &self.influences
    }

    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.influences.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.influences.is_empty()
    }

    #[inline]
    pub fn state(&self) -> CrossfadeState {
        if self.tween.is_active() {
            CrossfadeState::Animating
        } else {
            CrossfadeState::Idle
        }
    }

    /// Animates every weight toward 1 for `index` and 0 for the rest,
    /// interrupting any animation in flight. Returns false for an
    /// out-of-range index.
    pub fn select(&mut self, index: usize) -> bool {
        let count = self.influences.len();
        if index >= count {
            log::warn!("ignoring selection {} of {} datasets", index, count);
            return false;
        }
        self.selected = Some(index);
        let target = one_hot(count, index);
        let settled = self
            .influences
            .iter()
            .zip(&target)
            .all(|(a, b)| (a - b).abs() <= self.epsilon);
        self.tween.retarget(&self.influences, &target);
        if settled {
            // Already there; finish on the spot.
            self.tween.step(f32::INFINITY, &mut self.influences);
        }
        true
    }

    /// Advances the animation. Returns true while still animating, which is
    /// the caller's cue to keep scheduling frames.
    pub fn advance(&mut self, dt: f32) -> bool {
        let running = self.tween.step(dt, &mut self.influences);
        if !running {
            return false;
        }
        let target = self.tween.target();
        let close = self
            .influences
            .iter()
            .zip(target)
            .all(|(a, b)| (a - b).abs() <= self.epsilon);
        if close {
            self.tween.step(f32::INFINITY, &mut self.influences);
            return false;
        }
        true
    }

    /// Per-frame hand-off before drawing: pushes the weights and re-points each
    /// blend slot at the colour set registered under that slot's target name.
    pub fn prepare_frame<B: MorphBinding + ?Sized>(&self, binding: &mut B) {
        binding.set_influences(&self.influences);
        for slot in 0..binding.target_count() {
            let set = binding
                .target_name(slot)
                .and_then(|name| binding.color_set_index(name));
            match set {
                Some(set) => binding.bind_color(slot, set),
                None => log::warn!("morph slot {} has no colour set", slot),
            }
        }
    }
}

fn one_hot(count: usize, index: usize) -> Vec<f32> {
    (0..count).map(|i| if i == index { 1.0 } else { 0.0 }).collect()
}
