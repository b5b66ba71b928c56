use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    Linear,
    /// Quadratic ease-out: fast start, gentle landing.
    #[default]
    QuadOut,
}

impl Ease {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

/// Interpolates a vector of values toward a target. Retargeting restarts from
/// wherever the values currently are, so an interrupted animation continues
/// smoothly instead of jumping.
#[derive(Clone, Debug)]
pub struct Tween {
    from: Vec<f32>,
    to: Vec<f32>,
    elapsed: f32,
    duration: f32,
    ease: Ease,
    active: bool,
}

impl Tween {
    pub fn new(duration: f32, ease: Ease) -> Self {
        Self {
            from: Vec::new(),
            to: Vec::new(),
            elapsed: 0.0,
            duration: duration.max(0.0),
            ease,
            active: false,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Target of the current (or last) animation.
    #[inline]
    pub fn target(&self) -> &[f32] {
        &self.to
    }

    pub fn retarget(&mut self, current: &[f32], to: &[f32]) {
        debug_assert_eq!(current.len(), to.len());
        self.from.clear();
        self.from.extend_from_slice(current);
        self.to.clear();
        self.to.extend_from_slice(to);
        self.elapsed = 0.0;
        self.active = true;
    }

    /// Advances by `dt` and writes the interpolated values into `out`.
    /// Returns whether the animation is still running; on the finishing step
    /// `out` is set to the target exactly.
    pub fn step(&mut self, dt: f32, out: &mut [f32]) -> bool {
        if !self.active {
            return false;
        }
        self.elapsed += dt.max(0.0);
        if self.duration <= 0.0 || self.elapsed >= self.duration {
            out.copy_from_slice(&self.to);
            self.active = false;
            return false;
        }
        let k = self.ease.apply(self.elapsed / self.duration);
        for ((o, a), b) in out.iter_mut().zip(&self.from).zip(&self.to) {
            *o = a + (b - a) * k;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_endpoints() {
        for e in [Ease::Linear, Ease::QuadOut] {
            assert_eq!(e.apply(0.0), 0.0);
            assert_eq!(e.apply(1.0), 1.0);
            assert_eq!(e.apply(2.0), 1.0);
        }
        assert!(Ease::QuadOut.apply(0.5) > 0.5);
    }

    #[test]
    fn zero_duration_snaps() {
        let mut t = Tween::new(0.0, Ease::Linear);
        let mut v = [0.0, 1.0];
        t.retarget(&v.clone(), &[1.0, 0.0]);
        assert!(!t.step(0.0, &mut v));
        assert_eq!(v, [1.0, 0.0]);
    }

    #[test]
    fn linear_midpoint() {
        let mut t = Tween::new(1.0, Ease::Linear);
        let mut v = [0.0];
        t.retarget(&[0.0], &[2.0]);
        assert!(t.step(0.5, &mut v));
        assert!((v[0] - 1.0).abs() < 1e-6);
        assert!(!t.step(0.5, &mut v));
        assert_eq!(v, [2.0]);
        assert!(!t.is_active());
    }
}
