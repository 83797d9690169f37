//! Explicit, frame-driven tweens.
//!
//! A [`Tween`] is a plain record advanced by the per-frame update; there are no
//! timers or callbacks behind it. Retargeting a property means overwriting its
//! record with a new tween that starts from the property's current value.

/// Distance below which a property is considered at its target.
pub const SETTLE_EPS: f32 = 1e-4;

/// Easing curves used by the cell animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Quadratic ease-out, the default curve of most tween libraries.
    #[default]
    QuadOut,
    /// Exponential ease-out: fast start, long tail towards the target.
    ExpoOut,
}

impl Easing {
    /// Evaluate the curve at normalized time `t` (clamped to \[0, 1\]).
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::ExpoOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub start: f32,
    pub target: f32,
    pub duration: f32,
    pub elapsed: f32,
    pub easing: Easing,
}

impl Tween {
    pub fn new(start: f32, target: f32, duration: f32, easing: Easing) -> Self {
        Self {
            start,
            target,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing,
        }
    }

    /// Normalized progress in \[0, 1\].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Current interpolated value.
    pub fn value(&self) -> f32 {
        let k = self.easing.apply(self.progress());
        self.start + (self.target - self.start) * k
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Move time forward by `dt` seconds and return the new value.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration.max(0.0));
        self.value()
    }
}

/// Retarget `slot` towards `target`, restarting from `current`.
///
/// Every call overwrites the record, so a target issued each frame gives a
/// continuous eased approach. A value already within `SETTLE_EPS` of the target
/// counts as settled and leaves the slot empty.
pub fn retarget(
    slot: &mut Option<Tween>,
    current: f32,
    target: f32,
    duration: f32,
    easing: Easing,
) {
    if (current - target).abs() <= SETTLE_EPS {
        *slot = None;
        return;
    }
    *slot = Some(Tween::new(current, target, duration, easing));
}

/// Advance the tween in `slot` (if any), writing the new value to `out`.
/// Finished tweens are dropped once their final value has been written.
pub fn step(slot: &mut Option<Tween>, dt: f32, out: &mut f32) {
    if let Some(t) = slot {
        *out = t.advance(dt);
        if t.is_finished() {
            *slot = None;
        }
    }
}
