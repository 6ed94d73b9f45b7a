// src/animation/animator.rs
//
// Drives a progress value from where it is now to 1.0 over a fixed duration.
// Time comes from the host's clock (seconds, like `app.time`); the animator
// never schedules anything itself, it is sampled once per frame. An animation
// starts counting at the first sample after `start`, however long the host
// sat idle before that.
//
// Each started animation gets a new generation. Frames carry it, and frames
// from an older generation are refused, so a replaced animation can never
// write into the state after a newer one began.

use super::easing::EasingType;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    pub generation: u64,
    pub progress: f32,
    pub finished: bool,
}

#[derive(Debug, Clone)]
struct ActiveAnimation {
    generation: u64,
    from: f32,
    start_time: Option<f32>,
    duration: f32,
}

impl ActiveAnimation {
    // Scales the eased value into [from, 1] rather than writing it raw, so a
    // toggle that lands mid-flight carries on from where the glyph is drawn.
    fn frame(&self, eased: f32) -> AnimationFrame {
        let finished = eased >= 1.0;
        let progress = if finished {
            1.0
        } else {
            self.from + (1.0 - self.from) * eased
        };

        AnimationFrame {
            generation: self.generation,
            progress,
            finished,
        }
    }
}

#[derive(Debug, Default)]
pub struct Animator {
    easing: EasingType,
    active: Option<ActiveAnimation>,
    generation: u64,
}

impl Animator {
    pub fn new(easing: EasingType) -> Self {
        Self {
            easing,
            active: None,
            generation: 0,
        }
    }

    /// Start animating from `from` to 1.0, replacing whatever was running.
    /// Returns the generation of the new animation.
    pub fn start(&mut self, from: f32, duration_ms: u64) -> u64 {
        self.generation += 1;
        self.active = Some(ActiveAnimation {
            generation: self.generation,
            from: from.clamp(0.0, 1.0),
            start_time: None,
            duration: duration_ms as f32 / 1000.0,
        });
        self.generation
    }

    pub fn cancel(&mut self) {
        if self.active.take().is_some() {
            self.generation += 1;
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Frame for the host clock at `now`. The first sample of an animation
    /// pins its start time. The last frame is exactly 1.0 and leaves the
    /// animator idle.
    pub fn sample(&mut self, now: f32) -> Option<AnimationFrame> {
        let active = self.active.as_mut()?;

        let start_time = *active.start_time.get_or_insert(now);
        let elapsed = (now - start_time).max(0.0);
        let t = if active.duration <= 0.0 {
            1.0
        } else {
            (elapsed / active.duration).min(1.0)
        };
        let eased = if t >= 1.0 { 1.0 } else { self.easing.apply(t) };

        let frame = active.frame(eased);
        if frame.finished {
            self.active = None;
        }
        Some(frame)
    }

    /// Frame from an already eased fraction, for hosts that run their own
    /// frame scheduler. `None` when `generation` is not the running animation.
    pub fn frame_from_eased(&mut self, generation: u64, eased: f32) -> Option<AnimationFrame> {
        let active = self
            .active
            .as_ref()
            .filter(|active| active.generation == generation)?;

        let frame = active.frame(eased.clamp(0.0, 1.0));
        if frame.finished {
            self.active = None;
        }
        Some(frame)
    }
}
