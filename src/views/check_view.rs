// src/views/check_view.rs
//
// The plus/check widget: owns the morph state, the paths and the style, and
// turns host events (size changes, clicks, frame ticks) into drawable lines.
// Everything here runs on the host's UI thread.

use nannou::prelude::*;
use tracing::{debug, trace};

use crate::animation::{AnimationFrame, Animator};
use crate::config::{AnimationConfig, StyleConfig};
use crate::models::{drawable_size, GlyphState, MorphPaths, MorphState, SavedState, Segment};
use crate::render::{draw_check, StrokeStyle, Surface};

/// Called after every click, with the glyph the view settled on.
pub type ClickHandler = Box<dyn FnMut(GlyphState)>;

pub struct CheckView {
    morph: MorphState,
    paths: Option<MorphPaths>,
    style: StrokeStyle,
    auto_toggle: bool,
    default_duration_ms: u64,
    animator: Animator,

    // host layout
    width: f32,
    height: f32,
    padding: f32,

    click_handler: Option<ClickHandler>,
    redraw_requested: bool,
}

impl Default for CheckView {
    fn default() -> Self {
        Self::new(&StyleConfig::default(), &AnimationConfig::default(), 1.0)
    }
}

impl CheckView {
    pub fn new(style: &StyleConfig, animation: &AnimationConfig, scale_factor: f32) -> Self {
        Self {
            morph: MorphState::default(),
            paths: None,
            style: StrokeStyle {
                color: style.color(),
                width: style.stroke_width_px(scale_factor),
            },
            auto_toggle: style.auto_toggle,
            default_duration_ms: animation.duration_ms,
            animator: Animator::new(animation.easing),
            width: 0.0,
            height: 0.0,
            padding: style.padding_px(scale_factor),
            click_handler: None,
            redraw_requested: false,
        }
    }

    /************************* Host layout ********************/

    pub fn on_size_or_padding_changed(&mut self, width: f32, height: f32, padding: f32) {
        self.width = width;
        self.height = height;
        self.padding = padding;
        self.measure_paths();
    }

    /// Per-edge padding collapses to the largest edge: the glyph stays square.
    pub fn set_padding(&mut self, left: f32, top: f32, right: f32, bottom: f32) {
        self.padding = left.max(top).max(right).max(bottom);
        self.measure_paths();
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    // rebuilds all four paths at once so a draw never sees a mix of sizes
    fn measure_paths(&mut self) {
        let size = drawable_size(self.width, self.height, self.padding);
        self.paths = Some(MorphPaths::build(size));
        debug!(size, padding = self.padding, "measured check view paths");
        self.request_redraw();
    }

    pub fn paths(&self) -> Option<&MorphPaths> {
        self.paths.as_ref()
    }

    /************************* Transitions ********************/

    pub fn toggle(&mut self) -> GlyphState {
        self.toggle_with(self.default_duration_ms)
    }

    /// Switch glyphs, animating over `duration_ms`. Returns the new glyph.
    pub fn toggle_with(&mut self, duration_ms: u64) -> GlyphState {
        let state = self.morph.flip();
        let generation = self.animator.start(self.morph.progress, duration_ms);
        debug!(?state, generation, duration_ms, from = self.morph.progress, "toggle");
        self.request_redraw();
        state
    }

    pub fn check(&mut self) {
        self.check_with(self.default_duration_ms);
    }

    pub fn check_with(&mut self, duration_ms: u64) {
        if self.morph.state == GlyphState::Check {
            return;
        }
        self.toggle_with(duration_ms);
    }

    pub fn plus(&mut self) {
        self.plus_with(self.default_duration_ms);
    }

    pub fn plus_with(&mut self, duration_ms: u64) {
        if self.morph.state == GlyphState::Plus {
            return;
        }
        self.toggle_with(duration_ms);
    }

    /************************* Frame ticks ********************/

    /// Advance to the host clock `now` (seconds). A transition started since
    /// the last call begins its timing here.
    pub fn update(&mut self, now: f32) {
        if let Some(frame) = self.animator.sample(now) {
            self.apply_frame(frame);
        }
    }

    /// Apply an eased fraction computed by a host-owned scheduler. Returns
    /// false, and changes nothing, when `generation` has been replaced.
    pub fn on_animation_frame(&mut self, generation: u64, eased: f32) -> bool {
        match self.animator.frame_from_eased(generation, eased) {
            Some(frame) => {
                self.apply_frame(frame);
                true
            }
            None => {
                trace!(generation, "dropping stale animation frame");
                false
            }
        }
    }

    /// Generation of the most recent animation, for host-owned schedulers.
    pub fn animation_generation(&self) -> u64 {
        self.animator.generation()
    }

    fn apply_frame(&mut self, frame: AnimationFrame) {
        self.morph.progress = frame.progress;
        trace!(progress = frame.progress, finished = frame.finished, "animation frame");
        if frame.finished {
            debug!(state = ?self.morph.state, "settled");
        }
        self.request_redraw();
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /************************* Clicks ********************/

    pub fn click(&mut self) {
        if self.auto_toggle {
            self.toggle();
        }
        let state = self.morph.state;
        if let Some(handler) = self.click_handler.as_mut() {
            handler(state);
        }
    }

    /// Replaces any handler registered before.
    pub fn set_click_handler<F>(&mut self, handler: F)
    where
        F: FnMut(GlyphState) + 'static,
    {
        self.click_handler = Some(Box::new(handler));
    }

    pub fn clear_click_handler(&mut self) {
        self.click_handler = None;
    }

    /************************* Style ********************/

    pub fn set_color(&mut self, color: Rgba) {
        self.style.color = color;
        self.request_redraw();
    }

    pub fn set_stroke_width(&mut self, width: f32) {
        self.style.width = width;
        self.request_redraw();
    }

    pub fn set_auto_toggle(&mut self, enable: bool) {
        self.auto_toggle = enable;
    }

    pub fn auto_toggle(&self) -> bool {
        self.auto_toggle
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /************************* State ********************/

    pub fn state(&self) -> GlyphState {
        self.morph.state
    }

    pub fn progress(&self) -> f32 {
        self.morph.progress
    }

    pub fn effective_fraction(&self) -> f32 {
        self.morph.effective_fraction()
    }

    pub fn save_state(&self) -> SavedState {
        SavedState::new(self.morph.state)
    }

    /// Jump straight to the saved glyph, dropping any running animation.
    pub fn restore_state(&mut self, saved: &SavedState) {
        self.animator.cancel();
        self.morph.settle(saved.state());
        debug!(state = ?self.morph.state, "restored check view state");
        self.request_redraw();
    }

    /************************* Drawing ********************/

    /// The two lines as they should look right now, in padded drawing space.
    pub fn segments(&self) -> Option<[Segment; 2]> {
        self.paths
            .as_ref()
            .map(|paths| paths.segments(self.effective_fraction()))
    }

    /// Nothing is drawn until the host has reported a size.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        if let Some(paths) = &self.paths {
            draw_check(surface, paths, self.effective_fraction(), self.padding, &self.style);
        }
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// True once after anything visible changed.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}
