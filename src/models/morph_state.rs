// src/models/morph_state.rs
//
// Which glyph is settled, and how far the current animation has progressed.

pub const FLAG_STATE_PLUS: i32 = 0;
pub const FLAG_STATE_CHECK: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphState {
    #[default]
    Plus,
    Check,
}

impl GlyphState {
    pub fn toggled(self) -> Self {
        match self {
            GlyphState::Plus => GlyphState::Check,
            GlyphState::Check => GlyphState::Plus,
        }
    }

    pub fn flag(self) -> i32 {
        match self {
            GlyphState::Plus => FLAG_STATE_PLUS,
            GlyphState::Check => FLAG_STATE_CHECK,
        }
    }

    pub fn from_flag(flag: i32) -> Option<Self> {
        match flag {
            FLAG_STATE_PLUS => Some(GlyphState::Plus),
            FLAG_STATE_CHECK => Some(GlyphState::Check),
            _ => None,
        }
    }
}

/// `progress` is the raw animation value and only means something relative to
/// `state`: 1.0 is always "settled at `state`".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorphState {
    pub state: GlyphState,
    pub progress: f32,
}

impl Default for MorphState {
    fn default() -> Self {
        Self {
            state: GlyphState::Plus,
            progress: 1.0,
        }
    }
}

impl MorphState {
    /// Fraction along the morph paths: 0 draws the plus, 1 draws the check.
    pub fn effective_fraction(&self) -> f32 {
        match self.state {
            GlyphState::Check => self.progress,
            GlyphState::Plus => 1.0 - self.progress,
        }
    }

    /// Switch glyphs without moving anything on screen.
    pub fn flip(&mut self) -> GlyphState {
        self.state = self.state.toggled();
        self.progress = 1.0 - self.progress;
        self.state
    }

    pub fn settle(&mut self, state: GlyphState) {
        self.state = state;
        self.progress = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_draws_plus() {
        let morph = MorphState::default();
        assert_eq!(morph.state, GlyphState::Plus);
        assert_eq!(morph.progress, 1.0);
        assert_eq!(morph.effective_fraction(), 0.0);
    }

    #[test]
    fn test_flip_keeps_fraction_continuous() {
        let mut morph = MorphState {
            state: GlyphState::Check,
            progress: 0.3,
        };
        let before = morph.effective_fraction();

        assert_eq!(morph.flip(), GlyphState::Plus);
        assert!((morph.progress - 0.7).abs() < 1e-6);
        assert!((morph.effective_fraction() - before).abs() < 1e-6);
    }

    #[test]
    fn test_settled_check_draws_check() {
        let mut morph = MorphState::default();
        morph.settle(GlyphState::Check);
        assert_eq!(morph.effective_fraction(), 1.0);
    }

    #[test]
    fn test_flags_round_trip() {
        assert_eq!(GlyphState::from_flag(GlyphState::Plus.flag()), Some(GlyphState::Plus));
        assert_eq!(GlyphState::from_flag(GlyphState::Check.flag()), Some(GlyphState::Check));
        assert_eq!(GlyphState::from_flag(7), None);
        assert_eq!(GlyphState::from_flag(-1), None);
    }
}
