// src/animation/scroll.rs
//
// Scroll-to-index mapping and the scroll signal itself.
//
// The mapper turns a raw scroll offset into a continuous "active index"
// over N ordered items. The state accumulates wheel/key input into a
// target offset and filters it so the fan settles instead of snapping.

use crate::animation::Smoothed;
use crate::config::ScrollConfig;

#[derive(Debug, Clone, Copy)]
pub struct ScrollMapper {
    pub unit: f32,
    pub count: usize,
}

impl ScrollMapper {
    pub fn new(unit: f32, count: usize) -> Self {
        Self { unit, count }
    }

    /// Continuous active index in [0, count-1].
    /// A zero unit or an empty item list maps everything to 0.
    pub fn active_index(&self, offset: f32) -> f32 {
        if self.count == 0 || self.unit <= 0.0 {
            return 0.0;
        }
        let raw = offset.abs() / self.unit;
        raw.clamp(0.0, (self.count - 1) as f32)
    }

    /// Total offset at which the last item is centered.
    pub fn max_offset(&self) -> f32 {
        if self.count == 0 {
            return 0.0;
        }
        self.unit * (self.count - 1) as f32
    }

    /// Normalized scroll progress in [0, 1]. Zero scrollable
    /// distance yields 0, never NaN.
    pub fn progress(&self, offset: f32) -> f32 {
        let max = self.max_offset();
        if max <= 0.0 {
            return 0.0;
        }
        (offset.abs() / max).clamp(0.0, 1.0)
    }
}

/// Accumulates scroll input between frames. Input handlers write the
/// target; the per-frame update reads it. Both run on the same tick
/// sequence, so the snapshot handed to the views is always consistent.
pub struct ScrollState {
    pub mapper: ScrollMapper,
    wheel_speed: f32,
    offset: Smoothed,
}

impl ScrollState {
    pub fn new(config: &ScrollConfig, count: usize) -> Self {
        Self {
            mapper: ScrollMapper::new(config.unit, count),
            wheel_speed: config.wheel_speed,
            offset: Smoothed::new(0.0, config.snap),
        }
    }

    /// Wheel input. Positive delta scrolls toward later items.
    pub fn scroll_by(&mut self, delta: f32) {
        let target = (self.offset.target() + delta * self.wheel_speed)
            .clamp(0.0, self.mapper.max_offset());
        self.offset.set_target(target);
    }

    /// Jump the target to an item index (keyboard paging).
    pub fn scroll_to_item(&mut self, index: usize) {
        let index = index.min(self.mapper.count.saturating_sub(1));
        self.offset.set_target(self.mapper.unit * index as f32);
    }

    pub fn target_item(&self) -> usize {
        self.mapper.active_index(self.offset.target()).round() as usize
    }

    pub fn update(&mut self, dt: f32) {
        self.offset.update(dt);
    }

    pub fn offset(&self) -> f32 {
        self.offset.value()
    }

    pub fn active_index(&self) -> f32 {
        self.mapper.active_index(self.offset.value())
    }

    pub fn progress(&self) -> f32 {
        self.mapper.progress(self.offset.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper() -> ScrollMapper {
        ScrollMapper::new(800.0, 4)
    }

    #[test]
    fn test_index_is_clamped() {
        let m = mapper();
        assert_eq!(m.active_index(0.0), 0.0);
        assert_eq!(m.active_index(-100_000.0), 3.0);
        assert_eq!(m.active_index(100_000.0), 3.0);
    }

    #[test]
    fn test_index_is_monotonic() {
        let m = mapper();
        let mut last = -1.0;
        for step in 0..200 {
            let offset = step as f32 * 25.0;
            let a = m.active_index(offset);
            assert!(a >= last);
            last = a;
        }
    }

    #[test]
    fn test_zero_unit_yields_zero() {
        let m = ScrollMapper::new(0.0, 4);
        let a = m.active_index(1234.0);
        assert_eq!(a, 0.0);
        assert!(a.is_finite());
    }

    #[test]
    fn test_empty_deck_yields_zero() {
        let m = ScrollMapper::new(800.0, 0);
        assert_eq!(m.active_index(500.0), 0.0);
        assert_eq!(m.progress(500.0), 0.0);
        assert_eq!(m.max_offset(), 0.0);
    }

    #[test]
    fn test_worked_example() {
        // 4 items at 800px per item: offset 1600 centers item 2.
        let m = mapper();
        assert_eq!(m.active_index(1600.0), 2.0);
    }

    #[test]
    fn test_progress_range() {
        let m = mapper();
        assert_eq!(m.progress(0.0), 0.0);
        assert_eq!(m.progress(2400.0), 1.0);
        assert_eq!(m.progress(99_999.0), 1.0);
        assert!((m.progress(1200.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_state_clamps_input() {
        let config = ScrollConfig {
            unit: 800.0,
            wheel_speed: 1.0,
            snap: 0.001,
        };
        let mut state = ScrollState::new(&config, 4);
        state.scroll_by(-500.0);
        for _ in 0..60 {
            state.update(1.0 / 60.0);
        }
        assert!(state.offset() >= 0.0);

        state.scroll_by(1_000_000.0);
        for _ in 0..600 {
            state.update(1.0 / 60.0);
        }
        assert!(state.offset() <= state.mapper.max_offset() + 1e-3);
        assert!((state.active_index() - 3.0).abs() < 1e-2);
    }
}
