//! # Position engine
//!
//! Pure state machine over [`CarouselState`]. It never measures anything and
//! never schedules anything; callers hand it [`Geometry`] and feed it
//! navigation requests.
//!
//! Logical index `i` (1-based) rests at strip slot `leading + i - 1`, where
//! `leading` is the number of leading clones. With one slide per view in
//! infinite mode that is slot `i`, i.e. `offset = w * i + s * i`.
//!
//! Wrapping in infinite mode animates *into* a clone (the first trailing clone
//! going forward, the last leading clone going backward) and leaves the
//! offset there; [`reconcile`](crate::reconcile::reconcile) snaps it back once the renderer reports
//! the transition finished.

use crate::Geometry;
use crate::slides::clone_count;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselState {
    /// 1-based logical index, `1..=N`.
    pub current_index: usize,
    /// Horizontal translation of the strip in px, never negative.
    pub offset: f32,
    /// How long the renderer should animate to `offset`; `0` means jump.
    pub transition_duration_ms: u32,
}

/// Result of a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Nav {
    /// Moved to a neighbouring or requested slide.
    Moved,
    /// Crossed the end of the sequence.
    Wrapped,
    /// Locked carousel or out-of-range request.
    Ignored,
}

impl Nav {
    pub fn is_moved(self) -> bool {
        self != Nav::Ignored
    }
}

#[derive(Clone, Debug)]
pub struct PositionEngine {
    state: CarouselState,
    len: usize,
    infinite: bool,
    speed_ms: u32,
    geometry: Geometry,
}

impl PositionEngine {
    /// Starts at index 1, resting, with no pending animation.
    pub fn new(len: usize, geometry: Geometry, infinite: bool, speed_ms: u32) -> Self {
        let mut engine = Self {
            state: CarouselState {
                current_index: 1,
                offset: 0.0,
                transition_duration_ms: 0,
            },
            len,
            infinite,
            speed_ms,
            geometry,
        };
        engine.snap_to_rest(0);
        engine
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_infinite(&self) -> bool {
        self.infinite
    }

    pub fn speed_ms(&self) -> u32 {
        self.speed_ms
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn leading_clones(&self) -> usize {
        clone_count(self.geometry.slides_per_view, self.len, self.infinite)
    }

    /// A single non-looping item (or nothing at all) never moves.
    pub fn is_locked(&self) -> bool {
        self.len == 0 || (!self.infinite && self.len == 1)
    }

    pub fn resting_offset(&self, index: usize) -> f32 {
        if self.len == 0 {
            return 0.0;
        }
        let index = index.clamp(1, self.len);
        self.geometry.slot_offset(self.leading_clones() + index - 1)
    }

    fn trailing_clone_offset(&self) -> f32 {
        self.geometry.slot_offset(self.leading_clones() + self.len)
    }

    fn leading_clone_offset(&self) -> f32 {
        self.geometry.slot_offset(self.leading_clones().saturating_sub(1))
    }

    fn apply(&mut self, index: usize, offset: f32, duration_ms: u32) {
        self.state = CarouselState {
            current_index: index,
            offset: offset.max(0.0),
            transition_duration_ms: duration_ms,
        };
    }

    pub fn go_next(&mut self) -> Nav {
        if self.is_locked() {
            return Nav::Ignored;
        }
        let current = self.state.current_index;
        if current >= self.len {
            // Without clones there is nothing to animate through: rewind.
            let offset = if self.infinite {
                self.trailing_clone_offset()
            } else {
                self.resting_offset(1)
            };
            self.apply(1, offset, self.speed_ms);
            Nav::Wrapped
        } else {
            let next = current + 1;
            self.apply(next, self.resting_offset(next), self.speed_ms);
            Nav::Moved
        }
    }

    pub fn go_previous(&mut self) -> Nav {
        if self.is_locked() {
            return Nav::Ignored;
        }
        let current = self.state.current_index;
        if current <= 1 {
            let offset = if self.infinite {
                self.leading_clone_offset()
            } else {
                self.resting_offset(self.len)
            };
            self.apply(self.len, offset, self.speed_ms);
            Nav::Wrapped
        } else {
            let prev = current - 1;
            self.apply(prev, self.resting_offset(prev), self.speed_ms);
            Nav::Moved
        }
    }

    /// Jumps to the 0-based logical `index` (dot click).
    ///
    /// In infinite mode the first item is reached through the trailing clone
    /// and the last item, from the first, through the leading clone, so dots
    /// move in the same direction as the arrows would.
    pub fn go_to_index(&mut self, index: usize) -> Nav {
        if self.is_locked() {
            return Nav::Ignored;
        }
        if index >= self.len {
            log::warn!("engine: dot index {index} out of range for {} items", self.len);
            return Nav::Ignored;
        }
        let current = self.state.current_index;
        let target = index + 1;

        let (offset, nav) = if self.infinite && index == 0 && current != 1 {
            (self.trailing_clone_offset(), Nav::Wrapped)
        } else if self.infinite && index == self.len - 1 && current == 1 && self.len > 1 {
            (self.leading_clone_offset(), Nav::Wrapped)
        } else {
            (self.resting_offset(target), Nav::Moved)
        };
        self.apply(target, offset, self.speed_ms);
        nav
    }

    /// Prev/next controls are live. Finite carousels still rewind at the ends.
    pub fn can_go_next(&self) -> bool {
        !self.is_locked()
    }

    pub fn can_go_previous(&self) -> bool {
        !self.is_locked()
    }

    /// Moves the strip without changing the index (drag tracking).
    pub fn set_offset(&mut self, offset: f32, duration_ms: u32) {
        let index = self.state.current_index;
        self.apply(index, offset, duration_ms);
    }

    /// Puts the strip back on the current slide's resting offset.
    pub fn snap_to_rest(&mut self, duration_ms: u32) {
        let index = self.state.current_index;
        self.apply(index, self.resting_offset(index), duration_ms);
    }

    /// New layout: re-rest without animating.
    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.geometry = geometry;
        self.snap_to_rest(0);
    }

    /// New item count: clamp the index into `1..=len` and re-rest.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.state.current_index = self.state.current_index.clamp(1, len.max(1));
        self.snap_to_rest(0);
    }

    pub fn set_infinite(&mut self, infinite: bool) {
        if self.infinite != infinite {
            self.infinite = infinite;
            self.snap_to_rest(0);
        }
    }

    pub fn set_speed(&mut self, speed_ms: u32) {
        self.speed_ms = speed_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f32 = 300.0;
    const S: f32 = 10.0;

    fn engine(len: usize, infinite: bool) -> PositionEngine {
        PositionEngine::new(len, Geometry::new(W, S, 1), infinite, 400)
    }

    fn slot(p: usize) -> f32 {
        W * p as f32 + S * p as f32
    }

    #[test]
    fn test_initial_state_rests_on_first_item() {
        let e = engine(5, true);
        assert_eq!(e.current_index(), 1);
        assert_eq!(e.state().offset, slot(1));
        assert_eq!(e.state().transition_duration_ms, 0);

        let e = engine(5, false);
        assert_eq!(e.state().offset, 0.0);
    }

    #[test]
    fn test_nav_availability() {
        assert!(engine(3, false).can_go_next());
        assert!(engine(1, true).can_go_previous());
        assert!(!engine(1, false).can_go_next());
        assert!(!engine(0, true).can_go_previous());
    }

    #[test]
    fn test_next_uses_direct_formula() {
        let mut e = engine(5, true);
        assert_eq!(e.go_next(), Nav::Moved);
        let st = e.state();
        assert_eq!(st.current_index, 2);
        assert_eq!(st.offset, W * 2.0 + S * 2.0);
        assert_eq!(st.transition_duration_ms, 400);
    }

    #[test]
    fn test_next_is_cyclic() {
        for n in 2..8 {
            for infinite in [false, true] {
                let mut e = engine(n, infinite);
                e.go_next();
                let start = e.current_index();
                for _ in 0..n {
                    assert!(e.go_next().is_moved());
                }
                assert_eq!(e.current_index(), start, "n={n} infinite={infinite}");
            }
        }
    }

    #[test]
    fn test_next_then_previous_is_inverse() {
        let mut e = engine(6, true);
        for start in 1..=5 {
            e.go_to_index(start - 1);
            e.go_next();
            e.go_previous();
            assert_eq!(e.current_index(), start);
            assert_eq!(e.state().offset, e.resting_offset(start));
        }
    }

    #[test]
    fn test_next_wraps_through_trailing_clone() {
        let mut e = engine(5, true);
        e.go_to_index(4);
        assert_eq!(e.current_index(), 5);

        assert_eq!(e.go_next(), Nav::Wrapped);
        let st = e.state();
        assert_eq!(st.current_index, 1);
        assert_eq!(st.offset, slot(6));
        assert_eq!(st.transition_duration_ms, 400);
    }

    #[test]
    fn test_previous_wraps_through_leading_clone() {
        let mut e = engine(5, true);
        assert_eq!(e.go_previous(), Nav::Wrapped);
        assert_eq!(e.current_index(), 5);
        assert_eq!(e.state().offset, 0.0);
    }

    #[test]
    fn test_wrap_with_multiple_slides_per_view() {
        // strip: 4' 5' 1 2 3 4 5 1' 2'
        let mut e = PositionEngine::new(5, Geometry::new(100.0, 0.0, 2), true, 250);
        assert_eq!(e.leading_clones(), 2);
        assert_eq!(e.state().offset, 200.0);

        e.go_previous();
        assert_eq!(e.current_index(), 5);
        assert_eq!(e.state().offset, 100.0); // slot 1 = clone of item 5

        e.go_next();
        assert_eq!(e.current_index(), 1);
        assert_eq!(e.state().offset, 700.0); // slot 7 = clone of item 1
    }

    #[test]
    fn test_finite_wrap_rewinds() {
        let mut e = engine(3, false);
        e.go_next();
        e.go_next();
        assert_eq!(e.state().offset, slot(2));
        assert_eq!(e.go_next(), Nav::Wrapped);
        assert_eq!(e.current_index(), 1);
        assert_eq!(e.state().offset, 0.0);

        assert_eq!(e.go_previous(), Nav::Wrapped);
        assert_eq!(e.current_index(), 3);
        assert_eq!(e.state().offset, slot(2));
    }

    #[test]
    fn test_single_finite_item_is_locked() {
        let mut e = engine(1, false);
        let before = e.state();
        assert_eq!(e.go_next(), Nav::Ignored);
        assert_eq!(e.go_previous(), Nav::Ignored);
        assert_eq!(e.go_to_index(0), Nav::Ignored);
        assert_eq!(e.state(), before);
    }

    #[test]
    fn test_single_infinite_item_still_loops() {
        let mut e = engine(1, true);
        assert_eq!(e.go_next(), Nav::Wrapped);
        assert_eq!(e.current_index(), 1);
        assert_eq!(e.state().offset, slot(2));
    }

    #[test]
    fn test_empty_engine_ignores_everything() {
        let mut e = engine(0, true);
        assert_eq!(e.go_next(), Nav::Ignored);
        assert_eq!(e.go_previous(), Nav::Ignored);
        assert_eq!(e.state().offset, 0.0);
        assert_eq!(e.resting_offset(3), 0.0);
    }

    #[test]
    fn test_dot_to_first_goes_through_trailing_clone() {
        let mut e = engine(4, true);
        e.go_to_index(3);
        assert_eq!(e.current_index(), 4);

        assert_eq!(e.go_to_index(0), Nav::Wrapped);
        assert_eq!(e.current_index(), 1);
        assert_eq!(e.state().offset, slot(5));
    }

    #[test]
    fn test_dot_to_first_while_on_first_stays_put() {
        let mut e = engine(4, true);
        assert_eq!(e.go_to_index(0), Nav::Moved);
        assert_eq!(e.state().offset, slot(1));
    }

    #[test]
    fn test_dot_to_last_from_first_goes_through_leading_clone() {
        let mut e = engine(4, true);
        assert_eq!(e.go_to_index(3), Nav::Wrapped);
        assert_eq!(e.current_index(), 4);
        assert_eq!(e.state().offset, 0.0);

        e.go_to_index(1);
        assert_eq!(e.go_to_index(3), Nav::Moved);
        assert_eq!(e.state().offset, slot(4));
    }

    #[test]
    fn test_dot_direct_and_out_of_range() {
        let mut e = engine(4, false);
        assert_eq!(e.go_to_index(2), Nav::Moved);
        assert_eq!(e.current_index(), 3);
        assert_eq!(e.state().offset, slot(2));
        assert_eq!(e.go_to_index(3), Nav::Moved);
        assert_eq!(e.go_to_index(0), Nav::Moved);
        assert_eq!(e.state().offset, 0.0);

        assert_eq!(e.go_to_index(4), Nav::Ignored);
        assert_eq!(e.current_index(), 1);
    }

    #[test]
    fn test_geometry_measured_late() {
        let mut e = PositionEngine::new(3, Geometry::unmeasured(0.0, 1), true, 400);
        e.go_next();
        assert_eq!(e.state().offset, 0.0);

        e.set_geometry(Geometry::new(200.0, 0.0, 1));
        assert_eq!(e.current_index(), 2);
        assert_eq!(e.state().offset, 400.0);
        assert_eq!(e.state().transition_duration_ms, 0);
    }

    #[test]
    fn test_set_len_clamps_index() {
        let mut e = engine(5, true);
        e.go_to_index(4);
        e.set_len(3);
        assert_eq!(e.current_index(), 3);
        assert_eq!(e.state().offset, slot(3));

        e.set_len(0);
        assert_eq!(e.current_index(), 1);
        assert_eq!(e.state().offset, 0.0);
    }

    #[test]
    fn test_offset_never_negative() {
        let mut e = engine(3, false);
        e.set_offset(-50.0, 0);
        assert_eq!(e.state().offset, 0.0);
    }
}
