//! Post-transition correction for infinite mode.
//!
//! After a wrap the strip sits on a clone. When the renderer reports that the
//! animation finished, the offset is moved to the matching real slide with a
//! zero duration so the swap is invisible.

use crate::PositionEngine;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Snap {
    None,
    ToFirst,
    ToLast,
}

/// Handles one transition-end signal. Does nothing outside infinite mode.
pub fn reconcile(engine: &mut PositionEngine) -> Snap {
    if !engine.is_infinite() || engine.is_empty() {
        return Snap::None;
    }
    let current = engine.current_index();
    let snap = if current <= 1 {
        Snap::ToFirst
    } else if current >= engine.len() {
        Snap::ToLast
    } else {
        return Snap::None;
    };

    engine.snap_to_rest(0);
    log::debug!(
        "reconcile: {snap:?} at index {current}, offset {}",
        engine.state().offset
    );
    snap
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Geometry, Nav};

    fn engine(len: usize, infinite: bool) -> PositionEngine {
        PositionEngine::new(len, Geometry::new(300.0, 0.0, 1), infinite, 400)
    }

    #[test]
    fn test_forward_wrap_then_snap() {
        let mut e = engine(5, true);
        e.go_to_index(4);
        reconcile(&mut e);

        assert_eq!(e.go_next(), Nav::Wrapped);
        assert_eq!(e.state().offset, 1800.0);
        assert_eq!(e.state().transition_duration_ms, 400);

        assert_eq!(reconcile(&mut e), Snap::ToFirst);
        let st = e.state();
        assert_eq!(st.current_index, 1);
        assert_eq!(st.transition_duration_ms, 0);
        assert_eq!(st.offset, 300.0);
        assert_eq!(st.offset, e.resting_offset(1));
    }

    #[test]
    fn test_backward_wrap_then_snap() {
        let mut e = engine(5, true);
        e.go_previous();
        assert_eq!(e.state().offset, 0.0);

        assert_eq!(reconcile(&mut e), Snap::ToLast);
        assert_eq!(e.state().offset, 1500.0);
        assert_eq!(e.state().transition_duration_ms, 0);
    }

    #[test]
    fn test_middle_is_untouched() {
        let mut e = engine(5, true);
        e.go_next();
        let before = e.state();
        assert_eq!(reconcile(&mut e), Snap::None);
        assert_eq!(e.state(), before);
    }

    #[test]
    fn test_never_runs_when_finite() {
        let mut e = engine(3, false);
        e.go_previous();
        let before = e.state();
        assert_eq!(reconcile(&mut e), Snap::None);
        assert_eq!(e.state(), before);
        assert_eq!(before.transition_duration_ms, 400);
    }

    #[test]
    fn test_every_wrap_reconciles_to_resting_offset() {
        for n in 1..6 {
            let mut e = PositionEngine::new(n, Geometry::new(120.0, 8.0, 2), true, 300);
            for _ in 0..(2 * n + 1) {
                e.go_next();
                reconcile(&mut e);
                assert_eq!(e.state().offset, e.resting_offset(e.current_index()));
            }
            for _ in 0..(2 * n + 1) {
                e.go_previous();
                reconcile(&mut e);
                assert_eq!(e.state().offset, e.resting_offset(e.current_index()));
            }
        }
    }
}
