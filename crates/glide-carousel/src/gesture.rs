//! Single-pointer horizontal drag.
//!
//! While pressed the strip follows the pointer 1:1 with animation disabled.
//! On release the direction of travel decides the navigation: pointer ended
//! left of where it started ⇒ next, right ⇒ previous, unchanged ⇒ snap back.

use glide_core::{PointerButton, PointerEvent, PointerEventKind, PointerId};

use crate::{Nav, PositionEngine};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Pressed {
        pointer: PointerId,
        start_x: f32,
        current_x: f32,
        /// Strip offset when the press began.
        press_offset: f32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    Next,
    Previous,
    SnapBack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    Ignored,
    Pressed,
    Dragged,
    Released(Release, Nav),
    Cancelled,
    Hover(bool),
}

/// Cursor the host should show for the strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CursorHint {
    /// Pointer is elsewhere; leave the host's cursor alone.
    #[default]
    Auto,
    Grab,
    Grabbing,
}

#[derive(Clone, Debug, Default)]
pub struct GestureTracker {
    state: GestureState,
    hovered: bool,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_pressed(&self) -> bool {
        matches!(self.state, GestureState::Pressed { .. })
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn cursor(&self) -> CursorHint {
        if self.is_pressed() {
            CursorHint::Grabbing
        } else if self.hovered {
            CursorHint::Grab
        } else {
            CursorHint::Auto
        }
    }

    pub fn handle_pointer(
        &mut self,
        event: &PointerEvent,
        engine: &mut PositionEngine,
    ) -> GestureOutcome {
        match event.event {
            PointerEventKind::Down(PointerButton::Primary) => {
                if self.press(event.id, event.position.x, engine) {
                    GestureOutcome::Pressed
                } else {
                    GestureOutcome::Ignored
                }
            }
            PointerEventKind::Move => {
                if self.drag(event.id, event.position.x, engine) {
                    GestureOutcome::Dragged
                } else {
                    GestureOutcome::Ignored
                }
            }
            PointerEventKind::Up(PointerButton::Primary) => {
                match self.release(event.id, engine) {
                    Some((release, nav)) => GestureOutcome::Released(release, nav),
                    None => GestureOutcome::Ignored,
                }
            }
            PointerEventKind::Cancel => {
                if self.cancel(event.id, engine) {
                    GestureOutcome::Cancelled
                } else {
                    GestureOutcome::Ignored
                }
            }
            PointerEventKind::Enter => {
                self.hovered = true;
                GestureOutcome::Hover(true)
            }
            // A held drag keeps tracking outside the strip until release.
            PointerEventKind::Leave => {
                self.hovered = false;
                GestureOutcome::Hover(false)
            }
            _ => GestureOutcome::Ignored,
        }
    }

    /// Starts tracking `pointer`. A second pointer while one is held is ignored.
    pub fn press(&mut self, pointer: PointerId, x: f32, engine: &mut PositionEngine) -> bool {
        if self.is_pressed() {
            log::trace!("gesture: ignoring press from {pointer:?}, already tracking");
            return false;
        }
        let press_offset = engine.state().offset;
        self.hovered = true;
        self.state = GestureState::Pressed {
            pointer,
            start_x: x,
            current_x: x,
            press_offset,
        };
        engine.set_offset(press_offset, 0);
        true
    }

    pub fn drag(&mut self, pointer: PointerId, x: f32, engine: &mut PositionEngine) -> bool {
        let GestureState::Pressed {
            pointer: tracked,
            start_x,
            press_offset,
            ..
        } = self.state
        else {
            return false;
        };
        if tracked != pointer {
            return false;
        }
        if let GestureState::Pressed { current_x, .. } = &mut self.state {
            *current_x = x;
        }
        engine.set_offset(press_offset - (x - start_x), 0);
        log::trace!("gesture: drag dx={} offset={}", x - start_x, engine.state().offset);
        true
    }

    pub fn release(
        &mut self,
        pointer: PointerId,
        engine: &mut PositionEngine,
    ) -> Option<(Release, Nav)> {
        let GestureState::Pressed {
            pointer: tracked,
            start_x,
            current_x,
            ..
        } = self.state
        else {
            return None;
        };
        if tracked != pointer {
            return None;
        }
        self.state = GestureState::Idle;

        let speed = engine.speed_ms();
        if engine.is_locked() {
            engine.snap_to_rest(speed);
            return Some((Release::SnapBack, Nav::Ignored));
        }

        let decided = if current_x < start_x {
            (Release::Next, engine.go_next())
        } else if current_x > start_x {
            (Release::Previous, engine.go_previous())
        } else {
            engine.snap_to_rest(speed);
            (Release::SnapBack, Nav::Ignored)
        };
        log::debug!("gesture: release {:?} -> {:?}", decided.0, decided.1);
        Some(decided)
    }

    /// Re-anchors a held drag after the engine snapped off a clone, so the
    /// strip keeps the pointer's displacement from the new resting offset.
    pub fn rebase(&mut self, engine: &mut PositionEngine) -> bool {
        let GestureState::Pressed {
            start_x,
            current_x,
            press_offset,
            ..
        } = &mut self.state
        else {
            return false;
        };
        *press_offset = engine.resting_offset(engine.current_index());
        engine.set_offset(*press_offset - (*current_x - *start_x), 0);
        true
    }

    /// Drops the tracked pointer and slides back to the current slide.
    pub fn cancel(&mut self, pointer: PointerId, engine: &mut PositionEngine) -> bool {
        match self.state {
            GestureState::Pressed { pointer: tracked, .. } if tracked == pointer => {
                self.state = GestureState::Idle;
                engine.snap_to_rest(engine.speed_ms());
                true
            }
            _ => false,
        }
    }
}
