use crate::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

impl PointerId {
    pub const MOUSE: PointerId = PointerId(0);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,   // Left mouse, touch
    Secondary, // Right mouse
    Tertiary,  // Middle mouse
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down(PointerButton),
    Up(PointerButton),
    Move,
    Cancel,
    Enter,
    Leave,
}

/// Pointer event in the receiving widget's local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerKind,
    pub event: PointerEventKind,
    pub position: Vec2,
}

impl PointerEvent {
    pub fn new(id: PointerId, event: PointerEventKind, position: Vec2) -> Self {
        Self {
            id,
            kind: PointerKind::Mouse,
            event,
            position,
        }
    }

    pub fn down(id: PointerId, x: f32, y: f32) -> Self {
        Self::new(
            id,
            PointerEventKind::Down(PointerButton::Primary),
            Vec2::new(x, y),
        )
    }

    pub fn moved(id: PointerId, x: f32, y: f32) -> Self {
        Self::new(id, PointerEventKind::Move, Vec2::new(x, y))
    }

    pub fn up(id: PointerId, x: f32, y: f32) -> Self {
        Self::new(
            id,
            PointerEventKind::Up(PointerButton::Primary),
            Vec2::new(x, y),
        )
    }

    pub fn cancel(id: PointerId) -> Self {
        Self::new(id, PointerEventKind::Cancel, Vec2::default())
    }

    pub fn enter(id: PointerId, x: f32, y: f32) -> Self {
        Self::new(id, PointerEventKind::Enter, Vec2::new(x, y))
    }

    pub fn leave(id: PointerId, x: f32, y: f32) -> Self {
        Self::new(id, PointerEventKind::Leave, Vec2::new(x, y))
    }

    pub fn with_kind(mut self, kind: PointerKind) -> Self {
        self.kind = kind;
        self
    }
}
