// Pointer input types shared by the interaction controllers

/// Pointer coordinates in device pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// (dx, dy) travelled since `origin`
    pub fn delta_from(&self, origin: PointerPosition) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// Drag-and-drop state the host reports for a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardDragState {
    /// The card itself is being dragged to a new slot
    pub is_being_dragged: bool,
    /// This instance is the transient clone following the pointer
    pub is_drag_overlay: bool,
}

impl CardDragState {
    pub const IDLE: CardDragState = CardDragState {
        is_being_dragged: false,
        is_drag_overlay: false,
    };

    pub fn is_idle(&self) -> bool {
        !self.is_being_dragged && !self.is_drag_overlay
    }
}
