// Interaction module - pointer resize sessions and discrete nudges
pub mod movement;
pub mod pointer;
pub mod resize;
pub mod subscription;
pub mod validity;

pub use movement::{Direction, MoveController};
pub use pointer::{CardDragState, PointerPosition};
pub use resize::{
    can_resize_bottom, can_resize_right, EndReason, ResizeController, ResizeOutcome, ResizeSession,
    ResizeState,
};
pub use subscription::{ForwardedInput, InputSurface, Subscription};
pub use validity::{span_fits, ResizeRule};
