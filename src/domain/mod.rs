pub mod board;
pub mod drag;
pub mod id;
pub mod task;

pub use board::{Board, Column};
pub use drag::{BoardController, DragEntity, DragState, OverKind};
pub use id::EntityId;
pub use task::Task;
