//! # Tavla Core
//!
//! Core business logic and domain models for Tavla kanban task management.
//!
//! This crate provides the board model (ordered columns, ordered tasks) and
//! the drag interaction state machine that reorders them, without any
//! dependency on specific UI implementations. A presentation layer feeds raw
//! drag events into [`BoardController`] and re-renders from the resulting
//! [`Board`] snapshot.

pub mod domain;
pub mod error;

// Re-export commonly used types
pub use domain::{
    board::{Board, Column},
    drag::{BoardController, DragEntity, DragState, OverKind},
    id::EntityId,
    task::Task,
};
pub use error::{Result, TavlaError};
