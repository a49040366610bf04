//! Questionnaire state machine: layout, reveal predicates, dependency rules and the pure
//! transitions over [`FormRecord`](crate::domain::FormRecord).

pub mod layout;
pub mod rules;
pub mod state;
pub mod visibility;

pub use layout::{Control, LayoutEntry};
pub use state::FormStateManager;
