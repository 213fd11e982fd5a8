//! Navigation state machine
//!
//! Owns the current position inside a registered tree and turns discrete
//! input events (up, down, enter, back, execute) into transitions. Every
//! transition runs to completion, including the re-render, before the call
//! returns.

pub mod event;
pub mod machine;
pub mod position;

pub use event::NavigationEvent;
pub use machine::Navigator;
pub use position::{NavState, Position};
