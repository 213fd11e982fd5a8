//! Display plumbing for the Menuet menu engine
//!
//! This crate provides:
//! - `Screen`, a row buffer that receives rendered lines and tracks which
//!   rows changed
//! - `DisplayBackend` trait for the hardware that finally shows the text
//! - `InputSource` trait and `pump` for feeding encoder or button events
//!   into a navigator
//!
//! # Architecture
//!
//! The navigator renders into a `Screen` registered as its line sink. The
//! main loop pumps input, then flushes the screen to the backend, which
//! only redraws dirty rows.
//!
//! ```
//! use menuet_core::{MenuTree, NavigationEvent, Navigator, NodeId};
//! use menuet_display::{pump, EventQueue, Screen};
//!
//! let mut tree: MenuTree = MenuTree::new("Main").unwrap();
//! tree.add_submenu(NodeId::ROOT, "Settings").unwrap();
//! tree.add_submenu(NodeId::ROOT, "Tools").unwrap();
//!
//! let mut nav = Navigator::default();
//! nav.register_line_callback(Some(Screen::<4>::new())).unwrap();
//! nav.register_root(Some(tree)).unwrap();
//!
//! let mut input: EventQueue<8> = EventQueue::new();
//! input.push(NavigationEvent::Down).unwrap();
//! pump(&mut nav, &mut input);
//!
//! let screen = nav.sink().unwrap();
//! assert!(screen.get_line(1).unwrap().starts_with("> Tools"));
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod input;
pub mod screen;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use input::{pump, EventQueue, InputSource, PumpReport};
pub use screen::{Screen, SCREEN_ROWS};
