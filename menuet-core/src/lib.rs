//! Board-agnostic menu engine for small text displays
//!
//! This crate contains everything between a button press and a line of
//! text, without touching any hardware:
//!
//! - Static menu tree (submenus, parameters, info screens, functions)
//! - Bounded parameter editing through host-owned storage
//! - Fixed-width line formatting
//! - Rendering of the visible rows through a host line sink
//! - Navigation state machine (up, down, enter, back, execute)
//! - Layout configuration
//!
//! # Example
//!
//! ```
//! use core::cell::Cell;
//! use menuet_core::{LineFn, MenuTree, Navigator, NodeId, Parameter};
//!
//! let brightness = Cell::new(50);
//! let mut tree: MenuTree = MenuTree::new("Main").unwrap();
//! tree.add_parameter(
//!     NodeId::ROOT,
//!     "Brightness",
//!     Parameter::integer(&brightness, 0, 100, 10).unwrap(),
//! )
//! .unwrap();
//!
//! let mut nav = Navigator::default();
//! nav.register_line_callback(Some(LineFn(|_text: &str, _row: usize| {})))
//!     .unwrap();
//! nav.register_root(Some(tree)).unwrap();
//!
//! nav.enter().unwrap();
//! nav.navigate_up().unwrap();
//! assert_eq!(brightness.get(), 60);
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod format;
pub mod nav;
pub mod param;
pub mod render;
pub mod tree;

pub use config::{parse_layout, Layout, ParseError};
pub use error::{MenuError, MenuResult, TreeError};
pub use format::{format_row, Line, RowState, MAX_LINE_LEN};
pub use nav::{NavState, NavigationEvent, Navigator, Position};
pub use param::{Direction, ParamKind, ParamValue, Parameter};
pub use render::{render, LineFn, LineSink, View};
pub use tree::{MenuNode, MenuTree, NodeId, NodeKind};
