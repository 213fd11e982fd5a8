//! Screen rendering
//!
//! Rendering happens in two steps. [`View::for_position`] works out what
//! the current position shows (a sibling listing or an info detail screen)
//! and how many rows have to be refreshed. [`render`] then formats each row
//! and hands it to the host's [`LineSink`], row indices running
//! contiguously from 0.

use crate::config::Layout;
use crate::format::{blank_line, format_row, text_line, RowState};
use crate::nav::Position;
use crate::tree::{MenuTree, NodeId, NodeKind};

/// Receiver of formatted rows
///
/// Implementations overwrite exactly row `row` of their display surface.
/// They are called from inside navigation calls, so they must return
/// promptly and must not call back into the navigator.
pub trait LineSink {
    fn write_line(&mut self, row: usize, text: &str);
}

impl<T: LineSink + ?Sized> LineSink for &mut T {
    fn write_line(&mut self, row: usize, text: &str) {
        (**self).write_line(row, text)
    }
}

/// Adapts a `FnMut(text, row)` closure to [`LineSink`]
pub struct LineFn<F>(pub F);

impl<F: FnMut(&str, usize)> LineSink for LineFn<F> {
    fn write_line(&mut self, row: usize, text: &str) {
        (self.0)(text, row)
    }
}

/// What the display shows for a position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum View {
    /// Children of `menu`, one row each, then blank rows
    Listing {
        menu: NodeId,
        selected: usize,
        /// Parameter currently being edited, if any
        editing: Option<NodeId>,
        visible_rows: usize,
    },
    /// Name and text of an info node, then blank rows
    Detail { item: NodeId, visible_rows: usize },
    /// Nothing to draw (function nodes are never a resting position)
    Empty,
}

impl View {
    /// Compute the view for `position`
    ///
    /// A submenu refreshes as many rows as the longer of itself and its
    /// parent's listing, so rows left over from the level above get
    /// blanked. Rows left over from a deeper level are not: set
    /// [`Layout::rows`] to the display height to clear those too, as it
    /// raises every count to a fixed minimum. Parameters are edited in
    /// place inside their parent's listing.
    pub fn for_position<const N: usize>(
        tree: &MenuTree<'_, N>,
        position: Position,
        layout: &Layout,
    ) -> View {
        let Some(node) = tree.get(position.node) else {
            return View::Empty;
        };
        let parent_rows = node.parent().map(|p| tree.child_count(p));
        let floor = layout.rows as usize;

        match node.kind() {
            NodeKind::Submenu(children) => View::Listing {
                menu: position.node,
                selected: position.selected,
                editing: None,
                visible_rows: children.len().max(parent_rows.unwrap_or(0)).max(floor),
            },
            NodeKind::Parameter(_) => match (node.parent(), parent_rows) {
                (Some(parent), Some(rows)) => View::Listing {
                    menu: parent,
                    selected: position.selected,
                    editing: Some(position.node),
                    visible_rows: rows.max(floor),
                },
                _ => View::Empty,
            },
            NodeKind::Info(_) => View::Detail {
                item: position.node,
                visible_rows: parent_rows.unwrap_or(0).max(2).max(floor),
            },
            NodeKind::Function(_) => View::Empty,
        }
    }

    /// Total rows a render pass of this view writes
    pub fn visible_rows(&self) -> usize {
        match *self {
            View::Listing { visible_rows, .. } | View::Detail { visible_rows, .. } => visible_rows,
            View::Empty => 0,
        }
    }
}

/// Write `view` to `sink`, returning the number of rows written
pub fn render<const N: usize, S: LineSink + ?Sized>(
    tree: &MenuTree<'_, N>,
    view: &View,
    layout: &Layout,
    sink: &mut S,
) -> usize {
    let (drawn, visible_rows) = match *view {
        View::Listing {
            menu,
            selected,
            editing,
            visible_rows,
        } => {
            let children = tree.children(menu);
            for (row, &child) in children.iter().enumerate() {
                let Some(node) = tree.get(child) else {
                    continue;
                };
                let state = RowState {
                    selected: row == selected,
                    editing: editing == Some(child),
                };
                sink.write_line(row, &format_row(node, state, layout));
            }
            (children.len(), visible_rows)
        }
        View::Detail { item, visible_rows } => {
            let Some(node) = tree.get(item) else {
                return 0;
            };
            sink.write_line(0, &text_line(node.name(), layout));
            sink.write_line(1, &text_line(node.info().unwrap_or(""), layout));
            (2, visible_rows)
        }
        View::Empty => return 0,
    };

    let blank = blank_line(layout);
    for row in drawn..visible_rows {
        sink.write_line(row, &blank);
    }
    drawn.max(visible_rows)
}
