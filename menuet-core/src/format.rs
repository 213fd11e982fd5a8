//! Line formatting
//!
//! Turns one node into one fixed-capacity text row. Rows are built in a
//! `heapless::String` through a writer that drops whatever does not fit,
//! so no name, value or info text can push a row past [`MAX_LINE_LEN`].

use core::fmt::{self, Write};

use heapless::String;

use crate::config::Layout;
use crate::param::ParamValue;
use crate::tree::{MenuNode, NodeKind};

/// Longest row handed to the line sink (32 bytes with a C terminator)
pub const MAX_LINE_LEN: usize = 31;

/// Width of the selection marker column
pub const MARKER_WIDTH: usize = 2;

pub const SELECTED_MARKER: &str = "> ";
pub const UNSELECTED_MARKER: &str = "  ";
pub const EDIT_MARKER: &str = ">";
pub const TRUNCATION_INDICATOR: &str = "...";

/// One formatted row
pub type Line = String<MAX_LINE_LEN>;

/// How a row relates to the current position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RowState {
    /// Row is the highlighted sibling
    pub selected: bool,
    /// Row is the parameter being edited
    pub editing: bool,
}

impl RowState {
    pub const IDLE: RowState = RowState {
        selected: false,
        editing: false,
    };

    pub const SELECTED: RowState = RowState {
        selected: true,
        editing: false,
    };

    pub const EDITING: RowState = RowState {
        selected: true,
        editing: true,
    };
}

/// `fmt::Write` adapter that silently truncates at the line capacity
struct LineWriter<'b> {
    line: &'b mut Line,
}

impl Write for LineWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.line.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

fn build(f: impl FnOnce(&mut LineWriter<'_>) -> fmt::Result) -> Line {
    let mut line = Line::new();
    // LineWriter never fails; truncation is the only overflow behavior
    let _ = f(&mut LineWriter { line: &mut line });
    line
}

/// Left-justify `text` in a field of exactly `width` characters
fn field(w: &mut LineWriter<'_>, text: &str, width: u8) -> fmt::Result {
    write!(w, "{:<1$.1$}", text, width as usize)
}

/// Format a node as a row of its parent's listing
pub fn format_row(node: &MenuNode<'_>, state: RowState, layout: &Layout) -> Line {
    let marker = if state.selected && !state.editing {
        SELECTED_MARKER
    } else {
        UNSELECTED_MARKER
    };

    build(|w| {
        w.write_str(marker)?;
        match node.kind() {
            NodeKind::Parameter(param) => {
                field(w, node.name(), layout.param_name_width)?;
                w.write_str(if state.editing { EDIT_MARKER } else { " " })?;
                w.write_str(": ")?;
                match param.value() {
                    ParamValue::Int(v) => write!(w, "{:01$}", v, layout.int_width as usize),
                    ParamValue::Float(v) => {
                        write!(w, "{:03.*}", layout.float_precision as usize, v)
                    }
                    ParamValue::Flag(on) => w.write_str(if on { "ON" } else { "OFF" }),
                }
            }
            NodeKind::Info(text) => {
                field(w, node.name(), layout.info_name_width)?;
                w.write_str(": ")?;
                field(w, text, layout.info_preview_width)?;
                if text.chars().count() >= layout.info_threshold as usize {
                    w.write_str(TRUNCATION_INDICATOR)
                } else {
                    w.write_str("   ")
                }
            }
            NodeKind::Submenu(_) | NodeKind::Function(_) => {
                field(w, node.name(), layout.name_width)
            }
        }
    })
}

/// Blank row that overwrites whatever the display showed there before
pub fn blank_line(layout: &Layout) -> Line {
    text_line("", layout)
}

/// Free text padded to the blank width and cut at [`MAX_LINE_LEN`]
pub fn text_line(text: &str, layout: &Layout) -> Line {
    build(|w| write!(w, "{:<1$}", text, layout.blank_width()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::param::Parameter;
    use crate::tree::{MenuTree, NodeId};
    use core::cell::Cell;

    fn layout() -> Layout {
        Layout::default()
    }

    #[test]
    fn test_generic_row_markers() {
        let mut tree: MenuTree = MenuTree::new("Main").unwrap();
        let id = tree.add_submenu(NodeId::ROOT, "Settings").unwrap();
        let node = tree.get(id).unwrap();

        let selected = format_row(node, RowState::SELECTED, &layout());
        assert!(selected.starts_with("> Settings"));
        assert_eq!(selected.len(), 29);

        let idle = format_row(node, RowState::IDLE, &layout());
        assert!(idle.starts_with("  Settings"));
    }

    #[test]
    fn test_integer_row() {
        let value = Cell::new(50);
        let mut tree: MenuTree = MenuTree::new("Main").unwrap();
        let id = tree
            .add_parameter(
                NodeId::ROOT,
                "Brightness",
                Parameter::integer(&value, 0, 100, 10).unwrap(),
            )
            .unwrap();
        let node = tree.get(id).unwrap();

        assert_eq!(
            format_row(node, RowState::SELECTED, &layout()).as_str(),
            "> Brightness  : 00050"
        );
        assert_eq!(
            format_row(node, RowState::EDITING, &layout()).as_str(),
            "  Brightness >: 00050"
        );

        value.set(-7);
        assert_eq!(
            format_row(node, RowState::IDLE, &layout()).as_str(),
            "  Brightness  : -0007"
        );
    }

    #[test]
    fn test_float_and_flag_rows() {
        let gain = Cell::new(1.5f32);
        let flags = Cell::new(0b0000_0100u8);
        let mut tree: MenuTree = MenuTree::new("Main").unwrap();
        let f = tree
            .add_parameter(
                NodeId::ROOT,
                "Gain",
                Parameter::float(&gain, 0.0, 10.0, 0.5).unwrap(),
            )
            .unwrap();
        let b = tree
            .add_parameter(NodeId::ROOT, "Beep", Parameter::flag(&flags, 2).unwrap())
            .unwrap();

        assert_eq!(
            format_row(tree.get(f).unwrap(), RowState::IDLE, &layout()).as_str(),
            "  Gain        : 1.50"
        );
        assert_eq!(
            format_row(tree.get(b).unwrap(), RowState::IDLE, &layout()).as_str(),
            "  Beep        : ON"
        );

        flags.set(0);
        assert!(format_row(tree.get(b).unwrap(), RowState::IDLE, &layout()).ends_with(": OFF"));
    }

    #[test]
    fn test_info_row_indicator() {
        let mut tree: MenuTree = MenuTree::new("Main").unwrap();
        let long = tree
            .add_info(NodeId::ROOT, "About", "A long description")
            .unwrap();
        let short = tree.add_info(NodeId::ROOT, "Version", "1.2").unwrap();

        assert_eq!(
            format_row(tree.get(long).unwrap(), RowState::IDLE, &layout()).as_str(),
            "  About       : A long des..."
        );
        assert_eq!(
            format_row(tree.get(short).unwrap(), RowState::IDLE, &layout()).as_str(),
            "  Version     : 1.2          "
        );
    }

    #[test]
    fn test_info_threshold_is_inclusive() {
        let mut tree: MenuTree = MenuTree::new("Main").unwrap();
        let ten = tree.add_info(NodeId::ROOT, "Ten", "0123456789").unwrap();
        let nine = tree.add_info(NodeId::ROOT, "Nine", "012345678").unwrap();

        assert!(format_row(tree.get(ten).unwrap(), RowState::IDLE, &layout()).ends_with("..."));
        assert!(!format_row(tree.get(nine).unwrap(), RowState::IDLE, &layout()).contains("..."));
    }

    #[test]
    fn test_long_names_are_truncated() {
        let value = Cell::new(i32::MIN);
        let mut tree: MenuTree = MenuTree::new("Main").unwrap();
        let id = tree
            .add_parameter(
                NodeId::ROOT,
                "Nineteen characters",
                Parameter::integer(&value, i32::MIN, 0, 1).unwrap(),
            )
            .unwrap();

        let line = format_row(tree.get(id).unwrap(), RowState::EDITING, &layout());
        assert!(line.starts_with("  Nineteen ch>: "));
        assert!(line.len() <= MAX_LINE_LEN);
    }

    #[test]
    fn test_wide_layout_still_fits() {
        let wide = Layout {
            param_name_width: 29,
            int_width: 11,
            ..Layout::default()
        };
        let value = Cell::new(1);
        let mut tree: MenuTree = MenuTree::new("Main").unwrap();
        let id = tree
            .add_parameter(
                NodeId::ROOT,
                "Level",
                Parameter::integer(&value, 0, 9, 1).unwrap(),
            )
            .unwrap();
        assert_eq!(
            format_row(tree.get(id).unwrap(), RowState::IDLE, &wide).len(),
            MAX_LINE_LEN
        );
    }

    #[test]
    fn test_blank_and_text_lines() {
        let blank = blank_line(&layout());
        assert_eq!(blank.len(), 29);
        assert!(blank.chars().all(|c| c == ' '));

        let text = text_line("An info text far longer than any row can be", &layout());
        assert_eq!(text.len(), MAX_LINE_LEN);
        assert!(text.starts_with("An info text"));
    }
}
