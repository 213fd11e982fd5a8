//! Current position within the tree

use crate::tree::{NodeId, NodeKind};

/// Node the navigator rests on plus the highlighted child index
///
/// `selected` indexes the children of `node` while resting on a submenu.
/// While resting on a parameter or info node it keeps the index of that
/// node within its parent, which is the row highlighted in the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position {
    pub node: NodeId,
    pub selected: usize,
}

impl Position {
    /// Freshly registered tree: root, first entry
    pub const fn root() -> Self {
        Self {
            node: NodeId::ROOT,
            selected: 0,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::root()
    }
}

/// Resting states, named after the current node's variant
///
/// There is no function state: activating a function runs it and stays on
/// the submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavState {
    AtSubmenu,
    AtParameter,
    AtInfo,
}

impl NavState {
    /// State for resting on a node of this kind
    pub fn of(kind: &NodeKind<'_>) -> Option<Self> {
        match kind {
            NodeKind::Submenu(_) => Some(NavState::AtSubmenu),
            NodeKind::Parameter(_) => Some(NavState::AtParameter),
            NodeKind::Info(_) => Some(NavState::AtInfo),
            NodeKind::Function(_) => None,
        }
    }

    /// Up/down edit a value instead of moving the highlight
    pub fn is_editing(&self) -> bool {
        matches!(self, NavState::AtParameter)
    }
}
