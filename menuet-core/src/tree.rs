//! Static menu tree
//!
//! All nodes live in one fixed-capacity arena and refer to each other by
//! [`NodeId`]. Children are owned by position in their parent's child list;
//! the parent link is a plain index used for walking back up and never
//! implies ownership.
//!
//! The tree is built once through the `add_*` methods and offers no way to
//! remove or relink a node afterwards.

use core::fmt;

use heapless::{String, Vec};

use crate::error::TreeError;
use crate::param::Parameter;

/// Maximum display name length (a 20-byte C-style name field)
pub const MAX_NAME_LEN: usize = 19;

/// Maximum children per submenu
pub const MAX_CHILDREN: usize = 16;

/// Default node capacity of a [`MenuTree`]
pub const DEFAULT_CAPACITY: usize = 32;

/// Display name of a node
pub type Name = String<MAX_NAME_LEN>;

/// Action run when a function node is activated
pub type Action<'a> = &'a dyn Fn();

/// Index of a node inside its tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NodeId(u16);

impl NodeId {
    /// The root node of every tree
    pub const ROOT: NodeId = NodeId(0);

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Variant payload of a node
pub enum NodeKind<'a> {
    /// Ordered children, in display and navigation order
    Submenu(Vec<NodeId, MAX_CHILDREN>),
    /// Editable value bound to host storage
    Parameter(Parameter<'a>),
    /// Read-only text shown on a detail screen
    Info(&'a str),
    /// Action invoked on activation, if any
    Function(Option<Action<'a>>),
}

impl fmt::Debug for NodeKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Submenu(children) => f.debug_tuple("Submenu").field(children).finish(),
            NodeKind::Parameter(param) => f.debug_tuple("Parameter").field(param).finish(),
            NodeKind::Info(text) => f.debug_tuple("Info").field(text).finish(),
            NodeKind::Function(action) => f
                .debug_struct("Function")
                .field("bound", &action.is_some())
                .finish(),
        }
    }
}

/// One entry of the menu
#[derive(Debug)]
pub struct MenuNode<'a> {
    name: Name,
    parent: Option<NodeId>,
    kind: NodeKind<'a>,
}

impl<'a> MenuNode<'a> {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Parent node, `None` only for the root
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn kind(&self) -> &NodeKind<'a> {
        &self.kind
    }

    pub fn is_submenu(&self) -> bool {
        matches!(self.kind, NodeKind::Submenu(_))
    }

    /// Children of a submenu; empty for every other variant
    pub fn children(&self) -> &[NodeId] {
        match &self.kind {
            NodeKind::Submenu(children) => children.as_slice(),
            _ => &[],
        }
    }

    pub fn parameter(&self) -> Option<&Parameter<'a>> {
        match &self.kind {
            NodeKind::Parameter(param) => Some(param),
            _ => None,
        }
    }

    pub fn info(&self) -> Option<&'a str> {
        match self.kind {
            NodeKind::Info(text) => Some(text),
            _ => None,
        }
    }
}

/// Fixed-capacity arena of menu nodes rooted at [`NodeId::ROOT`]
#[derive(Debug)]
pub struct MenuTree<'a, const N: usize = DEFAULT_CAPACITY> {
    nodes: Vec<MenuNode<'a>, N>,
}

impl<'a, const N: usize> MenuTree<'a, N> {
    /// Create a tree holding only a root submenu
    pub fn new(root_name: &str) -> Result<Self, TreeError> {
        let mut nodes = Vec::new();
        nodes
            .push(MenuNode {
                name: Name::try_from(root_name).map_err(|_| TreeError::NameTooLong)?,
                parent: None,
                kind: NodeKind::Submenu(Vec::new()),
            })
            .map_err(|_| TreeError::Full)?;
        Ok(Self { nodes })
    }

    /// Append an empty submenu under `parent`
    pub fn add_submenu(&mut self, parent: NodeId, name: &str) -> Result<NodeId, TreeError> {
        self.push(parent, name, NodeKind::Submenu(Vec::new()))
    }

    /// Append a parameter under `parent`
    pub fn add_parameter(
        &mut self,
        parent: NodeId,
        name: &str,
        parameter: Parameter<'a>,
    ) -> Result<NodeId, TreeError> {
        self.push(parent, name, NodeKind::Parameter(parameter))
    }

    /// Append an info entry under `parent`
    pub fn add_info(&mut self, parent: NodeId, name: &str, text: &'a str) -> Result<NodeId, TreeError> {
        self.push(parent, name, NodeKind::Info(text))
    }

    /// Append a function entry under `parent`
    ///
    /// A missing action is allowed here; activating it reports
    /// `NotImplemented`.
    pub fn add_function(
        &mut self,
        parent: NodeId,
        name: &str,
        action: Option<Action<'a>>,
    ) -> Result<NodeId, TreeError> {
        self.push(parent, name, NodeKind::Function(action))
    }

    fn push(&mut self, parent: NodeId, name: &str, kind: NodeKind<'a>) -> Result<NodeId, TreeError> {
        match self.nodes.get(parent.index()).map(|node| &node.kind) {
            None => return Err(TreeError::NoSuchNode),
            Some(NodeKind::Submenu(children)) if children.is_full() => {
                return Err(TreeError::TooManyChildren)
            }
            Some(NodeKind::Submenu(_)) => {}
            Some(_) => return Err(TreeError::NotASubmenu),
        }

        let name = Name::try_from(name).map_err(|_| TreeError::NameTooLong)?;
        let id = NodeId(u16::try_from(self.nodes.len()).map_err(|_| TreeError::Full)?);
        self.nodes
            .push(MenuNode {
                name,
                parent: Some(parent),
                kind,
            })
            .map_err(|_| TreeError::Full)?;

        if let Some(NodeKind::Submenu(children)) =
            self.nodes.get_mut(parent.index()).map(|node| &mut node.kind)
        {
            children.push(id).map_err(|_| TreeError::TooManyChildren)?;
        }
        Ok(id)
    }

    pub fn get(&self, id: NodeId) -> Option<&MenuNode<'a>> {
        self.nodes.get(id.index())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(MenuNode::parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(MenuNode::children).unwrap_or(&[])
    }

    pub fn child(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.children(id).get(index).copied()
    }

    pub fn child_count(&self, id: NodeId) -> usize {
        self.children(id).len()
    }

    /// Index of `id` within its parent's children
    pub fn position_in_parent(&self, id: NodeId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children(parent).iter().position(|&child| child == id)
    }

    /// Number of parent links between `id` and the root
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut cursor = self.parent(id);
        while let Some(node) = cursor {
            depth += 1;
            cursor = self.parent(node);
        }
        depth
    }

    /// Number of nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; a tree has at least its root
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
