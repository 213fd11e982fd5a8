//! Status codes reported by the menu engine
//!
//! Every navigation and registration call returns [`MenuResult`]. Tree
//! construction has its own [`TreeError`] since it happens once, before
//! registration.

use core::fmt;

/// Outcome of a navigation or registration call
pub type MenuResult = Result<(), MenuError>;

/// Errors reported by navigation and registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuError {
    /// A required callback or root was absent, or nothing is registered yet
    NullPointer,
    /// Operation attempted on a node of the wrong variant
    InvalidType,
    /// Boundary reached (first/last entry, parameter at min/max)
    OutOfRange,
    /// Back requested from the root
    NotFound,
    /// Function node activated without a bound action
    NotImplemented,
    /// Transition not defined for the current resting state
    Unknown,
}

impl MenuError {
    /// Expected steady-state outcome of normal use (hitting a boundary)
    pub fn is_boundary(&self) -> bool {
        matches!(self, MenuError::OutOfRange | MenuError::NotFound)
    }

    /// Missing registration or a broken tree invariant
    ///
    /// Hosts should surface these loudly; they never happen in a correctly
    /// wired system.
    pub fn is_integration_fault(&self) -> bool {
        matches!(self, MenuError::NullPointer | MenuError::InvalidType)
    }
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MenuError::NullPointer => "nothing registered",
            MenuError::InvalidType => "wrong node type",
            MenuError::OutOfRange => "out of range",
            MenuError::NotFound => "no parent",
            MenuError::NotImplemented => "no action bound",
            MenuError::Unknown => "undefined transition",
        };
        f.write_str(text)
    }
}

/// Errors raised while building a [`MenuTree`](crate::tree::MenuTree)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TreeError {
    /// Node arena is full
    Full,
    /// Submenu already holds the maximum number of children
    TooManyChildren,
    /// Parent node is not a submenu
    NotASubmenu,
    /// Node id does not belong to this tree
    NoSuchNode,
    /// Display name exceeds the name capacity
    NameTooLong,
    /// Parameter bounds or step are unusable
    InvalidBounds,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TreeError::Full => "node capacity exhausted",
            TreeError::TooManyChildren => "too many children",
            TreeError::NotASubmenu => "parent is not a submenu",
            TreeError::NoSuchNode => "no such node",
            TreeError::NameTooLong => "name too long",
            TreeError::InvalidBounds => "invalid parameter bounds",
        };
        f.write_str(text)
    }
}
