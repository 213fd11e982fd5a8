//! Discrete navigation inputs

/// Input the host feeds into [`Navigator::handle`](super::Navigator::handle)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavigationEvent {
    /// Previous entry, or increase the edited value
    Up,
    /// Next entry, or decrease the edited value
    Down,
    /// Open the highlighted entry
    Enter,
    /// Return to the parent level
    Back,
    /// Run the highlighted function entry
    Execute,
}

impl NavigationEvent {
    /// Map a rotary encoder detent (+1 clockwise, -1 counter-clockwise)
    ///
    /// Clockwise moves down the list, matching the usual knob feel on
    /// vertical menus.
    pub fn from_rotation(delta: i8) -> Option<Self> {
        match delta {
            d if d > 0 => Some(NavigationEvent::Down),
            d if d < 0 => Some(NavigationEvent::Up),
            _ => None,
        }
    }

    /// Returns true for up/down
    pub fn is_step(&self) -> bool {
        matches!(self, NavigationEvent::Up | NavigationEvent::Down)
    }
}
