//! Navigator definition
//!
//! The navigator is the one engine-state object: registered tree, line
//! sink, layout and current position. Hosts may run several independent
//! navigators; each is driven from a single input loop.

use super::event::NavigationEvent;
use super::position::{NavState, Position};
use crate::config::Layout;
use crate::error::{MenuError, MenuResult};
use crate::param::Direction;
use crate::render::{render, LineSink, View};
use crate::tree::{Action, MenuTree, NodeId, NodeKind, DEFAULT_CAPACITY};

/// Menu engine bound to one tree and one line sink
pub struct Navigator<'a, S, const N: usize = DEFAULT_CAPACITY> {
    /// Registered tree, structurally frozen once moved in here
    tree: Option<MenuTree<'a, N>>,
    /// Registered line sink
    sink: Option<S>,
    /// Row formatting constants
    layout: Layout,
    /// Current position, meaningful once a tree is registered
    position: Position,
}

impl<'a, S, const N: usize> Default for Navigator<'a, S, N>
where
    S: LineSink,
{
    fn default() -> Self {
        Self::new(Layout::default())
    }
}

impl<'a, S, const N: usize> Navigator<'a, S, N>
where
    S: LineSink,
{
    /// Create an unregistered navigator
    pub fn new(layout: Layout) -> Self {
        Self {
            tree: None,
            sink: None,
            layout,
            position: Position::root(),
        }
    }

    /// Register the line sink used for rendering
    ///
    /// Re-registering replaces the previous sink.
    pub fn register_line_callback(&mut self, sink: Option<S>) -> MenuResult {
        let sink = sink.ok_or(MenuError::NullPointer)?;
        self.sink = Some(sink);
        Ok(())
    }

    /// Register the tree and reset the position to the root's first entry
    pub fn register_root(&mut self, root: Option<MenuTree<'a, N>>) -> MenuResult {
        let tree = root.ok_or(MenuError::NullPointer)?;
        self.tree = Some(tree);
        self.position = Position::root();
        Ok(())
    }

    /// Previous entry, or step the edited parameter up
    pub fn navigate_up(&mut self) -> MenuResult {
        self.apply(|tree, position| step(tree, position, Direction::Up))
    }

    /// Next entry, or step the edited parameter down
    pub fn navigate_down(&mut self) -> MenuResult {
        self.apply(|tree, position| step(tree, position, Direction::Down))
    }

    /// Open the highlighted entry of the current submenu
    pub fn enter(&mut self) -> MenuResult {
        self.apply(|tree, position| enter(tree, position))
    }

    /// Return to the parent level
    pub fn back(&mut self) -> MenuResult {
        self.apply(|tree, position| back(tree, position))
    }

    /// Run the highlighted function entry without any other dispatch
    pub fn execute(&mut self) -> MenuResult {
        self.apply(|tree, position| execute(tree, position))
    }

    /// Dispatch one input event
    pub fn handle(&mut self, event: NavigationEvent) -> MenuResult {
        match event {
            NavigationEvent::Up => self.navigate_up(),
            NavigationEvent::Down => self.navigate_down(),
            NavigationEvent::Enter => self.enter(),
            NavigationEvent::Back => self.back(),
            NavigationEvent::Execute => self.execute(),
        }
    }

    /// Redraw the current view without changing state
    pub fn refresh(&mut self) -> MenuResult {
        if self.tree.is_none() {
            return Err(MenuError::NullPointer);
        }
        self.redraw();
        Ok(())
    }

    /// Current resting state, `None` before registration
    pub fn state(&self) -> Option<NavState> {
        let tree = self.tree.as_ref()?;
        NavState::of(tree.get(self.position.node)?.kind())
    }

    /// Node the navigator rests on, `None` before registration
    pub fn current(&self) -> Option<NodeId> {
        self.tree.as_ref().map(|_| self.position.node)
    }

    /// Highlighted index (see [`Position`])
    pub fn selected(&self) -> usize {
        self.position.selected
    }

    /// Full position, `None` before registration
    pub fn position(&self) -> Option<Position> {
        self.tree.as_ref().map(|_| self.position)
    }

    /// What the display currently shows, `None` before registration
    pub fn view(&self) -> Option<View> {
        let tree = self.tree.as_ref()?;
        Some(View::for_position(tree, self.position, &self.layout))
    }

    pub fn tree(&self) -> Option<&MenuTree<'a, N>> {
        self.tree.as_ref()
    }

    pub fn sink(&self) -> Option<&S> {
        self.sink.as_ref()
    }

    pub fn sink_mut(&mut self) -> Option<&mut S> {
        self.sink.as_mut()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Replace the layout; takes effect on the next render
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    /// Guard, run a transition, log it and re-render
    ///
    /// `Unknown` (no transition defined), `NotFound` (back from the root)
    /// and `NullPointer` leave the display untouched. Every other outcome
    /// redraws, errors included.
    fn apply(
        &mut self,
        transition: impl FnOnce(&MenuTree<'a, N>, &mut Position) -> MenuResult,
    ) -> MenuResult {
        let Some(tree) = self.tree.as_ref() else {
            #[cfg(feature = "defmt")]
            defmt::warn!("menu: navigation before a root was registered");
            return Err(MenuError::NullPointer);
        };

        let result = transition(tree, &mut self.position);

        #[cfg(feature = "defmt")]
        match result {
            Ok(()) => defmt::debug!(
                "menu: at {} selected {}",
                self.position.node,
                self.position.selected
            ),
            Err(e) if e.is_boundary() => defmt::trace!("menu: {}", e),
            Err(e) => defmt::warn!("menu: {} at {}", e, self.position.node),
        }

        if !matches!(
            result,
            Err(MenuError::Unknown | MenuError::NotFound | MenuError::NullPointer)
        ) {
            self.redraw();
        }
        result
    }

    fn redraw(&mut self) {
        if let (Some(tree), Some(sink)) = (self.tree.as_ref(), self.sink.as_mut()) {
            let view = View::for_position(tree, self.position, &self.layout);
            render(tree, &view, &self.layout, sink);
        }
    }
}

/// Up/down: move the highlight in a submenu or edit a parameter
fn step<const N: usize>(
    tree: &MenuTree<'_, N>,
    position: &mut Position,
    direction: Direction,
) -> MenuResult {
    let node = tree.get(position.node).ok_or(MenuError::NullPointer)?;
    match node.kind() {
        NodeKind::Submenu(children) => {
            move_selection(&mut position.selected, children.len(), direction)
        }
        NodeKind::Parameter(param) => param.step(direction),
        NodeKind::Info(_) | NodeKind::Function(_) => Err(MenuError::Unknown),
    }
}

/// Move `selected` one entry within `[0, count)`
fn move_selection(selected: &mut usize, count: usize, direction: Direction) -> MenuResult {
    if count == 0 {
        return Err(MenuError::OutOfRange);
    }
    let last = count - 1;
    let current = (*selected).min(last);
    let next = match direction {
        Direction::Up if current > 0 => current - 1,
        Direction::Down if current < last => current + 1,
        _ => return Err(MenuError::OutOfRange),
    };
    *selected = next;
    Ok(())
}

/// Highlighted child of the current submenu
fn selected_child<const N: usize>(
    tree: &MenuTree<'_, N>,
    position: &Position,
) -> Result<NodeId, MenuError> {
    let node = tree.get(position.node).ok_or(MenuError::NullPointer)?;
    if !node.is_submenu() {
        return Err(MenuError::InvalidType);
    }
    tree.child(position.node, position.selected).ok_or(MenuError::OutOfRange)
}

fn enter<const N: usize>(tree: &MenuTree<'_, N>, position: &mut Position) -> MenuResult {
    let child = selected_child(tree, position)?;
    let node = tree.get(child).ok_or(MenuError::NullPointer)?;
    match node.kind() {
        NodeKind::Submenu(_) => {
            *position = Position {
                node: child,
                selected: 0,
            };
            Ok(())
        }
        // The highlight stays on the entered row of the parent listing
        NodeKind::Parameter(_) | NodeKind::Info(_) => {
            position.node = child;
            Ok(())
        }
        NodeKind::Function(action) => activate(*action),
    }
}

fn execute<const N: usize>(tree: &MenuTree<'_, N>, position: &mut Position) -> MenuResult {
    let child = selected_child(tree, position)?;
    match tree.get(child).map(|node| node.kind()) {
        Some(NodeKind::Function(action)) => activate(*action),
        _ => Err(MenuError::NotImplemented),
    }
}

fn activate(action: Option<Action<'_>>) -> MenuResult {
    let action = action.ok_or(MenuError::NotImplemented)?;
    action();
    Ok(())
}

/// Go to the parent, highlighting the entry we came from
fn back<const N: usize>(tree: &MenuTree<'_, N>, position: &mut Position) -> MenuResult {
    let parent = tree.parent(position.node).ok_or(MenuError::NotFound)?;
    let selected = tree.position_in_parent(position.node).unwrap_or(0);
    *position = Position {
        node: parent,
        selected,
    };
    Ok(())
}
