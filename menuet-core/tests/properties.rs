//! Property tests for navigation bounds, parameter stepping and formatting

use std::cell::Cell;

use menuet_core::format::TRUNCATION_INDICATOR;
use menuet_core::{
    format_row, Direction, Layout, LineSink, MenuError, MenuTree, Navigator, NodeId,
    Parameter, RowState, MAX_LINE_LEN,
};
use proptest::prelude::*;

struct Discard;

impl LineSink for Discard {
    fn write_line(&mut self, _row: usize, text: &str) {
        assert!(text.len() <= MAX_LINE_LEN);
    }
}

fn flat_menu<'a>(count: usize) -> Navigator<'a, Discard> {
    let mut tree: MenuTree = MenuTree::new("Main").unwrap();
    for _ in 0..count {
        tree.add_submenu(NodeId::ROOT, "Entry").unwrap();
    }
    let mut nav = Navigator::default();
    nav.register_line_callback(Some(Discard)).unwrap();
    nav.register_root(Some(tree)).unwrap();
    nav
}

proptest! {
    #[test]
    fn down_reaches_last_entry_then_stops(count in 1usize..=16, extra in 1usize..5) {
        let mut nav = flat_menu(count);
        for _ in 0..count - 1 {
            prop_assert_eq!(nav.navigate_down(), Ok(()));
        }
        prop_assert_eq!(nav.selected(), count - 1);
        for _ in 0..extra {
            prop_assert_eq!(nav.navigate_down(), Err(MenuError::OutOfRange));
            prop_assert_eq!(nav.selected(), count - 1);
        }
        for _ in 0..count - 1 {
            prop_assert_eq!(nav.navigate_up(), Ok(()));
        }
        prop_assert_eq!(nav.navigate_up(), Err(MenuError::OutOfRange));
        prop_assert_eq!(nav.selected(), 0);
    }

    #[test]
    fn empty_menu_never_moves(moves in proptest::collection::vec(any::<bool>(), 1..20)) {
        let mut nav = flat_menu(0);
        for up in moves {
            let result = if up { nav.navigate_up() } else { nav.navigate_down() };
            prop_assert_eq!(result, Err(MenuError::OutOfRange));
            prop_assert_eq!(nav.selected(), 0);
        }
    }

    #[test]
    fn enter_always_starts_at_first_child(index in 0usize..8) {
        let mut tree: MenuTree = MenuTree::new("Main").unwrap();
        for _ in 0..8 {
            let sub = tree.add_submenu(NodeId::ROOT, "Sub").unwrap();
            tree.add_submenu(sub, "A").unwrap();
            tree.add_submenu(sub, "B").unwrap();
        }
        let mut nav: Navigator<'_, Discard> = Navigator::default();
        nav.register_root(Some(tree)).unwrap();
        for _ in 0..index {
            nav.navigate_down().unwrap();
        }
        prop_assert_eq!(nav.enter(), Ok(()));
        prop_assert_eq!(nav.selected(), 0);
        prop_assert_eq!(nav.back(), Ok(()));
        prop_assert_eq!(nav.selected(), index);
    }

    #[test]
    fn integer_steps_stay_in_bounds(
        min in -1000i32..1000,
        span in 0i32..1000,
        step in 1i32..200,
        start in -3000i32..3000,
        moves in proptest::collection::vec(any::<bool>(), 1..50),
    ) {
        let max = min + span;
        let cell = Cell::new(start);
        let param = Parameter::integer(&cell, min, max, step).unwrap();
        for up in moves {
            let before = cell.get();
            let direction = if up { Direction::Up } else { Direction::Down };
            match param.step(direction) {
                Ok(()) => prop_assert!(cell.get() >= min && cell.get() <= max),
                Err(e) => {
                    prop_assert_eq!(e, MenuError::OutOfRange);
                    prop_assert_eq!(cell.get(), before);
                }
            }
        }
    }

    #[test]
    fn rows_fit_the_line(
        name in "[ -~]{0,19}",
        text in "[ -~]{0,64}",
        value in any::<i32>(),
        selected in any::<bool>(),
        editing in any::<bool>(),
    ) {
        let cell = Cell::new(value);
        let mut tree: MenuTree = MenuTree::new("Main").unwrap();
        let param = tree
            .add_parameter(NodeId::ROOT, &name, Parameter::integer(&cell, i32::MIN, i32::MAX, 1).unwrap())
            .unwrap();
        let info = tree.add_info(NodeId::ROOT, &name, &text).unwrap();
        let sub = tree.add_submenu(NodeId::ROOT, &name).unwrap();
        let state = RowState { selected, editing };
        let layout = Layout::default();

        for id in [param, info, sub] {
            let line = format_row(tree.get(id).unwrap(), state, &layout);
            prop_assert!(line.len() <= MAX_LINE_LEN);
        }

        let info_line = format_row(tree.get(info).unwrap(), state, &layout);
        prop_assert_eq!(
            info_line.ends_with(TRUNCATION_INDICATOR),
            text.len() >= layout.info_threshold as usize
        );
    }
}
