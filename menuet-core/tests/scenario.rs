//! End-to-end navigation through a small settings menu

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use menuet_core::{
    LineFn, MenuError, MenuTree, NavState, Navigator, NodeId, Parameter, Position,
};

type Log = Rc<RefCell<Vec<(usize, String)>>>;

fn recorder(log: &Log) -> LineFn<impl FnMut(&str, usize)> {
    let log = Rc::clone(log);
    LineFn(move |text: &str, row: usize| log.borrow_mut().push((row, text.to_string())))
}

#[test]
fn test_settings_brightness_about() {
    let brightness = Cell::new(50);
    let mut tree: MenuTree = MenuTree::new("Main").unwrap();
    let settings = tree.add_submenu(NodeId::ROOT, "Settings").unwrap();
    tree.add_parameter(
        NodeId::ROOT,
        "Brightness",
        Parameter::integer(&brightness, 0, 100, 10).unwrap(),
    )
    .unwrap();
    let about = tree
        .add_info(NodeId::ROOT, "About", "A long description")
        .unwrap();
    tree.add_function(settings, "Reset", None).unwrap();

    let log: Log = Rc::default();
    let mut nav = Navigator::default();
    nav.register_line_callback(Some(recorder(&log))).unwrap();
    nav.register_root(Some(tree)).unwrap();

    assert_eq!(nav.navigate_down(), Ok(()));
    assert_eq!(nav.navigate_down(), Ok(()));
    {
        let lines = log.borrow();
        let last_pass = &lines[lines.len() - 3..];
        assert!(last_pass[2].1.starts_with("> About"));
        assert!(last_pass[2].1.ends_with("..."));
    }

    log.borrow_mut().clear();
    assert_eq!(nav.enter(), Ok(()));
    assert_eq!(nav.state(), Some(NavState::AtInfo));
    assert_eq!(nav.current(), Some(about));
    {
        let lines = log.borrow();
        assert_eq!(lines[0].0, 0);
        assert_eq!(lines[0].1.trim_end(), "About");
        assert_eq!(lines[1].0, 1);
        assert_eq!(lines[1].1.trim_end(), "A long description");
        // third row of the root listing is blanked
        assert_eq!(lines.len(), 3);
        assert!(lines[2].1.trim().is_empty());
    }

    assert_eq!(nav.back(), Ok(()));
    assert_eq!(nav.state(), Some(NavState::AtSubmenu));
    assert_eq!(
        nav.position(),
        Some(Position {
            node: NodeId::ROOT,
            selected: 2
        })
    );
}

#[test]
fn test_edit_then_walk_into_submenu() {
    let brightness = Cell::new(50);
    let mut tree: MenuTree = MenuTree::new("Main").unwrap();
    let settings = tree.add_submenu(NodeId::ROOT, "Settings").unwrap();
    tree.add_parameter(
        NodeId::ROOT,
        "Brightness",
        Parameter::integer(&brightness, 0, 100, 10).unwrap(),
    )
    .unwrap();
    tree.add_function(settings, "Reset", None).unwrap();

    let log: Log = Rc::default();
    let mut nav = Navigator::default();
    nav.register_line_callback(Some(recorder(&log))).unwrap();
    nav.register_root(Some(tree)).unwrap();

    nav.navigate_down().unwrap();
    nav.enter().unwrap();
    assert_eq!(nav.state(), Some(NavState::AtParameter));
    for _ in 0..5 {
        nav.navigate_up().unwrap();
    }
    assert_eq!(nav.navigate_up(), Err(MenuError::OutOfRange));
    assert_eq!(brightness.get(), 100);

    nav.back().unwrap();
    nav.navigate_up().unwrap();
    nav.enter().unwrap();
    assert_eq!(nav.current(), Some(settings));
    assert_eq!(nav.selected(), 0);

    let before = log.borrow().len();
    assert_eq!(nav.enter(), Err(MenuError::NotImplemented));

    let lines = log.borrow();
    // Settings has one entry; row 1 left over from the root listing is blanked
    let pass = &lines[before..];
    let rows: Vec<usize> = pass.iter().map(|(row, _)| *row).collect();
    assert_eq!(rows, [0, 1]);
    assert!(pass[0].1.starts_with("> Reset"));
    assert!(pass[1].1.trim().is_empty());
}
