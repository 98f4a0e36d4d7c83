use super::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::core::DragStrategy;

fn bar_with(titles: &[&str]) -> (TabBar, Vec<TabId>) {
    let mut bar = TabBar::new(TabBarConfig {
        initial_tabs: 0,
        select_new_tabs: false,
        ..TabBarConfig::default()
    });
    let ids = titles.iter().map(|t| bar.add_tab(*t)).collect();
    bar.drain_events();
    (bar, ids)
}

fn order(bar: &TabBar) -> Vec<String> {
    bar.tabs().iter().map(|t| t.title.clone()).collect()
}

#[test]
fn new_bar_seeds_numbered_tabs_and_selects_first() {
    let bar = TabBar::new(TabBarConfig::default());
    assert_eq!(order(&bar), ["Tab 1", "Tab 2", "Tab 3"]);
    assert_eq!(bar.tabs().selected_index(), Some(0));
}

#[test]
fn new_tab_is_numbered_and_selected() {
    let mut bar = TabBar::new(TabBarConfig::default());
    let id = bar.new_tab();
    assert_eq!(bar.tabs().get_by_id(id).unwrap().title, "Tab 4");
    assert_eq!(bar.tabs().selected_id(), Some(id));
}

#[test]
fn first_tab_is_selected_even_without_select_new_tabs() {
    let (bar, ids) = bar_with(&["A", "B"]);
    assert_eq!(bar.tabs().selected_id(), Some(ids[0]));
}

#[test]
fn drag_scenario_reorders_and_keeps_selection() {
    let (mut bar, ids) = bar_with(&["A", "B", "C"]);
    assert!(bar.select_tab(ids[1]));

    bar.drag_start(ids[0]).unwrap();
    bar.drag_move(ids[0], 80.0).unwrap();

    let snapshot = bar.snapshot();
    assert_eq!(snapshot.lifted, Some(ids[0]));
    assert_eq!(snapshot.frame(ids[1]).unwrap().offset, -150.0);
    assert_eq!(snapshot.frame(ids[2]).unwrap().offset, 0.0);
    let lifted = snapshot.frame(ids[0]).unwrap();
    assert!(lifted.lifted);
    assert_eq!(lifted.frame.x, 88.0);

    bar.drag_end(ids[0]).unwrap();
    assert_eq!(order(&bar), ["B", "A", "C"]);
    assert_eq!(bar.tabs().selected_id(), Some(ids[1]));

    let snapshot = bar.snapshot();
    assert_eq!(snapshot.lifted, None);
    assert!(snapshot.tabs.iter().all(|f| f.offset == 0.0 && !f.lifted));
}

#[test]
fn closing_selected_middle_tab_selects_next() {
    let (mut bar, ids) = bar_with(&["A", "B", "C"]);
    bar.select_tab(ids[1]);
    assert!(bar.close_tab(ids[1]));
    assert_eq!(order(&bar), ["A", "C"]);
    assert_eq!(bar.tabs().selected_id(), Some(ids[2]));
}

#[test]
fn last_tab_is_kept_by_default() {
    let (mut bar, ids) = bar_with(&["A"]);
    assert!(!bar.close_tab(ids[0]));
    assert_eq!(bar.tabs().len(), 1);
}

#[test]
fn last_tab_can_be_closed_when_allowed() {
    let mut bar = TabBar::new(TabBarConfig {
        keep_last_tab: false,
        initial_tabs: 1,
        ..TabBarConfig::default()
    });
    let id = bar.tabs().get(0).unwrap().id();
    assert!(bar.close_tab(id));
    assert!(bar.tabs().is_empty());
    assert_eq!(bar.snapshot().selected, None);
}

#[test]
fn rename_updates_the_snapshot_title() {
    let (mut bar, ids) = bar_with(&["A", "B"]);
    assert!(bar.rename_tab(ids[1], "Docs"));
    assert_eq!(bar.snapshot().frame(ids[1]).unwrap().title, "Docs");
}

#[test]
fn unknown_ids_are_benign() {
    let (mut bar, ids) = bar_with(&["A", "B"]);
    bar.close_tab(ids[1]);
    assert!(!bar.close_tab(ids[1]));
    assert!(!bar.select_tab(ids[1]));
    assert!(!bar.rename_tab(ids[1], "gone"));
    assert_eq!(bar.drag_start(ids[1]), Err(TabError::UnknownTab(ids[1])));
    assert_eq!(order(&bar), ["A"]);
}

#[test]
fn closing_a_tab_mid_drag_ends_the_drag_without_commit() {
    let (mut bar, ids) = bar_with(&["A", "B", "C"]);
    bar.drag_start(ids[0]).unwrap();
    bar.drag_move(ids[0], 80.0).unwrap();
    bar.drain_events();

    bar.close_tab(ids[2]);
    assert!(!bar.engine().is_dragging());
    assert_eq!(order(&bar), ["A", "B"]);
    assert_eq!(
        bar.drain_events(),
        vec![
            TabEvent::DragEnded {
                id: ids[0],
                committed: false
            },
            TabEvent::TabClosed { id: ids[2], index: 2 },
        ]
    );
    assert_eq!(bar.drag_end(ids[0]), Err(TabError::NoActiveDrag(ids[0])));
}

#[test]
fn closing_a_tab_mid_live_swap_restores_the_dragged_tab() {
    let mut bar = TabBar::new(TabBarConfig {
        initial_tabs: 0,
        reorder: ReorderOptions {
            strategy: DragStrategy::LiveSwap,
            ..ReorderOptions::default()
        },
        ..TabBarConfig::default()
    });
    let ids: Vec<TabId> = ["A", "B", "C"].map(|t| bar.add_tab(t)).to_vec();
    bar.select_tab(ids[0]);
    bar.drag_start(ids[0]).unwrap();
    bar.drag_move(ids[0], 80.0).unwrap();
    assert_eq!(order(&bar), ["B", "A", "C"]);
    bar.drain_events();

    bar.close_tab(ids[2]);
    assert_eq!(order(&bar), ["A", "B"]);
    let events = bar.drain_events();
    assert_eq!(
        events,
        vec![
            TabEvent::OrderChanged { id: ids[0], from: 1, to: 0 },
            TabEvent::DragEnded {
                id: ids[0],
                committed: false
            },
            TabEvent::TabClosed { id: ids[2], index: 2 },
        ]
    );
}

#[test]
fn resizing_mid_drag_rescales_neighbour_offsets() {
    let (mut bar, ids) = bar_with(&["A", "B", "C"]);
    // 3 tabs on a 360px strip are 100px wide.
    bar.resize(Some(360.0));
    bar.drag_start(ids[0]).unwrap();
    bar.drag_move(ids[0], 60.0).unwrap();
    assert_eq!(bar.snapshot().frame(ids[1]).unwrap().offset, -100.0);

    // 3 tabs on a 285px strip: (285 - 48) / 3 - 4 = 75.
    bar.resize(Some(285.0));
    assert_eq!(bar.snapshot().tab_width, 75.0);
    assert_eq!(bar.snapshot().frame(ids[1]).unwrap().offset, -75.0);
}

#[test]
fn inverted_width_range_does_not_panic() {
    let mut bar = TabBar::new(TabBarConfig {
        metrics: StripMetrics {
            min_tab_width: 200.0,
            ..StripMetrics::default()
        },
        ..TabBarConfig::default()
    });
    bar.resize(Some(600.0));
    assert_eq!(bar.snapshot().tab_width, 150.0);
}

#[test]
fn programmatic_move_is_rejected_mid_drag() {
    let (mut bar, ids) = bar_with(&["A", "B"]);
    bar.drag_start(ids[0]).unwrap();
    assert_eq!(
        bar.move_tab(0, 1),
        Err(TabError::DragInProgress { dragged: ids[0] })
    );
    bar.drag_cancel(ids[0]).unwrap();
    bar.move_tab(0, 1).unwrap();
    assert_eq!(order(&bar), ["B", "A"]);
}

#[test]
fn subscribers_see_events_in_order() {
    let (mut bar, ids) = bar_with(&["A", "B", "C"]);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    bar.subscribe(move |event: &TabEvent| sink.borrow_mut().push(event.clone()));

    bar.drag_start(ids[0]).unwrap();
    bar.drag_move(ids[0], 80.0).unwrap();
    bar.drag_end(ids[0]).unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![
            TabEvent::DragStarted { id: ids[0], index: 0 },
            TabEvent::OrderChanged { id: ids[0], from: 0, to: 1 },
            TabEvent::DragEnded { id: ids[0], committed: true },
        ]
    );
    assert_eq!(bar.drain_events(), *seen.borrow());
}

#[test]
fn subscribers_are_counted() {
    let (mut bar, _) = bar_with(&["A"]);
    bar.subscribe(|_: &TabEvent| {});
    bar.subscribe(|_: &TabEvent| {});
    assert_eq!(bar.listener_count(), 2);
}

#[test]
fn every_subscriber_is_notified() {
    let (mut bar, _) = bar_with(&["A"]);
    let count = Rc::new(RefCell::new(0));
    for _ in 0..2 {
        let count = Rc::clone(&count);
        bar.subscribe(move |_: &TabEvent| *count.borrow_mut() += 1);
    }
    bar.add_tab("B");
    // TabAdded only: select_new_tabs is off and A stays selected.
    assert_eq!(*count.borrow(), 2);
}

#[test]
fn live_swap_snapshot_has_no_neighbor_offsets() {
    let mut bar = TabBar::new(TabBarConfig {
        reorder: ReorderOptions {
            strategy: DragStrategy::LiveSwap,
            ..ReorderOptions::default()
        },
        ..TabBarConfig::default()
    });
    let dragged = bar.tabs().get(0).unwrap().id();
    bar.drag_start(dragged).unwrap();
    bar.drag_move(dragged, 80.0).unwrap();

    let snapshot = bar.snapshot();
    assert_eq!(snapshot.order()[1], dragged);
    let lifted = snapshot.frame(dragged).unwrap();
    // Pointer-anchored: still 80px right of where the drag began.
    assert_eq!(lifted.frame.x, 88.0);
    assert!(snapshot
        .tabs
        .iter()
        .filter(|f| !f.lifted)
        .all(|f| f.offset == 0.0));
}

#[test]
fn draw_order_paints_lifted_tab_last() {
    let (mut bar, ids) = bar_with(&["A", "B", "C"]);
    bar.drag_start(ids[1]).unwrap();
    let snapshot = bar.snapshot();
    let painted: Vec<TabId> = snapshot.draw_order().map(|f| f.id).collect();
    assert_eq!(painted, vec![ids[0], ids[2], ids[1]]);
}

#[test]
fn resize_shrinks_tabs() {
    let (mut bar, _) = bar_with(&["A", "B", "C", "D"]);
    assert_eq!(bar.snapshot().tab_width, 150.0);
    bar.resize(Some(448.0));
    assert_eq!(bar.snapshot().tab_width, 96.0);
}

#[test]
fn snapshot_reports_selection_and_plus_button() {
    let (mut bar, ids) = bar_with(&["A", "B"]);
    bar.select_index(1).unwrap();
    let snapshot = bar.snapshot();
    assert_eq!(snapshot.selected, Some(ids[1]));
    assert_eq!(snapshot.plus_button.x, 316.0);
    assert_eq!(
        bar.select_index(9),
        Err(TabError::IndexOutOfRange { index: 9, len: 2 })
    );
}
