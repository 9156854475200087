// SPDX-FileCopyrightText: 2026 Oneline Contributors
// SPDX-License-Identifier: MIT

use serde_json::json;

use super::{AppMode, EditHistory};
use crate::model::DiagramData;

fn diagram_with_nodes(count: usize) -> DiagramData {
    DiagramData {
        nodes: (0..count).map(|i| json!({ "id": format!("n{i}") })).collect(),
        links: Vec::new(),
        groups: Vec::new(),
    }
}

#[test]
fn starts_in_view_mode_with_empty_stacks() {
    let history = EditHistory::new();

    assert_eq!(history.mode(), AppMode::View);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert_eq!(history.undo_depth(), 0);
    assert_eq!(history.redo_depth(), 0);
}

#[test]
fn undoing_all_edits_and_redoing_them_restores_the_final_state() {
    let mut history = EditHistory::new();
    history.enter_edit_mode();

    let states: Vec<DiagramData> = (0..=4).map(diagram_with_nodes).collect();
    let mut current = states[0].clone();

    for next in &states[1..] {
        history.record_edit(current.clone());
        current = next.clone();
    }

    for expected in states[..4].iter().rev() {
        assert!(history.can_undo());
        current = history.undo(&current).expect("undo");
        assert_eq!(&current, expected);
    }
    assert!(!history.can_undo());
    assert!(history.can_redo());

    for expected in &states[1..] {
        assert!(history.can_redo());
        current = history.redo(&current).expect("redo");
        assert_eq!(&current, expected);
    }
    assert!(!history.can_redo());
    assert!(history.can_undo());
    assert_eq!(current, states[4]);
}

#[test]
fn new_edit_after_undo_invalidates_redo() {
    let mut history = EditHistory::new();
    history.enter_edit_mode();

    let mut current = diagram_with_nodes(0);
    history.record_edit(current.clone());
    current = diagram_with_nodes(1);

    current = history.undo(&current).expect("undo");
    assert!(history.can_redo());

    history.record_edit(current.clone());
    assert!(!history.can_redo());
    assert!(history.redo(&diagram_with_nodes(9)).is_none());
}

#[test]
fn view_mode_gates_every_operation() {
    let mut history = EditHistory::new();

    // Populate the stacks while editing is allowed.
    history.enter_edit_mode();
    history.record_edit(diagram_with_nodes(0));
    history.undo(&diagram_with_nodes(1)).expect("undo");
    assert_eq!(history.redo_depth(), 1);

    history.exit_edit_mode();
    let before_undo = history.undo_depth();
    let before_redo = history.redo_depth();

    history.record_edit(diagram_with_nodes(2));
    assert!(history.undo(&diagram_with_nodes(2)).is_none());
    assert!(history.redo(&diagram_with_nodes(2)).is_none());
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert_eq!(history.undo_depth(), before_undo);
    assert_eq!(history.redo_depth(), before_redo);
}

#[test]
fn mode_toggles_preserve_both_stacks() {
    let mut history = EditHistory::new();
    history.enter_edit_mode();
    history.record_edit(diagram_with_nodes(0));
    history.record_edit(diagram_with_nodes(1));
    history.undo(&diagram_with_nodes(2)).expect("undo");

    history.exit_edit_mode();
    history.enter_edit_mode();

    assert_eq!(history.undo_depth(), 1);
    assert_eq!(history.redo_depth(), 1);
    assert!(history.can_undo());
    assert!(history.can_redo());
}

#[test]
fn depth_cap_evicts_oldest_entries_first() {
    let mut history = EditHistory::with_max_depth(3);
    history.enter_edit_mode();

    for i in 0..5 {
        history.record_edit(diagram_with_nodes(i));
    }
    assert_eq!(history.undo_depth(), 3);

    // The two oldest states (0 and 1) were evicted; undo bottoms out at 2.
    let mut current = diagram_with_nodes(5);
    for expected in (2..5).rev() {
        current = history.undo(&current).expect("undo");
        assert_eq!(current, diagram_with_nodes(expected));
    }
    assert!(!history.can_undo());
}

#[test]
fn zero_depth_history_never_retains_entries() {
    let mut history = EditHistory::with_max_depth(0);
    history.enter_edit_mode();

    history.record_edit(diagram_with_nodes(0));
    assert!(!history.can_undo());
    assert!(history.undo(&diagram_with_nodes(1)).is_none());
}

#[test]
fn clear_empties_stacks_but_keeps_mode() {
    let mut history = EditHistory::new();
    history.enter_edit_mode();
    history.record_edit(diagram_with_nodes(0));
    history.undo(&diagram_with_nodes(1)).expect("undo");

    history.clear();

    assert_eq!(history.mode(), AppMode::Edit);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}
