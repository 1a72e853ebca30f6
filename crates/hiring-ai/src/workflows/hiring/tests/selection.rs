use crate::workflows::hiring::selection::{SelectionError, TeamSelection};

#[test]
fn new_selection_is_empty() {
    let selection = TeamSelection::new(5);
    assert!(selection.is_empty());
    assert!(!selection.is_full());
    assert_eq!(selection.remaining_slots(), 5);
    assert_eq!(selection.capacity(), 5);
}

#[test]
fn select_preserves_order_and_positions() {
    let mut selection = TeamSelection::new(3);
    selection.select("Alex Johnson").expect("first seat");
    selection.select("Sarah Chen").expect("second seat");

    assert_eq!(selection.members(), ["Alex Johnson", "Sarah Chen"]);
    assert_eq!(selection.position("Sarah Chen"), Some(2));
    assert_eq!(selection.position("Nobody"), None);
    assert_eq!(selection.remaining_slots(), 1);
}

#[test]
fn duplicate_selection_is_rejected() {
    let mut selection = TeamSelection::new(3);
    selection.select("Alex Johnson").expect("first seat");

    assert_eq!(
        selection.select("Alex Johnson"),
        Err(SelectionError::AlreadySelected("Alex Johnson".to_string()))
    );
    assert_eq!(selection.len(), 1);
}

#[test]
fn full_team_rejects_more_members() {
    let mut selection = TeamSelection::new(2);
    selection.select("A").expect("seat");
    selection.select("B").expect("seat");

    assert!(selection.is_full());
    assert_eq!(
        selection.select("C"),
        Err(SelectionError::TeamFull { capacity: 2 })
    );
    // An existing member is reported as a duplicate even when the team is full.
    assert_eq!(
        selection.select("A"),
        Err(SelectionError::AlreadySelected("A".to_string()))
    );
}

#[test]
fn remove_frees_a_seat_and_shifts_positions() {
    let mut selection = TeamSelection::new(3);
    for name in ["A", "B", "C"] {
        selection.select(name).expect("seat");
    }

    selection.remove("A").expect("member removed");

    assert_eq!(selection.members(), ["B", "C"]);
    assert_eq!(selection.position("C"), Some(2));
    assert_eq!(
        selection.remove("A"),
        Err(SelectionError::NotSelected("A".to_string()))
    );
    selection.select("D").expect("freed seat");
    assert!(selection.is_full());
}
