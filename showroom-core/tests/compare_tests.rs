// Tests for the comparison list

use showroom_core::compare::{AddOutcome, ComparisonList, MAX_COMPARE};
use showroom_core::error::ShowroomError;

fn full_list() -> ComparisonList {
    ComparisonList::from_ids([1, 2, 3, 4])
}

#[test]
fn test_add_until_full() {
    let mut list = ComparisonList::new();
    for id in 1..=MAX_COMPARE as u32 {
        assert_eq!(list.add(id).unwrap(), AddOutcome::Added);
    }

    assert!(list.is_full());
    assert_eq!(list.ids(), &[1, 2, 3, 4]);
}

#[test]
fn test_fifth_car_is_rejected_and_list_unchanged() {
    let mut list = full_list();
    let result = list.add(5);

    assert!(matches!(result, Err(ShowroomError::ComparisonFull { max: 4 })));
    assert_eq!(list.ids(), &[1, 2, 3, 4]);
}

#[test]
fn test_capacity_error_message() {
    let err = full_list().add(9).unwrap_err();
    assert_eq!(err.user_message(), "You can compare up to 4 cars.");
}

#[test]
fn test_remove_missing_is_noop() {
    let mut list = ComparisonList::from_ids([1, 2]);

    assert!(!list.remove(7));
    assert_eq!(list.ids(), &[1, 2]);
}

#[test]
fn test_remove_present_shrinks_by_one() {
    let mut list = full_list();

    assert!(list.remove(3));
    assert_eq!(list.len(), 3);
    assert!(!list.contains(3));
    assert_eq!(list.ids(), &[1, 2, 4]);
}

#[test]
fn test_clear() {
    let mut list = full_list();
    list.clear();
    assert!(list.is_empty());
}

// ============================================================================
// Adding from a details page
// ============================================================================

#[test]
fn test_add_with_current_on_empty_list() {
    let mut list = ComparisonList::new();
    list.add_with_current(2, 1).unwrap();

    assert_eq!(list.ids(), &[1, 2]);
}

#[test]
fn test_add_with_current_already_listed() {
    let mut list = ComparisonList::from_ids([1]);
    list.add_with_current(2, 1).unwrap();

    assert_eq!(list.ids(), &[1, 2]);
}

#[test]
fn test_add_with_current_same_car() {
    let mut list = ComparisonList::new();
    list.add_with_current(1, 1).unwrap();

    assert_eq!(list.ids(), &[1]);
}

#[test]
fn test_add_with_current_never_exceeds_capacity() {
    let mut list = full_list();
    let result = list.add_with_current(9, 8);

    assert!(matches!(result, Err(ShowroomError::ComparisonFull { .. })));
    assert_eq!(list.ids(), &[1, 2, 3, 4]);
}

#[test]
fn test_add_with_current_full_but_requested_present() {
    let mut list = full_list();
    let outcome = list.add_with_current(2, 8).unwrap();

    assert_eq!(outcome, AddOutcome::AlreadyPresent);
    assert_eq!(list.ids(), &[1, 2, 3, 4]);
}

#[test]
fn test_serializes_as_plain_array() {
    let list = ComparisonList::from_ids([4, 2]);
    assert_eq!(serde_json::to_string(&list).unwrap(), "[4,2]");
}

#[test]
fn test_deserialize_normalises_ids() {
    let list: ComparisonList = serde_json::from_str("[1,1,2,3,4,5]").unwrap();

    assert_eq!(list.ids(), &[1, 2, 3, 4]);
    assert!(list.len() <= MAX_COMPARE);
}
