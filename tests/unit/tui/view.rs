use super::*;

#[test]
fn test_event_result() {
    assert!(EventResult::Consumed.is_consumed());
    assert!(EventResult::Ignored.is_ignored());
    assert!(EventResult::Quit.is_quit());
}

#[test]
fn from_changed_maps_to_consumed_or_ignored() {
    assert_eq!(EventResult::from_changed(true), EventResult::Consumed);
    assert_eq!(EventResult::from_changed(false), EventResult::Ignored);
}
