use elevsim_core::Floor;

use crate::building::Building;
use crate::error::BuildingError;

#[test]
fn rejects_too_few_floors() {
    let err = Building::new(1).unwrap_err();
    assert!(matches!(err, BuildingError::TooFewFloors(1)));
}

#[test]
fn ground_and_top_are_correct() {
    let b = Building::new(10).unwrap();
    assert_eq!(b.ground(), Floor(1));
    assert_eq!(b.top(), Floor(10));
}

#[test]
fn rejects_up_call_on_top_floor() {
    let mut b = Building::new(5).unwrap();
    let err = b.press_up(Floor(5), 0).unwrap_err();
    assert!(matches!(err, BuildingError::NoUpCallOnTopFloor(_)));
}

#[test]
fn rejects_down_call_on_ground_floor() {
    let mut b = Building::new(5).unwrap();
    let err = b.press_down(Floor(1), 0).unwrap_err();
    assert!(matches!(err, BuildingError::NoDownCallOnGround(_)));
}

#[test]
fn press_up_is_idempotent_on_timestamp() {
    let mut b = Building::new(5).unwrap();
    b.press_up(Floor(2), 10).unwrap();
    b.press_up(Floor(2), 99).unwrap();
    let hc = b.hall_call(Floor(2)).unwrap();
    assert!(hc.up_pressed);
    assert_eq!(hc.up_pressed_unix_secs, Some(10));
}

#[test]
fn clear_resets_flag_and_timestamp() {
    let mut b = Building::new(5).unwrap();
    b.press_down(Floor(3), 5).unwrap();
    b.clear_down(Floor(3)).unwrap();
    let hc = b.hall_call(Floor(3)).unwrap();
    assert!(!hc.down_pressed);
    assert_eq!(hc.down_pressed_unix_secs, None);
}

#[test]
fn out_of_range_floor_is_rejected() {
    let b = Building::new(5).unwrap();
    let err = b.hall_call(Floor(6)).unwrap_err();
    assert!(matches!(err, BuildingError::FloorOutOfRange(6, 5)));
}

#[test]
fn hall_calls_iterates_in_ascending_order() {
    let b = Building::new(3).unwrap();
    let floors: Vec<Floor> = b.hall_calls().map(|(f, _)| f).collect();
    assert_eq!(floors, vec![Floor(1), Floor(2), Floor(3)]);
}

#[test]
fn resize_clears_all_hall_call_state() {
    let mut b = Building::new(5).unwrap();
    b.press_up(Floor(2), 1).unwrap();
    b.resize(8).unwrap();
    assert_eq!(b.num_floors(), 8);
    assert!(b.hall_call(Floor(2)).unwrap().is_idle());
}
