use elevsim_core::{CallId, CarId, Direction, FixedClock, Floor};

use crate::call::Call;
use crate::error::CallError;
use crate::priority::EMERGENCY_FLOOR;
use crate::tier::StarvationTier;

fn make_call(created_unix_secs: i64) -> Call {
    Call::new(CallId(1), Floor(1), Some(Floor(8)), None, 1, false, created_unix_secs).unwrap()
}

#[test]
fn rejects_equal_origin_and_destination() {
    let err = Call::new(CallId(1), Floor(3), Some(Floor(3)), None, 1, false, 0).unwrap_err();
    assert!(matches!(err, CallError::OriginEqualsDestination(3)));
}

#[test]
fn rejects_zero_passengers() {
    let err = Call::new(CallId(1), Floor(1), Some(Floor(2)), None, 0, false, 0).unwrap_err();
    assert!(matches!(err, CallError::ZeroPassengers(0)));
}

#[test]
fn infers_direction_from_destination() {
    let call = make_call(0);
    assert_eq!(call.direction, Direction::Up);
}

#[test]
fn explicit_direction_overrides_inference() {
    let call = Call::new(CallId(1), Floor(1), Some(Floor(8)), Some(Direction::Down), 1, false, 0).unwrap();
    assert_eq!(call.direction, Direction::Down);
}

#[test]
fn refresh_wait_is_idempotent() {
    let mut call = make_call(0);
    call.refresh_wait(50);
    let (wait_a, tier_a) = (call.wait_ms, call.tier);
    call.refresh_wait(50);
    assert_eq!(call.wait_ms, wait_a);
    assert_eq!(call.tier, tier_a);
}

#[test]
fn tier_escalates_monotonically_and_records_history() {
    let mut call = make_call(0);
    call.refresh_wait(10);
    assert_eq!(call.tier, StarvationTier::None);
    call.refresh_wait(35);
    assert_eq!(call.tier, StarvationTier::Early);
    call.refresh_wait(61);
    assert_eq!(call.tier, StarvationTier::Severe);
    call.refresh_wait(95);
    assert_eq!(call.tier, StarvationTier::Critical);

    let history = call.history();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].from, StarvationTier::None);
    assert_eq!(history[0].to, StarvationTier::Early);
    assert_eq!(history.last().unwrap().to, StarvationTier::Critical);
}

#[test]
fn entering_severe_latches_priority_floor_once() {
    let mut call = make_call(0);
    let before = call.base_priority;
    call.refresh_wait(61);
    assert!(call.emergency_latched);
    assert!(call.base_priority >= EMERGENCY_FLOOR);
    assert!(call.base_priority >= before);

    let latched = call.base_priority;
    call.refresh_wait(95);
    assert_eq!(call.base_priority, latched, "the floor latches once, it does not re-raise on every transition");
}

#[test]
fn critical_calls_floor_effective_priority() {
    let mut call = make_call(0);
    call.refresh_wait(95);
    let clock = FixedClock::at_hour(3);
    assert!(call.effective_priority(&clock) >= EMERGENCY_FLOOR);
}

#[test]
fn refresh_wait_stops_once_served() {
    let mut call = make_call(0);
    call.mark_boarded(20, Floor(8));
    call.mark_served(40);
    call.refresh_wait(1_000);
    assert_eq!(call.wait_ms, 0, "a served call's live wait no longer advances");
}

#[test]
fn mark_served_freezes_wait_and_travel_from_first_boarding() {
    let mut call = make_call(100);
    call.mark_boarded(130, Floor(8));
    call.mark_served(150);

    assert!(call.served);
    assert!(!call.active);
    assert_eq!(call.served_unix_secs, Some(150));
    assert_eq!(call.final_wait_ms, Some(30_000));
    assert_eq!(call.final_travel_ms, Some(20_000));
}

#[test]
fn mark_served_without_boarding_treats_assignment_as_instant() {
    let mut call = make_call(100);
    call.mark_served(110);
    assert_eq!(call.final_wait_ms, Some(10_000));
    assert_eq!(call.final_travel_ms, Some(0));
}

#[test]
fn hall_call_destination_is_bound_on_boarding() {
    let mut call = Call::new(CallId(1), Floor(1), None, Some(Direction::Up), 1, false, 0).unwrap();
    assert!(call.destination.is_none());
    call.mark_boarded(5, Floor(9));
    assert_eq!(call.destination, Some(Floor(9)));
    assert_eq!(call.direction, Direction::Up);
}

#[test]
fn assignment_can_be_cleared() {
    let mut call = make_call(0);
    call.mark_assigned(CarId(2));
    assert_eq!(call.assigned_car, Some(CarId(2)));
    call.clear_assignment();
    assert_eq!(call.assigned_car, None);
}
