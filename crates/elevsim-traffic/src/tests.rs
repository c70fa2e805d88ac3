use elevsim_core::{Direction, Floor, SimRng};

use crate::generator::TrafficGenerator;
use crate::parking::parking_floor;
use crate::profile::{classify, ProfileTag};

#[test]
fn classify_morning_rush() {
    let p = classify(9, 10);
    assert_eq!(p.tag, ProfileTag::MorningRush);
    assert_eq!(p.primary_direction, Direction::Up);
    assert_eq!(p.hotspots, vec![Floor(1)]);
    assert_eq!(p.intensity, 0.8);
}

#[test]
fn classify_lunch_hotspots_include_midpoint() {
    let p = classify(13, 10);
    assert_eq!(p.tag, ProfileTag::Lunch);
    assert_eq!(p.hotspots, vec![Floor(1), Floor(5)]);
}

#[test]
fn classify_evening_rush() {
    let p = classify(18, 10);
    assert_eq!(p.tag, ProfileTag::EveningRush);
    assert_eq!(p.hotspots, vec![Floor(10)]);
}

#[test]
fn classify_normal_otherwise() {
    let p = classify(2, 10);
    assert_eq!(p.tag, ProfileTag::Normal);
    assert!(p.hotspots.is_empty());
    assert_eq!(p.intensity, 0.3);
}

#[test]
fn classify_is_pure_and_stateless() {
    assert_eq!(classify(9, 10).tag, classify(9, 10).tag);
}

#[test]
fn parking_floor_by_profile() {
    assert_eq!(parking_floor(ProfileTag::MorningRush, 10), Some(Floor(1)));
    assert_eq!(parking_floor(ProfileTag::EveningRush, 10), Some(Floor(10)));
    assert_eq!(parking_floor(ProfileTag::Lunch, 11), Some(Floor(6)));
    assert_eq!(parking_floor(ProfileTag::Normal, 10), None);
}

#[test]
fn zero_rate_never_generates() {
    let mut rng = SimRng::new(1);
    let gen = TrafficGenerator::new();
    let profile = classify(2, 10);
    for _ in 0..50 {
        assert!(gen.generate(&mut rng, &profile, 0.0, 10).is_none());
    }
}

#[test]
fn high_rate_usually_generates_a_distinct_pair() {
    let mut rng = SimRng::new(7);
    let gen = TrafficGenerator::new();
    let profile = classify(2, 10);
    let mut produced = 0;
    for _ in 0..100 {
        if let Some(call) = gen.generate(&mut rng, &profile, 5.0, 10) {
            produced += 1;
            assert_ne!(call.origin, call.destination);
            assert!((1..=4).contains(&call.passenger_count));
        }
    }
    assert!(produced > 50, "a high per-tick rate should generate most of the time, got {produced}/100");
}

#[test]
fn morning_rush_biases_lobby_origin_to_high_destination() {
    let mut rng = SimRng::new(42);
    let gen = TrafficGenerator::new();
    let profile = classify(9, 15);
    let mut lobby_biased = 0;
    let mut total = 0;
    for _ in 0..200 {
        if let Some(call) = gen.generate(&mut rng, &profile, 3.0, 15) {
            total += 1;
            if call.origin == Floor(1) && call.destination.0 > 5 {
                lobby_biased += 1;
            }
        }
    }
    assert!(total > 0);
    assert!(lobby_biased as f64 / total as f64 > 0.4, "expected most morning-rush calls to be lobby-originated");
}
