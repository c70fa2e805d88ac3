//! The parking policy (§4.6): where an idle car with no stops repositions.

use elevsim_core::Floor;

use crate::profile::ProfileTag;

/// The parking floor for the given profile, or `None` when no repositioning
/// applies (normal/lunch-outside-window traffic).
pub fn parking_floor(tag: ProfileTag, num_floors: i32) -> Option<Floor> {
    match tag {
        ProfileTag::MorningRush => Some(Floor(1)),
        ProfileTag::EveningRush => Some(Floor(num_floors)),
        ProfileTag::Lunch => Some(Floor(((num_floors as f64) / 2.0).round() as i32)),
        ProfileTag::Normal => None,
    }
}
