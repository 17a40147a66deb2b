//! Domain types for the check-in tracker.
//!
//! This module contains the core domain model types. All types enforce
//! their invariants at construction time, so code that receives these
//! types can trust their validity. It also hosts the great-circle
//! distance calculator, the one leaf computation every other component
//! builds on.

mod checkin;
mod place;
mod point;
mod user;

pub use checkin::{
    CheckIn, CheckInId, DishText, InvalidCheckInText, MAX_DISH_LEN, MAX_NOTE_LEN, NoteText,
};
pub use place::{InvalidPlaceId, Place, PlaceId};
pub use point::{EARTH_RADIUS_METERS, GeoPoint, InvalidCoordinate, distance_meters, format_distance};
pub use user::{InvalidUserId, UserId};
