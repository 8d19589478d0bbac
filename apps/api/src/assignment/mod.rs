// Slot booking: capacity-checked assignment of trainees to slots, the admin
// statistics view, and the reset that re-seeds slots from the roster.

pub mod handlers;
pub mod seed;
pub mod service;
