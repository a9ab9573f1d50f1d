//! Domain types exposed to the list controller and the admin surface.

pub mod record;
pub mod reservation;
pub mod types;
pub mod user;
