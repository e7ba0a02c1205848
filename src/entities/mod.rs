mod booking;
mod driver;

pub use booking::Booking;
pub use driver::{Driver, DriverAvailability};
