pub mod bookings;
pub mod drivers;
