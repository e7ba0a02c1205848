use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::entities::{Booking, Driver, DriverAvailability};
use crate::error::Error;

pub trait BookingAPI {
    /// Assigns the first available driver, in registration order, to a new
    /// booking and returns `(booking_id, driver_id)`.
    fn book(&mut self, pickup: &str, dropoff: &str) -> Result<(Uuid, String), Error>;

    /// Returns true only when a booked ride actually moved to cancelled.
    fn cancel(&mut self, id: &Uuid) -> bool;

    /// Any booking, cancelled ones included.
    fn find_booking(&self, id: &Uuid) -> Option<Booking>;

    fn list_active_bookings(&self) -> HashMap<Uuid, Booking>;
}

pub trait DriverAPI {
    /// The driver assigned to a booking, or `None` unless the booking is
    /// still booked.
    fn get_driver_for_booking(&self, id: &Uuid) -> Option<Driver>;

    fn list_drivers(&self) -> Vec<DriverAvailability>;
}

pub trait API: BookingAPI + DriverAPI {}

/// Shared handle for hosts with more than one caller. Every operation runs
/// with the lock held.
pub type DynAPI = Arc<Mutex<dyn API + Send>>;
