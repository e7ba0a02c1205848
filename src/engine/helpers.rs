use std::collections::HashMap;

use uuid::Uuid;

use crate::entities::{Booking, Driver};

/// First driver, in registration order, whose availability flag is set.
pub fn first_available_driver<'a>(
    drivers: &'a [Driver],
    availability: &HashMap<String, bool>,
) -> Option<&'a Driver> {
    drivers
        .iter()
        .find(|driver| availability.get(&driver.id).copied().unwrap_or(false))
}

/// Draws v4 ids until one is not already taken, cancelled bookings included.
pub fn allocate_booking_id(bookings: &HashMap<Uuid, Booking>) -> Uuid {
    let mut id = Uuid::new_v4();

    while bookings.contains_key(&id) {
        tracing::warn!("booking id collision, drawing again");
        id = Uuid::new_v4();
    }

    id
}
