use super::helpers::{allocate_booking_id, first_available_driver};
use super::Engine;

use std::collections::HashMap;
use uuid::Uuid;

use crate::{
    api::BookingAPI,
    entities::Booking,
    error::{invalid_request_error, no_drivers_available_error, Error},
};

impl BookingAPI for Engine {
    #[tracing::instrument(skip(self))]
    fn book(&mut self, pickup: &str, dropoff: &str) -> Result<(Uuid, String), Error> {
        if pickup.is_empty() || dropoff.is_empty() {
            tracing::warn!("rejecting booking with missing location");
            return Err(invalid_request_error());
        }

        let driver_id = match first_available_driver(&self.drivers, &self.availability) {
            Some(driver) => driver.id.clone(),
            None => {
                tracing::warn!("no drivers available, rejecting booking");
                return Err(no_drivers_available_error());
            }
        };

        // nothing below can fail, so both tables change together
        let id = allocate_booking_id(&self.bookings);
        let booking = Booking::new(id, pickup.into(), dropoff.into(), driver_id.clone());

        self.bookings.insert(id, booking);
        self.availability.insert(driver_id.clone(), false);

        tracing::info!(booking_id = %id, driver_id = %driver_id, "booking created");

        Ok((id, driver_id))
    }

    #[tracing::instrument(skip(self))]
    fn cancel(&mut self, id: &Uuid) -> bool {
        let booking = match self.bookings.get_mut(id) {
            Some(booking) => booking,
            None => {
                tracing::debug!("unknown booking, nothing to cancel");
                return false;
            }
        };

        if !booking.cancel() {
            tracing::debug!("booking is not in the booked state, nothing to cancel");
            return false;
        }

        if let Some(available) = self.availability.get_mut(&booking.driver_id) {
            *available = true;
        }

        tracing::info!(
            driver_id = %booking.driver_id,
            status = %booking.status.name(),
            "booking cancelled, driver freed"
        );

        true
    }

    #[tracing::instrument(skip(self))]
    fn find_booking(&self, id: &Uuid) -> Option<Booking> {
        self.bookings.get(id).cloned()
    }

    #[tracing::instrument(skip(self))]
    fn list_active_bookings(&self) -> HashMap<Uuid, Booking> {
        let active: HashMap<Uuid, Booking> = self
            .bookings
            .iter()
            .filter(|(_, booking)| booking.is_booked())
            .map(|(id, booking)| (*id, booking.clone()))
            .collect();

        if active.is_empty() {
            tracing::info!("no active bookings found");
        } else {
            tracing::info!("retrieved {} active bookings", active.len());
        }

        active
    }
}
