use super::Engine;

use uuid::Uuid;

use crate::{
    api::DriverAPI,
    entities::{Driver, DriverAvailability},
};

impl DriverAPI for Engine {
    #[tracing::instrument(skip(self))]
    fn get_driver_for_booking(&self, id: &Uuid) -> Option<Driver> {
        let booking = self.bookings.get(id).filter(|booking| booking.is_booked())?;

        // the registry never shrinks, so an assigned driver is always present
        self.drivers
            .iter()
            .find(|driver| driver.id == booking.driver_id)
            .cloned()
    }

    fn list_drivers(&self) -> Vec<DriverAvailability> {
        self.drivers
            .iter()
            .map(|driver| DriverAvailability {
                driver: driver.clone(),
                available: self.is_available(&driver.id).unwrap_or(false),
            })
            .collect()
    }
}
