mod booking_api;
mod driver_api;
mod helpers;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::{
    api::{DynAPI, API},
    entities::{Booking, Driver},
};

/// In-memory booking coordinator. Owns the driver registry, the availability
/// table and every booking ever made.
#[derive(Debug)]
pub struct Engine {
    drivers: Vec<Driver>,
    availability: HashMap<String, bool>,
    bookings: HashMap<Uuid, Booking>,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new")]
    pub fn new() -> Self {
        Self::with_drivers(Driver::default_roster())
    }

    /// Registers `drivers` in the given order, all available. A repeated id
    /// keeps its first registration.
    #[tracing::instrument(name = "Engine::with_drivers", skip_all)]
    pub fn with_drivers(drivers: Vec<Driver>) -> Self {
        let mut registry = Vec::with_capacity(drivers.len());
        let mut availability = HashMap::with_capacity(drivers.len());

        for driver in drivers {
            if availability.contains_key(&driver.id) {
                tracing::warn!(driver_id = %driver.id, "duplicate driver id in roster, skipping");
                continue;
            }

            availability.insert(driver.id.clone(), true);
            registry.push(driver);
        }

        tracing::info!("registered {} drivers", registry.len());

        Self {
            drivers: registry,
            availability,
            bookings: HashMap::new(),
        }
    }

    pub fn into_shared(self) -> DynAPI {
        Arc::new(Mutex::new(self))
    }

    pub fn is_available(&self, driver_id: &str) -> Option<bool> {
        self.availability.get(driver_id).copied()
    }

    pub fn available_driver_count(&self) -> usize {
        self.availability.values().filter(|&&free| free).count()
    }

    /// Total bookings ever made, cancelled ones included.
    pub fn booking_count(&self) -> usize {
        self.bookings.len()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl API for Engine {}
