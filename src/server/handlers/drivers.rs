use axum::extract::{Extension, Json, Path};
use uuid::Uuid;

use crate::api::DynAPI;
use crate::entities::{Driver, DriverAvailability};
use crate::error::Error;

pub async fn find_for_booking(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Option<Driver>>, Error> {
    let driver = api.lock()?.get_driver_for_booking(&id);

    Ok(driver.into())
}

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<DriverAvailability>>, Error> {
    let drivers = api.lock()?.list_drivers();

    Ok(drivers.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;
    use tokio_test::block_on;

    #[test]
    fn driver_follows_booking_state() {
        let api = Engine::new().into_shared();
        let (booking_id, _) = api.lock().unwrap().book("A", "B").unwrap();

        let Json(driver) = block_on(find_for_booking(Extension(api.clone()), Path(booking_id))).unwrap();
        assert_eq!(driver.unwrap().name, "Peter Pandey");

        let Json(drivers) = block_on(list(Extension(api.clone()))).unwrap();
        assert_eq!(drivers.len(), 5);
        assert!(!drivers[0].available);
        assert!(drivers[1..].iter().all(|view| view.available));

        api.lock().unwrap().cancel(&booking_id);

        let Json(driver) = block_on(find_for_booking(Extension(api), Path(booking_id))).unwrap();
        assert!(driver.is_none());
    }
}
