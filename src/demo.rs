use crate::api::API;
use crate::error::Error;

/// Books a cab, inspects its driver, cancels it and checks that nothing is
/// left active.
#[tracing::instrument(name = "demo::run", skip_all)]
pub fn run(api: &mut dyn API) -> Result<(), Error> {
    let (booking_id, driver_id) = api.book("123 Main St", "456 Oak Ave")?;
    tracing::info!("booking created: {} with driver {}", booking_id, driver_id);

    let driver = api.get_driver_for_booking(&booking_id);
    tracing::info!("driver details: {:?}", driver);

    let cancelled = api.cancel(&booking_id);
    tracing::info!("cancellation successful: {}", cancelled);

    let driver = api.get_driver_for_booking(&booking_id);
    tracing::info!("driver details after cancellation: {:?}", driver);

    let active = api.list_active_bookings();
    tracing::info!("active bookings: {:?}", active);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;
    use crate::api::BookingAPI;

    #[test]
    fn walkthrough_leaves_every_driver_free() {
        let mut engine = Engine::new();

        run(&mut engine).unwrap();

        assert_eq!(engine.booking_count(), 1);
        assert_eq!(engine.available_driver_count(), 5);
        assert!(engine.list_active_bookings().is_empty());
    }

    #[test]
    fn walkthrough_surfaces_exhausted_roster() {
        let mut engine = Engine::with_drivers(vec![]);

        let err = run(&mut engine).unwrap_err();
        assert!(err.is_no_drivers_available_error());
    }
}
