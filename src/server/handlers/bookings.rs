use std::collections::HashMap;

use axum::extract::{Extension, Json, Path};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::DynAPI;
use crate::entities::Booking;
use crate::error::Error;

// a missing field reaches the engine as empty text and is rejected there
#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    #[serde(default)]
    pickup: String,
    #[serde(default)]
    dropoff: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateResponse {
    pub booking_id: Uuid,
    pub driver_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CancelResponse {
    pub cancelled: bool,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<CreateResponse>, Error> {
    let (booking_id, driver_id) = api.lock()?.book(&params.pickup, &params.dropoff)?;

    Ok(CreateResponse {
        booking_id,
        driver_id,
    }
    .into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Option<Booking>>, Error> {
    let booking = api.lock()?.find_booking(&id);

    Ok(booking.into())
}

pub async fn list_active(
    Extension(api): Extension<DynAPI>,
) -> Result<Json<HashMap<Uuid, Booking>>, Error> {
    let bookings = api.lock()?.list_active_bookings();

    Ok(bookings.into())
}

pub async fn cancel(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<CancelResponse>, Error> {
    let cancelled = api.lock()?.cancel(&id);

    Ok(CancelResponse { cancelled }.into())
}
