mod handlers;

use std::net::SocketAddr;

use axum::{
    extract::Extension,
    routing::{get, patch},
    Router,
};

use crate::api::DynAPI;
use crate::error::{server_error, Error};
use crate::server::handlers::{bookings, drivers};

pub fn router(api: DynAPI) -> Router {
    Router::new()
        .route("/bookings", get(bookings::list_active).post(bookings::create))
        .route("/bookings/:id", get(bookings::find))
        .route("/bookings/:id/cancel", patch(bookings::cancel))
        .route("/bookings/:id/driver", get(drivers::find_for_booking))
        .route("/drivers", get(drivers::list))
        .layer(Extension(api))
}

pub async fn serve(api: DynAPI, addr: SocketAddr) -> Result<(), Error> {
    let app = router(api);

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(server_error)
}
