use actix_web::{get, patch, post, web, HttpResponse};
use log::{debug, info};

use crate::api::{parse_id, DeliveryManFilter};
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::models::entities::{BookingPatch, CreateBookingDto};
use crate::store::{InsertOutcome, Store};

#[post("/book-parcel")]
pub async fn book_parcel(
    store: web::Data<dyn Store>,
    auth_user: AuthUser,
    booking: web::Json<CreateBookingDto>,
) -> Result<HttpResponse, ApiError> {
    let booking = booking.into_inner();
    auth_user.ensure_owner(&booking.sender_email)?;

    let booking = store.insert_booking(booking.into_model()).await?;
    info!("Parcel booked by {}: {}", booking.sender_email, booking.id);
    Ok(HttpResponse::Ok().json(InsertOutcome::new(booking.id)))
}

/// Every booking, or only those assigned to `?deliveryManId=`.
#[get("/all-bookings-data")]
pub async fn all_bookings_data(
    store: web::Data<dyn Store>,
    _auth_user: AuthUser,
    query: web::Query<DeliveryManFilter>,
) -> Result<HttpResponse, ApiError> {
    let delivery_man_id = query.into_inner().parse()?;

    let bookings = store.list_bookings(delivery_man_id).await?;
    debug!("Listed {} bookings (delivery man filter: {:?})", bookings.len(), delivery_man_id);
    Ok(HttpResponse::Ok().json(bookings))
}

// Public: the tracking page links here without a session
#[get("/booking-data/{id}")]
pub async fn booking_data(
    store: web::Data<dyn Store>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path.into_inner())?;
    let booking = store.find_booking(id).await?;
    Ok(HttpResponse::Ok().json(booking))
}

#[get("/user-booking-data/{email}")]
pub async fn user_booking_data(
    store: web::Data<dyn Store>,
    auth_user: AuthUser,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let email = path.into_inner();
    auth_user.ensure_owner(&email)?;

    let bookings = store.list_bookings_by_sender(&email).await?;
    Ok(HttpResponse::Ok().json(bookings))
}

/// Status changes, delivery-man assignment and sender edits all come through here.
#[patch("/update-booking-data/{id}")]
pub async fn update_booking_data(
    store: web::Data<dyn Store>,
    auth_user: AuthUser,
    path: web::Path<String>,
    patch: web::Json<BookingPatch>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path.into_inner())?;

    let outcome = store.update_booking(id, &patch).await?;
    info!(
        "Booking {} updated by {} (matched: {}, modified: {})",
        id, auth_user.email, outcome.matched_count, outcome.modified_count
    );
    Ok(HttpResponse::Ok().json(outcome))
}
