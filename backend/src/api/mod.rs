pub mod admin;
pub mod auth;
pub mod basic;
pub mod booking;
pub mod payment;
pub mod review;
pub mod stats;
pub mod user;


use actix_web::web;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;

pub const API_PREFIX: &str = "/e-parcel/api/v1";

/// Registers every route plus the extractor configs that turn malformed input into
/// the JSON error envelope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::InvalidInput(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| ApiError::InvalidInput(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| ApiError::InvalidInput(err.to_string()).into()),
    )
    .service(basic::root)
    .service(basic::health_check)
    .service(
        web::scope(API_PREFIX)
            // Credential endpoints
            .service(auth::issue_access_token)
            .service(auth::logout_get)
            // User endpoints
            .service(user::create_or_update_user)
            .service(user::update_user_data)
            .service(user::get_user_data)
            .service(user::get_user_by_id)
            // Admin endpoints
            .service(admin::all_users)
            // Booking endpoints
            .service(booking::book_parcel)
            .service(booking::all_bookings_data)
            .service(booking::booking_data)
            .service(booking::user_booking_data)
            .service(booking::update_booking_data)
            // Review endpoints
            .service(review::add_review)
            .service(review::all_review_data)
            // Payment endpoints
            .service(payment::create_payment_intent)
            .service(payment::add_payment_details)
            .service(payment::user_payment_history)
            // Statistics endpoints
            .service(stats::homepage_state)
            .service(stats::admin_state),
    );
}

pub(crate) fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::InvalidInput(format!("'{}' is not a valid id", raw)))
}

/// `?deliveryManId=` filter shared by the booking and review listings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryManFilter {
    pub delivery_man_id: Option<String>,
}

impl DeliveryManFilter {
    /// An empty value means no filter, like an absent one.
    pub fn parse(self) -> Result<Option<Uuid>, ApiError> {
        match self.delivery_man_id.filter(|raw| !raw.is_empty()) {
            Some(raw) => parse_id(&raw).map(Some),
            None => Ok(None),
        }
    }
}
