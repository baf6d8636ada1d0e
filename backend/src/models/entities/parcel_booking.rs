use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use chrono::Utc;
use uuid::Uuid;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_DELIVERED: &str = "delivered";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "parcel_bookings")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub sender_name: Option<String>,
    pub sender_email: String,
    pub sender_phone: Option<String>,
    pub parcel_type: Option<String>,
    pub parcel_weight: Option<f64>,
    pub receiver_name: Option<String>,
    pub receiver_phone: Option<String>,
    pub delivery_address: Option<String>,
    pub requested_delivery_date: Option<String>,
    pub approximate_delivery_date: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub price: f64,
    pub status: String,
    pub delivery_man_id: Option<Uuid>,
    pub booking_date: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    pub sender_name: Option<String>,
    pub sender_email: String,
    pub sender_phone: Option<String>,
    pub parcel_type: Option<String>,
    pub parcel_weight: Option<f64>,
    pub receiver_name: Option<String>,
    pub receiver_phone: Option<String>,
    pub delivery_address: Option<String>,
    pub requested_delivery_date: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub price: f64,
    pub status: Option<String>,
    pub booking_date: Option<String>,
}

impl CreateBookingDto {
    pub fn into_model(self) -> Model {
        Model {
            id: Uuid::new_v4(),
            sender_name: self.sender_name,
            sender_email: self.sender_email,
            sender_phone: self.sender_phone,
            parcel_type: self.parcel_type,
            parcel_weight: self.parcel_weight,
            receiver_name: self.receiver_name,
            receiver_phone: self.receiver_phone,
            delivery_address: self.delivery_address,
            requested_delivery_date: self.requested_delivery_date,
            approximate_delivery_date: None,
            latitude: self.latitude,
            longitude: self.longitude,
            price: self.price,
            status: self.status.unwrap_or_else(|| STATUS_PENDING.to_string()),
            delivery_man_id: None,
            booking_date: self
                .booking_date
                .unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string()),
        }
    }
}

/// Partial update accepted by `update-booking-data`: status changes, delivery-man
/// assignment, or the sender editing a pending booking.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPatch {
    pub sender_name: Option<String>,
    pub sender_phone: Option<String>,
    pub parcel_type: Option<String>,
    pub parcel_weight: Option<f64>,
    pub receiver_name: Option<String>,
    pub receiver_phone: Option<String>,
    pub delivery_address: Option<String>,
    pub requested_delivery_date: Option<String>,
    pub approximate_delivery_date: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub price: Option<f64>,
    pub status: Option<String>,
    pub delivery_man_id: Option<Uuid>,
}

impl BookingPatch {
    /// Applies the patch in place and reports whether any field actually changed.
    pub fn apply(&self, booking: &mut Model) -> bool {
        let before = booking.clone();

        fn set<T: Clone>(slot: &mut Option<T>, value: &Option<T>) {
            if let Some(v) = value {
                *slot = Some(v.clone());
            }
        }

        set(&mut booking.sender_name, &self.sender_name);
        set(&mut booking.sender_phone, &self.sender_phone);
        set(&mut booking.parcel_type, &self.parcel_type);
        set(&mut booking.parcel_weight, &self.parcel_weight);
        set(&mut booking.receiver_name, &self.receiver_name);
        set(&mut booking.receiver_phone, &self.receiver_phone);
        set(&mut booking.delivery_address, &self.delivery_address);
        set(&mut booking.requested_delivery_date, &self.requested_delivery_date);
        set(&mut booking.approximate_delivery_date, &self.approximate_delivery_date);
        set(&mut booking.latitude, &self.latitude);
        set(&mut booking.longitude, &self.longitude);
        set(&mut booking.delivery_man_id, &self.delivery_man_id);
        if let Some(price) = self.price {
            booking.price = price;
        }
        if let Some(status) = &self.status {
            booking.status = status.clone();
        }

        *booking != before
    }
}
