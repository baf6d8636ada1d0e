//! Dashboard aggregates. Everything is recomputed from the collections on each call.

use std::collections::BTreeMap;

use actix_web::{get, web, HttpResponse};
use log::debug;
use serde::Serialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::entities::parcel_booking::STATUS_DELIVERED;
use crate::models::entities::{ParcelBookingModel, UserModel};
use crate::store::Store;

const TOP_DELIVERY_MEN: u64 = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateCount {
    pub date: String,
    pub count: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryManSummary {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: Option<String>,
    pub photo: Option<String>,
    pub parcels_delivered: i32,
    pub review_count: i32,
}

impl From<UserModel> for DeliveryManSummary {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            name: user.name,
            photo: user.photo,
            parcels_delivered: user.parcels_delivered,
            review_count: user.review_count,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomepageStats {
    pub total_bookings: u64,
    pub total_delivered: u64,
    pub total_users: u64,
    pub top_delivery_men: Vec<DeliveryManSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_bookings: u64,
    pub bookings_by_date: Vec<DateCount>,
    pub delivered_by_date: Vec<DateCount>,
}

/// Frequency table of dates, ascending.
pub fn date_frequency<'a>(dates: impl IntoIterator<Item = &'a str>) -> Vec<DateCount> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for date in dates {
        *counts.entry(date).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(date, count)| DateCount { date: date.to_string(), count })
        .collect()
}

pub fn admin_stats(bookings: &[ParcelBookingModel]) -> AdminStats {
    AdminStats {
        total_bookings: bookings.len() as u64,
        bookings_by_date: date_frequency(bookings.iter().map(|b| b.booking_date.as_str())),
        delivered_by_date: date_frequency(
            bookings
                .iter()
                .filter(|b| b.status == STATUS_DELIVERED)
                .map(|b| b.booking_date.as_str()),
        ),
    }
}

#[get("/hompage-state")]
pub async fn homepage_state(store: web::Data<dyn Store>) -> Result<HttpResponse, ApiError> {
    let stats = HomepageStats {
        total_bookings: store.count_bookings(None).await?,
        total_delivered: store.count_bookings(Some(STATUS_DELIVERED)).await?,
        total_users: store.count_users().await?,
        top_delivery_men: store
            .top_delivery_men(TOP_DELIVERY_MEN)
            .await?
            .into_iter()
            .map(DeliveryManSummary::from)
            .collect(),
    };
    debug!("Homepage stats: {} bookings, {} users", stats.total_bookings, stats.total_users);
    Ok(HttpResponse::Ok().json(stats))
}

// Unguarded, like the homepage numbers. See DESIGN.md.
#[get("/admin-state")]
pub async fn admin_state(store: web::Data<dyn Store>) -> Result<HttpResponse, ApiError> {
    let bookings = store.list_bookings(None).await?;
    Ok(HttpResponse::Ok().json(admin_stats(&bookings)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::entities::CreateBookingDto;

    fn booking(date: &str, status: &str) -> ParcelBookingModel {
        CreateBookingDto {
            sender_name: None,
            sender_email: "s@x.com".to_string(),
            sender_phone: None,
            parcel_type: None,
            parcel_weight: None,
            receiver_name: None,
            receiver_phone: None,
            delivery_address: None,
            requested_delivery_date: None,
            latitude: None,
            longitude: None,
            price: 10.0,
            status: Some(status.to_string()),
            booking_date: Some(date.to_string()),
        }
        .into_model()
    }

    #[test]
    fn dates_are_counted_and_sorted() {
        let table = date_frequency(["2024-01-02", "2024-01-01", "2024-01-02"]);
        assert_eq!(
            table,
            vec![
                DateCount { date: "2024-01-01".to_string(), count: 1 },
                DateCount { date: "2024-01-02".to_string(), count: 2 },
            ]
        );
    }

    #[test]
    fn empty_input_gives_empty_table() {
        assert!(date_frequency(Vec::<&str>::new()).is_empty());
    }

    #[test]
    fn delivered_table_only_counts_delivered_bookings() {
        let bookings = vec![
            booking("2024-03-01", "pending"),
            booking("2024-03-01", STATUS_DELIVERED),
            booking("2024-03-02", STATUS_DELIVERED),
            booking("2024-03-02", "cancelled"),
        ];

        let stats = admin_stats(&bookings);
        assert_eq!(stats.total_bookings, 4);
        assert_eq!(stats.bookings_by_date.iter().map(|d| d.count).sum::<u64>(), 4);
        assert_eq!(
            stats.delivered_by_date,
            vec![
                DateCount { date: "2024-03-01".to_string(), count: 1 },
                DateCount { date: "2024-03-02".to_string(), count: 1 },
            ]
        );
    }
}
