//! Storage access for the four collections.
//!
//! Handlers only see the [`Store`] trait, injected as `web::Data<dyn Store>`.
//! [`SeaOrmStore`] is the production implementation; tests use the in-memory one.

pub mod sea;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::models::entities::{
    BookingPatch, ParcelBookingModel, PaymentModel, ReviewModel, Role, UserModel, UserPatch,
};

pub use sea::SeaOrmStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

/// Reply for a single insert, mirroring what clients of the old document API expect.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOutcome {
    pub acknowledged: bool,
    pub inserted_id: Uuid,
}

impl InsertOutcome {
    pub fn new(inserted_id: Uuid) -> Self {
        Self { acknowledged: true, inserted_id }
    }
}

/// Reply for an update-by-id. An unknown id is `matched_count == 0`, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOutcome {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

impl UpdateOutcome {
    pub fn unmatched() -> Self {
        Self { acknowledged: true, matched_count: 0, modified_count: 0 }
    }

    pub fn matched(modified: bool) -> Self {
        Self {
            acknowledged: true,
            matched_count: 1,
            modified_count: u64::from(modified),
        }
    }
}

/// Reply for the insert-if-absent user call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertOutcome {
    pub acknowledged: bool,
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
    pub upserted_id: Option<Uuid>,
}

impl UpsertOutcome {
    pub fn already_exists() -> Self {
        Self {
            acknowledged: true,
            exists: true,
            message: Some("User already exists"),
            matched_count: 1,
            modified_count: 0,
            upserted_count: 0,
            upserted_id: None,
        }
    }

    pub fn inserted(id: Uuid) -> Self {
        Self {
            acknowledged: true,
            exists: false,
            message: None,
            matched_count: 0,
            modified_count: 0,
            upserted_count: 1,
            upserted_id: Some(id),
        }
    }
}

#[async_trait]
pub trait Store: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserModel>, StoreError>;
    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<UserModel>, StoreError>;
    async fn list_users(&self, role: Option<Role>) -> Result<Vec<UserModel>, StoreError>;
    /// Inserts unless a user with the same email exists, in which case `None`.
    /// Atomic with respect to concurrent inserts of the same email.
    async fn insert_user_if_absent(&self, user: UserModel) -> Result<Option<UserModel>, StoreError>;
    async fn update_user(&self, id: Uuid, patch: &UserPatch) -> Result<UpdateOutcome, StoreError>;
    async fn count_users(&self) -> Result<u64, StoreError>;
    /// Delivery men ordered by parcels delivered, highest first.
    async fn top_delivery_men(&self, limit: u64) -> Result<Vec<UserModel>, StoreError>;

    async fn insert_booking(&self, booking: ParcelBookingModel) -> Result<ParcelBookingModel, StoreError>;
    async fn find_booking(&self, id: Uuid) -> Result<Option<ParcelBookingModel>, StoreError>;
    async fn list_bookings(&self, delivery_man_id: Option<Uuid>) -> Result<Vec<ParcelBookingModel>, StoreError>;
    async fn list_bookings_by_sender(&self, email: &str) -> Result<Vec<ParcelBookingModel>, StoreError>;
    async fn update_booking(&self, id: Uuid, patch: &BookingPatch) -> Result<UpdateOutcome, StoreError>;
    async fn count_bookings(&self, status: Option<&str>) -> Result<u64, StoreError>;

    async fn insert_review(&self, review: ReviewModel) -> Result<ReviewModel, StoreError>;
    async fn list_reviews(&self, delivery_man_id: Option<Uuid>) -> Result<Vec<ReviewModel>, StoreError>;

    async fn insert_payment(&self, payment: PaymentModel) -> Result<PaymentModel, StoreError>;
    async fn list_payments_by_email(&self, email: &str) -> Result<Vec<PaymentModel>, StoreError>;
}
