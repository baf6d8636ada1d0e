use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Store, StoreError, UpdateOutcome};
use crate::models::entities::{
    BookingPatch, ParcelBookingModel, PaymentModel, ReviewModel, Role, UserModel, UserPatch,
};

/// In-memory stand-in for the database, one vector per collection.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Vec<UserModel>>,
    bookings: RwLock<Vec<ParcelBookingModel>>,
    reviews: RwLock<Vec<ReviewModel>>,
    payments: RwLock<Vec<PaymentModel>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserModel>, StoreError> {
        Ok(self.users.read().await.iter().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<UserModel>, StoreError> {
        Ok(self.users.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn list_users(&self, role: Option<Role>) -> Result<Vec<UserModel>, StoreError> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .filter(|u| role.map_or(true, |r| u.role == r))
            .cloned()
            .collect())
    }

    async fn insert_user_if_absent(&self, user: UserModel) -> Result<Option<UserModel>, StoreError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Ok(None);
        }
        users.push(user.clone());
        Ok(Some(user))
    }

    async fn update_user(&self, id: Uuid, patch: &UserPatch) -> Result<UpdateOutcome, StoreError> {
        let mut users = self.users.write().await;
        Ok(match users.iter_mut().find(|u| u.id == id) {
            Some(user) => UpdateOutcome::matched(patch.apply(user)),
            None => UpdateOutcome::unmatched(),
        })
    }

    async fn count_users(&self) -> Result<u64, StoreError> {
        Ok(self.users.read().await.len() as u64)
    }

    async fn top_delivery_men(&self, limit: u64) -> Result<Vec<UserModel>, StoreError> {
        let mut men: Vec<UserModel> = self
            .users
            .read()
            .await
            .iter()
            .filter(|u| u.role == Role::DeliveryMan)
            .cloned()
            .collect();
        men.sort_by(|a, b| b.parcels_delivered.cmp(&a.parcels_delivered));
        men.truncate(limit as usize);
        Ok(men)
    }

    async fn insert_booking(&self, booking: ParcelBookingModel) -> Result<ParcelBookingModel, StoreError> {
        self.bookings.write().await.push(booking.clone());
        Ok(booking)
    }

    async fn find_booking(&self, id: Uuid) -> Result<Option<ParcelBookingModel>, StoreError> {
        Ok(self.bookings.read().await.iter().find(|b| b.id == id).cloned())
    }

    async fn list_bookings(&self, delivery_man_id: Option<Uuid>) -> Result<Vec<ParcelBookingModel>, StoreError> {
        Ok(self
            .bookings
            .read()
            .await
            .iter()
            .filter(|b| delivery_man_id.map_or(true, |id| b.delivery_man_id == Some(id)))
            .cloned()
            .collect())
    }

    async fn list_bookings_by_sender(&self, email: &str) -> Result<Vec<ParcelBookingModel>, StoreError> {
        Ok(self
            .bookings
            .read()
            .await
            .iter()
            .filter(|b| b.sender_email == email)
            .cloned()
            .collect())
    }

    async fn update_booking(&self, id: Uuid, patch: &BookingPatch) -> Result<UpdateOutcome, StoreError> {
        let mut bookings = self.bookings.write().await;
        Ok(match bookings.iter_mut().find(|b| b.id == id) {
            Some(booking) => UpdateOutcome::matched(patch.apply(booking)),
            None => UpdateOutcome::unmatched(),
        })
    }

    async fn count_bookings(&self, status: Option<&str>) -> Result<u64, StoreError> {
        Ok(self
            .bookings
            .read()
            .await
            .iter()
            .filter(|b| status.map_or(true, |s| b.status == s))
            .count() as u64)
    }

    async fn insert_review(&self, review: ReviewModel) -> Result<ReviewModel, StoreError> {
        self.reviews.write().await.push(review.clone());
        Ok(review)
    }

    async fn list_reviews(&self, delivery_man_id: Option<Uuid>) -> Result<Vec<ReviewModel>, StoreError> {
        Ok(self
            .reviews
            .read()
            .await
            .iter()
            .filter(|r| delivery_man_id.map_or(true, |id| r.delivery_man_id == id))
            .cloned()
            .collect())
    }

    async fn insert_payment(&self, payment: PaymentModel) -> Result<PaymentModel, StoreError> {
        self.payments.write().await.push(payment.clone());
        Ok(payment)
    }

    async fn list_payments_by_email(&self, email: &str) -> Result<Vec<PaymentModel>, StoreError> {
        let mut payments: Vec<PaymentModel> = self
            .payments
            .read()
            .await
            .iter()
            .filter(|p| p.email == email)
            .cloned()
            .collect();
        payments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(payments)
    }
}
