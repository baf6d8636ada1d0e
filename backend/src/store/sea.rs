use async_trait::async_trait;
use log::debug;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use super::{Store, StoreError, UpdateOutcome};
use crate::models::entities::{
    parcel_booking, payment, review, user, BookingPatch, ParcelBooking, ParcelBookingActiveModel,
    ParcelBookingModel, Payment, PaymentActiveModel, PaymentModel, Review, ReviewActiveModel,
    ReviewModel, Role, User, UserActiveModel, UserModel, UserPatch,
};

/// PostgreSQL-backed store. The connection pool is the only shared state.
#[derive(Clone)]
pub struct SeaOrmStore {
    db: DatabaseConnection,
}

impl SeaOrmStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Store for SeaOrmStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserModel>, StoreError> {
        Ok(User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?)
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<UserModel>, StoreError> {
        Ok(User::find_by_id(id).one(&self.db).await?)
    }

    async fn list_users(&self, role: Option<Role>) -> Result<Vec<UserModel>, StoreError> {
        let mut query = User::find();
        if let Some(role) = role {
            query = query.filter(user::Column::Role.eq(role));
        }
        Ok(query.all(&self.db).await?)
    }

    async fn insert_user_if_absent(&self, user: UserModel) -> Result<Option<UserModel>, StoreError> {
        // Relies on the unique index on users.email.
        let inserted = User::insert(UserActiveModel::from(user.clone()))
            .on_conflict(OnConflict::column(user::Column::Email).do_nothing().to_owned())
            .exec_without_returning(&self.db)
            .await?;
        if inserted == 0 {
            debug!("insert_user_if_absent: {} already exists", user.email);
            return Ok(None);
        }
        Ok(Some(user))
    }

    async fn update_user(&self, id: Uuid, patch: &UserPatch) -> Result<UpdateOutcome, StoreError> {
        let Some(existing) = User::find_by_id(id).one(&self.db).await? else {
            debug!("update_user: no user with id {}", id);
            return Ok(UpdateOutcome::unmatched());
        };

        let mut updated = existing.clone();
        if !patch.apply(&mut updated) {
            return Ok(UpdateOutcome::matched(false));
        }

        let mut active: UserActiveModel = existing.into();
        active.name = Set(updated.name);
        active.photo = Set(updated.photo);
        active.phone = Set(updated.phone);
        active.role = Set(updated.role);
        active.parcels_delivered = Set(updated.parcels_delivered);
        active.review_count = Set(updated.review_count);
        active.update(&self.db).await?;

        Ok(UpdateOutcome::matched(true))
    }

    async fn count_users(&self) -> Result<u64, StoreError> {
        Ok(User::find().count(&self.db).await?)
    }

    async fn top_delivery_men(&self, limit: u64) -> Result<Vec<UserModel>, StoreError> {
        Ok(User::find()
            .filter(user::Column::Role.eq(Role::DeliveryMan))
            .order_by_desc(user::Column::ParcelsDelivered)
            .limit(limit)
            .all(&self.db)
            .await?)
    }

    async fn insert_booking(&self, booking: ParcelBookingModel) -> Result<ParcelBookingModel, StoreError> {
        Ok(ParcelBookingActiveModel::from(booking).insert(&self.db).await?)
    }

    async fn find_booking(&self, id: Uuid) -> Result<Option<ParcelBookingModel>, StoreError> {
        Ok(ParcelBooking::find_by_id(id).one(&self.db).await?)
    }

    async fn list_bookings(&self, delivery_man_id: Option<Uuid>) -> Result<Vec<ParcelBookingModel>, StoreError> {
        let mut query = ParcelBooking::find();
        if let Some(delivery_man_id) = delivery_man_id {
            query = query.filter(parcel_booking::Column::DeliveryManId.eq(delivery_man_id));
        }
        Ok(query.all(&self.db).await?)
    }

    async fn list_bookings_by_sender(&self, email: &str) -> Result<Vec<ParcelBookingModel>, StoreError> {
        Ok(ParcelBooking::find()
            .filter(parcel_booking::Column::SenderEmail.eq(email))
            .all(&self.db)
            .await?)
    }

    async fn update_booking(&self, id: Uuid, patch: &BookingPatch) -> Result<UpdateOutcome, StoreError> {
        let Some(existing) = ParcelBooking::find_by_id(id).one(&self.db).await? else {
            debug!("update_booking: no booking with id {}", id);
            return Ok(UpdateOutcome::unmatched());
        };

        let mut updated = existing.clone();
        if !patch.apply(&mut updated) {
            return Ok(UpdateOutcome::matched(false));
        }

        let mut active: ParcelBookingActiveModel = existing.into();
        active.sender_name = Set(updated.sender_name);
        active.sender_phone = Set(updated.sender_phone);
        active.parcel_type = Set(updated.parcel_type);
        active.parcel_weight = Set(updated.parcel_weight);
        active.receiver_name = Set(updated.receiver_name);
        active.receiver_phone = Set(updated.receiver_phone);
        active.delivery_address = Set(updated.delivery_address);
        active.requested_delivery_date = Set(updated.requested_delivery_date);
        active.approximate_delivery_date = Set(updated.approximate_delivery_date);
        active.latitude = Set(updated.latitude);
        active.longitude = Set(updated.longitude);
        active.price = Set(updated.price);
        active.status = Set(updated.status);
        active.delivery_man_id = Set(updated.delivery_man_id);
        active.update(&self.db).await?;

        Ok(UpdateOutcome::matched(true))
    }

    async fn count_bookings(&self, status: Option<&str>) -> Result<u64, StoreError> {
        let mut query = ParcelBooking::find();
        if let Some(status) = status {
            query = query.filter(parcel_booking::Column::Status.eq(status));
        }
        Ok(query.count(&self.db).await?)
    }

    async fn insert_review(&self, review: ReviewModel) -> Result<ReviewModel, StoreError> {
        Ok(ReviewActiveModel::from(review).insert(&self.db).await?)
    }

    async fn list_reviews(&self, delivery_man_id: Option<Uuid>) -> Result<Vec<ReviewModel>, StoreError> {
        let mut query = Review::find();
        if let Some(delivery_man_id) = delivery_man_id {
            query = query.filter(review::Column::DeliveryManId.eq(delivery_man_id));
        }
        Ok(query.all(&self.db).await?)
    }

    async fn insert_payment(&self, payment: PaymentModel) -> Result<PaymentModel, StoreError> {
        Ok(PaymentActiveModel::from(payment).insert(&self.db).await?)
    }

    async fn list_payments_by_email(&self, email: &str) -> Result<Vec<PaymentModel>, StoreError> {
        Ok(Payment::find()
            .filter(payment::Column::Email.eq(email))
            .order_by_desc(payment::Column::CreatedAt)
            .all(&self.db)
            .await?)
    }
}
