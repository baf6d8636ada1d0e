use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "payments")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub email: String,
    pub amount: f64,
    pub transaction_id: String,
    pub booking_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentDto {
    pub email: String,
    pub amount: f64,
    pub transaction_id: String,
    pub booking_id: Option<Uuid>,
}

impl CreatePaymentDto {
    pub fn into_model(self) -> Model {
        Model {
            id: Uuid::new_v4(),
            email: self.email,
            amount: self.amount,
            transaction_id: self.transaction_id,
            booking_id: self.booking_id,
            created_at: Utc::now(),
        }
    }
}
