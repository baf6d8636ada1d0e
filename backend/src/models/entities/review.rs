use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use chrono::Utc;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reviews")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub delivery_man_id: Uuid,
    pub reviewer_name: Option<String>,
    pub reviewer_photo: Option<String>,
    pub rating: i16,
    pub feedback: Option<String>,
    pub review_date: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewDto {
    pub delivery_man_id: Uuid,
    pub reviewer_name: Option<String>,
    pub reviewer_photo: Option<String>,
    pub rating: i16,
    pub feedback: Option<String>,
    pub review_date: Option<String>,
}

impl CreateReviewDto {
    pub fn into_model(self) -> Model {
        Model {
            id: Uuid::new_v4(),
            delivery_man_id: self.delivery_man_id,
            reviewer_name: self.reviewer_name,
            reviewer_photo: self.reviewer_photo,
            rating: self.rating,
            feedback: self.feedback,
            review_date: self
                .review_date
                .unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string()),
        }
    }
}
