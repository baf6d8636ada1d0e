use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Role stored on a user record. The string values are part of the wire format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Role {
    #[default]
    #[sea_orm(string_value = "user")]
    #[serde(rename = "user")]
    User,
    #[sea_orm(string_value = "deliveryMan")]
    #[serde(rename = "deliveryMan")]
    DeliveryMan,
    #[sea_orm(string_value = "admin")]
    #[serde(rename = "admin")]
    Admin,
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "deliveryMan" => Ok(Role::DeliveryMan),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub name: Option<String>,
    pub photo: Option<String>,
    pub phone: Option<String>,
    pub role: Role,
    pub parcels_delivered: i32,
    pub review_count: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Body of the register / social-login call
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    pub email: String,
    pub name: Option<String>,
    pub photo: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Role,
}

impl CreateUserDto {
    pub fn into_model(self) -> Model {
        Model {
            id: Uuid::new_v4(),
            email: self.email,
            name: self.name,
            photo: self.photo,
            phone: self.phone,
            role: self.role,
            parcels_delivered: 0,
            review_count: 0,
            created_at: Utc::now(),
        }
    }
}

/// Partial update accepted by `update-user-data`. Absent fields are left untouched.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub name: Option<String>,
    pub photo: Option<String>,
    pub phone: Option<String>,
    pub role: Option<Role>,
    pub parcels_delivered: Option<i32>,
    pub review_count: Option<i32>,
}

impl UserPatch {
    /// Applies the patch in place and reports whether any field actually changed.
    pub fn apply(&self, user: &mut Model) -> bool {
        let before = user.clone();

        if let Some(name) = &self.name {
            user.name = Some(name.clone());
        }
        if let Some(photo) = &self.photo {
            user.photo = Some(photo.clone());
        }
        if let Some(phone) = &self.phone {
            user.phone = Some(phone.clone());
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(count) = self.parcels_delivered {
            user.parcels_delivered = count;
        }
        if let Some(count) = self.review_count {
            user.review_count = count;
        }

        *user != before
    }
}
