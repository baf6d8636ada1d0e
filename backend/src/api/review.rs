use actix_web::{get, post, web, HttpResponse};
use log::{debug, info};

use crate::api::DeliveryManFilter;
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::models::entities::CreateReviewDto;
use crate::store::{InsertOutcome, Store};

#[post("/add-review")]
pub async fn add_review(
    store: web::Data<dyn Store>,
    auth_user: AuthUser,
    review: web::Json<CreateReviewDto>,
) -> Result<HttpResponse, ApiError> {
    let review = review.into_inner();
    if !(1..=5).contains(&review.rating) {
        return Err(ApiError::InvalidInput("rating must be between 1 and 5".to_string()));
    }

    let review = store.insert_review(review.into_model()).await?;
    info!("Review {} added by {} for {}", review.id, auth_user.email, review.delivery_man_id);
    Ok(HttpResponse::Ok().json(InsertOutcome::new(review.id)))
}

#[get("/all-Review-data")]
pub async fn all_review_data(
    store: web::Data<dyn Store>,
    _auth_user: AuthUser,
    query: web::Query<DeliveryManFilter>,
) -> Result<HttpResponse, ApiError> {
    let delivery_man_id = query.into_inner().parse()?;

    let reviews = store.list_reviews(delivery_man_id).await?;
    debug!("Listed {} reviews (delivery man filter: {:?})", reviews.len(), delivery_man_id);
    Ok(HttpResponse::Ok().json(reviews))
}
