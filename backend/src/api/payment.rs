use actix_web::{get, post, web, HttpResponse};
use log::info;
use serde::Deserialize;
use serde_json::json;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::models::entities::CreatePaymentDto;
use crate::payment::PaymentProvider;
use crate::store::{InsertOutcome, Store};

const CURRENCY: &str = "usd";

#[derive(Debug, Deserialize)]
pub struct PaymentIntentRequest {
    pub price: f64,
}

/// Converts a price in dollars to whole cents, rejecting values no provider accepts.
pub(crate) fn amount_in_cents(price: f64) -> Result<i64, ApiError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(ApiError::InvalidInput("price must be a positive number".to_string()));
    }
    Ok((price * 100.0).round() as i64)
}

#[post("/create-payment-intent")]
pub async fn create_payment_intent(
    provider: web::Data<dyn PaymentProvider>,
    auth_user: AuthUser,
    request: web::Json<PaymentIntentRequest>,
) -> Result<HttpResponse, ApiError> {
    let amount = amount_in_cents(request.price)?;

    let client_secret = provider.create_payment_intent(amount, CURRENCY).await?;
    info!("Payment intent created for {} ({} cents)", auth_user.email, amount);
    Ok(HttpResponse::Ok().json(json!({ "clientSecret": client_secret })))
}

#[post("/add-payment-details")]
pub async fn add_payment_details(
    store: web::Data<dyn Store>,
    auth_user: AuthUser,
    payment: web::Json<CreatePaymentDto>,
) -> Result<HttpResponse, ApiError> {
    let payment = payment.into_inner();
    auth_user.ensure_owner(&payment.email)?;

    let payment = store.insert_payment(payment.into_model()).await?;
    info!("Recorded payment {} for {}", payment.transaction_id, payment.email);
    Ok(HttpResponse::Ok().json(InsertOutcome::new(payment.id)))
}

#[get("/user-payment-history/{email}")]
pub async fn user_payment_history(
    store: web::Data<dyn Store>,
    auth_user: AuthUser,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let email = path.into_inner();
    auth_user.ensure_owner(&email)?;

    let payments = store.list_payments_by_email(&email).await?;
    Ok(HttpResponse::Ok().json(payments))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_is_rounded_to_cents() {
        assert_eq!(amount_in_cents(12.5).unwrap(), 1250);
        assert_eq!(amount_in_cents(19.999).unwrap(), 2000);
        assert_eq!(amount_in_cents(0.1 + 0.2).unwrap(), 30);
    }

    #[test]
    fn non_positive_or_nan_price_is_rejected() {
        assert!(amount_in_cents(0.0).is_err());
        assert!(amount_in_cents(-3.0).is_err());
        assert!(amount_in_cents(f64::NAN).is_err());
        assert!(amount_in_cents(f64::INFINITY).is_err());
    }
}
