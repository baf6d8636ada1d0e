use async_trait::async_trait;
use log::{debug, error};
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("payment provider is not configured")]
    NotConfigured,
    #[error("payment provider request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("payment provider rejected the request: {0}")]
    Rejected(String),
}

/// Remote service that turns an amount into a client secret the browser can confirm.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// `amount` is in minor currency units (cents).
    async fn create_payment_intent(&self, amount: i64, currency: &str) -> Result<String, PaymentError>;
}

pub struct StripeClient {
    http: reqwest::Client,
    secret_key: Option<String>,
    api_base: String,
}

impl StripeClient {
    pub fn new(secret_key: Option<String>, api_base: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            secret_key,
            api_base,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PaymentIntentResponse {
    client_secret: Option<String>,
    error: Option<ProviderErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: Option<String>,
}

#[async_trait]
impl PaymentProvider for StripeClient {
    async fn create_payment_intent(&self, amount: i64, currency: &str) -> Result<String, PaymentError> {
        let secret_key = self.secret_key.as_deref().ok_or(PaymentError::NotConfigured)?;
        let url = format!("{}/v1/payment_intents", self.api_base.trim_end_matches('/'));

        debug!("Creating payment intent for {} {}", amount, currency);
        let response = self
            .http
            .post(&url)
            .bearer_auth(secret_key)
            .form(&[
                ("amount", amount.to_string()),
                ("currency", currency.to_string()),
                ("payment_method_types[]", "card".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body: PaymentIntentResponse = response.json().await?;
        client_secret_from(status, body)
    }
}

fn client_secret_from(status: StatusCode, body: PaymentIntentResponse) -> Result<String, PaymentError> {
    if !status.is_success() {
        let message = body
            .error
            .and_then(|e| e.message)
            .unwrap_or_else(|| status.to_string());
        error!("Payment intent rejected with status {}: {}", status, message);
        return Err(PaymentError::Rejected(message));
    }

    body.client_secret
        .ok_or_else(|| PaymentError::Rejected("response did not include a client secret".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reply(value: serde_json::Value) -> PaymentIntentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn success_yields_client_secret() {
        let body = reply(json!({ "id": "pi_1", "client_secret": "pi_1_secret_abc" }));
        assert_eq!(client_secret_from(StatusCode::OK, body).unwrap(), "pi_1_secret_abc");
    }

    #[test]
    fn provider_error_message_is_surfaced() {
        let body = reply(json!({ "error": { "message": "Amount must be at least 50 cents" } }));
        match client_secret_from(StatusCode::BAD_REQUEST, body) {
            Err(PaymentError::Rejected(message)) => {
                assert_eq!(message, "Amount must be at least 50 cents")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn error_without_message_falls_back_to_status() {
        let body = reply(json!({}));
        match client_secret_from(StatusCode::UNAUTHORIZED, body) {
            Err(PaymentError::Rejected(message)) => assert!(message.contains("401")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn success_without_client_secret_is_rejected() {
        let body = reply(json!({ "id": "pi_1" }));
        assert!(matches!(
            client_secret_from(StatusCode::OK, body),
            Err(PaymentError::Rejected(_))
        ));
    }

    #[actix_web::test]
    async fn missing_secret_key_fails_before_any_request() {
        let client = StripeClient::new(None, "http://127.0.0.1:9".to_string());
        assert!(matches!(
            client.create_payment_intent(1000, "usd").await,
            Err(PaymentError::NotConfigured)
        ));
    }
}
