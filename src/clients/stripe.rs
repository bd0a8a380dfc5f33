//! Stripe payment intents over the REST API.

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use thriftstore_config::PaymentConfig;
use tracing::instrument;

#[derive(Deserialize, Debug)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

#[derive(Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Deserialize)]
struct StripeErrorDetail {
    message: String,
}

#[derive(Clone, Debug)]
pub struct StripeClient {
    config: PaymentConfig,
    client: reqwest::Client,
}

impl StripeClient {
    pub fn new(config: PaymentConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn currency(&self) -> &str {
        &self.config.currency
    }

    /// Creates a card payment intent for `amount` minor units.
    #[instrument(skip(self))]
    pub async fn create_payment_intent(&self, amount: i64) -> Result<PaymentIntent> {
        let api_key = self
            .config
            .secret_key
            .as_deref()
            .ok_or_else(|| anyhow!("payment provider is not configured"))?;

        let url = format!(
            "{}/v1/payment_intents",
            self.config.api_base.trim_end_matches('/')
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .form(&[
                ("amount", amount.to_string()),
                ("currency", self.config.currency.clone()),
                ("payment_method_types[]", "card".to_string()),
            ])
            .send()
            .await
            .context("payment provider unreachable")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<StripeErrorBody>(&error_text)
                .map(|body| body.error.message)
                .unwrap_or(error_text);
            return Err(anyhow!("Stripe API error ({}): {}", status, message));
        }

        let payment_intent = response
            .json::<PaymentIntent>()
            .await
            .context("unexpected payment provider response")?;
        Ok(payment_intent)
    }
}
