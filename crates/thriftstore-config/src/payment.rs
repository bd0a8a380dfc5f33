use std::env;

#[derive(Clone, Debug)]
pub struct PaymentConfig {
    /// Provider secret key. Intent creation is refused while unset.
    pub secret_key: Option<String>,
    pub api_base: String,
    pub currency: String,
}

impl PaymentConfig {
    pub fn from_env() -> Self {
        Self {
            secret_key: env::var("STRIPE_SECRET_KEY")
                .ok()
                .filter(|s| !s.is_empty()),
            api_base: env::var("STRIPE_API_BASE")
                .unwrap_or_else(|_| "https://api.stripe.com".to_string()),
            currency: env::var("PAYMENT_CURRENCY").unwrap_or_else(|_| "usd".to_string()),
        }
    }
}
