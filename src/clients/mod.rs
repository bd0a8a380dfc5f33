pub mod stripe;

pub use stripe::{PaymentIntent, StripeClient};
