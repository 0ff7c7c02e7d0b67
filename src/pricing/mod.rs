pub mod estimator;
pub mod format;
pub mod plans;

pub use estimator::{estimate, PriceQuote, PricingInputs, RateCard, SliderRange, SupportTier};
pub use plans::{BillingMode, PlanId, PlanPrice};

/// Rounds half-way values up, the way browsers round display prices.
pub fn round_price(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
