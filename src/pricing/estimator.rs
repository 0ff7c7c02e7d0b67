use std::fmt;
use std::str::FromStr;

use super::round_price;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SupportTier {
    #[default]
    Basic,
    Priority,
    Enterprise,
}

impl SupportTier {
    pub const ALL: [SupportTier; 3] = [SupportTier::Basic, SupportTier::Priority, SupportTier::Enterprise];

    pub fn multiplier(self) -> f64 {
        match self {
            SupportTier::Basic => 1.0,
            SupportTier::Priority => 1.5,
            SupportTier::Enterprise => 2.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SupportTier::Basic => "basic",
            SupportTier::Priority => "priority",
            SupportTier::Enterprise => "enterprise",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SupportTier::Basic => "Basic (Email)",
            SupportTier::Priority => "Priority (+50%)",
            SupportTier::Enterprise => "Enterprise (+100%)",
        }
    }

    /// Maps a `<select>` value to a tier, falling back to basic support.
    pub fn from_select_value(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl FromStr for SupportTier {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(SupportTier::Basic),
            "priority" => Ok(SupportTier::Priority),
            "enterprise" => Ok(SupportTier::Enterprise),
            _ => Err(()),
        }
    }
}

impl fmt::Display for SupportTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bounds and starting value of one range input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliderRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub default: u32,
}

impl SliderRange {
    pub const USERS: SliderRange = SliderRange { min: 1, max: 100, step: 1, default: 10 };
    pub const STORAGE_GB: SliderRange = SliderRange { min: 10, max: 5000, step: 10, default: 100 };
    pub const API_CALLS: SliderRange = SliderRange { min: 1000, max: 1_000_000, step: 1000, default: 50_000 };

    pub fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }

    /// Reads a raw input value. Anything unparseable resets to the default.
    pub fn read(&self, raw: &str) -> u32 {
        raw.trim()
            .parse::<u32>()
            .map(|v| self.clamp(v))
            .unwrap_or(self.default)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingInputs {
    pub users: u32,
    pub storage_gb: u32,
    pub api_calls: u32,
    pub support: SupportTier,
}

impl Default for PricingInputs {
    fn default() -> Self {
        Self {
            users: SliderRange::USERS.default,
            storage_gb: SliderRange::STORAGE_GB.default,
            api_calls: SliderRange::API_CALLS.default,
            support: SupportTier::Basic,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PriceQuote {
    pub total: i64,
    pub savings: i64,
}

/// Unit prices for the estimate and for the enterprise reference it is
/// compared against.
#[derive(Clone, Debug, PartialEq)]
pub struct RateCard {
    pub base_price: f64,
    pub per_user: f64,
    pub per_gb: f64,
    pub per_thousand_calls: f64,

    pub reference_base: f64,
    pub reference_included_users: u32,
    pub reference_per_extra_user: f64,
    pub reference_included_gb: u32,
    pub reference_per_extra_gb: f64,
    pub reference_included_calls: u32,
    pub reference_per_extra_call: f64,
}

impl Default for RateCard {
    fn default() -> Self {
        Self {
            base_price: 29.0,
            per_user: 2.0,
            per_gb: 0.1,
            per_thousand_calls: 0.001,

            reference_base: 199.0,
            reference_included_users: 25,
            reference_per_extra_user: 5.0,
            reference_included_gb: 1000,
            reference_per_extra_gb: 0.05,
            reference_included_calls: 100_000,
            reference_per_extra_call: 0.0001,
        }
    }
}

impl RateCard {
    pub fn total(&self, inputs: &PricingInputs) -> i64 {
        let mut total = self.base_price;
        total += f64::from(inputs.users) * self.per_user;
        total += f64::from(inputs.storage_gb) * self.per_gb;
        total += (f64::from(inputs.api_calls) / 1000.0) * self.per_thousand_calls;
        total *= inputs.support.multiplier();
        round_price(total)
    }

    /// What a comparable enterprise product would charge for the same usage.
    pub fn reference_cost(&self, inputs: &PricingInputs) -> i64 {
        let extra_users = inputs.users.saturating_sub(self.reference_included_users);
        let extra_gb = inputs.storage_gb.saturating_sub(self.reference_included_gb);
        let extra_calls = inputs.api_calls.saturating_sub(self.reference_included_calls);

        let mut cost = self.reference_base;
        cost += f64::from(extra_users) * self.reference_per_extra_user;
        cost += f64::from(extra_gb) * self.reference_per_extra_gb;
        cost += f64::from(extra_calls) * self.reference_per_extra_call;
        round_price(cost)
    }

    pub fn quote(&self, inputs: &PricingInputs) -> PriceQuote {
        let total = self.total(inputs);
        let savings = (self.reference_cost(inputs) - total).max(0);
        PriceQuote { total, savings }
    }
}

/// Quotes with the published rate card.
pub fn estimate(inputs: &PricingInputs) -> PriceQuote {
    RateCard::default().quote(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn inputs(users: u32, storage_gb: u32, api_calls: u32, support: SupportTier) -> PricingInputs {
        PricingInputs { users, storage_gb, api_calls, support }
    }

    #[test]
    fn default_slider_positions_quote() {
        let quote = estimate(&inputs(10, 100, 50_000, SupportTier::Basic));
        assert_eq!(quote, PriceQuote { total: 59, savings: 140 });
    }

    #[test]
    fn enterprise_support_doubles_before_rounding() {
        // 29 + 20 + 10 + 0.05 = 59.05 -> 118.1 -> 118
        let quote = estimate(&inputs(10, 100, 50_000, SupportTier::Enterprise));
        assert_eq!(quote.total, 118);
        assert_eq!(quote.savings, 81);
    }

    #[test]
    fn priority_support_applies_half_again() {
        // 59.05 * 1.5 = 88.575
        let quote = estimate(&inputs(10, 100, 50_000, SupportTier::Priority));
        assert_eq!(quote.total, 89);
    }

    #[test]
    fn reference_cost_charges_only_overage() {
        let card = RateCard::default();
        assert_eq!(card.reference_cost(&inputs(25, 1000, 100_000, SupportTier::Basic)), 199);
        // 199 + 75*5 + 4000*0.05 + 900000*0.0001 = 199 + 375 + 200 + 90
        assert_eq!(card.reference_cost(&inputs(100, 5000, 1_000_000, SupportTier::Basic)), 864);
    }

    #[test]
    fn savings_clamp_to_zero_when_estimate_is_dearer() {
        // 29 + 200 + 500 + 1 = 730 * 2 = 1460 against a reference of 864
        let quote = estimate(&inputs(100, 5000, 1_000_000, SupportTier::Enterprise));
        assert_eq!(quote.total, 1460);
        assert_eq!(quote.savings, 0);
    }

    #[test]
    fn support_tier_parses_select_values() {
        assert_eq!(SupportTier::from_select_value("priority"), SupportTier::Priority);
        assert_eq!(SupportTier::from_select_value("enterprise"), SupportTier::Enterprise);
        assert_eq!(SupportTier::from_select_value("gold"), SupportTier::Basic);
        for tier in SupportTier::ALL {
            assert_eq!(SupportTier::from_select_value(&tier.to_string()), tier);
        }
    }

    #[test]
    fn slider_read_clamps_and_defaults() {
        assert_eq!(SliderRange::USERS.read("42"), 42);
        assert_eq!(SliderRange::USERS.read("500"), 100);
        assert_eq!(SliderRange::USERS.read("0"), 1);
        assert_eq!(SliderRange::STORAGE_GB.read(""), 100);
        assert_eq!(SliderRange::API_CALLS.read("abc"), 50_000);
    }

    fn tier() -> impl Strategy<Value = SupportTier> {
        prop_oneof![
            Just(SupportTier::Basic),
            Just(SupportTier::Priority),
            Just(SupportTier::Enterprise),
        ]
    }

    proptest! {
        #[test]
        fn total_matches_closed_form(users in 0u32..=100, storage in 0u32..=5000, calls in 0u32..=1_000_000, support in tier()) {
            let quote = estimate(&inputs(users, storage, calls, support));
            let raw = (29.0 + 2.0 * f64::from(users) + 0.1 * f64::from(storage) + 0.000001 * f64::from(calls))
                * support.multiplier();
            // Summation order differs from the closed form, so allow one unit at exact halves.
            prop_assert!((quote.total as f64 - raw).abs() <= 0.5 + 1e-6);
        }

        #[test]
        fn savings_never_negative(users in 0u32..=10_000, storage in 0u32..=100_000, calls in 0u32..=10_000_000, support in tier()) {
            let quote = estimate(&inputs(users, storage, calls, support));
            prop_assert!(quote.savings >= 0);
        }

        #[test]
        fn quoting_is_idempotent(users in 0u32..=100, storage in 0u32..=5000, calls in 0u32..=1_000_000, support in tier()) {
            let i = inputs(users, storage, calls, support);
            prop_assert_eq!(estimate(&i), estimate(&i));
        }
    }
}
