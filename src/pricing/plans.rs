use super::round_price;

pub const YEARLY_DISCOUNT_FACTOR: f64 = 0.8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanId {
    Starter,
    Professional,
    Enterprise,
}

impl PlanId {
    /// Card order on the page.
    pub const ALL: [PlanId; 3] = [PlanId::Starter, PlanId::Professional, PlanId::Enterprise];

    pub fn monthly_base(self) -> i64 {
        match self {
            PlanId::Starter => 29,
            PlanId::Professional => 79,
            PlanId::Enterprise => 199,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PlanId::Starter => "Starter",
            PlanId::Professional => "Professional",
            PlanId::Enterprise => "Enterprise",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BillingMode {
    #[default]
    Monthly,
    Yearly,
}

impl BillingMode {
    /// The toggle is checked for yearly billing.
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            BillingMode::Yearly
        } else {
            BillingMode::Monthly
        }
    }

    pub fn is_yearly(self) -> bool {
        self == BillingMode::Yearly
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanPrice {
    pub plan: PlanId,
    pub monthly_base: i64,
    pub billing: BillingMode,
}

impl PlanPrice {
    pub fn new(plan: PlanId, billing: BillingMode) -> Self {
        Self { plan, monthly_base: plan.monthly_base(), billing }
    }

    pub fn discounted_monthly(&self) -> i64 {
        round_price(self.monthly_base as f64 * YEARLY_DISCOUNT_FACTOR)
    }

    pub fn display_price(&self) -> i64 {
        match self.billing {
            BillingMode::Monthly => self.monthly_base,
            BillingMode::Yearly => self.discounted_monthly(),
        }
    }

    /// What a year of yearly billing saves over twelve monthly payments.
    pub fn yearly_savings(&self) -> i64 {
        (self.monthly_base - self.discounted_monthly()) * 12
    }

    /// Savings are only advertised while yearly billing is selected.
    pub fn visible_savings(&self) -> Option<i64> {
        self.billing.is_yearly().then(|| self.yearly_savings())
    }
}

pub fn plan_prices(billing: BillingMode) -> [PlanPrice; 3] {
    PlanId::ALL.map(|plan| PlanPrice::new(plan, billing))
}
