use gloo_timers::callback::Timeout;
use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::animated_number::AnimatedNumber;
use crate::components::cta::CtaButton;
use crate::components::reveal::Reveal;
use crate::config;
use crate::pricing::format::format_yearly_savings;
use crate::pricing::plans::plan_prices;
use crate::pricing::{BillingMode, PlanId, PlanPrice};

fn plan_features(plan: PlanId) -> &'static [&'static str] {
    match plan {
        PlanId::Starter => &["Up to 10 team members", "100 GB storage", "Email support"],
        PlanId::Professional => &[
            "Up to 50 team members",
            "1 TB storage",
            "Priority support",
            "Advanced analytics",
        ],
        PlanId::Enterprise => &[
            "Unlimited team members",
            "Unlimited storage",
            "Dedicated support",
            "Custom integrations",
        ],
    }
}

#[derive(Properties, PartialEq)]
struct PlanCardProps {
    index: usize,
    price: PlanPrice,
    /// Bumped on every billing toggle; each bump plays the press pulse.
    pulse: u32,
}

#[function_component(PlanCard)]
fn plan_card(props: &PlanCardProps) -> Html {
    let pressed = use_state(|| false);
    let release = use_mut_ref(|| None::<Timeout>);

    {
        let pressed = pressed.clone();
        let release = release.clone();
        let index = props.index;
        use_effect_with_deps(
            move |pulse| {
                if *pulse > 0 {
                    pressed.set(true);
                    let pressed = pressed.clone();
                    *release.borrow_mut() = Some(Timeout::new(config::card_pulse_delay_ms(index), move || {
                        pressed.set(false);
                    }));
                }
                move || drop(release.borrow_mut().take())
            },
            props.pulse,
        );
    }

    let price = props.price;
    let scale = if *pressed { config::CARD_PULSE_SCALE } else { 1.0 };
    let style = format!("transform: scale({}); transition: transform 0.2s ease;", scale);
    let savings_style = if price.billing.is_yearly() { "display: block;" } else { "display: none;" };
    let featured = price.plan == PlanId::Professional;

    html! {
        <div class={classes!("pricing-card", featured.then(|| "featured"))} {style}>
            if featured {
                <div class="popular-tag">{"Most Popular"}</div>
            }
            <div class="card-header">
                <h3>{price.plan.name()}</h3>
                <div class="price">
                    <span class="currency">{"$"}</span>
                    <AnimatedNumber
                        class="amount"
                        value={price.display_price()}
                        duration_ms={config::PLAN_PRICE_ANIMATION_MS}
                    />
                    <span class="period">{"/month"}</span>
                </div>
                <div class="yearly-savings" style={savings_style}>
                    <span class="savings-text">{format_yearly_savings(price.yearly_savings())}</span>
                </div>
            </div>
            <ul>
                { for plan_features(price.plan).iter().map(|f| html! { <li>{*f}</li> }) }
            </ul>
            <CtaButton class="btn-primary">{"Choose "}{price.plan.name()}</CtaButton>
        </div>
    }
}

#[function_component(PricingPlans)]
pub fn pricing_plans() -> Html {
    let billing = use_state(BillingMode::default);
    let pulse = use_state(|| 0u32);

    let on_toggle = {
        let billing = billing.clone();
        let pulse = pulse.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mode = BillingMode::from_checked(input.checked());
            info!("Billing switched to {:?}", mode);
            billing.set(mode);
            pulse.set(*pulse + 1);
        })
    };

    let yearly = billing.is_yearly();

    html! {
        <div class="pricing-plans">
            <div class="pricing-toggle">
                <span id="monthly-label" class={classes!("toggle-label", (!yearly).then(|| "active"))}>
                    {"Monthly"}
                </span>
                <label class="switch">
                    <input type="checkbox" id="pricing-toggle" checked={yearly} onchange={on_toggle} />
                    <span class="slider"></span>
                </label>
                <span id="yearly-label" class={classes!("toggle-label", yearly.then(|| "active"))}>
                    {"Yearly"}
                </span>
                <span
                    id="yearly-savings"
                    class="savings-badge"
                    style={if yearly { "display: inline-block;" } else { "display: none;" }}
                >
                    {"Save 20%"}
                </span>
            </div>
            <div class="pricing-grid">
                { for plan_prices(*billing).into_iter().enumerate().map(|(index, price)| html! {
                    <Reveal key={index} class="pricing-card-wrapper">
                        <PlanCard {index} {price} pulse={*pulse} />
                    </Reveal>
                }) }
            </div>
        </div>
    }
}
