use log::debug;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::animated_number::AnimatedNumber;
use crate::config;
use crate::pricing::format::{format_storage, format_thousands, ValueFormat};
use crate::pricing::{estimate, PricingInputs, SliderRange, SupportTier};

#[derive(Clone, Copy, PartialEq)]
enum Slider {
    Users,
    Storage,
    ApiCalls,
}

impl Slider {
    fn range(self) -> SliderRange {
        match self {
            Slider::Users => SliderRange::USERS,
            Slider::Storage => SliderRange::STORAGE_GB,
            Slider::ApiCalls => SliderRange::API_CALLS,
        }
    }

    fn id(self) -> &'static str {
        match self {
            Slider::Users => "users",
            Slider::Storage => "storage",
            Slider::ApiCalls => "api-calls",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Slider::Users => "Team members",
            Slider::Storage => "Storage",
            Slider::ApiCalls => "API calls / month",
        }
    }

    fn read(self, inputs: &PricingInputs) -> u32 {
        match self {
            Slider::Users => inputs.users,
            Slider::Storage => inputs.storage_gb,
            Slider::ApiCalls => inputs.api_calls,
        }
    }

    fn write(self, inputs: &mut PricingInputs, value: u32) {
        match self {
            Slider::Users => inputs.users = value,
            Slider::Storage => inputs.storage_gb = value,
            Slider::ApiCalls => inputs.api_calls = value,
        }
    }

    fn display(self, value: u32) -> String {
        match self {
            Slider::Users => value.to_string(),
            Slider::Storage => format_storage(value),
            Slider::ApiCalls => format_thousands(i64::from(value)),
        }
    }
}

#[function_component(PriceEstimator)]
pub fn price_estimator() -> Html {
    let inputs = use_state(PricingInputs::default);
    let quote = estimate(&inputs);

    let on_slider = |slider: Slider| {
        let inputs = inputs.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = slider.range().read(&input.value());
            let mut next = *inputs;
            slider.write(&mut next, value);
            debug!("Estimator input {} = {}", slider.id(), value);
            inputs.set(next);
        })
    };

    let on_support_change = {
        let inputs = inputs.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let support = SupportTier::from_select_value(&select.value());
            debug!("Estimator support tier = {}", support);
            inputs.set(PricingInputs { support, ..*inputs });
        })
    };

    let slider_row = |slider: Slider| {
        let range = slider.range();
        let value = slider.read(&inputs);
        html! {
            <div class="input-group">
                <label for={slider.id()}>
                    {slider.label()}
                    <span id={format!("{}-value", slider.id())} class="slider-value">
                        {slider.display(value)}
                    </span>
                </label>
                <input
                    type="range"
                    id={slider.id()}
                    min={range.min.to_string()}
                    max={range.max.to_string()}
                    step={range.step.to_string()}
                    value={value.to_string()}
                    oninput={on_slider(slider)}
                />
            </div>
        }
    };

    html! {
        <div class="calculator-container">
            <div class="calculator-inputs">
                { slider_row(Slider::Users) }
                { slider_row(Slider::Storage) }
                { slider_row(Slider::ApiCalls) }
                <div class="input-group">
                    <label for="support">{"Support level"}</label>
                    <select id="support" onchange={on_support_change}>
                        { for SupportTier::ALL.iter().map(|tier| html! {
                            <option value={tier.as_str()} selected={*tier == inputs.support}>
                                {tier.label()}
                            </option>
                        }) }
                    </select>
                </div>
            </div>
            <div class="calculator-result">
                <div class="price-display">
                    <span class="currency">{"$"}</span>
                    <AnimatedNumber
                        id="total-price"
                        class="price-amount"
                        value={quote.total}
                        duration_ms={config::ESTIMATE_ANIMATION_MS}
                        animate_on_mount=true
                    />
                    <span class="period">{"/month"}</span>
                </div>
                <p class="savings">
                    {"You save "}
                    <AnimatedNumber
                        id="savings-amount"
                        value={quote.savings}
                        duration_ms={config::ESTIMATE_ANIMATION_MS}
                        format={ValueFormat::Currency}
                        animate_on_mount=true
                    />
                    {" compared to typical enterprise tools"}
                </p>
            </div>
        </div>
    }
}
