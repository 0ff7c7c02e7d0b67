use log::warn;
use yew::prelude::*;

use crate::components::cta::CtaButton;
use crate::components::estimator::PriceEstimator;
use crate::components::plans::PricingPlans;
use crate::components::reveal::Reveal;
use crate::scroll;

const FEATURES: [(&str, &str, &str); 6] = [
    ("⚡", "Lightning Fast", "Pages load in milliseconds, wherever your team works from."),
    ("🔒", "Secure by Default", "Encryption at rest and in transit, with SSO on every plan."),
    ("📊", "Usage Insights", "See which projects burn storage and API calls before the bill does."),
    ("🔌", "Open API", "Automate everything through a documented REST API."),
    ("🤝", "Real-time Collaboration", "Shared workspaces with live presence and comments."),
    ("☁️", "Reliable Storage", "Replicated across regions with daily snapshots."),
];

const TESTIMONIALS: [(&str, &str, &str); 3] = [
    ("We cut our tooling bill in half within a month.", "Maria Lopez", "CTO, Brightpath"),
    ("The calculator matched our invoice to the dollar.", "Sam Okafor", "Ops Lead, Northwind"),
    ("Switching from our enterprise suite took an afternoon.", "Jin Park", "Founder, Tiller"),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let see_pricing = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        if let Err(e) = scroll::scroll_to_fragment("#pricing") {
            warn!("Could not scroll to pricing: {}", e);
        }
    });

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .landing-page section {
                        padding: 6rem 2rem;
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .hero {
                        min-height: 80vh;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        text-align: center;
                    }
                    .hero h1 {
                        font-size: 3.5rem;
                        margin-bottom: 1rem;
                    }
                    .hero-cta-group {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                    }
                    .cta-button {
                        padding: 0.9rem 2rem;
                        border: none;
                        border-radius: 8px;
                        background: #4f46e5;
                        color: white;
                        font-weight: 600;
                        cursor: pointer;
                        transition: transform 0.15s ease;
                    }
                    .secondary-link {
                        align-self: center;
                        color: #4f46e5;
                    }
                    .features-grid, .testimonials-grid, .pricing-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 2rem;
                    }
                    .feature-card, .testimonial-card, .pricing-card {
                        background: white;
                        border-radius: 12px;
                        padding: 2rem;
                        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.06);
                    }
                    .feature-card:hover, .testimonial-card:hover, .pricing-card:hover {
                        box-shadow: 0 8px 30px rgba(0, 0, 0, 0.12);
                    }
                    .feature-icon {
                        font-size: 2rem;
                    }
                    .calculator-container {
                        display: grid;
                        grid-template-columns: 2fr 1fr;
                        gap: 3rem;
                    }
                    .input-group {
                        margin-bottom: 1.5rem;
                        display: flex;
                        flex-direction: column;
                    }
                    .slider-value {
                        float: right;
                        font-weight: 600;
                    }
                    .price-display {
                        font-size: 3rem;
                        font-weight: 700;
                    }
                    .pricing-toggle {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        margin-bottom: 3rem;
                    }
                    .toggle-label.active {
                        font-weight: 700;
                        color: #4f46e5;
                    }
                    .pricing-card.featured {
                        border: 2px solid #4f46e5;
                    }
                    .popular-tag, .savings-badge {
                        background: #eef2ff;
                        color: #4f46e5;
                        border-radius: 999px;
                        padding: 0.2rem 0.8rem;
                        font-size: 0.8rem;
                    }
                    .yearly-savings {
                        color: #059669;
                        font-size: 0.9rem;
                    }
                    @media (max-width: 768px) {
                        .hero h1 {
                            font-size: 2.4rem;
                        }
                        .calculator-container {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>

            <section class="hero">
                <h1>{"One Workspace. Honest Pricing."}</h1>
                <p class="hero-subtitle">
                    {"Pay for the seats, storage and API calls you use. Nothing else."}
                </p>
                <div class="hero-cta-group">
                    <CtaButton>{"Start Free Trial"}</CtaButton>
                    <a href="#pricing" class="secondary-link" onclick={see_pricing}>{"See pricing"}</a>
                </div>
            </section>

            <section id="features" class="features">
                <h2>{"Everything Your Team Needs"}</h2>
                <div class="features-grid">
                    { for FEATURES.iter().map(|(icon, title, text)| html! {
                        <Reveal class="feature-card">
                            <div class="feature-icon">{*icon}</div>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="calculator" class="calculator">
                <h2>{"Estimate Your Monthly Cost"}</h2>
                <p>{"Move the sliders to match your team. The estimate updates as you go."}</p>
                <PriceEstimator />
            </section>

            <section id="pricing" class="pricing">
                <h2>{"Simple Plans"}</h2>
                <PricingPlans />
            </section>

            <section id="testimonials" class="testimonials">
                <h2>{"Teams Like Yours"}</h2>
                <div class="testimonials-grid">
                    { for TESTIMONIALS.iter().map(|(quote, name, role)| html! {
                        <Reveal class="testimonial-card">
                            <p class="quote">{format!("\u{201c}{}\u{201d}", quote)}</p>
                            <p class="author">{*name}</p>
                            <p class="role">{*role}</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <footer class="footer">
                <h2>{"Ready to Switch?"}</h2>
                <CtaButton class="btn-primary">{"Get Started"}</CtaButton>
            </footer>
        </div>
    }
}
