use gloo_timers::callback::Timeout;
use log::warn;
use yew::prelude::*;

use crate::config;
use crate::error;

pub const SIGNUP_NOTICE: &str = "Thank you for your interest! This would redirect to the signup page.";

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Call-to-action button: a short press pulse, then the signup notice.
#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let pressed = use_state(|| false);
    let release = use_mut_ref(|| None::<Timeout>);

    {
        let release = release.clone();
        use_effect_with_deps(move |_| move || drop(release.borrow_mut().take()), ());
    }

    let onclick = {
        let pressed = pressed.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            pressed.set(true);
            let pressed = pressed.clone();
            *release.borrow_mut() = Some(Timeout::new(config::CTA_PRESS_MS, move || {
                pressed.set(false);
            }));

            match error::window() {
                Ok(window) => {
                    if let Err(e) = window.alert_with_message(SIGNUP_NOTICE) {
                        warn!("Signup notice failed: {:?}", e);
                    }
                }
                Err(e) => warn!("Signup notice failed: {}", e),
            }
        })
    };

    let scale = if *pressed { config::CTA_PRESS_SCALE } else { 1.0 };
    let style = format!("transform: scale({});", scale);

    html! {
        <button class={classes!("cta-button", props.class.clone())} {style} {onclick}>
            { for props.children.iter() }
        </button>
    }
}
