use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::error::DomError;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

fn observe_once(
    element: &Element,
    on_visible: Callback<()>,
) -> Result<(IntersectionObserver, Closure<dyn FnMut(Array, IntersectionObserver)>), DomError> {
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                observer.unobserve(&entry.target());
                on_visible.emit(());
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    options.set_root_margin(config::REVEAL_ROOT_MARGIN);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);
    Ok((observer, callback))
}

/// Card that fades and slides in the first time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);
    let hovered = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let mut subscription = None;
                if let Some(element) = node.cast::<Element>() {
                    let on_visible = {
                        let revealed = revealed.clone();
                        Callback::from(move |_| revealed.set(true))
                    };
                    match observe_once(&element, on_visible) {
                        Ok(observation) => subscription = Some(observation),
                        Err(e) => {
                            // Never leave a card hidden for good.
                            warn!("Reveal disabled: {}", e);
                            revealed.set(true);
                        }
                    }
                }
                move || {
                    if let Some((observer, _callback)) = subscription {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };

    let visible = *revealed;
    let transition = if *hovered {
        "all 0.3s ease"
    } else {
        "opacity 0.6s ease, transform 0.6s ease"
    };
    let style = if visible {
        format!("opacity: 1; transform: translateY(0); transition: {};", transition)
    } else {
        format!("opacity: 0; transform: translateY(30px); transition: {};", transition)
    };

    html! {
        <div ref={node} class={props.class.clone()} {style} {onmouseenter}>
            { for props.children.iter() }
        </div>
    }
}
