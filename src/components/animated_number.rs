use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::animation::ValueAnimator;
use crate::pricing::format::ValueFormat;

#[derive(Properties, PartialEq)]
pub struct AnimatedNumberProps {
    pub value: i64,
    pub duration_ms: f64,
    #[prop_or(ValueFormat::Plain)]
    pub format: ValueFormat,
    /// Count up from zero on first render instead of showing the value outright.
    #[prop_or_default]
    pub animate_on_mount: bool,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

/// A number that eases to each new `value`. The element's text is owned by
/// its animator, so the span is rendered empty.
#[function_component(AnimatedNumber)]
pub fn animated_number(props: &AnimatedNumberProps) -> Html {
    let node = use_node_ref();
    let animator = use_mut_ref(|| None::<ValueAnimator<Element>>);

    {
        let node = node.clone();
        let animator = animator.clone();
        let format = props.format;
        let duration_ms = props.duration_ms;
        let animate_on_mount = props.animate_on_mount;
        use_effect_with_deps(
            move |value| {
                let mut slot = animator.borrow_mut();
                let first_render = slot.is_none();
                if first_render {
                    if let Some(element) = node.cast::<Element>() {
                        *slot = Some(ValueAnimator::new(element, format));
                    }
                }
                if let Some(animator) = slot.as_mut() {
                    if first_render && !animate_on_mount {
                        animator.set_now(*value);
                    } else if let Err(e) = animator.animate_to(*value, duration_ms) {
                        warn!("Could not animate to {}: {}", value, e);
                        animator.set_now(*value);
                    }
                }
                || ()
            },
            props.value,
        );
    }

    {
        // Stop the frame loop when the element goes away.
        let animator = animator.clone();
        use_effect_with_deps(
            move |_| move || drop(animator.borrow_mut().take()),
            (),
        );
    }

    html! {
        <span ref={node} id={props.id.clone()} class={props.class.clone()}></span>
    }
}
