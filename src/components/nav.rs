use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, Node};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::error;
use crate::scroll;
use crate::Route;

const SECTIONS: [(&str, &str); 4] = [
    ("#features", "Features"),
    ("#calculator", "Calculator"),
    ("#pricing", "Pricing"),
    ("#testimonials", "Testimonials"),
];

fn contains(node_ref: &NodeRef, target: &Node) -> bool {
    node_ref
        .cast::<Node>()
        .map(|node| node.contains(Some(target)))
        .unwrap_or(false)
}

/// Adds `handler` to `event` on the window or document and returns the
/// matching removal.
fn listen(
    on_document: bool,
    event: &'static str,
    handler: Closure<dyn Fn(Event)>,
) -> Box<dyn FnOnce()> {
    let target: Result<web_sys::EventTarget, error::DomError> = if on_document {
        error::document().map(Into::into)
    } else {
        error::window().map(Into::into)
    };
    let target = match target {
        Ok(target) => target,
        Err(e) => {
            warn!("Cannot listen for {}: {}", event, e);
            return Box::new(|| ());
        }
    };
    if let Err(e) = target.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref()) {
        warn!("Cannot listen for {}: {:?}", event, e);
        return Box::new(|| ());
    }
    Box::new(move || {
        let _ = target.remove_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
    })
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state_eq(|| false);
    let is_scrolled = use_state_eq(|| scroll::is_scrolled(scroll::scroll_y()));
    let hamburger_ref = use_node_ref();
    let menu_ref = use_node_ref();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let handler = Closure::<dyn Fn(Event)>::new(move |_: Event| {
                    is_scrolled.set(scroll::is_scrolled(scroll::scroll_y()));
                });
                let destructor = listen(false, "scroll", handler);
                move || destructor()
            },
            (),
        );
    }

    // Close the menu on clicks outside both the hamburger and the menu.
    {
        let menu_open = menu_open.clone();
        let hamburger_ref = hamburger_ref.clone();
        let menu_ref = menu_ref.clone();
        use_effect_with_deps(
            move |_| {
                let handler = Closure::<dyn Fn(Event)>::new(move |e: Event| {
                    let Some(target) = e.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                        return;
                    };
                    if !contains(&hamburger_ref, &target) && !contains(&menu_ref, &target) {
                        menu_open.set(false);
                    }
                });
                let destructor = listen(true, "click", handler);
                move || destructor()
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let on_section_link = |href: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            if let Err(e) = scroll::scroll_to_fragment(href) {
                warn!("Could not scroll to {}: {}", href, e);
            }
        })
    };

    let active = (*menu_open).then(|| "active");

    html! {
        <nav class={classes!("navbar", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .navbar {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        height: 70px;
                        z-index: 100;
                        background: rgba(255, 255, 255, 0.95);
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .navbar.scrolled {
                        background: rgba(255, 255, 255, 0.98);
                        box-shadow: 0 2px 20px rgba(0, 0, 0, 0.1);
                    }
                    .nav-container {
                        max-width: 1200px;
                        margin: 0 auto;
                        height: 100%;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 0 2rem;
                    }
                    .nav-menu {
                        display: flex;
                        gap: 2rem;
                        list-style: none;
                    }
                    .hamburger {
                        display: none;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .hamburger .bar {
                        display: block;
                        width: 25px;
                        height: 3px;
                        margin: 5px auto;
                        background: #333;
                        transition: all 0.3s ease;
                    }
                    @media (max-width: 768px) {
                        .hamburger {
                            display: block;
                        }
                        .hamburger.active .bar:nth-child(2) {
                            opacity: 0;
                        }
                        .hamburger.active .bar:nth-child(1) {
                            transform: translateY(8px) rotate(45deg);
                        }
                        .hamburger.active .bar:nth-child(3) {
                            transform: translateY(-8px) rotate(-45deg);
                        }
                        .nav-menu {
                            position: fixed;
                            left: -100%;
                            top: 70px;
                            flex-direction: column;
                            width: 100%;
                            background: white;
                            text-align: center;
                            transition: left 0.3s ease;
                        }
                        .nav-menu.active {
                            left: 0;
                        }
                    }
                "#}
            </style>
            <div class="nav-container">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"CloudDesk"}
                </Link<Route>>
                <ul id="nav-menu" ref={menu_ref} class={classes!("nav-menu", active)}>
                    { for SECTIONS.iter().map(|(href, label)| html! {
                        <li class="nav-item">
                            <a href={*href} class="nav-link" onclick={on_section_link(*href)}>{*label}</a>
                        </li>
                    }) }
                </ul>
                <button
                    id="hamburger"
                    ref={hamburger_ref}
                    class={classes!("hamburger", active)}
                    onclick={toggle_menu}
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}
