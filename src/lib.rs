use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod animation;
pub mod config;
pub mod error;
pub mod pricing;
pub mod scroll;
pub mod components;
pub mod pages {
    pub mod landing;
    pub mod not_found;
}

use components::nav::Nav;
use pages::{landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
