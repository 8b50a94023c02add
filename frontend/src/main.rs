use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod carousel;
mod config;
mod contact;
mod motion;
mod components {
    pub mod contact_cta;
    pub mod effects;
    pub mod emergency_banner;
    pub mod fleet_services;
    pub mod floating_call_button;
    pub mod footer;
    pub mod hero;
    pub mod navbar;
    pub mod process;
    pub mod service_area;
    pub mod services;
    pub mod testimonials;
    pub mod why_choose_us;
}
mod pages {
    pub mod landing;
}

use motion::Motion;
use pages::landing::Landing;

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
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let motion = use_memo(|_| Motion::new(), ());

    {
        let motion = motion.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    info!("Tearing down all animations");
                    motion.release_all();
                }
            },
            (),
        );
    }

    html! {
        <ContextProvider<Motion> context={(*motion).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Motion>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        error!("error initializing log: {}", e);
    }

    info!("Starting {}", config::BUSINESS_NAME);
    yew::Renderer::<App>::new().render();
}
