use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod api;
pub mod components;
pub mod config;
pub mod state;
pub mod pages {
    pub mod not_found;
    pub mod results;
}

use config::Config;
use pages::{not_found::NotFound, results::Results};


/// Element the app mounts into when the page provides it
pub const MOUNT_ID: &str = "app";

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/resultados")]
    Results,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <BrowserRouter>
            <div class="app-container">
                <main class="flex-1">
                    <Switch<Route> render={switch} />
                </main>
                <footer class="text-center text-xs text-gray-500 py-4">
                    {format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))}
                </footer>
            </div>
        </BrowserRouter>
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Home | Route::Results => html! { <Results /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(Config::log_level()));
    info!("Logger initialized");

    // Set up panic hook
    console_error_panic_hook::set_once();

    match gloo_utils::document().get_element_by_id(MOUNT_ID) {
        Some(root) => {
            info!("Mounting application to #{}", MOUNT_ID);
            yew::Renderer::<App>::with_root(root).render();
        }
        None => {
            warn!("#{} not found, mounting application to <body>", MOUNT_ID);
            yew::Renderer::<App>::new().render();
        }
    }
    info!("Application mounted");

    Ok(())
}

// Add a start function that Trunk can call
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        run_app().await.expect("Failed to run app");
    });
    Ok(())
}
