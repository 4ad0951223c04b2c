use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page max-w-xl mx-auto py-16 text-center">
            <h1 class="text-3xl font-bold text-gray-900">{"404 - Página no encontrada"}</h1>
            <p class="mt-2 text-gray-600">{"La página que buscas no existe."}</p>
            <Link<Route> to={Route::Results} classes={classes!("mt-4", "inline-block", "text-blue-600", "hover:underline")}>
                {"Ver resultados"}
            </Link<Route>>
        </div>
    }
}
