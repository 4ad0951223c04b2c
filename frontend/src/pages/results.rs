use log::error;
use shared::labels;
use shared::{GameList, ViewAction, ViewState};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::results::fetch_game_list;
use crate::components::game_card::GameCardView;
use crate::components::page_size_selector::PageSizeSelector;
use crate::components::pagination::Pagination;
use crate::components::search_bar::SearchBar;
use crate::components::summary_tables::SummaryTables;
use crate::config::Config;
use crate::state::ResultsStore;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed,
}

/// Maps the fetch result to the page status and, on success, the action that
/// loads the games. Every failure ends in the same user-facing state.
pub(crate) fn load_outcome(result: shared::Result<GameList>) -> (LoadStatus, Option<ViewAction>) {
    match result {
        Ok(list) => (LoadStatus::Ready, Some(ViewAction::Loaded(list.games))),
        Err(e) if e.is_transport() => {
            error!("Error cargando los datos: {}", e);
            (LoadStatus::Failed, None)
        }
        Err(e) => {
            error!("Error cargando los datos, respuesta ilegible: {}", e);
            (LoadStatus::Failed, None)
        }
    }
}

/// Message replacing the game list, or `None` once there is something to page through
pub(crate) fn placeholder(status: LoadStatus, state: &ViewState) -> Option<&'static str> {
    match status {
        LoadStatus::Loading => Some(labels::LOADING),
        LoadStatus::Failed => Some(labels::LOAD_ERROR),
        LoadStatus::Ready if state.games().is_empty() => Some(labels::NO_GAMES),
        LoadStatus::Ready => None,
    }
}

#[function_component(Results)]
pub fn results() -> Html {
    let store = use_reducer(|| ResultsStore::new(Config::default_page_size()));
    let status = use_state(|| LoadStatus::Loading);

    // Single fetch on mount; no retry
    {
        let store = store.clone();
        let status = status.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let (next, action) = load_outcome(fetch_game_list().await);
                if let Some(action) = action {
                    store.dispatch(action);
                }
                status.set(next);
            });
        });
    }

    let on_search = {
        let store = store.clone();
        Callback::from(move |query: String| store.dispatch(ViewAction::Search(query)))
    };

    let on_page_action = {
        let store = store.clone();
        Callback::from(move |action: ViewAction| store.dispatch(action))
    };

    let on_page_size = {
        let store = store.clone();
        Callback::from(move |size: usize| store.dispatch(ViewAction::SetPageSize(size)))
    };

    let revision = store.revision();
    let list = match (*status, placeholder(*status, &store)) {
        (LoadStatus::Loading, Some(message)) => html! {
            <div id="game-loading" class="p-8 text-center">
                <div class="inline-block animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
                <p class="mt-2 text-gray-600">{message}</p>
            </div>
        },
        (LoadStatus::Failed, Some(message)) => html! {
            <div id="game-loading" class="p-8 text-center">
                <p class="error text-red-600">{message}</p>
            </div>
        },
        (_, Some(message)) => html! {
            <div id="game-list" class="p-8 text-center text-gray-500">
                <p>{message}</p>
            </div>
        },
        (_, None) => html! {
            <>
                <div class="bg-white shadow rounded-lg p-6 mb-6">
                    <div class="flex flex-col sm:flex-row gap-4">
                        <SearchBar on_search={on_search} />
                        <PageSizeSelector
                            options={Config::page_size_options().to_vec()}
                            selected={store.page_size()}
                            on_change={on_page_size}
                        />
                    </div>
                </div>

                <div id="game-list">
                    if store.active_len() == 0 {
                        <div class="p-8 text-center text-gray-500">
                            <p>{labels::NO_MATCHES}</p>
                        </div>
                    } else {
                        // Keys change every revision so each pass starts collapsed.
                        {for store.page_cards().into_iter().map(|card| html! {
                            <GameCardView key={format!("{}-{}", revision, card.dom_id)} card={card.clone()} />
                        })}
                    }
                </div>

                <Pagination
                    controls={store.page_controls()}
                    info={AttrValue::from(store.pagination_info())}
                    on_action={on_page_action}
                />

                <SummaryTables games={store.games().clone()} top_n={Config::summary_top_n()} />
            </>
        },
    };

    html! {
        <div class="min-h-screen bg-gray-50">
            <div class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                <div class="mb-8">
                    <h1 class="text-3xl font-bold text-gray-900">{"🏹 Resultados de la Simulación"}</h1>
                    <p class="mt-2 text-gray-600">{"Consulta los juegos simulados, sus jugadores destacados y el ganador de cada uno"}</p>
                </div>
                {list}
            </div>
        </div>
    }
}
