use shared::labels;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub on_search: Callback<String>,
}

/// Uncontrolled input: emits the raw text on every keystroke and leaves
/// normalization to the reducer.
#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let on_input = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_search.emit(input.value());
        })
    };

    html! {
        <div class="flex-1">
            <label for="game-search" class="block text-sm font-medium text-gray-700 mb-2">
                {"Buscar juegos"}
            </label>
            <input
                id="game-search"
                type="search"
                placeholder={labels::SEARCH_PLACEHOLDER}
                oninput={on_input}
                class="w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500"
            />
        </div>
    }
}
