use log::warn;
use shared::labels;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageSizeSelectorProps {
    pub options: Vec<usize>,
    pub selected: usize,
    pub on_change: Callback<usize>,
}

#[function_component(PageSizeSelector)]
pub fn page_size_selector(props: &PageSizeSelectorProps) -> Html {
    let on_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            match parse_page_size(&select.value()) {
                Some(size) => on_change.emit(size),
                None => warn!("Ignoring page size {:?}", select.value()),
            }
        })
    };

    html! {
        <div>
            <label for="page-size" class="block text-sm font-medium text-gray-700 mb-2">
                {labels::PAGE_SIZE}
            </label>
            <select
                id="page-size"
                onchange={on_change}
                class="px-3 py-2 border border-gray-300 rounded-md shadow-sm bg-white"
            >
                {for props.options.iter().map(|&size| html! {
                    <option value={size.to_string()} selected={size == props.selected}>
                        {size}
                    </option>
                })}
            </select>
        </div>
    }
}

pub(crate) fn parse_page_size(raw: &str) -> Option<usize> {
    raw.trim().parse().ok().filter(|&size| size > 0)
}
