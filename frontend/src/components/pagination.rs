use shared::labels;
use shared::{PageControl, ViewAction};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub controls: Vec<PageControl>,
    pub info: AttrValue,
    pub on_action: Callback<ViewAction>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let button = |control: &PageControl| -> Html {
        let (label, active, disabled) = match *control {
            PageControl::Previous { disabled, .. } => (labels::PREVIOUS.to_string(), false, disabled),
            PageControl::Next { disabled, .. } => (labels::NEXT.to_string(), false, disabled),
            PageControl::Page { number, active } => (number.to_string(), active, false),
            PageControl::Ellipsis => {
                return html! {
                    <span class="relative inline-flex items-center px-4 py-2 border border-gray-300 bg-white text-sm text-gray-500">
                        {labels::ELLIPSIS}
                    </span>
                };
            }
        };

        let onclick = match ViewAction::from_control(control) {
            Some(action) => props.on_action.reform(move |_: MouseEvent| action.clone()),
            None => Callback::noop(),
        };

        html! {
            <button
                onclick={onclick}
                disabled={disabled}
                class={classes!(
                    "relative", "inline-flex", "items-center", "px-4", "py-2", "border", "text-sm", "font-medium", "disabled:opacity-50",
                    if active {
                        classes!("active", "z-10", "bg-indigo-50", "border-indigo-500", "text-indigo-600")
                    } else {
                        classes!("bg-white", "border-gray-300", "text-gray-500", "hover:bg-gray-50")
                    }
                )}
            >
                {label}
            </button>
        }
    };

    html! {
        <div class="bg-white px-4 py-3 flex items-center justify-between border-t border-gray-200 sm:px-6">
            <p id="pagination-info" class="text-sm text-gray-700">{props.info.clone()}</p>
            if !props.controls.is_empty() {
                <nav id="pagination" class="relative z-0 inline-flex rounded-md shadow-sm -space-x-px">
                    {for props.controls.iter().map(button)}
                </nav>
            }
        </div>
    }
}
