use shared::labels;
use shared::{Disclosure, GameCard, GenderTable, GenderTally, StandoutRow};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GameCardProps {
    pub card: GameCard,
}

/// Collapsible block for one game. Starts collapsed; the header toggles it.
#[function_component(GameCardView)]
pub fn game_card_view(props: &GameCardProps) -> Html {
    let card = &props.card;
    let disclosure = use_state(Disclosure::default);

    let on_toggle = {
        let disclosure = disclosure.clone();
        Callback::from(move |_: MouseEvent| {
            disclosure.set(disclosure.toggled());
        })
    };

    let is_open = disclosure.is_open();

    html! {
        <div
            id={card.dom_id.clone()}
            class={classes!("game-details", "bg-white", "shadow", "rounded-lg", "mb-3", is_open.then_some("active"))}
        >
            <div
                class="game-header flex items-center justify-between px-4 py-3 cursor-pointer hover:bg-gray-50"
                onclick={on_toggle}
            >
                <span class="game-number font-semibold text-gray-900">{&card.title}</span>
                <span class="game-result text-gray-700">{&card.matchup}</span>
                <span class="toggle-icon text-gray-500">{disclosure.glyph()}</span>
            </div>
            <div
                class="game-body px-4 pb-4 text-sm text-gray-700"
                style={if is_open { "display: block" } else { "display: none" }}
            >
                <p><strong>{labels::GAME_ID}</strong>{" "}{&card.id}</p>

                <h4 class="mt-3 font-medium text-gray-900">{labels::STANDOUTS_TITLE}</h4>
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class="px-3 py-2 text-left">{"Categoría"}</th>
                            <th class="px-3 py-2 text-left">{"Nombre"}</th>
                            <th class="px-3 py-2 text-left">{"Valor"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for card.standouts.iter().map(standout_row)}
                    </tbody>
                </table>

                <h4 class="mt-3 font-medium text-gray-900">{labels::RESULTS_TITLE}</h4>
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class="px-3 py-2 text-left">{"Equipo"}</th>
                            <th class="px-3 py-2 text-left">{"Rondas Ganadas"}</th>
                            <th class="px-3 py-2 text-left">{"Puntaje Total"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for card.teams.iter().map(|team| html! {
                            <tr>
                                <td class="px-3 py-2">{&team.name}</td>
                                <td class="px-3 py-2">{team.rounds_won}</td>
                                <td class="px-3 py-2">{&team.total_score}</td>
                            </tr>
                        })}
                    </tbody>
                </table>

                <p class="mt-3">
                    <strong>{labels::WINNER}</strong>
                    {&card.winner}
                </p>

                if let Some(gender) = &card.gender {
                    {gender_table(gender)}
                }
            </div>
        </div>
    }
}

fn standout_row(row: &StandoutRow) -> Html {
    match row {
        StandoutRow::Player { category, name, value } => html! {
            <tr>
                <td class="px-3 py-2">{*category}</td>
                <td class="px-3 py-2">{name}</td>
                <td class="px-3 py-2">{value}</td>
            </tr>
        },
        StandoutRow::Placeholder => html! {
            <tr>
                <td colspan="3" class="px-3 py-2 text-gray-500">{labels::NO_STANDOUTS}</td>
            </tr>
        },
    }
}

fn gender_table(table: &GenderTable) -> Html {
    let tally_row = |label: &'static str, tally: Option<GenderTally>| match tally {
        Some(tally) => html! {
            <tr>
                <td class="px-3 py-2">{label}</td>
                <td class="px-3 py-2">{tally.male}</td>
                <td class="px-3 py-2">{tally.female}</td>
            </tr>
        },
        None => html! {},
    };

    html! {
        <div class="gender-stats mt-3">
            <h4 class="font-medium text-gray-900">{labels::GENDER_TITLE}</h4>
            <p>
                <strong>{labels::LEADING_GENDER}{": "}</strong>
                {&table.leader}
            </p>
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>
                        <th class="px-3 py-2 text-left"></th>
                        <th class="px-3 py-2 text-left">{labels::MALE}</th>
                        <th class="px-3 py-2 text-left">{labels::FEMALE}</th>
                    </tr>
                </thead>
                <tbody>
                    {tally_row(labels::THIS_GAME, table.this_game)}
                    {tally_row(labels::CUMULATIVE, table.cumulative)}
                </tbody>
            </table>
        </div>
    }
}
