use std::rc::Rc;

use shared::labels;
use shared::{GameRecord, SummaryStatistics, Tally};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryTablesProps {
    pub games: Rc<Vec<GameRecord>>,
    pub top_n: usize,
}

/// Top-N tables computed from the full list, independent of the search box.
#[function_component(SummaryTables)]
pub fn summary_tables(props: &SummaryTablesProps) -> Html {
    let stats = use_memo(props.games.clone(), |games| SummaryStatistics::from_games(games));

    if stats.is_empty() {
        return html! {};
    }

    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mt-8">
            {tally_table("equipos-stats", labels::TEAM_WINS_TITLE, &stats.team_wins, props.top_n)}
            {tally_table("jugadores-suerte-stats", labels::LUCKIEST_TITLE, &stats.luckiest, props.top_n)}
            {tally_table("jugadores-exp-stats", labels::EXPERIENCED_TITLE, &stats.most_experienced, props.top_n)}
        </div>
    }
}

fn tally_table(id: &'static str, title: &'static str, tally: &Tally, top_n: usize) -> Html {
    html! {
        <div id={id} class="bg-white shadow rounded-lg p-4">
            <h3 class="text-lg font-medium text-gray-900 mb-2">{title}</h3>
            <table class="min-w-full divide-y divide-gray-200 text-sm">
                <thead class="bg-gray-50">
                    <tr>
                        <th class="px-3 py-2 text-left">{"Nombre"}</th>
                        <th class="px-3 py-2 text-left">{"Cantidad"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for tally.top(top_n).into_iter().map(|entry| html! {
                        <tr>
                            <td class="px-3 py-2">{entry.name}</td>
                            <td class="px-3 py-2">{entry.count}</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
