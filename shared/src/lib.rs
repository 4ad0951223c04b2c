pub mod models {
    pub mod game;
    pub mod summary;
}

pub mod view {
    pub mod card;
    pub mod pagination;
    pub mod search;
    pub mod state;
}

pub mod error;
pub mod labels;

// Re-export commonly used items
pub use error::{SharedError, Result};

// Re-export models
pub use models::{
    game::{GameList, GameRecord, GenderTally, LuckiestPlayer, MostExperiencedPlayer, TeamEntry, WinningTeam},
    summary::{SummaryStatistics, Tally, TallyEntry},
};

// Re-export view models
pub use view::{
    card::{Disclosure, GameCard, GenderTable, StandoutRow, TeamRow},
    pagination::PageControl,
    state::{ViewAction, ViewState, DEFAULT_PAGE_SIZE},
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_load_search_and_render_pipeline() {
        let body = r#"[
            {"id_juego": "a", "numero_juego": 1,
             "equipo_1": {"nombre": "Alpha Squad", "rondas_ganadas": 6, "puntaje_total": 1},
             "equipo_2": {"nombre": "Bravo Team", "rondas_ganadas": 4, "puntaje_total": 0},
             "equipo_ganador": {"nombre": "Alpha Squad", "puntaje": 380},
             "jugador_con_mas_suerte": "No determinado",
             "jugador_con_mas_experiencia": "No determinado"},
            {"id_juego": "b", "numero_juego": 2,
             "equipo_1": {"nombre": "Charlie Crew", "rondas_ganadas": 5, "puntaje_total": 0},
             "equipo_2": {"nombre": "Delta Force", "rondas_ganadas": 5, "puntaje_total": 0},
             "equipo_ganador": {"nombre": "Empate", "puntaje": 0}}
        ]"#;

        let list = GameList::from_json(body).unwrap();
        let state = ViewState::default()
            .apply(ViewAction::Loaded(list.games))
            .apply(ViewAction::Search("ALPHA".to_string()));

        let cards = state.page_cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].matchup, "Alpha Squad vs Bravo Team");
        assert_eq!(cards[0].standouts, vec![StandoutRow::Placeholder]);
    }
}
