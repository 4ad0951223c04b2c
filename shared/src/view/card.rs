use crate::labels;
use crate::models::game::{GameRecord, GenderTally, TeamEntry};

/// Expanded/collapsed state of a game block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disclosure {
    #[default]
    Collapsed,
    Expanded,
}

impl Disclosure {
    pub fn toggled(self) -> Self {
        match self {
            Disclosure::Collapsed => Disclosure::Expanded,
            Disclosure::Expanded => Disclosure::Collapsed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Disclosure::Expanded
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Disclosure::Collapsed => "▼",
            Disclosure::Expanded => "▲",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StandoutRow {
    Player {
        category: &'static str,
        name: String,
        value: String,
    },
    Placeholder,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamRow {
    pub name: String,
    pub rounds_won: u32,
    pub total_score: String,
}

impl From<&TeamEntry> for TeamRow {
    fn from(team: &TeamEntry) -> Self {
        Self {
            name: team.name.clone(),
            rounds_won: team.rounds_won,
            total_score: team.total_score.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenderTable {
    pub leader: String,
    pub this_game: Option<GenderTally>,
    pub cumulative: Option<GenderTally>,
}

/// Everything a single game block displays, already formatted
#[derive(Debug, Clone, PartialEq)]
pub struct GameCard {
    pub dom_id: String,
    pub id: String,
    pub title: String,
    pub matchup: String,
    pub standouts: Vec<StandoutRow>,
    pub teams: [TeamRow; 2],
    pub winner: String,
    pub gender: Option<GenderTable>,
}

impl GameCard {
    /// `None` when the record lacks an id or either team.
    pub fn from_record(game: &GameRecord) -> Option<Self> {
        if !game.is_renderable() {
            return None;
        }
        let id = game.id.clone()?;
        let team_one = game.team_one.as_ref()?;
        let team_two = game.team_two.as_ref()?;

        Some(Self {
            dom_id: format!("game-{}", id),
            title: format!("Juego #{}", game.sequence_label().unwrap_or_default()),
            matchup: matchup_label(game, team_one, team_two),
            standouts: standout_rows(game),
            teams: [TeamRow::from(team_one), TeamRow::from(team_two)],
            winner: winner_sentence(game),
            gender: gender_table(game),
            id,
        })
    }
}

fn matchup_label(game: &GameRecord, team_one: &TeamEntry, team_two: &TeamEntry) -> String {
    match game.winning_team() {
        Some(winner) if winner.name == team_one.name => {
            format!("{} vs {}", winner.name, team_two.name)
        }
        Some(winner) => format!("{} vs {}", winner.name, team_one.name),
        None => format!("{}: {} vs {}", labels::TIE, team_one.name, team_two.name),
    }
}

fn winner_sentence(game: &GameRecord) -> String {
    match game.winning_team() {
        Some(winner) => format!("{} con {} puntos", winner.name, winner.score),
        None => labels::TIE.to_string(),
    }
}

fn standout_rows(game: &GameRecord) -> Vec<StandoutRow> {
    let mut rows = Vec::with_capacity(2);
    if let Some(player) = &game.luckiest {
        rows.push(StandoutRow::Player {
            category: labels::LUCKIEST,
            name: player.name.clone(),
            value: player.luck.to_string(),
        });
    }
    if let Some(player) = &game.most_experienced {
        rows.push(StandoutRow::Player {
            category: labels::MOST_EXPERIENCED,
            name: player.name.clone(),
            value: player.experience.to_string(),
        });
    }
    if rows.is_empty() {
        rows.push(StandoutRow::Placeholder);
    }
    rows
}

fn gender_table(game: &GameRecord) -> Option<GenderTable> {
    if !game.has_gender_stats() {
        return None;
    }
    Some(GenderTable {
        leader: game.leading_gender().unwrap_or_else(|| labels::UNDETERMINED.to_string()),
        this_game: game.gender_wins,
        cumulative: game.cumulative_gender_wins,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::game::WinningTeam;
    use pretty_assertions::assert_eq;

    fn base() -> GameRecord {
        GameRecord::new(
            "abc",
            TeamEntry::new("Los tiguere", 6, 3.0),
            TeamEntry::new("Los jaguares", 4, 2.0),
        )
        .with_sequence(12)
    }

    #[test]
    fn test_header_for_team_one_win() {
        let card = GameCard::from_record(&base().with_winner(WinningTeam::new("Los tiguere", 412.0))).unwrap();
        assert_eq!(card.dom_id, "game-abc");
        assert_eq!(card.title, "Juego #12");
        assert_eq!(card.matchup, "Los tiguere vs Los jaguares");
        assert_eq!(card.winner, "Los tiguere con 412 puntos");
    }

    #[test]
    fn test_header_for_team_two_win() {
        let card = GameCard::from_record(&base().with_winner(WinningTeam::new("Los jaguares", 398.5))).unwrap();
        assert_eq!(card.matchup, "Los jaguares vs Los tiguere");
        assert_eq!(card.winner, "Los jaguares con 398.5 puntos");
    }

    #[test]
    fn test_tie_has_explicit_label_and_no_points() {
        let card = GameCard::from_record(&base().with_winner(WinningTeam::tie())).unwrap();
        assert_eq!(card.matchup, "Empate: Los tiguere vs Los jaguares");
        assert_eq!(card.winner, "Empate");
        assert!(!card.winner.contains("puntos"));
    }

    #[test]
    fn test_standout_rows() {
        let card = GameCard::from_record(&base()).unwrap();
        assert_eq!(card.standouts, vec![StandoutRow::Placeholder]);

        let card = GameCard::from_record(&base().with_most_experienced("Luis Mena", 21.0)).unwrap();
        assert_eq!(
            card.standouts,
            vec![StandoutRow::Player {
                category: "Jugador con más experiencia",
                name: "Luis Mena".to_string(),
                value: "21".to_string(),
            }]
        );

        let card = GameCard::from_record(&base().with_luckiest("Ana", 2.5).with_most_experienced("Luis", 20.0)).unwrap();
        assert_eq!(card.standouts.len(), 2);
        assert!(matches!(&card.standouts[0], StandoutRow::Player { category, .. } if *category == labels::LUCKIEST));
    }

    #[test]
    fn test_team_rows() {
        let card = GameCard::from_record(&base()).unwrap();
        assert_eq!(card.teams[0].name, "Los tiguere");
        assert_eq!(card.teams[0].rounds_won, 6);
        assert_eq!(card.teams[1].total_score, "2");
    }

    #[test]
    fn test_gender_table_only_with_data() {
        assert!(GameCard::from_record(&base()).unwrap().gender.is_none());

        let card = GameCard::from_record(&base().with_gender_wins(GenderTally::new(2, 5), GenderTally::new(30, 41))).unwrap();
        let table = card.gender.unwrap();
        assert_eq!(table.leader, "Femenino");
        assert_eq!(table.cumulative, Some(GenderTally::new(30, 41)));
    }

    #[test]
    fn test_incomplete_record_has_no_card() {
        let mut game = base();
        game.team_one = None;
        assert!(GameCard::from_record(&game).is_none());

        let mut game = base();
        game.id = None;
        assert!(GameCard::from_record(&game).is_none());
    }

    #[test]
    fn test_toggle_twice_restores_collapsed() {
        let start = Disclosure::default();
        assert!(!start.is_open());
        assert_eq!(start.glyph(), "▼");

        let open = start.toggled();
        assert!(open.is_open());
        assert_eq!(open.glyph(), "▲");

        assert_eq!(open.toggled(), start);
    }
}
