use crate::models::game::GameRecord;

/// Lower-cases and trims the raw text of the search box
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// `query` must already be normalized. Matches the game number or either
/// team name; a record lacking the compared field simply does not match on it.
pub fn matches_query(game: &GameRecord, query: &str) -> bool {
    let number_matches = game
        .sequence_label()
        .is_some_and(|number| number.contains(query));

    number_matches
        || [&game.team_one, &game.team_two].into_iter().any(|team| {
            team.as_ref()
                .is_some_and(|team| team.name.to_lowercase().contains(query))
        })
}

/// Indices of the games matching `query`, in list order. An empty query
/// selects every game.
pub fn filter_indices(games: &[GameRecord], query: &str) -> Vec<usize> {
    let query = normalize_query(query);
    games
        .iter()
        .enumerate()
        .filter(|(_, game)| query.is_empty() || matches_query(game, &query))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::game::TeamEntry;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn game(sequence: u64, one: &str, two: &str) -> GameRecord {
        GameRecord::new(
            format!("game-{}", sequence),
            TeamEntry::new(one, 0, 0.0),
            TeamEntry::new(two, 0, 0.0),
        )
        .with_sequence(sequence)
    }

    #[test]
    fn test_query_matches_team_name_case_insensitively() {
        let games = vec![
            game(1, "Alpha Squad", "Delta Force"),
            game(2, "Bravo Team", "Charlie Crew"),
        ];

        assert_eq!(filter_indices(&games, "alpha"), vec![0]);
        assert_eq!(filter_indices(&games, "  ALPHA "), vec![0]);
        assert_eq!(filter_indices(&games, "crew"), vec![1]);
    }

    #[test]
    fn test_query_matches_game_number_substring() {
        let games: Vec<_> = (1..=25).map(|n| game(n, "Los tiguere", "Los jaguares")).collect();
        assert_eq!(filter_indices(&games, "2"), vec![1, 11, 19, 20, 21, 22, 23, 24]);
    }

    #[test]
    fn test_empty_query_selects_everything() {
        let games = vec![game(1, "A", "B"), game(2, "C", "D")];
        assert_eq!(filter_indices(&games, ""), vec![0, 1]);
        assert_eq!(filter_indices(&games, "   "), vec![0, 1]);
    }

    #[test]
    fn test_missing_fields_do_not_match() {
        let mut orphan = game(5, "Alpha", "Beta");
        orphan.team_one = None;
        orphan.sequence = None;

        assert!(!matches_query(&orphan, "alpha"));
        assert!(!matches_query(&orphan, "5"));
        assert!(matches_query(&orphan, "beta"));
    }

    proptest! {
        #[test]
        fn prop_filter_is_ordered_subset(names in proptest::collection::vec("[a-dA-D]{1,6}", 0..40), query in "[a-d]{0,2}") {
            let games: Vec<_> = names
                .chunks(2)
                .enumerate()
                .map(|(i, pair)| game(i as u64 + 1, &pair[0], pair.get(1).map(String::as_str).unwrap_or("")))
                .collect();

            let selected = filter_indices(&games, &query);
            prop_assert!(selected.windows(2).all(|w| w[0] < w[1]));

            for (index, game) in games.iter().enumerate() {
                let expected = query.is_empty()
                    || game.sequence_label().unwrap().contains(&query)
                    || game.team_one.as_ref().unwrap().name.to_lowercase().contains(&query)
                    || game.team_two.as_ref().unwrap().name.to_lowercase().contains(&query);
                prop_assert_eq!(selected.contains(&index), expected);
            }
        }
    }
}
