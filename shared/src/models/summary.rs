use std::collections::HashMap;

use crate::models::game::GameRecord;

/// Occurrence counter that remembers first-seen order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tally {
    entries: Vec<TallyEntry>,
    index: HashMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TallyEntry {
    pub name: String,
    pub count: u32,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, name: &str) {
        match self.index.get(name) {
            Some(&slot) => self.entries[slot].count += 1,
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push(TallyEntry {
                    name: name.to_string(),
                    count: 1,
                });
            }
        }
    }

    pub fn count(&self, name: &str) -> u32 {
        self.index
            .get(name)
            .map(|&slot| self.entries[slot].count)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest counts first; equal counts keep first-occurrence order
    pub fn top(&self, limit: usize) -> Vec<TallyEntry> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(limit);
        ranked
    }
}

/// Aggregates over the whole data set shown under the game list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryStatistics {
    pub team_wins: Tally,
    pub luckiest: Tally,
    pub most_experienced: Tally,
}

impl SummaryStatistics {
    pub fn from_games(games: &[GameRecord]) -> Self {
        let mut stats = Self::default();
        for game in games {
            if let Some(winner) = game.winning_team() {
                stats.team_wins.increment(&winner.name);
            }
            if let Some(player) = &game.luckiest {
                stats.luckiest.increment(&player.name);
            }
            if let Some(player) = &game.most_experienced {
                stats.most_experienced.increment(&player.name);
            }
        }
        stats
    }

    pub fn is_empty(&self) -> bool {
        self.team_wins.is_empty() && self.luckiest.is_empty() && self.most_experienced.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::game::{TeamEntry, WinningTeam};
    use pretty_assertions::assert_eq;

    fn game(id: &str, winner: WinningTeam) -> GameRecord {
        GameRecord::new(
            id,
            TeamEntry::new("Los tiguere", 0, 0.0),
            TeamEntry::new("Los jaguares", 0, 0.0),
        )
        .with_winner(winner)
    }

    #[test]
    fn test_tally_top_is_stable_for_equal_counts() {
        let mut tally = Tally::new();
        for name in ["b", "a", "c", "a", "d", "c", "e", "f"] {
            tally.increment(name);
        }

        let top: Vec<(String, u32)> = tally
            .top(5)
            .into_iter()
            .map(|entry| (entry.name, entry.count))
            .collect();

        assert_eq!(
            top,
            vec![
                ("a".to_string(), 2),
                ("c".to_string(), 2),
                ("b".to_string(), 1),
                ("d".to_string(), 1),
                ("e".to_string(), 1),
            ]
        );
        assert_eq!(tally.count("f"), 1);
        assert_eq!(tally.count("zzz"), 0);
    }

    #[test]
    fn test_ties_are_not_counted_as_wins() {
        let games = vec![
            game("1", WinningTeam::new("Los tiguere", 300.0)),
            game("2", WinningTeam::tie()),
            game("3", WinningTeam::new("Los jaguares", 280.0)),
            game("4", WinningTeam::new("Los tiguere", 310.0)),
        ];

        let stats = SummaryStatistics::from_games(&games);
        assert_eq!(stats.team_wins.count("Los tiguere"), 2);
        assert_eq!(stats.team_wins.count("Los jaguares"), 1);
        assert_eq!(stats.team_wins.count("Empate"), 0);
    }

    #[test]
    fn test_player_counts_skip_undetermined() {
        let games = vec![
            game("1", WinningTeam::tie()).with_luckiest("Ana", 2.1).with_most_experienced("Luis", 20.0),
            game("2", WinningTeam::tie()).with_luckiest("Ana", 1.4),
            game("3", WinningTeam::tie()),
        ];

        let stats = SummaryStatistics::from_games(&games);
        assert_eq!(stats.luckiest.count("Ana"), 2);
        assert_eq!(stats.most_experienced.len(), 1);
        assert!(!stats.is_empty());
        assert!(SummaryStatistics::from_games(&[]).is_empty());
    }
}
