use log::{debug, warn};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::error::{Result, SharedError};
use crate::labels;

/// One side of a match as written by the simulation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TeamEntry {
    /// Team name
    #[serde(rename = "nombre", default)]
    pub name: String,

    /// Rounds won during the match
    #[serde(rename = "rondas_ganadas", default, deserialize_with = "de_count")]
    pub rounds_won: u32,

    /// Total score accumulated by the team
    #[serde(rename = "puntaje_total", default, deserialize_with = "de_number")]
    pub total_score: f64,
}

impl TeamEntry {
    pub fn new(name: impl Into<String>, rounds_won: u32, total_score: f64) -> Self {
        Self {
            name: name.into(),
            rounds_won,
            total_score,
        }
    }
}

/// Winner of a match; the name `Empate` marks a tie
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WinningTeam {
    #[serde(rename = "nombre", default)]
    pub name: String,

    #[serde(rename = "puntaje", default, deserialize_with = "de_number")]
    pub score: f64,
}

impl WinningTeam {
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    pub fn tie() -> Self {
        Self::new(labels::TIE, 0.0)
    }

    pub fn is_tie(&self) -> bool {
        self.name == labels::TIE
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LuckiestPlayer {
    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "suerte", default, deserialize_with = "de_number")]
    pub luck: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MostExperiencedPlayer {
    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "experiencia", default, deserialize_with = "de_number")]
    pub experience: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Wins split by gender category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GenderTally {
    #[serde(rename = "masculino", default, deserialize_with = "de_count")]
    pub male: u32,

    #[serde(rename = "femenino", default, deserialize_with = "de_count")]
    pub female: u32,
}

impl GenderTally {
    pub fn new(male: u32, female: u32) -> Self {
        Self { male, female }
    }

    /// Label of the category with more wins, `Empate` when level
    pub fn leader(&self) -> &'static str {
        match self.male.cmp(&self.female) {
            std::cmp::Ordering::Greater => labels::MALE,
            std::cmp::Ordering::Less => labels::FEMALE,
            std::cmp::Ordering::Equal => labels::TIE,
        }
    }
}

/// A single match result from `resultados_acumulados.json`.
///
/// Only the identifier and both teams are required for a record to be shown;
/// every other field degrades to a fallback when missing.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct GameRecord {
    #[validate(required, length(min = 1, message = "Game id must not be empty"))]
    #[serde(
        rename = "id_juego",
        default,
        deserialize_with = "de_identifier",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,

    /// Positive game number; anything else is treated as absent
    #[serde(
        rename = "numero_juego",
        default,
        deserialize_with = "de_sequence",
        skip_serializing_if = "Option::is_none"
    )]
    pub sequence: Option<u64>,

    #[validate(required)]
    #[serde(rename = "equipo_1", default)]
    pub team_one: Option<TeamEntry>,

    #[validate(required)]
    #[serde(rename = "equipo_2", default)]
    pub team_two: Option<TeamEntry>,

    #[serde(rename = "equipo_ganador", default)]
    pub winner: Option<WinningTeam>,

    #[serde(
        rename = "jugador_con_mas_suerte",
        default,
        deserialize_with = "de_standout"
    )]
    pub luckiest: Option<LuckiestPlayer>,

    #[serde(
        rename = "jugador_con_mas_experiencia",
        default,
        deserialize_with = "de_standout"
    )]
    pub most_experienced: Option<MostExperiencedPlayer>,

    #[serde(rename = "victorias_por_genero", default, skip_serializing_if = "Option::is_none")]
    pub gender_wins: Option<GenderTally>,

    #[serde(
        rename = "victorias_por_genero_acumuladas",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub cumulative_gender_wins: Option<GenderTally>,

    #[serde(rename = "genero_ganador", default, skip_serializing_if = "Option::is_none")]
    pub leading_gender: Option<String>,
}

impl GameRecord {
    /// Creates a record with both teams and no optional data
    pub fn new(id: impl Into<String>, team_one: TeamEntry, team_two: TeamEntry) -> Self {
        Self {
            id: Some(id.into()),
            sequence: None,
            team_one: Some(team_one),
            team_two: Some(team_two),
            winner: None,
            luckiest: None,
            most_experienced: None,
            gender_wins: None,
            cumulative_gender_wins: None,
            leading_gender: None,
        }
    }

    pub fn with_sequence(mut self, sequence: u64) -> Self {
        self.sequence = Some(sequence);
        self
    }

    pub fn with_winner(mut self, winner: WinningTeam) -> Self {
        self.winner = Some(winner);
        self
    }

    pub fn with_luckiest(mut self, name: impl Into<String>, luck: f64) -> Self {
        self.luckiest = Some(LuckiestPlayer {
            name: name.into(),
            luck,
            user_id: None,
        });
        self
    }

    pub fn with_most_experienced(mut self, name: impl Into<String>, experience: f64) -> Self {
        self.most_experienced = Some(MostExperiencedPlayer {
            name: name.into(),
            experience,
            user_id: None,
        });
        self
    }

    pub fn with_gender_wins(mut self, this_game: GenderTally, cumulative: GenderTally) -> Self {
        self.gender_wins = Some(this_game);
        self.cumulative_gender_wins = Some(cumulative);
        self
    }

    /// Identifier present and both teams present
    pub fn is_renderable(&self) -> bool {
        self.validate().is_ok()
    }

    /// Winner, or `None` for a tie. A missing winner reads as a tie.
    pub fn winning_team(&self) -> Option<&WinningTeam> {
        self.winner.as_ref().filter(|w| !w.is_tie())
    }

    pub fn sequence_label(&self) -> Option<String> {
        self.sequence.map(|n| n.to_string())
    }

    /// Explicit label if the data carries one, otherwise derived from this game's tally
    pub fn leading_gender(&self) -> Option<String> {
        self.leading_gender
            .clone()
            .or_else(|| self.gender_wins.map(|tally| tally.leader().to_string()))
    }

    pub fn has_gender_stats(&self) -> bool {
        self.gender_wins.is_some() || self.cumulative_gender_wins.is_some()
    }
}

/// Records decoded from the data file, with undecodable or incomplete
/// entries already dropped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameList {
    pub games: Vec<GameRecord>,
    pub skipped: usize,
}

impl GameList {
    /// Parses the body of `resultados_acumulados.json`.
    ///
    /// Fails only when the body is not a JSON array. Individual entries that
    /// cannot be decoded, or lack an id or a team, are logged and skipped.
    pub fn from_json(body: &str) -> Result<Self> {
        let raw: Vec<Value> = serde_json::from_str(body)?;
        Ok(Self::from_values(raw))
    }

    pub fn from_values(raw: Vec<Value>) -> Self {
        let total = raw.len();
        let mut games = Vec::with_capacity(total);

        for (index, value) in raw.into_iter().enumerate() {
            let position = index + 1;
            let mut game = match serde_json::from_value::<GameRecord>(value) {
                Ok(game) => game,
                Err(e) => {
                    warn!("Skipping undecodable game at position {}: {}", position, e);
                    continue;
                }
            };

            if let Err(e) = game.validate() {
                warn!("Skipping incomplete game at position {}: {}", position, SharedError::from(e));
                continue;
            }

            game.sequence.get_or_insert(position as u64);
            games.push(game);
        }

        let skipped = total - games.len();
        debug!("Decoded {} games ({} skipped)", games.len(), skipped);
        Self { games, skipped }
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Identifier {
    Text(String),
    Number(serde_json::Number),
}

fn de_identifier<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Identifier>::deserialize(deserializer)?.map(|id| match id {
        Identifier::Text(text) => text,
        Identifier::Number(number) => number.to_string(),
    }))
}

// Display-only numbers: the simulation has written them as integers, floats,
// strings and null over time. Unusable values fall back instead of failing
// the whole record.
fn numeric_value(value: &Value) -> Option<f64> {
    let number: Option<f64> = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

fn de_number<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(numeric_value(&Value::deserialize(deserializer)?).unwrap_or_default())
}

fn de_count<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let count = numeric_value(&Value::deserialize(deserializer)?).unwrap_or_default();
    Ok(count.max(0.0).min(u32::MAX as f64) as u32)
}

fn de_sequence<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(numeric_value(&Value::deserialize(deserializer)?)
        .filter(|n| *n >= 1.0 && n.fract() == 0.0 && *n <= u64::MAX as f64)
        .map(|n| n as u64))
}

// Player slots hold either an object or the "No determinado" string.
#[derive(Deserialize)]
#[serde(untagged)]
enum Standout<T> {
    Player(T),
    Undetermined(#[allow(dead_code)] Value),
}

fn de_standout<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<Standout<T>>::deserialize(deserializer)? {
        Some(Standout::Player(player)) => Ok(Some(player)),
        _ => Ok(None),
    }
}
