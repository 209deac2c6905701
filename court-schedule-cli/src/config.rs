use std::env;
use std::fs;
use std::io;
use std::path::Path;

use court_schedule_core::{Roster, Team};
use serde::{Deserialize, Serialize};
use thiserror::Error;

macro_rules! from_environment {
    ($config:expr, $($key:expr, $name:tt),*$(,)?) => {{
        $(
            {
                if let Ok(value) = env::var($key) {
                    if let Ok(value) = value.parse() {
                        $config.$name = value;
                    }
                }
            }
        )*
    }};
}

/// The most teams the entry form accepts.
pub const DEFAULT_MAX_TEAMS: usize = 10;

/// Rows printed on a single sheet.
pub const DEFAULT_MATCHES_PER_SHEET: usize = 15;

/// A roster file as written by the user.
///
/// ```toml
/// title = "Court A"
///
/// [[teams]]
/// players = ["Alice", "Bob"]
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterFile {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default = "default_max_teams")]
    pub max_teams: usize,
    #[serde(default = "default_matches_per_sheet")]
    pub matches_per_sheet: usize,
    #[serde(default)]
    pub teams: Vec<TeamEntry>,
}

/// One `[[teams]]` entry: the two players of a team.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamEntry {
    pub players: [String; 2],
}

impl TeamEntry {
    pub fn new<S, T>(first: S, second: T) -> Self
    where
        S: ToString,
        T: ToString,
    {
        Self {
            players: [first.to_string(), second.to_string()],
        }
    }
}

impl RosterFile {
    pub fn from_file<P>(path: P) -> Result<Self, ConfigError>
    where
        P: AsRef<Path>,
    {
        let buf = fs::read_to_string(path)?;

        Ok(toml::from_str(&buf)?)
    }

    pub fn with_environment(mut self) -> Self {
        from_environment!(
            self,
            "CS_MAX_TEAMS",
            max_teams,
            "CS_MATCHES_PER_SHEET",
            matches_per_sheet,
        );

        self
    }

    /// Validates the entered teams and builds the [`Roster`].
    ///
    /// Teams without any names are skipped. A team with only one name, fewer than 2 teams or more
    /// than `max_teams` teams are rejected.
    pub fn roster(&self) -> Result<Roster, ConfigError> {
        if self.matches_per_sheet == 0 {
            return Err(ConfigError::InvalidSheetSize);
        }

        let mut roster = Roster::with_capacity(self.teams.len());

        for (index, team) in self.teams.iter().enumerate() {
            let [first, second] = &team.players;
            let (first, second) = (first.trim(), second.trim());

            match (first.is_empty(), second.is_empty()) {
                (true, true) => {
                    log::debug!("Skipping blank team entry {}", index + 1);
                }
                (false, false) => {
                    roster.push(Team::new(first, second));
                }
                _ => return Err(ConfigError::MissingPlayer { entry: index + 1 }),
            }
        }

        if roster.len() < 2 {
            return Err(ConfigError::TooFewTeams {
                found: roster.len(),
            });
        }

        if roster.len() > self.max_teams {
            return Err(ConfigError::TooManyTeams {
                found: roster.len(),
                max: self.max_teams,
            });
        }

        Ok(roster)
    }
}

impl Default for RosterFile {
    fn default() -> Self {
        Self {
            title: None,
            max_teams: DEFAULT_MAX_TEAMS,
            matches_per_sheet: DEFAULT_MATCHES_PER_SHEET,
            teams: Vec::new(),
        }
    }
}

fn default_max_teams() -> usize {
    DEFAULT_MAX_TEAMS
}

fn default_matches_per_sheet() -> usize {
    DEFAULT_MATCHES_PER_SHEET
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
    #[error("team entry {entry} has only one player")]
    MissingPlayer { entry: usize },
    #[error("a tournament needs at least 2 teams, found {found}")]
    TooFewTeams { found: usize },
    #[error("too many teams: found {found}, at most {max} are allowed")]
    TooManyTeams { found: usize, max: usize },
    #[error("matches per sheet must be at least 1")]
    InvalidSheetSize,
}

#[cfg(test)]
mod tests {
    use court_schedule_core::Team;

    use super::{
        ConfigError, RosterFile, TeamEntry, DEFAULT_MATCHES_PER_SHEET, DEFAULT_MAX_TEAMS,
    };

    #[test]
    fn test_roster_file_parse() {
        let file: RosterFile = toml::from_str(
            r#"
            title = "Court A"

            [[teams]]
            players = ["Alice", "Bob"]

            [[teams]]
            players = ["Carol", "Dave"]
            "#,
        )
        .unwrap();

        assert_eq!(file.title.as_deref(), Some("Court A"));
        assert_eq!(file.max_teams, DEFAULT_MAX_TEAMS);
        assert_eq!(file.matches_per_sheet, DEFAULT_MATCHES_PER_SHEET);
        assert_eq!(
            file.teams,
            [
                TeamEntry::new("Alice", "Bob"),
                TeamEntry::new("Carol", "Dave")
            ]
        );
        assert_eq!(
            *file.roster().unwrap(),
            [Team::new("Alice", "Bob"), Team::new("Carol", "Dave")]
        );

        let file: RosterFile = toml::from_str("max_teams = 4\nmatches_per_sheet = 6").unwrap();
        assert_eq!(file.max_teams, 4);
        assert_eq!(file.matches_per_sheet, 6);
        assert!(file.teams.is_empty());
    }

    #[test]
    fn test_roster_file_wrong_player_count() {
        assert!(toml::from_str::<RosterFile>("[[teams]]\nplayers = [\"Alice\"]").is_err());
        assert!(toml::from_str::<RosterFile>(
            "[[teams]]\nplayers = [\"Alice\", \"Bob\", \"Carol\"]"
        )
        .is_err());
        assert!(toml::from_str::<RosterFile>("[[teams]]\nfirst = \"Alice\"").is_err());
    }

    #[test]
    fn test_roster_file_example() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/roster.example.toml");
        let file = RosterFile::from_file(path).unwrap();

        assert_eq!(file.title.as_deref(), Some("Court A"));
        assert_eq!(file.roster().unwrap().len(), 4);
    }

    #[test]
    fn test_roster() {
        let file = RosterFile {
            teams: vec![
                TeamEntry::new(" Alice ", "Bob"),
                TeamEntry::new("", ""),
                TeamEntry::new("Carol", "Dave"),
            ],
            ..Default::default()
        };

        let roster = file.roster().unwrap();
        assert_eq!(
            *roster,
            [Team::new("Alice", "Bob"), Team::new("Carol", "Dave")]
        );
    }

    #[test]
    fn test_roster_invalid() {
        let file = RosterFile {
            teams: vec![TeamEntry::new("Alice", "Bob"), TeamEntry::new("Carol", " ")],
            ..Default::default()
        };
        assert!(matches!(
            file.roster(),
            Err(ConfigError::MissingPlayer { entry: 2 })
        ));

        let file = RosterFile {
            teams: vec![TeamEntry::new("Alice", "Bob")],
            ..Default::default()
        };
        assert!(matches!(
            file.roster(),
            Err(ConfigError::TooFewTeams { found: 1 })
        ));

        let file = RosterFile::default();
        assert!(matches!(
            file.roster(),
            Err(ConfigError::TooFewTeams { found: 0 })
        ));

        let file = RosterFile {
            max_teams: 2,
            teams: vec![
                TeamEntry::new("a", "b"),
                TeamEntry::new("c", "d"),
                TeamEntry::new("e", "f"),
            ],
            ..Default::default()
        };
        assert!(matches!(
            file.roster(),
            Err(ConfigError::TooManyTeams { found: 3, max: 2 })
        ));

        let file = RosterFile {
            matches_per_sheet: 0,
            teams: vec![TeamEntry::new("a", "b"), TeamEntry::new("c", "d")],
            ..Default::default()
        };
        assert!(matches!(file.roster(), Err(ConfigError::InvalidSheetSize)));
    }
}
