//! # court-schedule-core
//!
//! This crate builds the order of play for a single round-robin tournament on one shared court.
//! Every team meets every other team exactly once, and the order tries to keep teams from playing
//! two matches in a row.
//!
//! Important types:
//! - [`Roster`]: The ordered list of [`Team`]s. A team is identified by its 1-based position in
//! the roster, a [`TeamId`].
//! - [`Match`]: A single pairing of two teams.
//! - [`Spot`]: A place in the rotation circle, either a team or the bye.
//! - [`Round`]: All matches produced by a single rotation step.
//! - [`Schedule`]: The final flat order of play.
//!
//! The schedule is built in two steps. The [`round_robin`] module rotates teams around a fixed
//! anchor (the *circle method*) and groups the pairings into rounds. The [`sequence`] module
//! flattens those rounds into a single stream of matches. [`compute_schedule`] runs both.
//!
//! ## Feature Flags
//!
//! `serde`: Adds `Serialize` and `Deserialize` impls to all data types.
//!
pub mod render;
pub mod round_robin;
pub mod sequence;

mod schedule;

pub use round_robin::Round;
pub use schedule::{match_count, Schedule};

use thiserror::Error;

use std::fmt::{self, Display, Formatter};
use std::ops::{Deref, Index};
use std::result;
use std::vec::IntoIter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Computes the complete order of play for `roster_size` teams.
///
/// The returned [`Schedule`] contains `roster_size * (roster_size - 1) / 2` matches, starting with
/// the first match to be played.
///
/// # Errors
///
/// Returns [`Error::TooFewTeams`] if `roster_size` is smaller than 2. No partial schedule is ever
/// returned.
///
/// # Examples
///
/// ```
/// # use court_schedule_core::{compute_schedule, Match, TeamId};
/// let schedule = compute_schedule(2).unwrap();
/// assert_eq!(schedule, [Match::new(TeamId::new(1), TeamId::new(2))]);
/// ```
pub fn compute_schedule(roster_size: usize) -> Result<Schedule> {
    let rounds = round_robin::generate(roster_size)?;
    sequence::build(&rounds, roster_size)
}

/// The identity of a [`Team`]: its 1-based position in the [`Roster`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "usize", into = "usize"))]
pub struct TeamId(usize);

impl TeamId {
    /// Creates a new `TeamId` from a 1-based position.
    ///
    /// # Panics
    ///
    /// Panics if `id` is 0.
    #[inline]
    pub const fn new(id: usize) -> Self {
        assert!(id != 0, "team ids are 1-based");
        Self(id)
    }

    /// Returns the 1-based id.
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Returns the 0-based index of the team in the [`Roster`].
    #[inline]
    pub const fn index(self) -> usize {
        self.0 - 1
    }
}

impl TryFrom<usize> for TeamId {
    type Error = Error;

    fn try_from(id: usize) -> Result<Self> {
        if id == 0 {
            return Err(Error::InvalidTeamId { id });
        }

        Ok(Self(id))
    }
}

impl From<TeamId> for usize {
    #[inline]
    fn from(id: TeamId) -> Self {
        id.0
    }
}

impl Display for TeamId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// A competing team of two players.
///
/// The names are only used for display and are never validated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Team {
    pub first: String,
    pub second: String,
}

impl Team {
    #[inline]
    pub fn new<S, T>(first: S, second: T) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

impl Display for Team {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.first, self.second)
    }
}

/// The ordered list of [`Team`]s taking part in a tournament.
///
/// Teams cannot be modified once they are part of a `Roster`; a [`TeamId`] stays valid for the
/// lifetime of the `Roster`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Roster {
    teams: Vec<Team>,
}

impl Roster {
    /// Creates a new empty `Roster`.
    #[inline]
    pub fn new() -> Self {
        Self { teams: Vec::new() }
    }

    /// Creates a new empty `Roster` with the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            teams: Vec::with_capacity(capacity),
        }
    }

    /// Appends a team to the end of the `Roster`, returning its [`TeamId`].
    pub fn push(&mut self, team: Team) -> TeamId {
        self.teams.push(team);
        TeamId::new(self.teams.len())
    }

    /// Returns the team with the given `id`. Returns `None` if no team with the `id` exists.
    #[inline]
    pub fn get(&self, id: TeamId) -> Option<&Team> {
        self.teams.get(id.index())
    }

    /// Returns an iterator over all teams together with their [`TeamId`]s.
    pub fn iter_ids(&self) -> impl Iterator<Item = (TeamId, &Team)> + '_ {
        self.teams
            .iter()
            .enumerate()
            .map(|(index, team)| (TeamId::new(index + 1), team))
    }
}

impl Deref for Roster {
    type Target = [Team];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.teams
    }
}

impl Index<TeamId> for Roster {
    type Output = Team;

    #[inline]
    fn index(&self, id: TeamId) -> &Self::Output {
        &self.teams[id.index()]
    }
}

impl FromIterator<Team> for Roster {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Team>,
    {
        let teams = iter.into_iter().collect();

        Self { teams }
    }
}

impl IntoIterator for Roster {
    type Item = Team;
    type IntoIter = IntoIter<Team>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.teams.into_iter()
    }
}

impl From<Vec<Team>> for Roster {
    #[inline]
    fn from(teams: Vec<Team>) -> Self {
        Self { teams }
    }
}

/// A place in the rotation circle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Spot {
    Team(TeamId),
    /// The placeholder added when the number of teams is odd. The team paired against the bye
    /// sits out for that round.
    Bye,
}

impl Spot {
    /// Returns `true` if the `Spot` is [`Bye`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use court_schedule_core::Spot;
    /// assert!(Spot::Bye.is_bye());
    /// ```
    ///
    /// [`Bye`]: Self::Bye
    #[inline]
    pub fn is_bye(&self) -> bool {
        matches!(self, Self::Bye)
    }

    /// Returns the [`TeamId`] in this `Spot`, or `None` for the bye.
    #[inline]
    pub fn team(self) -> Option<TeamId> {
        match self {
            Self::Team(id) => Some(id),
            Self::Bye => None,
        }
    }
}

impl From<TeamId> for Spot {
    #[inline]
    fn from(id: TeamId) -> Self {
        Self::Team(id)
    }
}

/// A match between two teams.
///
/// The order of the teams is the order in which they were paired and is kept for display. For
/// the round-robin guarantees only the unordered [`pair`] matters.
///
/// [`pair`]: Self::pair
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Match {
    pub teams: [TeamId; 2],
}

impl Match {
    #[inline]
    pub fn new(first: TeamId, second: TeamId) -> Self {
        debug_assert_ne!(first, second, "a team cannot play against itself");

        Self {
            teams: [first, second],
        }
    }

    #[inline]
    pub fn first(&self) -> TeamId {
        self.teams[0]
    }

    #[inline]
    pub fn second(&self) -> TeamId {
        self.teams[1]
    }

    /// Returns both teams ordered by their [`TeamId`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use court_schedule_core::{Match, TeamId};
    /// let m = Match::new(TeamId::new(4), TeamId::new(2));
    /// assert_eq!(m.pair(), (TeamId::new(2), TeamId::new(4)));
    /// ```
    #[inline]
    pub fn pair(&self) -> (TeamId, TeamId) {
        let [a, b] = self.teams;
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Returns `true` if `team` plays in this match.
    #[inline]
    pub fn contains(&self, team: TeamId) -> bool {
        self.teams.contains(&team)
    }

    /// Returns `true` if at least one team plays in both `self` and `other`.
    #[inline]
    pub fn shares_team(&self, other: &Match) -> bool {
        self.teams.iter().any(|team| other.contains(*team))
    }

    /// Returns the opponent of `team`, or `None` if `team` does not play in this match.
    pub fn opponent(&self, team: TeamId) -> Option<TeamId> {
        match self.teams {
            [a, b] if a == team => Some(b),
            [a, b] if b == team => Some(a),
            _ => None,
        }
    }
}

impl Index<usize> for Match {
    type Output = TeamId;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.teams[index]
    }
}

impl Display for Match {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.teams[0], self.teams[1])
    }
}

/// An `Result<T>` using [`enum@Error`] as an error type.
pub type Result<T> = result::Result<T, Error>;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("too few teams: a round robin needs at least 2 teams, found {found}")]
    TooFewTeams { found: usize },
    #[error("invalid number of matches: expected {expected}, found {found}")]
    InvalidNumberOfMatches { expected: usize, found: usize },
    #[error("invalid team id {id}: team ids are 1-based")]
    InvalidTeamId { id: usize },
    #[error("invalid team: match refers to team {id} but only {length} teams are given")]
    InvalidTeam { id: usize, length: usize },
    #[error("invalid match: team {id} is paired against itself")]
    SelfMatch { id: usize },
    #[error("duplicate match: teams {first} and {second} meet more than once")]
    DuplicateMatch { first: usize, second: usize },
}

#[cfg(test)]
mod tests {
    use super::{compute_schedule, Error, Match, Roster, Spot, Team, TeamId};

    #[macro_export]
    macro_rules! match_list {
        ($(($a:expr, $b:expr)),*$(,)?) => {
            vec![$($crate::Match::new($crate::TeamId::new($a), $crate::TeamId::new($b))),*]
        };
    }

    #[test]
    fn test_team_id() {
        let id = TeamId::new(3);
        assert_eq!(id.get(), 3);
        assert_eq!(id.index(), 2);
        assert_eq!(id.to_string(), "3");
    }

    #[test]
    #[should_panic]
    fn test_team_id_zero() {
        TeamId::new(0);
    }

    #[test]
    fn test_team_id_try_from() {
        assert_eq!(TeamId::try_from(2), Ok(TeamId::new(2)));
        assert_eq!(TeamId::try_from(0), Err(Error::InvalidTeamId { id: 0 }));
        assert_eq!(usize::from(TeamId::new(7)), 7);
    }

    #[test]
    fn test_roster() {
        let mut roster = Roster::new();
        assert_eq!(roster.push(Team::new("Alice", "Bob")), TeamId::new(1));
        assert_eq!(roster.push(Team::new("Carol", "Dave")), TeamId::new(2));

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get(TeamId::new(1)), Some(&Team::new("Alice", "Bob")));
        assert_eq!(roster[TeamId::new(2)].to_string(), "Carol/Dave");
        assert_eq!(roster.get(TeamId::new(3)), None);

        let ids: Vec<_> = roster.iter_ids().map(|(id, _)| id.get()).collect();
        assert_eq!(ids, [1, 2]);
    }

    #[test]
    fn test_match() {
        let m = Match::new(TeamId::new(5), TeamId::new(3));

        assert_eq!(m.first(), TeamId::new(5));
        assert_eq!(m[1], TeamId::new(3));
        assert_eq!(m.pair(), (TeamId::new(3), TeamId::new(5)));
        assert!(m.contains(TeamId::new(3)));
        assert!(!m.contains(TeamId::new(1)));
        assert_eq!(m.opponent(TeamId::new(5)), Some(TeamId::new(3)));
        assert_eq!(m.opponent(TeamId::new(1)), None);
        assert_eq!(m.to_string(), "(5, 3)");

        assert!(m.shares_team(&Match::new(TeamId::new(3), TeamId::new(1))));
        assert!(!m.shares_team(&Match::new(TeamId::new(2), TeamId::new(1))));
    }

    #[test]
    fn test_spot() {
        assert!(Spot::Bye.is_bye());
        assert_eq!(Spot::Bye.team(), None);

        let spot = Spot::from(TeamId::new(2));
        assert!(!spot.is_bye());
        assert_eq!(spot.team(), Some(TeamId::new(2)));
    }

    #[test]
    fn test_compute_schedule() {
        assert_eq!(compute_schedule(0), Err(Error::TooFewTeams { found: 0 }));
        assert_eq!(compute_schedule(1), Err(Error::TooFewTeams { found: 1 }));

        assert_eq!(compute_schedule(2).unwrap(), match_list![(1, 2)]);
        assert_eq!(
            compute_schedule(3).unwrap(),
            match_list![(2, 3), (1, 3), (1, 2)]
        );
        assert_eq!(
            compute_schedule(4).unwrap(),
            match_list![(1, 4), (2, 3), (1, 3), (4, 2), (1, 2), (3, 4)]
        );
        assert_eq!(
            compute_schedule(5).unwrap(),
            match_list![
                (2, 5),
                (3, 4),
                (1, 5),
                (2, 3),
                (1, 4),
                (5, 3),
                (4, 2),
                (1, 3),
                (4, 5),
                (1, 2),
            ]
        );
    }

    #[test]
    fn test_compute_schedule_properties() {
        for n in 2..=24 {
            let schedule = compute_schedule(n).unwrap();

            assert_eq!(schedule.len(), n * (n - 1) / 2, "n = {}", n);
            assert_eq!(schedule.validate(n), Ok(()), "n = {}", n);

            for m in schedule.iter() {
                for team in m.teams {
                    assert!((1..=n).contains(&team.get()), "n = {}", n);
                }
            }

            for a in 1..=n {
                for b in a + 1..=n {
                    let count = schedule
                        .iter()
                        .filter(|m| m.pair() == (TeamId::new(a), TeamId::new(b)))
                        .count();
                    assert_eq!(count, 1, "n = {}, pair ({}, {})", n, a, b);
                }
            }

            assert_eq!(schedule, compute_schedule(n).unwrap(), "n = {}", n);
        }
    }

    #[test]
    fn test_compute_schedule_back_to_back() {
        // With three or four teams a back-to-back match cannot be avoided in any order.
        assert_eq!(compute_schedule(3).unwrap().back_to_back(), [1, 2]);
        assert_eq!(compute_schedule(4).unwrap().back_to_back(), [2, 4]);

        for n in 5..=24 {
            assert_eq!(
                compute_schedule(n).unwrap().back_to_back(),
                Vec::<usize>::new(),
                "n = {}",
                n
            );
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        use serde_test::{assert_de_tokens_error, assert_tokens, Token};

        assert_tokens(&TeamId::new(3), &[Token::U64(3)]);

        assert_tokens(
            &Team::new("Alice", "Bob"),
            &[
                Token::Struct {
                    name: "Team",
                    len: 2,
                },
                Token::Str("first"),
                Token::Str("Alice"),
                Token::Str("second"),
                Token::Str("Bob"),
                Token::StructEnd,
            ],
        );

        assert_tokens(
            &Match::new(TeamId::new(1), TeamId::new(2)),
            &[
                Token::Struct {
                    name: "Match",
                    len: 1,
                },
                Token::Str("teams"),
                Token::Tuple { len: 2 },
                Token::U64(1),
                Token::U64(2),
                Token::TupleEnd,
                Token::StructEnd,
            ],
        );

        assert_tokens(
            &Spot::Bye,
            &[Token::UnitVariant {
                name: "Spot",
                variant: "Bye",
            }],
        );

        assert_tokens(
            &Spot::Team(TeamId::new(4)),
            &[
                Token::NewtypeVariant {
                    name: "Spot",
                    variant: "Team",
                },
                Token::U64(4),
            ],
        );

        assert_de_tokens_error::<TeamId>(
            &[Token::U64(0)],
            "invalid team id 0: team ids are 1-based",
        );

        assert_de_tokens_error::<Match>(
            &[
                Token::Struct {
                    name: "Match",
                    len: 1,
                },
                Token::Str("teams"),
                Token::Tuple { len: 2 },
                Token::U64(0),
                Token::U64(2),
            ],
            "invalid team id 0: team ids are 1-based",
        );
    }
}
