use std::collections::HashSet;
use std::ops::Deref;
use std::vec::IntoIter;

use crate::render::{Renderer, ScheduleView};
use crate::{Error, Match, Result, Roster, TeamId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Returns the number of matches in a round robin between `n` teams.
#[inline]
pub const fn match_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// The order of play on a single court.
///
/// Index 0 is the first match to be played. A `Schedule` returned by [`compute_schedule`] always
/// passes [`validate`].
///
/// [`compute_schedule`]: crate::compute_schedule
/// [`validate`]: Self::validate
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Schedule {
    matches: Vec<Match>,
}

impl Schedule {
    /// Checks that the `Schedule` is a complete round robin between `n` teams: every pair of
    /// teams in `1..=n` meets exactly once and no other team appears.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self, n: usize) -> Result<()> {
        let expected = match_count(n);
        if self.matches.len() != expected {
            return Err(Error::InvalidNumberOfMatches {
                expected,
                found: self.matches.len(),
            });
        }

        let mut seen = HashSet::with_capacity(expected);

        for m in &self.matches {
            for team in m.teams {
                if team.get() == 0 || team.get() > n {
                    return Err(Error::InvalidTeam {
                        id: team.get(),
                        length: n,
                    });
                }
            }

            let (first, second) = m.pair();
            if first == second {
                return Err(Error::SelfMatch { id: first.get() });
            }

            if !seen.insert((first, second)) {
                return Err(Error::DuplicateMatch {
                    first: first.get(),
                    second: second.get(),
                });
            }
        }

        Ok(())
    }

    /// Returns the positions of all matches whose teams include a team from the match directly
    /// before it.
    pub fn back_to_back(&self) -> Vec<usize> {
        self.matches
            .windows(2)
            .enumerate()
            .filter(|(_, window)| window[0].shares_team(&window[1]))
            .map(|(index, _)| index + 1)
            .collect()
    }

    /// Returns an iterator over the positions of all matches `team` plays in.
    pub fn matches_of(&self, team: TeamId) -> impl Iterator<Item = usize> + '_ {
        self.matches
            .iter()
            .enumerate()
            .filter(move |(_, m)| m.contains(team))
            .map(|(index, _)| index)
    }

    /// Renders the `Schedule` together with the team names from `roster` using the given
    /// [`Renderer`].
    ///
    /// # Errors
    ///
    /// Returns an error if the `Schedule` is not a complete round robin of the teams in `roster`.
    pub fn render<R>(&self, roster: &Roster, renderer: &mut R) -> Result<()>
    where
        R: Renderer,
    {
        let view = ScheduleView::new(self, roster)?;
        renderer.render(view);
        Ok(())
    }

    #[inline]
    pub fn into_matches(self) -> Vec<Match> {
        self.matches
    }
}

impl Deref for Schedule {
    type Target = [Match];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.matches
    }
}

impl<U> PartialEq<U> for Schedule
where
    U: AsRef<[Match]>,
{
    #[inline]
    fn eq(&self, other: &U) -> bool {
        self.matches == other.as_ref()
    }
}

impl From<Vec<Match>> for Schedule {
    #[inline]
    fn from(matches: Vec<Match>) -> Self {
        Self { matches }
    }
}

impl IntoIterator for Schedule {
    type Item = Match;
    type IntoIter = IntoIter<Match>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.matches.into_iter()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Match;
    type IntoIter = std::slice::Iter<'a, Match>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}
