//! # Round Robin Pairings
//!
//! Pairings are generated with the circle method. Team 1 is pinned as the anchor and the other
//! teams are placed on a [`Rotation`]. Every round pairs the anchor with the last spot of the
//! rotation and folds the remaining spots onto each other from both ends. The rotation is then
//! turned once to the right for the next round.
//!
//! When the number of teams is odd a [`Spot::Bye`] is added to the rotation so it always folds
//! evenly. Whoever is paired against the bye sits out that round.
use std::iter::FusedIterator;
use std::ops::Deref;

use crate::{Error, Match, Result, Spot, TeamId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The team pinned in place for every round.
pub const ANCHOR: TeamId = TeamId::new(1);

/// Generates all rounds of a round robin tournament between `n` teams.
///
/// # Errors
///
/// Returns [`Error::TooFewTeams`] if `n` is smaller than 2.
pub fn generate(n: usize) -> Result<Vec<Round>> {
    rounds(n).map(Iterator::collect)
}

/// Returns an iterator lazily yielding every [`Round`] for `n` teams.
///
/// # Errors
///
/// Returns [`Error::TooFewTeams`] if `n` is smaller than 2.
pub fn rounds(n: usize) -> Result<Rounds> {
    let rotation = Rotation::new(n)?;
    let remaining = num_rounds(n);

    log::debug!(
        "Generating round robin pairings for {} teams over {} rounds",
        n,
        remaining
    );

    Ok(Rounds {
        rotation,
        remaining,
    })
}

/// Returns the number of rounds needed for `n` teams: `n - 1` if `n` is even, `n` if it is odd.
#[inline]
pub fn num_rounds(n: usize) -> usize {
    match n {
        0 | 1 => 0,
        n if n % 2 == 0 => n - 1,
        n => n,
    }
}

/// The spots circling around the [`ANCHOR`].
///
/// A `Rotation` is never mutated in place; [`rotated`] returns the rotation of the next round.
///
/// [`rotated`]: Self::rotated
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rotation {
    spots: Vec<Spot>,
}

impl Rotation {
    /// Creates the rotation of the first round: teams `2..=n` in ascending order, followed by a
    /// [`Spot::Bye`] if `n` is odd.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooFewTeams`] if `n` is smaller than 2.
    pub fn new(n: usize) -> Result<Self> {
        if n < 2 {
            return Err(Error::TooFewTeams { found: n });
        }

        let mut spots = Vec::with_capacity(n);
        spots.extend((2..=n).map(|id| Spot::Team(TeamId::new(id))));

        if n % 2 != 0 {
            spots.push(Spot::Bye);
        }

        Ok(Self { spots })
    }

    #[inline]
    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    /// Returns the rotation for the next round by moving the last spot to the front.
    pub fn rotated(&self) -> Self {
        let mut spots = self.spots.clone();
        spots.rotate_right(1);

        Self { spots }
    }

    /// Computes the [`Round`] for the current position of the rotation.
    pub fn round(&self) -> Round {
        let len = self.spots.len();
        debug_assert!(len % 2 == 1);

        let mut matches = Vec::with_capacity(len / 2 + 1);
        let mut bye = None;

        // The anchor plays the last spot.
        match self.spots[len - 1] {
            Spot::Team(id) => matches.push(Match::new(ANCHOR, id)),
            Spot::Bye => bye = Some(ANCHOR),
        }

        // Fold the rest of the rotation from both ends.
        for x in 0..(len - 1) / 2 {
            match (self.spots[x], self.spots[len - 2 - x]) {
                (Spot::Team(first), Spot::Team(second)) => {
                    matches.push(Match::new(first, second));
                }
                (Spot::Team(id), Spot::Bye) | (Spot::Bye, Spot::Team(id)) => bye = Some(id),
                (Spot::Bye, Spot::Bye) => unreachable!("rotation contains more than one bye"),
            }
        }

        Round { matches, bye }
    }
}

/// All matches played in one rotation step, in the order they are played.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Round {
    matches: Vec<Match>,
    bye: Option<TeamId>,
}

impl Round {
    /// Returns the team sitting out this round. Always `None` for an even number of teams.
    #[inline]
    pub fn bye(&self) -> Option<TeamId> {
        self.bye
    }

    #[inline]
    pub fn into_matches(self) -> Vec<Match> {
        self.matches
    }
}

impl Deref for Round {
    type Target = [Match];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.matches
    }
}

impl AsRef<[Match]> for Round {
    #[inline]
    fn as_ref(&self) -> &[Match] {
        &self.matches
    }
}

/// An iterator over the [`Round`]s of a round robin tournament.
///
/// Created by [`rounds`].
#[derive(Clone, Debug)]
pub struct Rounds {
    rotation: Rotation,
    remaining: usize,
}

impl Iterator for Rounds {
    type Item = Round;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let round = self.rotation.round();
        self.rotation = self.rotation.rotated();
        self.remaining -= 1;

        Some(round)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Rounds {}

impl FusedIterator for Rounds {}
