//! # Schedule Rendering
//!
//! The `render` module connects a [`Schedule`] with the team names of a [`Roster`] so that any
//! exporter can lay out the order of play without looking up teams itself.
//!
//! An exporter implements [`Renderer`] and receives a [`ScheduleView`], an iterator of
//! [`MatchView`]s in playing order.
use std::fmt::{self, Display, Formatter};
use std::iter::FusedIterator;
use std::slice::Iter;

use crate::{Match, Result, Roster, Schedule, Team, TeamId};

/// A renderer used to render a [`Schedule`].
pub trait Renderer {
    fn render(&mut self, view: ScheduleView<'_>);
}

/// A [`Schedule`] with every team resolved in a [`Roster`].
#[derive(Clone, Debug)]
pub struct ScheduleView<'a> {
    roster: &'a Roster,
    matches: Iter<'a, Match>,
    number: usize,
}

impl<'a> ScheduleView<'a> {
    /// Creates a new `ScheduleView`.
    ///
    /// # Errors
    ///
    /// Returns an error if `schedule` is not a complete round robin between the teams in
    /// `roster`.
    pub fn new(schedule: &'a Schedule, roster: &'a Roster) -> Result<Self> {
        schedule.validate(roster.len())?;

        Ok(Self {
            roster,
            matches: schedule.iter(),
            number: 0,
        })
    }

    #[inline]
    pub fn roster(&self) -> &'a Roster {
        self.roster
    }
}

impl<'a> Iterator for ScheduleView<'a> {
    type Item = MatchView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let m = self.matches.next()?;
        self.number += 1;

        // All ids were checked against the roster in `ScheduleView::new`.
        Some(MatchView {
            number: self.number,
            first: Entry::new(m.first(), self.roster),
            second: Entry::new(m.second(), self.roster),
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.matches.size_hint()
    }
}

impl<'a> ExactSizeIterator for ScheduleView<'a> {}

impl<'a> FusedIterator for ScheduleView<'a> {}

/// A single match with both teams resolved.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MatchView<'a> {
    /// The 1-based number of the match in the order of play.
    pub number: usize,
    pub first: Entry<'a>,
    pub second: Entry<'a>,
}

impl<'a> Display for MatchView<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}  vs  {}", self.first, self.second)
    }
}

/// A team playing in a [`MatchView`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Entry<'a> {
    pub id: TeamId,
    pub team: &'a Team,
}

impl<'a> Entry<'a> {
    #[inline]
    fn new(id: TeamId, roster: &'a Roster) -> Self {
        Self {
            id,
            team: &roster[id],
        }
    }
}

impl<'a> Display for Entry<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.team)
    }
}
