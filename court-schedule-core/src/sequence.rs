//! # Order of Play
//!
//! Rounds are played one after another on the same court, so the final order is the rounds
//! concatenated. The rotation keeps a team that just played away from the spots that are paired
//! next, which avoids back-to-back matches for most team counts. Five teams are the exception and
//! receive a fixed correction after flattening.
use crate::{match_count, Error, Match, Result, Round, Schedule};

/// The only team count whose flattened order is corrected.
const CORRECTED_TEAMS: usize = 5;

/// Flattens `rounds` into a single order of play, keeping the order of the rounds and the order
/// of the matches within each round.
pub fn flatten(rounds: &[Round]) -> Vec<Match> {
    rounds
        .iter()
        .flat_map(|round| round.iter().copied())
        .collect()
}

/// Builds the [`Schedule`] for `n` teams from the `rounds` of the circle method.
///
/// # Errors
///
/// Returns [`Error::TooFewTeams`] if `n` is smaller than 2, or any error from
/// [`Schedule::validate`] if `rounds` are not a complete round robin between `n` teams.
pub fn build(rounds: &[Round], n: usize) -> Result<Schedule> {
    if n < 2 {
        return Err(Error::TooFewTeams { found: n });
    }

    let mut matches = flatten(rounds);

    let expected = match_count(n);
    if matches.len() != expected {
        return Err(Error::InvalidNumberOfMatches {
            expected,
            found: matches.len(),
        });
    }

    if n == CORRECTED_TEAMS {
        correct_five(&mut matches);
    }

    let schedule = Schedule::from(matches);
    schedule.validate(n)?;

    log::debug!(
        "Built schedule of {} matches for {} teams ({} back-to-back)",
        schedule.len(),
        n,
        schedule.back_to_back().len()
    );

    Ok(schedule)
}

/// With five teams the flattened order has teams playing back-to-back at indices 6 and 8.
fn correct_five(matches: &mut Vec<Match>) {
    debug_assert_eq!(matches.len(), match_count(CORRECTED_TEAMS));

    let m = matches.remove(8);
    matches.push(m);

    let m = matches.remove(6);
    matches.insert(7, m);
}
