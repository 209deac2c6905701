use std::path::Path;

use court_schedule_core::compute_schedule;

use crate::config::{RosterFile, TeamEntry};
use crate::sheet::{SheetRenderer, TeamList};
use crate::utils::Prompt;
use crate::Error;

pub fn from_file(path: &Path) -> Result<(), Error> {
    log::info!("Reading roster from {}", path.display());

    let file = RosterFile::from_file(path)?.with_environment();
    print(&file)
}

/// Reads teams from the terminal until a blank first name or `max_teams` is reached.
pub fn enter(title: Option<String>) -> Result<(), Error> {
    let mut file = RosterFile {
        title,
        ..Default::default()
    }
    .with_environment();

    for number in 1..=file.max_teams {
        let first = match Prompt::new(&format!("Team {} player 1 (blank to finish)", number))
            .read()?
        {
            Some(first) if !first.is_empty() => first,
            _ => break,
        };

        let second = Prompt::new(&format!("Team {} player 2", number))
            .read()?
            .unwrap_or_default();

        file.teams.push(TeamEntry::new(first, second));
    }

    println!();
    print(&file)
}

fn print(file: &RosterFile) -> Result<(), Error> {
    let roster = file.roster()?;
    let schedule = compute_schedule(roster.len())?;

    log::info!(
        "Scheduled {} matches for {} teams",
        schedule.len(),
        roster.len()
    );

    let back_to_back = schedule.back_to_back();
    if !back_to_back.is_empty() {
        log::warn!(
            "{} matches directly follow a match of the same team",
            back_to_back.len()
        );
    }

    let mut renderer = SheetRenderer::new(file.title.clone(), file.matches_per_sheet);
    schedule.render(&roster, &mut renderer)?;

    println!("{}", TeamList(&roster));
    print!("{}", renderer);

    Ok(())
}
