//! Plain-text court sheets.
//!
//! Every sheet has the same number of rows so printed sheets line up next to the court. Unused
//! rows at the end of the last sheet are left blank.
use std::fmt::{self, Display, Formatter};

use court_schedule_core::render::{Renderer, ScheduleView};
use court_schedule_core::Roster;

const HEADER: [&str; 7] = ["#", "W", "L", "Description", "Winner", "WS", "LS"];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sheet {
    pub rows: Vec<Option<Row>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub number: usize,
    pub description: String,
}

/// Collects a schedule into fixed-size [`Sheet`]s.
#[derive(Clone, Debug)]
pub struct SheetRenderer {
    title: Option<String>,
    matches_per_sheet: usize,
    sheets: Vec<Sheet>,
}

impl SheetRenderer {
    pub fn new(title: Option<String>, matches_per_sheet: usize) -> Self {
        debug_assert!(matches_per_sheet > 0);

        Self {
            title,
            matches_per_sheet,
            sheets: Vec::new(),
        }
    }

    #[cfg(test)]
    #[inline]
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    fn description_width(&self) -> usize {
        self.sheets
            .iter()
            .flat_map(|sheet| sheet.rows.iter().flatten())
            .map(|row| row.description.chars().count())
            .max()
            .unwrap_or(0)
            .max(HEADER[3].len())
    }
}

impl Renderer for SheetRenderer {
    fn render(&mut self, view: ScheduleView<'_>) {
        let mut sheet = Sheet::default();

        for m in view {
            sheet.rows.push(Some(Row {
                number: m.number,
                description: m.to_string(),
            }));

            if sheet.rows.len() == self.matches_per_sheet {
                self.sheets.push(std::mem::take(&mut sheet));
            }
        }

        if !sheet.rows.is_empty() {
            sheet.rows.resize(self.matches_per_sheet, None);
            self.sheets.push(sheet);
        }

        log::debug!("Rendered {} sheets", self.sheets.len());
    }
}

impl Display for SheetRenderer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width = self.description_width();

        for (index, sheet) in self.sheets.iter().enumerate() {
            if index != 0 {
                writeln!(f)?;
            }

            match &self.title {
                Some(title) => writeln!(f, "{} - Sheet {}", title, index + 1)?,
                None => writeln!(f, "Sheet {}", index + 1)?,
            }

            writeln!(
                f,
                "{:>3} | {:^3} | {:^3} | {:<width$} | {:<6} | {:^3} | {:^3}",
                HEADER[0],
                HEADER[1],
                HEADER[2],
                HEADER[3],
                HEADER[4],
                HEADER[5],
                HEADER[6],
                width = width
            )?;

            for row in &sheet.rows {
                let (number, description) = match row {
                    Some(row) => (row.number.to_string(), row.description.as_str()),
                    None => (String::new(), ""),
                };

                writeln!(
                    f,
                    "{:>3} | {:^3} | {:^3} | {:<width$} | {:<6} | {:^3} | {:^3}",
                    number,
                    "",
                    "",
                    description,
                    "",
                    "",
                    "",
                    width = width
                )?;
            }
        }

        Ok(())
    }
}

/// The list of teams posted at the court.
#[derive(Copy, Clone, Debug)]
pub struct TeamList<'a>(pub &'a Roster);

impl<'a> Display for TeamList<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (id, team) in self.0.iter_ids() {
            writeln!(f, "{:>3}  {} / {}", id, team.first, team.second)?;
        }

        Ok(())
    }
}
