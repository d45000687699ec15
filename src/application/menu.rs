use crate::messages::menu as text;
use std::io::{self, Write};
use std::str::FromStr;

/// An entry of the interactive menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    TotalFilms,
    FilmsPerGenre,
    TotalPersons,
    HighestScore,
    MostActiveDirectors,
    ShortestAndLongest,
    ScaryHorror,
    ScoreList,
    ExportWithoutRelevantScore,
    Stop,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 10] = [
        MenuChoice::TotalFilms,
        MenuChoice::FilmsPerGenre,
        MenuChoice::TotalPersons,
        MenuChoice::HighestScore,
        MenuChoice::MostActiveDirectors,
        MenuChoice::ShortestAndLongest,
        MenuChoice::ScaryHorror,
        MenuChoice::ScoreList,
        MenuChoice::ExportWithoutRelevantScore,
        MenuChoice::Stop,
    ];

    /// The number the user types for this entry
    pub fn number(self) -> usize {
        self as usize + 1
    }
}

/// Input that is not one of the menu numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidChoice(pub String);

impl FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        trimmed
            .parse::<usize>()
            .ok()
            .filter(|_| trimmed.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|number| number.checked_sub(1))
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or_else(|| InvalidChoice(trimmed.to_string()))
    }
}

/// Print the menu followed by the prompt
pub fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", text::HEADER)?;
    for option in text::OPTIONS {
        writeln!(out, "{option}")?;
    }
    write!(out, "{}", text::PROMPT)?;
    out.flush()
}
