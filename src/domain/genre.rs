use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The genre variant a movie is materialized as
///
/// Declaration order is the fixed order used for reporting ties.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    #[display("ActionAdventure")]
    ActionAdventure,
    #[display("Comedy")]
    Comedy,
    #[display("Drama")]
    Drama,
    #[display("Horror")]
    Horror,
    #[display("Romance")]
    Romance,
    #[display("ScienceFictionFantasy")]
    ScienceFictionFantasy,
    #[display("Western")]
    Western,
}

impl Genre {
    pub const ALL: [Genre; 7] = [
        Genre::ActionAdventure,
        Genre::Comedy,
        Genre::Drama,
        Genre::Horror,
        Genre::Romance,
        Genre::ScienceFictionFantasy,
        Genre::Western,
    ];

    /// Map the genre label used in the input file to a variant
    ///
    /// Matching is exact; labels outside the table have no variant.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "ACTION & ADVENTURE" => Some(Self::ActionAdventure),
            "COMEDY" => Some(Self::Comedy),
            "DRAMA" => Some(Self::Drama),
            "HORROR" => Some(Self::Horror),
            "ROMANCE" => Some(Self::Romance),
            "SCIENCE FICTION & FANTASY" => Some(Self::ScienceFictionFantasy),
            "WESTERN" => Some(Self::Western),
            _ => None,
        }
    }

    /// Position in [`Genre::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }
}
