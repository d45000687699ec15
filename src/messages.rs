//! User-facing text constants
//!
//! This module centralizes the fixed strings printed by the menu and the
//! reports so that the tests and the output agree on them.

/// Menu screen
pub mod menu {
    pub const HEADER: &str = "Choose an option:";
    pub const OPTIONS: [&str; 10] = [
        "1: Print the total number of films.",
        "2: Print the number of films per genre.",
        "3: Print the total number of persons.",
        "4: Print the film(s) with the highest score.",
        "5: Print the most active director(s).",
        "6: Print the shortest and longest film(s).",
        "7: Print all scary horror films.",
        "8: Print the score list from 0 to 100.",
        "9: Export films without a relevant score to CSV.",
        "10: Stop the program",
    ];
    pub const PROMPT: &str = "Enter your choice: ";
    pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
    pub const STOPPED: &str = "Program stopped.";
}

/// Empty-result and heading text of the reports
pub mod reports {
    pub const NO_RELEVANT_SCORE: &str = "No movies with relevant score.";
    pub const NO_DIRECTORS: &str = "No directors found.";
    pub const NO_LENGTH: &str = "No movies with length information.";
    pub const NO_SCARY_HORROR: &str = "No scary horror movies found.";
    pub const SCARY_HORROR_HEADING: &str = "Scary horror movies:";
}

/// Catalog loading
pub mod loading {
    /// Suffix of the skip warning, after the number of skipped movies
    pub const SKIPPED_SUFFIX: &str = "movies were skipped due to missing or invalid data.";
}
