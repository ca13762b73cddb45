//! Step-by-step navigation through the preference collection flow.
//!
//! The wizard only tracks where the caregiver is. It never owns preference data; the
//! session pairs it with a [`crate::store::DataStore`].

use crate::error::{CareMateError, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Welcome,
    Favorites,
    Dislikes,
    Allergies,
    Notes,
    Done,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Step::Welcome,
        Step::Favorites,
        Step::Dislikes,
        Step::Allergies,
        Step::Notes,
        Step::Done,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Step::Welcome => "Welcome",
            Step::Favorites => "Foods They Love",
            Step::Dislikes => "Foods to Avoid",
            Step::Allergies => "Medical Information",
            Step::Notes => "Special Notes",
            Step::Done => "All Done!",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Step::Welcome => "Let's start this journey together",
            Step::Favorites => "What brings them joy at mealtime?",
            Step::Dislikes => "What would they prefer not to eat?",
            Step::Allergies => "Important allergies and intolerances",
            Step::Notes => "Any other preferences or needs?",
            Step::Done => "Review and share the preferences",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wizard {
    index: usize,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Step {
        Step::ALL[self.index]
    }

    pub fn is_last(&self) -> bool {
        self.index == Step::ALL.len() - 1
    }

    /// Advances one step, staying put on the last one.
    pub fn next(&mut self) -> Step {
        if !self.is_last() {
            self.index += 1;
        }
        self.current()
    }

    /// Goes back one step, staying put on the first one.
    pub fn previous(&mut self) -> Step {
        self.index = self.index.saturating_sub(1);
        self.current()
    }

    /// Jumps to a 0-based step index.
    pub fn go_to(&mut self, index: usize) -> Result<Step> {
        if index >= Step::ALL.len() {
            return Err(CareMateError::InvalidStep(index));
        }
        self.index = index;
        Ok(self.current())
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn progress_percent(&self) -> u8 {
        let ratio = (self.index + 1) as f64 / Step::ALL.len() as f64;
        (ratio * 100.0).round() as u8
    }
}
