//! # API Facade
//!
//! The single entry point for every caremate operation, whatever the UI. The facade:
//!
//! - **Validates** user-entered text before any record is built or stored
//! - **Normalizes inputs** (parses item references, checks severities belong to the
//!   target list's vocabulary)
//! - **Dispatches** to the command layer and returns `Result<CmdResult>`
//!
//! It performs no I/O and no presentation. Clipboard and download delivery is done by
//! the caller through [`crate::sink`], with strings produced by [`CareMateApi::export`].
//!
//! `CareMateApi<S: DataStore>` is generic over the store so tests can seed sessions
//! from fixtures.

use crate::catalog::CommonAllergy;
use crate::commands::{self, quick_add, CmdResult, ItemRef};
use crate::error::{CareMateError, Result};
use crate::export::{self, ExportFormat};
use crate::model::{
    create_allergy_intolerance, create_disliked_food, create_food_item, AllergyKind,
    AllergySeverity, DislikeSeverity, EntryEdit, FoodCategory, ListKind, MealPreferences,
    PreferenceEntry, Severity,
};
use crate::planner::{self, MealTime, Tip};
use crate::store::DataStore;
use crate::validation::{validate_additional_considerations, validate_food_name};
use crate::wizard::{Step, Wizard};
use chrono::NaiveDate;
use tracing::debug;

/// Raw field values for a new record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub name: String,
    pub category: Option<FoodCategory>,
    pub notes: Option<String>,
    pub severity: Option<Severity>,
    pub kind: Option<AllergyKind>,
}

impl EntryDraft {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

pub struct CareMateApi<S: DataStore> {
    store: S,
    wizard: Wizard,
}

impl<S: DataStore> CareMateApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            wizard: Wizard::new(),
        }
    }

    pub fn preferences(&self) -> &MealPreferences {
        self.store.preferences()
    }

    pub fn total_items(&self) -> usize {
        self.store.preferences().total_items()
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn next_step(&mut self) -> Step {
        self.wizard.next()
    }

    pub fn previous_step(&mut self) -> Step {
        self.wizard.previous()
    }

    pub fn go_to_step(&mut self, index: usize) -> Result<Step> {
        self.wizard.go_to(index)
    }

    /// Validates the draft, builds the record with the list's defaults (mild
    /// severity, allergy type) and appends it.
    pub fn add_entry(&mut self, list: ListKind, draft: EntryDraft) -> Result<CmdResult> {
        validate_food_name(&draft.name)?;
        check_detail_fits(list, draft.severity, draft.kind)?;

        let category = draft.category;
        let notes = draft.notes.as_deref();
        let entry = match (list, draft.severity) {
            (ListKind::Favorites, _) => {
                PreferenceEntry::Favorite(create_food_item(&draft.name, category, notes))
            }
            (ListKind::Dislikes, severity) => {
                let severity = match severity {
                    Some(Severity::Dislike(s)) => s,
                    _ => DislikeSeverity::Mild,
                };
                PreferenceEntry::Dislike(create_disliked_food(
                    &draft.name,
                    severity,
                    category,
                    notes,
                ))
            }
            (ListKind::Allergies, severity) => {
                let severity = match severity {
                    Some(Severity::Allergy(s)) => s,
                    _ => AllergySeverity::Mild,
                };
                PreferenceEntry::Allergy(create_allergy_intolerance(
                    &draft.name,
                    severity,
                    draft.kind.unwrap_or(AllergyKind::Allergy),
                    category,
                    notes,
                ))
            }
        };
        commands::add::run(&mut self.store, entry)
    }

    pub fn update_entry(
        &mut self,
        list: ListKind,
        target: &str,
        edit: EntryEdit,
    ) -> Result<CmdResult> {
        if let Some(name) = &edit.name {
            validate_food_name(name)?;
        }
        check_detail_fits(list, edit.severity, edit.kind)?;
        let target = parse_item_ref(target)?;
        commands::update::run(&mut self.store, list, &target, &edit)
    }

    pub fn delete_entry(&mut self, list: ListKind, target: &str) -> Result<CmdResult> {
        let target = parse_item_ref(target)?;
        commands::delete::run(&mut self.store, list, &target)
    }

    pub fn set_additional_considerations(&mut self, text: &str) -> Result<CmdResult> {
        validate_additional_considerations(text)?;
        commands::considerations::run(&mut self.store, text)
    }

    /// Clears the session and returns to the first step, only when confirmed.
    pub fn start_over(&mut self, confirmed: bool) -> Result<CmdResult> {
        let result = commands::reset::run(&mut self.store, confirmed)?;
        if confirmed {
            self.wizard.reset();
        }
        Ok(result)
    }

    pub fn list_entries(
        &self,
        lists: &[ListKind],
        group: bool,
        query: Option<&str>,
    ) -> Result<CmdResult> {
        commands::list::run(&self.store, lists, group, query)
    }

    pub fn available_common_allergies(&self) -> Vec<&'static CommonAllergy> {
        quick_add::available_common_allergies(&self.store.preferences().allergies_intolerances)
    }

    pub fn quick_add_common_allergy(&mut self, catalog_id: &str) -> Result<CmdResult> {
        quick_add::run(&mut self.store, catalog_id)
    }

    pub fn apply_suggestion(&mut self, text: &str, target: ListKind) -> Result<CmdResult> {
        validate_food_name(text)?;
        commands::suggest::run(&mut self.store, text, target)
    }

    pub fn meal_ideas(&self, meal: MealTime) -> &'static [&'static str] {
        planner::meal_ideas(meal)
    }

    pub fn personalized_tips(&self) -> Vec<Tip> {
        planner::personalized_tips(self.store.preferences())
    }

    pub fn favorite_highlights(&self) -> Vec<&str> {
        planner::favorite_highlights(self.store.preferences())
    }

    /// Renders the current aggregate. The date is an input so output is reproducible.
    pub fn export(&self, format: ExportFormat, date: NaiveDate) -> Result<String> {
        debug!(%format, %date, "rendering export");
        export::render(format, self.store.preferences(), date)
    }
}

fn parse_item_ref(input: &str) -> Result<ItemRef> {
    input.parse().map_err(CareMateError::Api)
}

/// Rejects severities or types from another list's vocabulary.
fn check_detail_fits(
    list: ListKind,
    severity: Option<Severity>,
    kind: Option<AllergyKind>,
) -> Result<()> {
    match (list, severity) {
        (ListKind::Favorites, Some(_)) => {
            return Err(CareMateError::Api(
                "Favorite foods do not carry a severity".to_string(),
            ))
        }
        (ListKind::Dislikes, Some(Severity::Allergy(s))) => {
            return Err(CareMateError::Api(format!(
                "{} is not a dislike severity (expected mild, strong or absolute)",
                s.as_str()
            )))
        }
        (ListKind::Allergies, Some(Severity::Dislike(s))) => {
            return Err(CareMateError::Api(format!(
                "{} is not an allergy severity (expected mild, moderate, severe or life-threatening)",
                s.as_str()
            )))
        }
        _ => {}
    }
    if kind.is_some() && list != ListKind::Allergies {
        return Err(CareMateError::Api(
            "Only allergies and intolerances carry a type".to_string(),
        ));
    }
    Ok(())
}
