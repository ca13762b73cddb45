//! Core data types: food records, severities, and the [`MealPreferences`] aggregate.
//!
//! Every food record shares the same base fields ([`FoodItem`]). The two specialized
//! records embed that base (flattened on the wire) and add their own severity
//! vocabulary, so generic code works through the [`FoodEntry`] trait while
//! severity-aware code matches on [`Severity`] or [`PreferenceEntry`].

use crate::id::generate_id;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
    Beverages,
    Other,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 6] = [
        FoodCategory::Breakfast,
        FoodCategory::Lunch,
        FoodCategory::Dinner,
        FoodCategory::Snacks,
        FoodCategory::Beverages,
        FoodCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodCategory::Breakfast => "breakfast",
            FoodCategory::Lunch => "lunch",
            FoodCategory::Dinner => "dinner",
            FoodCategory::Snacks => "snacks",
            FoodCategory::Beverages => "beverages",
            FoodCategory::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FoodCategory::Breakfast => "Breakfast",
            FoodCategory::Lunch => "Lunch",
            FoodCategory::Dinner => "Dinner",
            FoodCategory::Snacks => "Snacks",
            FoodCategory::Beverages => "Beverages",
            FoodCategory::Other => "Other",
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FoodCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        FoodCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// How strongly a food is disliked. Declaration order is the emphasis order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DislikeSeverity {
    Mild,
    Strong,
    Absolute,
}

impl DislikeSeverity {
    pub const ALL: [DislikeSeverity; 3] = [
        DislikeSeverity::Mild,
        DislikeSeverity::Strong,
        DislikeSeverity::Absolute,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DislikeSeverity::Mild => "mild",
            DislikeSeverity::Strong => "strong",
            DislikeSeverity::Absolute => "absolute",
        }
    }
}

impl FromStr for DislikeSeverity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        DislikeSeverity::ALL
            .into_iter()
            .find(|v| v.as_str() == wanted)
            .ok_or_else(|| {
                format!(
                    "Unknown dislike severity: {} (expected mild, strong or absolute)",
                    s
                )
            })
    }
}

/// Medical risk of an allergy or intolerance. Declaration order is the risk order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AllergySeverity {
    Mild,
    Moderate,
    Severe,
    LifeThreatening,
}

impl AllergySeverity {
    pub const ALL: [AllergySeverity; 4] = [
        AllergySeverity::Mild,
        AllergySeverity::Moderate,
        AllergySeverity::Severe,
        AllergySeverity::LifeThreatening,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AllergySeverity::Mild => "mild",
            AllergySeverity::Moderate => "moderate",
            AllergySeverity::Severe => "severe",
            AllergySeverity::LifeThreatening => "life-threatening",
        }
    }
}

impl FromStr for AllergySeverity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        AllergySeverity::ALL
            .into_iter()
            .find(|v| v.as_str() == wanted)
            .ok_or_else(|| {
                format!(
                    "Unknown allergy severity: {} (expected mild, moderate, severe or life-threatening)",
                    s
                )
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllergyKind {
    Allergy,
    Intolerance,
}

impl AllergyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AllergyKind::Allergy => "allergy",
            AllergyKind::Intolerance => "intolerance",
        }
    }
}

impl FromStr for AllergyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "allergy" => Ok(AllergyKind::Allergy),
            "intolerance" => Ok(AllergyKind::Intolerance),
            _ => Err(format!(
                "Unknown type: {} (expected allergy or intolerance)",
                s
            )),
        }
    }
}

/// Either severity vocabulary. Both share one color scale, see [`crate::severity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Dislike(DislikeSeverity),
    Allergy(AllergySeverity),
}

impl Severity {
    pub fn token(&self) -> &'static str {
        match self {
            Severity::Dislike(s) => s.as_str(),
            Severity::Allergy(s) => s.as_str(),
        }
    }

    /// Parses a severity token in the vocabulary of the given list.
    pub fn parse_for(list: ListKind, token: &str) -> Result<Self, String> {
        match list {
            ListKind::Dislikes => token.parse().map(Severity::Dislike),
            ListKind::Allergies => token.parse().map(Severity::Allergy),
            ListKind::Favorites => Err("Favorite foods do not carry a severity".to_string()),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<FoodCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DislikedFood {
    #[serde(flatten)]
    pub item: FoodItem,
    pub severity: DislikeSeverity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllergyIntolerance {
    #[serde(flatten)]
    pub item: FoodItem,
    pub severity: AllergySeverity,
    #[serde(rename = "type")]
    pub kind: AllergyKind,
}

/// Field changes for an existing record. `None` leaves a field untouched; for the
/// optional fields `Some(None)` clears them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryEdit {
    pub name: Option<String>,
    pub category: Option<Option<FoodCategory>>,
    pub notes: Option<Option<String>>,
    pub severity: Option<Severity>,
    pub kind: Option<AllergyKind>,
}

impl EntryEdit {
    pub fn is_empty(&self) -> bool {
        *self == EntryEdit::default()
    }
}

/// Shared behavior of every food record.
pub trait FoodEntry: Clone {
    fn base(&self) -> &FoodItem;

    fn base_mut(&mut self) -> &mut FoodItem;

    fn severity(&self) -> Option<Severity> {
        None
    }

    /// Applies the variant-specific part of an edit. Base fields are handled by
    /// [`FoodEntry::apply_edit`].
    fn apply_detail(&mut self, _edit: &EntryEdit) {}

    fn id(&self) -> &str {
        &self.base().id
    }

    fn name(&self) -> &str {
        &self.base().name
    }

    fn category(&self) -> Option<FoodCategory> {
        self.base().category
    }

    fn notes(&self) -> Option<&str> {
        self.base().notes.as_deref()
    }

    fn apply_edit(&mut self, edit: &EntryEdit) {
        let base = self.base_mut();
        if let Some(name) = &edit.name {
            base.name = name.trim().to_string();
        }
        if let Some(category) = edit.category {
            base.category = category;
        }
        if let Some(notes) = &edit.notes {
            base.notes = normalize_notes(notes.as_deref());
        }
        self.apply_detail(edit);
    }
}

impl FoodEntry for FoodItem {
    fn base(&self) -> &FoodItem {
        self
    }

    fn base_mut(&mut self) -> &mut FoodItem {
        self
    }
}

impl FoodEntry for DislikedFood {
    fn base(&self) -> &FoodItem {
        &self.item
    }

    fn base_mut(&mut self) -> &mut FoodItem {
        &mut self.item
    }

    fn severity(&self) -> Option<Severity> {
        Some(Severity::Dislike(self.severity))
    }

    fn apply_detail(&mut self, edit: &EntryEdit) {
        if let Some(Severity::Dislike(s)) = edit.severity {
            self.severity = s;
        }
    }
}

impl FoodEntry for AllergyIntolerance {
    fn base(&self) -> &FoodItem {
        &self.item
    }

    fn base_mut(&mut self) -> &mut FoodItem {
        &mut self.item
    }

    fn severity(&self) -> Option<Severity> {
        Some(Severity::Allergy(self.severity))
    }

    fn apply_detail(&mut self, edit: &EntryEdit) {
        if let Some(Severity::Allergy(s)) = edit.severity {
            self.severity = s;
        }
        if let Some(kind) = edit.kind {
            self.kind = kind;
        }
    }
}

/// A freshly built record of any kind, ready to be appended to its list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceEntry {
    Favorite(FoodItem),
    Dislike(DislikedFood),
    Allergy(AllergyIntolerance),
}

impl PreferenceEntry {
    pub fn list(&self) -> ListKind {
        match self {
            PreferenceEntry::Favorite(_) => ListKind::Favorites,
            PreferenceEntry::Dislike(_) => ListKind::Dislikes,
            PreferenceEntry::Allergy(_) => ListKind::Allergies,
        }
    }

    pub fn base(&self) -> &FoodItem {
        match self {
            PreferenceEntry::Favorite(f) => f.base(),
            PreferenceEntry::Dislike(d) => d.base(),
            PreferenceEntry::Allergy(a) => a.base(),
        }
    }
}

/// Which of the three food lists an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Favorites,
    Dislikes,
    Allergies,
}

impl ListKind {
    pub const ALL: [ListKind; 3] = [ListKind::Favorites, ListKind::Dislikes, ListKind::Allergies];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Favorites => "favorites",
            ListKind::Dislikes => "dislikes",
            ListKind::Allergies => "allergies",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ListKind::Favorites => "Favorite Foods",
            ListKind::Dislikes => "Foods to Avoid",
            ListKind::Allergies => "Allergies & Intolerances",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "favorite" | "favorites" | "fav" | "love" => Ok(ListKind::Favorites),
            "dislike" | "dislikes" | "avoid" => Ok(ListKind::Dislikes),
            "allergy" | "allergies" | "intolerance" | "intolerances" | "medical" => {
                Ok(ListKind::Allergies)
            }
            _ => Err(format!(
                "Unknown list: {} (expected favorites, dislikes or allergies)",
                s
            )),
        }
    }
}

/// The complete set of preferences collected in one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPreferences {
    pub favorite_foods: Vec<FoodItem>,
    pub disliked_foods: Vec<DislikedFood>,
    pub allergies_intolerances: Vec<AllergyIntolerance>,
    pub additional_considerations: String,
}

impl MealPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len_of(&self, list: ListKind) -> usize {
        match list {
            ListKind::Favorites => self.favorite_foods.len(),
            ListKind::Dislikes => self.disliked_foods.len(),
            ListKind::Allergies => self.allergies_intolerances.len(),
        }
    }

    pub fn total_items(&self) -> usize {
        ListKind::ALL.iter().map(|l| self.len_of(*l)).sum()
    }

    /// Looks up a record id in the given list, returning its base fields.
    pub fn find(&self, list: ListKind, id: &str) -> Option<&FoodItem> {
        match list {
            ListKind::Favorites => find_base(&self.favorite_foods, id),
            ListKind::Dislikes => find_base(&self.disliked_foods, id),
            ListKind::Allergies => find_base(&self.allergies_intolerances, id),
        }
    }

    /// Returns the id at a 1-based position of the given list.
    pub fn id_at(&self, list: ListKind, position: usize) -> Option<&str> {
        let idx = position.checked_sub(1)?;
        match list {
            ListKind::Favorites => self.favorite_foods.get(idx).map(|e| e.id()),
            ListKind::Dislikes => self.disliked_foods.get(idx).map(|e| e.id()),
            ListKind::Allergies => self.allergies_intolerances.get(idx).map(|e| e.id()),
        }
    }
}

fn find_base<'a, T: FoodEntry>(items: &'a [T], id: &str) -> Option<&'a FoodItem> {
    items.iter().find(|e| e.id() == id).map(|e| e.base())
}

/// Trims notes and collapses empty ones to `None`.
pub fn normalize_notes(notes: Option<&str>) -> Option<String> {
    notes
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
}

pub fn create_food_item(
    name: &str,
    category: Option<FoodCategory>,
    notes: Option<&str>,
) -> FoodItem {
    FoodItem {
        id: generate_id(),
        name: name.trim().to_string(),
        category,
        notes: normalize_notes(notes),
    }
}

pub fn create_disliked_food(
    name: &str,
    severity: DislikeSeverity,
    category: Option<FoodCategory>,
    notes: Option<&str>,
) -> DislikedFood {
    DislikedFood {
        item: create_food_item(name, category, notes),
        severity,
    }
}

pub fn create_allergy_intolerance(
    name: &str,
    severity: AllergySeverity,
    kind: AllergyKind,
    category: Option<FoodCategory>,
    notes: Option<&str>,
) -> AllergyIntolerance {
    AllergyIntolerance {
        item: create_food_item(name, category, notes),
        severity,
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_trims_name() {
        let item = create_food_item("  Soup  ", None, None);
        assert_eq!(item.name, "Soup");
    }

    #[test]
    fn factory_drops_blank_notes() {
        let item = create_food_item("Soup", None, Some("   "));
        assert_eq!(item.notes, None);

        let item = create_food_item("Soup", None, Some("  warm only "));
        assert_eq!(item.notes.as_deref(), Some("warm only"));
    }

    #[test]
    fn factories_assign_distinct_ids() {
        let a = create_food_item("Soup", None, None);
        let b = create_disliked_food("Soup", DislikeSeverity::Mild, None, None);
        assert_ne!(a.id, b.item.id);
    }

    #[test]
    fn severities_are_ordered_by_emphasis() {
        assert!(DislikeSeverity::Mild < DislikeSeverity::Strong);
        assert!(DislikeSeverity::Strong < DislikeSeverity::Absolute);
        assert!(AllergySeverity::Severe < AllergySeverity::LifeThreatening);
    }

    #[test]
    fn parses_tokens_case_insensitively() {
        assert_eq!("Lunch".parse::<FoodCategory>(), Ok(FoodCategory::Lunch));
        assert_eq!(
            "life-threatening".parse::<AllergySeverity>(),
            Ok(AllergySeverity::LifeThreatening)
        );
        assert_eq!("avoid".parse::<ListKind>(), Ok(ListKind::Dislikes));
        assert!("brunch".parse::<FoodCategory>().is_err());
    }

    #[test]
    fn severity_parse_follows_list_vocabulary() {
        assert_eq!(
            Severity::parse_for(ListKind::Dislikes, "strong"),
            Ok(Severity::Dislike(DislikeSeverity::Strong))
        );
        assert!(Severity::parse_for(ListKind::Allergies, "strong").is_err());
        assert!(Severity::parse_for(ListKind::Favorites, "mild").is_err());
    }

    #[test]
    fn apply_edit_keeps_id_and_normalizes() {
        let mut allergy = create_allergy_intolerance(
            "Peanuts",
            AllergySeverity::Mild,
            AllergyKind::Allergy,
            None,
            Some("rash"),
        );
        let id = allergy.item.id.clone();
        allergy.apply_edit(&EntryEdit {
            name: Some("  Peanut butter ".into()),
            notes: Some(Some("  ".into())),
            severity: Some(Severity::Allergy(AllergySeverity::Severe)),
            kind: Some(AllergyKind::Intolerance),
            ..Default::default()
        });

        assert_eq!(allergy.item.id, id);
        assert_eq!(allergy.item.name, "Peanut butter");
        assert_eq!(allergy.item.notes, None);
        assert_eq!(allergy.severity, AllergySeverity::Severe);
        assert_eq!(allergy.kind, AllergyKind::Intolerance);
    }

    #[test]
    fn dislike_ignores_allergy_severity() {
        let mut dislike = create_disliked_food("Liver", DislikeSeverity::Strong, None, None);
        dislike.apply_edit(&EntryEdit {
            severity: Some(Severity::Allergy(AllergySeverity::Severe)),
            ..Default::default()
        });
        assert_eq!(dislike.severity, DislikeSeverity::Strong);
    }

    #[test]
    fn serializes_with_flattened_base_and_type_field() {
        let allergy = AllergyIntolerance {
            item: FoodItem {
                id: "abc".into(),
                name: "Shellfish".into(),
                category: None,
                notes: None,
            },
            severity: AllergySeverity::LifeThreatening,
            kind: AllergyKind::Allergy,
        };
        let json = serde_json::to_value(&allergy).unwrap();
        assert_eq!(json["name"], "Shellfish");
        assert_eq!(json["severity"], "life-threatening");
        assert_eq!(json["type"], "allergy");
        assert!(json.get("category").is_none());

        let back: AllergyIntolerance = serde_json::from_value(json).unwrap();
        assert_eq!(back, allergy);
    }

    #[test]
    fn aggregate_uses_camel_case_keys() {
        let prefs = MealPreferences::new();
        let json = serde_json::to_value(&prefs).unwrap();
        assert!(json.get("favoriteFoods").is_some());
        assert!(json.get("allergiesIntolerances").is_some());
        assert_eq!(json["additionalConsiderations"], "");
    }

    #[test]
    fn id_at_is_one_based() {
        let mut prefs = MealPreferences::new();
        let item = create_food_item("Soup", None, None);
        let id = item.id.clone();
        prefs.favorite_foods.push(item);

        assert_eq!(prefs.id_at(ListKind::Favorites, 1), Some(id.as_str()));
        assert_eq!(prefs.id_at(ListKind::Favorites, 0), None);
        assert_eq!(prefs.id_at(ListKind::Favorites, 2), None);
    }
}
