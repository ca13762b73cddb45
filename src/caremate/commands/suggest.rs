use crate::commands::{add, CmdResult};
use crate::error::Result;
use crate::model::{
    create_allergy_intolerance, create_disliked_food, create_food_item, AllergyKind,
    AllergySeverity, DislikeSeverity, ListKind, PreferenceEntry,
};
use crate::store::DataStore;

/// Builds the record a one-click suggestion turns into for the given list.
pub fn suggestion_entry(text: &str, target: ListKind) -> PreferenceEntry {
    match target {
        ListKind::Favorites => PreferenceEntry::Favorite(create_food_item(text, None, None)),
        ListKind::Dislikes => PreferenceEntry::Dislike(create_disliked_food(
            text,
            DislikeSeverity::Mild,
            None,
            None,
        )),
        ListKind::Allergies => PreferenceEntry::Allergy(create_allergy_intolerance(
            text,
            AllergySeverity::Moderate,
            AllergyKind::Allergy,
            None,
            None,
        )),
    }
}

pub fn run<S: DataStore>(store: &mut S, text: &str, target: ListKind) -> Result<CmdResult> {
    add::run(store, suggestion_entry(text, target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SUGGESTIONS;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn suggestions_use_default_severities() {
        let mut store = InMemoryStore::new();
        run(&mut store, "Chicken soup", ListKind::Favorites).unwrap();
        run(&mut store, "Spicy foods", ListKind::Dislikes).unwrap();
        run(&mut store, "Gluten", ListKind::Allergies).unwrap();

        let prefs = store.preferences();
        assert_eq!(prefs.favorite_foods[0].name, "Chicken soup");
        assert_eq!(prefs.disliked_foods[0].severity, DislikeSeverity::Mild);
        assert_eq!(
            prefs.allergies_intolerances[0].severity,
            AllergySeverity::Moderate
        );
        assert_eq!(prefs.allergies_intolerances[0].kind, AllergyKind::Allergy);
    }

    #[test]
    fn every_catalog_suggestion_builds_for_its_target() {
        for group in SUGGESTIONS {
            for text in group.items {
                let entry = suggestion_entry(text, group.target);
                assert_eq!(entry.list(), group.target);
                assert_eq!(entry.base().name, *text);
            }
        }
    }
}
