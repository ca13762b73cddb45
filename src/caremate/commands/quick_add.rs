use crate::catalog::{common_allergy, CommonAllergy, COMMON_ALLERGIES};
use crate::commands::{add, CmdMessage, CmdResult};
use crate::error::{CareMateError, Result};
use crate::model::{
    create_allergy_intolerance, AllergyIntolerance, AllergyKind, AllergySeverity, PreferenceEntry,
};
use crate::store::DataStore;

/// Catalog entries whose name is not already on the allergy list (case-insensitive).
pub fn available_common_allergies(items: &[AllergyIntolerance]) -> Vec<&'static CommonAllergy> {
    COMMON_ALLERGIES
        .iter()
        .filter(|common| {
            !items
                .iter()
                .any(|item| item.item.name.to_lowercase() == common.name.to_lowercase())
        })
        .collect()
}

/// Adds a catalog entry as a moderate allergy.
pub fn run<S: DataStore>(store: &mut S, catalog_id: &str) -> Result<CmdResult> {
    let common = common_allergy(catalog_id)
        .ok_or_else(|| CareMateError::UnknownCatalogEntry(catalog_id.to_string()))?;

    let already_listed = !available_common_allergies(&store.preferences().allergies_intolerances)
        .iter()
        .any(|c| c.id == common.id);
    if already_listed {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning(format!(
            "{} is already on the allergy list.",
            common.name
        )));
        return Ok(result);
    }

    let entry = create_allergy_intolerance(
        common.name,
        AllergySeverity::Moderate,
        AllergyKind::Allergy,
        None,
        None,
    );
    add::run(store, PreferenceEntry::Allergy(entry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_catalog_entry_as_moderate_allergy() {
        let mut store = InMemoryStore::new();
        run(&mut store, "sesame").unwrap();

        let added = &store.preferences().allergies_intolerances[0];
        assert_eq!(added.item.name, "Sesame");
        assert_eq!(added.severity, AllergySeverity::Moderate);
        assert_eq!(added.kind, AllergyKind::Allergy);
        assert_eq!(added.item.category, None);
    }

    #[test]
    fn hides_entries_already_present() {
        let store = StoreFixture::new()
            .with_allergy("peanuts", AllergySeverity::Severe, AllergyKind::Allergy)
            .store;
        let available = available_common_allergies(&store.preferences().allergies_intolerances);
        assert_eq!(available.len(), COMMON_ALLERGIES.len() - 1);
        assert!(available.iter().all(|c| c.id != "peanuts"));
    }

    #[test]
    fn quick_add_twice_only_adds_once() {
        let mut store = InMemoryStore::new();
        run(&mut store, "eggs").unwrap();
        let result = run(&mut store, "EGGS").unwrap();
        assert_eq!(store.preferences().allergies_intolerances.len(), 1);
        assert_eq!(
            result.messages[0].level,
            crate::commands::MessageLevel::Warning
        );
    }

    #[test]
    fn unknown_catalog_id_is_an_error() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            run(&mut store, "kiwi"),
            Err(CareMateError::UnknownCatalogEntry(_))
        ));
    }
}
