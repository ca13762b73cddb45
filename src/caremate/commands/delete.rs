use crate::commands::{CmdMessage, CmdResult, ItemRef};
use crate::error::{CareMateError, Result};
use crate::model::{ListKind, PreferenceEntry};
use crate::store::DataStore;
use tracing::debug;

use super::helpers::{remove_entry, resolve_id};

/// Removes exactly one record, keeping the order of the others.
pub fn run<S: DataStore>(store: &mut S, list: ListKind, target: &ItemRef) -> Result<CmdResult> {
    let mut prefs = store.preferences().clone();
    let id = resolve_id(&prefs, list, target)?;

    let removed = match list {
        ListKind::Favorites => {
            remove_entry(&mut prefs.favorite_foods, &id).map(PreferenceEntry::Favorite)
        }
        ListKind::Dislikes => {
            remove_entry(&mut prefs.disliked_foods, &id).map(PreferenceEntry::Dislike)
        }
        ListKind::Allergies => {
            remove_entry(&mut prefs.allergies_intolerances, &id).map(PreferenceEntry::Allergy)
        }
    }
    .ok_or_else(|| CareMateError::ItemNotFound {
        list,
        id: id.clone(),
    })?;

    store.replace(prefs)?;
    debug!(list = %list, id = %id, "deleted entry");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Removed from {}: {}",
        list.title(),
        removed.base().name
    )));
    Ok(result.with_affected(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AllergyKind, AllergySeverity};
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn deletes_exactly_one_and_keeps_order() {
        let mut store = StoreFixture::new()
            .with_favorites(&["Soup", "Tea", "Toast"])
            .store;
        let id = store.preferences().favorite_foods[1].id.clone();

        run(&mut store, ListKind::Favorites, &ItemRef::Id(id)).unwrap();

        let names: Vec<_> = store
            .preferences()
            .favorite_foods
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["Soup", "Toast"]);
    }

    #[test]
    fn deletes_by_position() {
        let mut store = StoreFixture::new()
            .with_allergy("Peanuts", AllergySeverity::Severe, AllergyKind::Allergy)
            .with_allergy("Lactose", AllergySeverity::Mild, AllergyKind::Intolerance)
            .store;

        let result = run(&mut store, ListKind::Allergies, &ItemRef::Position(2)).unwrap();
        assert_eq!(result.affected[0].base().name, "Lactose");
        assert_eq!(store.preferences().allergies_intolerances.len(), 1);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut store = StoreFixture::new().with_favorites(&["Soup"]).store;
        let err = run(&mut store, ListKind::Favorites, &ItemRef::Id("missing".into())).unwrap_err();
        assert!(matches!(err, CareMateError::ItemNotFound { .. }));
        assert_eq!(store.preferences().favorite_foods.len(), 1);
    }
}
