use super::ItemRef;
use crate::error::{CareMateError, Result};
use crate::model::{EntryEdit, FoodEntry, ListKind, MealPreferences};

/// Resolves a position or id to the id of an existing record in `list`.
pub fn resolve_id(prefs: &MealPreferences, list: ListKind, target: &ItemRef) -> Result<String> {
    let found = match target {
        ItemRef::Position(n) => prefs.id_at(list, *n).map(str::to_string),
        ItemRef::Id(id) => prefs.find(list, id).map(|item| item.id.clone()),
    };
    found.ok_or_else(|| CareMateError::ItemNotFound {
        list,
        id: target.to_string(),
    })
}

/// Applies `edit` to the record with `id`, returning a copy of the updated record.
pub fn update_entry<T: FoodEntry>(items: &mut [T], id: &str, edit: &EntryEdit) -> Option<T> {
    let entry = items.iter_mut().find(|e| e.id() == id)?;
    entry.apply_edit(edit);
    Some(entry.clone())
}

/// Removes the record with `id`, keeping the order of the rest.
pub fn remove_entry<T: FoodEntry>(items: &mut Vec<T>, id: &str) -> Option<T> {
    let idx = items.iter().position(|e| e.id() == id)?;
    Some(items.remove(idx))
}
