use crate::commands::{CmdMessage, CmdResult, ItemRef};
use crate::error::{CareMateError, Result};
use crate::model::{EntryEdit, ListKind, PreferenceEntry};
use crate::store::DataStore;
use tracing::debug;

use super::helpers::{resolve_id, update_entry};

/// Replaces the mutable fields of one record. The id never changes.
pub fn run<S: DataStore>(
    store: &mut S,
    list: ListKind,
    target: &ItemRef,
    edit: &EntryEdit,
) -> Result<CmdResult> {
    let mut prefs = store.preferences().clone();
    let id = resolve_id(&prefs, list, target)?;

    let updated = match list {
        ListKind::Favorites => {
            update_entry(&mut prefs.favorite_foods, &id, edit).map(PreferenceEntry::Favorite)
        }
        ListKind::Dislikes => {
            update_entry(&mut prefs.disliked_foods, &id, edit).map(PreferenceEntry::Dislike)
        }
        ListKind::Allergies => {
            update_entry(&mut prefs.allergies_intolerances, &id, edit).map(PreferenceEntry::Allergy)
        }
    }
    .ok_or_else(|| CareMateError::ItemNotFound {
        list,
        id: id.clone(),
    })?;

    let mut result = CmdResult::default();
    if edit.is_empty() {
        result.add_message(CmdMessage::info("Nothing to change."));
        return Ok(result);
    }

    store.replace(prefs)?;
    debug!(list = %list, id = %id, "updated entry");
    result.add_message(CmdMessage::success(format!(
        "Updated in {}: {}",
        list.title(),
        updated.base().name
    )));
    Ok(result.with_affected(vec![updated]))
}
