use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::PreferenceEntry;
use crate::store::DataStore;
use tracing::debug;

/// Appends a freshly built record to its list.
pub fn run<S: DataStore>(store: &mut S, entry: PreferenceEntry) -> Result<CmdResult> {
    let mut prefs = store.preferences().clone();
    let list = entry.list();
    match &entry {
        PreferenceEntry::Favorite(item) => prefs.favorite_foods.push(item.clone()),
        PreferenceEntry::Dislike(item) => prefs.disliked_foods.push(item.clone()),
        PreferenceEntry::Allergy(item) => prefs.allergies_intolerances.push(item.clone()),
    }
    let position = prefs.len_of(list);
    store.replace(prefs)?;
    debug!(list = %list, id = %entry.base().id, "added entry");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added to {} ({}): {}",
        list.title(),
        position,
        entry.base().name
    )));
    Ok(result.with_affected(vec![entry]))
}
