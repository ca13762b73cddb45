use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::MealPreferences;
use crate::store::DataStore;
use tracing::info;

/// Clears the whole aggregate, but only once the caller has confirmed.
pub fn run<S: DataStore>(store: &mut S, confirmed: bool) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if !confirmed {
        result.add_message(CmdMessage::info(
            "Start over cancelled. Nothing was cleared.",
        ));
        return Ok(result);
    }

    let cleared = store.preferences().total_items();
    store.replace(MealPreferences::new())?;
    info!(cleared, "session reset");
    result.add_message(CmdMessage::success(format!(
        "Started over. Cleared {} items and all notes.",
        cleared
    )));
    Ok(result)
}
