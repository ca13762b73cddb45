use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use crate::validation::CONSIDERATIONS_MAX_LEN;

/// Replaces the free-text additional considerations.
pub fn run<S: DataStore>(store: &mut S, text: &str) -> Result<CmdResult> {
    let mut prefs = store.preferences().clone();
    prefs.additional_considerations = text.to_string();
    store.replace(prefs)?;

    let mut result = CmdResult::default();
    if text.trim().is_empty() {
        result.add_message(CmdMessage::success("Additional considerations cleared."));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Additional considerations saved ({}/{} characters).",
            text.chars().count(),
            CONSIDERATIONS_MAX_LEN
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn stores_text_verbatim() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "  Low sodium\nEats slowly ").unwrap();
        assert_eq!(
            store.preferences().additional_considerations,
            "  Low sodium\nEats slowly "
        );
        assert_eq!(
            result.messages[0].content,
            "Additional considerations saved (25/500 characters)."
        );
    }

    #[test]
    fn blank_text_clears() {
        let mut store = InMemoryStore::new();
        run(&mut store, "Soft foods").unwrap();
        let result = run(&mut store, "").unwrap();
        assert_eq!(store.preferences().additional_considerations, "");
        assert_eq!(result.messages[0].content, "Additional considerations cleared.");
    }
}
