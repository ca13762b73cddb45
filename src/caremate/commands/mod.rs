//! Collection mutations and queries over the session store.
//!
//! Each command module exposes a `run` function taking the store (plus its
//! arguments) and returning a [`CmdResult`]. Commands never print; they describe what
//! happened through [`CmdMessage`]s and structured fields the CLI renders.

use crate::model::{
    AllergyKind, FoodCategory, FoodEntry, ListKind, PreferenceEntry, Severity,
};
use std::fmt;
use std::str::FromStr;

pub mod add;
pub mod considerations;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod quick_add;
pub mod reset;
pub mod suggest;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<PreferenceEntry>,
    pub listed: Vec<ListedGroup>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, entries: Vec<PreferenceEntry>) -> Self {
        self.affected = entries;
        self
    }

    pub fn with_listed(mut self, groups: Vec<ListedGroup>) -> Self {
        self.listed = groups;
        self
    }
}

/// How the user points at a record: its 1-based position in the list or its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemRef {
    Position(usize),
    Id(String),
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemRef::Position(n) => write!(f, "#{}", n),
            ItemRef::Id(id) => f.write_str(id),
        }
    }
}

impl FromStr for ItemRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Missing item reference".to_string());
        }
        let digits = s.strip_prefix('#').unwrap_or(s);
        match digits.parse::<usize>() {
            Ok(n) => Ok(ItemRef::Position(n)),
            Err(_) => Ok(ItemRef::Id(s.to_string())),
        }
    }
}

/// Owned display row of a listed record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    pub position: usize,
    pub id: String,
    pub name: String,
    pub category: Option<FoodCategory>,
    pub notes: Option<String>,
    pub severity: Option<Severity>,
    pub kind: Option<AllergyKind>,
}

impl ListedEntry {
    pub fn from_entry<T: FoodEntry>(position: usize, entry: &T) -> Self {
        Self {
            position,
            id: entry.id().to_string(),
            name: entry.name().to_string(),
            category: entry.category(),
            notes: entry.notes().map(str::to_string),
            severity: entry.severity(),
            kind: None,
        }
    }
}

/// One bucket of listed records from one list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedGroup {
    pub list: ListKind,
    pub key: &'static str,
    pub entries: Vec<ListedEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_item_refs() {
        assert_eq!("2".parse::<ItemRef>(), Ok(ItemRef::Position(2)));
        assert_eq!("#3".parse::<ItemRef>(), Ok(ItemRef::Position(3)));
        assert_eq!(
            "lx2abc9".parse::<ItemRef>(),
            Ok(ItemRef::Id("lx2abc9".into()))
        );
        assert!("  ".parse::<ItemRef>().is_err());
    }
}
