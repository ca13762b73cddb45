//! # Session Store
//!
//! Holds the one [`MealPreferences`] aggregate of a session behind the [`DataStore`]
//! trait, so commands never touch a global and tests can swap in fixtures.
//!
//! Mutations never edit the stored aggregate in place. A command clones the current
//! aggregate, changes the clone, and hands the result to [`DataStore::replace`]. A
//! failed command therefore leaves the stored state exactly as it was.
//!
//! There is no persistence: the only implementation, [`memory::InMemoryStore`],
//! lives as long as the session does.

use crate::error::Result;
use crate::model::MealPreferences;

pub mod memory;

pub trait DataStore {
    /// Current aggregate.
    fn preferences(&self) -> &MealPreferences;

    /// Replaces the whole aggregate.
    fn replace(&mut self, prefs: MealPreferences) -> Result<()>;
}
