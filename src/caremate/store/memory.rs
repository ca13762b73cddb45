use super::DataStore;
use crate::error::Result;
use crate::model::MealPreferences;
use tracing::trace;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    prefs: MealPreferences,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn preferences(&self) -> &MealPreferences {
        &self.prefs
    }

    fn replace(&mut self, prefs: MealPreferences) -> Result<()> {
        trace!(items = prefs.total_items(), "replacing session aggregate");
        self.prefs = prefs;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{
        create_allergy_intolerance, create_disliked_food, create_food_item, AllergyKind,
        AllergySeverity, DislikeSeverity, FoodCategory,
    };

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        fn edit(mut self, f: impl FnOnce(&mut MealPreferences)) -> Self {
            let mut prefs = self.store.preferences().clone();
            f(&mut prefs);
            self.store.replace(prefs).unwrap();
            self
        }

        pub fn with_favorites(self, names: &[&str]) -> Self {
            self.edit(|p| {
                for name in names {
                    p.favorite_foods.push(create_food_item(name, None, None));
                }
            })
        }

        pub fn with_favorite(self, name: &str, category: FoodCategory, notes: &str) -> Self {
            self.edit(|p| {
                p.favorite_foods
                    .push(create_food_item(name, Some(category), Some(notes)))
            })
        }

        pub fn with_dislike(self, name: &str, severity: DislikeSeverity) -> Self {
            self.edit(|p| {
                p.disliked_foods
                    .push(create_disliked_food(name, severity, None, None))
            })
        }

        pub fn with_allergy(self, name: &str, severity: AllergySeverity, kind: AllergyKind) -> Self {
            self.edit(|p| {
                p.allergies_intolerances
                    .push(create_allergy_intolerance(name, severity, kind, None, None))
            })
        }

        pub fn with_considerations(self, text: &str) -> Self {
            self.edit(|p| p.additional_considerations = text.to_string())
        }
    }
}
