//! Category grouping and free-text search over food lists.
//!
//! Both work on any [`FoodEntry`], so favorites, dislikes and allergies share the
//! same code paths. Neither reorders records: grouping is a stable partition and
//! search keeps input order.

use crate::model::FoodEntry;

/// Bucket key used for records without a category.
pub const UNCATEGORIZED_KEY: &str = "other";
/// Bucket key used when grouping is switched off.
pub const ALL_KEY: &str = "all";

/// One bucket of a grouped list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodGroup<'a, T> {
    pub key: &'static str,
    pub items: Vec<&'a T>,
}

/// Partitions records into buckets keyed by category.
///
/// Buckets appear in the order their first record appears in `items`. Records
/// without a category land in the `"other"` bucket, together with records
/// explicitly categorized as other. With `enabled == false` the whole list is a
/// single `"all"` bucket.
pub fn group_foods_by_category<T: FoodEntry>(items: &[T], enabled: bool) -> Vec<FoodGroup<'_, T>> {
    if !enabled {
        return vec![FoodGroup {
            key: ALL_KEY,
            items: items.iter().collect(),
        }];
    }

    let mut groups: Vec<FoodGroup<'_, T>> = Vec::new();
    for item in items {
        let key = item
            .category()
            .map(|c| c.as_str())
            .unwrap_or(UNCATEGORIZED_KEY);
        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.items.push(item),
            None => groups.push(FoodGroup {
                key,
                items: vec![item],
            }),
        }
    }
    groups
}

/// Case-insensitive substring search over name, category and notes.
///
/// A blank query matches everything.
pub fn search_foods<'a, T: FoodEntry>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return items.iter().collect();
    }

    items
        .iter()
        .filter(|item| {
            item.name().to_lowercase().contains(&term)
                || item
                    .category()
                    .is_some_and(|c| c.as_str().contains(&term))
                || item
                    .notes()
                    .is_some_and(|n| n.to_lowercase().contains(&term))
        })
        .collect()
}
