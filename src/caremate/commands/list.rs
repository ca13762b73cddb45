use crate::commands::{CmdResult, ListedEntry, ListedGroup};
use crate::error::Result;
use crate::grouping::{group_foods_by_category, search_foods};
use crate::model::{AllergyKind, FoodEntry, ListKind};
use crate::store::DataStore;

/// Lists the requested food lists, optionally grouped by category and filtered by a
/// search query. Positions always refer to the unfiltered list so they can be passed
/// straight to `edit` and `delete`. Buckets left empty by the search are dropped.
pub fn run<S: DataStore>(
    store: &S,
    lists: &[ListKind],
    group: bool,
    query: Option<&str>,
) -> Result<CmdResult> {
    let prefs = store.preferences();
    let query = query.unwrap_or("");
    let mut groups = Vec::new();

    for list in lists {
        match list {
            ListKind::Favorites => {
                groups.extend(listed(*list, &prefs.favorite_foods, group, query, |_| None))
            }
            ListKind::Dislikes => {
                groups.extend(listed(*list, &prefs.disliked_foods, group, query, |_| None))
            }
            ListKind::Allergies => groups.extend(listed(
                *list,
                &prefs.allergies_intolerances,
                group,
                query,
                |a| Some(a.kind),
            )),
        }
    }

    Ok(CmdResult::default().with_listed(groups))
}

fn listed<T: FoodEntry>(
    list: ListKind,
    items: &[T],
    group: bool,
    query: &str,
    kind: impl Fn(&T) -> Option<AllergyKind>,
) -> Vec<ListedGroup> {
    let matched: Vec<&str> = search_foods(items, query).iter().map(|e| e.id()).collect();
    let position_of = |id: &str| items.iter().position(|e| e.id() == id).map_or(0, |i| i + 1);

    group_foods_by_category(items, group)
        .into_iter()
        .filter_map(|g| {
            let entries: Vec<ListedEntry> = g
                .items
                .iter()
                .filter(|e| matched.contains(&e.id()))
                .map(|e| {
                    let mut row = ListedEntry::from_entry(position_of(e.id()), *e);
                    row.kind = kind(*e);
                    row
                })
                .collect();
            (!entries.is_empty()).then_some(ListedGroup {
                list,
                key: g.key,
                entries,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AllergySeverity, DislikeSeverity, FoodCategory};
    use crate::store::memory::fixtures::StoreFixture;

    fn fixture() -> StoreFixture {
        StoreFixture::new()
            .with_favorite("Oatmeal", FoodCategory::Breakfast, "with honey")
            .with_favorites(&["Soup"])
            .with_favorite("Toast", FoodCategory::Breakfast, "buttered")
            .with_dislike("Liver", DislikeSeverity::Absolute)
            .with_allergy("Peanuts", AllergySeverity::Severe, AllergyKind::Allergy)
    }

    #[test]
    fn ungrouped_listing_keeps_insertion_order() {
        let store = fixture().store;
        let result = run(&store, &[ListKind::Favorites], false, None).unwrap();
        assert_eq!(result.listed.len(), 1);
        let names: Vec<_> = result.listed[0]
            .entries
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["Oatmeal", "Soup", "Toast"]);
    }

    #[test]
    fn grouped_listing_keeps_original_positions() {
        let store = fixture().store;
        let result = run(&store, &[ListKind::Favorites], true, None).unwrap();
        let keys: Vec<_> = result.listed.iter().map(|g| g.key).collect();
        assert_eq!(keys, vec!["breakfast", "other"]);
        let positions: Vec<_> = result.listed[0].entries.iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![1, 3]);
    }

    #[test]
    fn search_drops_empty_buckets() {
        let store = fixture().store;
        let result = run(&store, &ListKind::ALL, true, Some("HONEY")).unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].entries[0].name, "Oatmeal");
    }

    #[test]
    fn allergy_rows_carry_kind_and_severity() {
        let store = fixture().store;
        let result = run(&store, &[ListKind::Allergies], false, None).unwrap();
        let row = &result.listed[0].entries[0];
        assert_eq!(row.kind, Some(AllergyKind::Allergy));
        assert_eq!(row.severity.map(|s| s.token()), Some("severe"));
    }

    #[test]
    fn empty_lists_produce_no_groups() {
        let store = StoreFixture::new().store;
        let result = run(&store, &ListKind::ALL, true, None).unwrap();
        assert!(result.listed.is_empty());
    }
}
