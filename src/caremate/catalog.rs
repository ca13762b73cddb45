//! Static reference data: category labels, severity metadata, the common-allergy
//! quick-add catalog, and suggestion lists. None of this is user data.

use crate::model::{AllergySeverity, DislikeSeverity, FoodCategory, ListKind};
use crate::severity::SeverityColor;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommonAllergy {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
}

pub const COMMON_ALLERGIES: &[CommonAllergy] = &[
    CommonAllergy {
        id: "nuts",
        name: "Tree Nuts",
        category: "nuts",
    },
    CommonAllergy {
        id: "peanuts",
        name: "Peanuts",
        category: "nuts",
    },
    CommonAllergy {
        id: "dairy",
        name: "Dairy/Milk",
        category: "dairy",
    },
    CommonAllergy {
        id: "eggs",
        name: "Eggs",
        category: "protein",
    },
    CommonAllergy {
        id: "fish",
        name: "Fish",
        category: "protein",
    },
    CommonAllergy {
        id: "shellfish",
        name: "Shellfish",
        category: "protein",
    },
    CommonAllergy {
        id: "soy",
        name: "Soy",
        category: "protein",
    },
    CommonAllergy {
        id: "wheat",
        name: "Wheat/Gluten",
        category: "grains",
    },
    CommonAllergy {
        id: "sesame",
        name: "Sesame",
        category: "seeds",
    },
    CommonAllergy {
        id: "sulfites",
        name: "Sulfites",
        category: "additives",
    },
    CommonAllergy {
        id: "lactose",
        name: "Lactose",
        category: "dairy",
    },
    CommonAllergy {
        id: "fructose",
        name: "Fructose",
        category: "sugars",
    },
];

pub fn common_allergy(id: &str) -> Option<&'static CommonAllergy> {
    let wanted = id.trim().to_lowercase();
    COMMON_ALLERGIES.iter().find(|c| c.id == wanted)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityInfo {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub color: SeverityColor,
}

pub fn dislike_severity_info(severity: DislikeSeverity) -> SeverityInfo {
    let (label, description) = match severity {
        DislikeSeverity::Mild => ("Mild Dislike", "Will eat if necessary"),
        DislikeSeverity::Strong => ("Strong Dislike", "Prefers to avoid"),
        DislikeSeverity::Absolute => ("Absolutely Won't Eat", "Refuses completely"),
    };
    SeverityInfo {
        value: severity.as_str(),
        label,
        description,
        color: crate::severity::severity_color(severity.as_str()),
    }
}

pub fn allergy_severity_info(severity: AllergySeverity) -> SeverityInfo {
    let (label, description) = match severity {
        AllergySeverity::Mild => ("Mild", "Minor discomfort"),
        AllergySeverity::Moderate => ("Moderate", "Noticeable symptoms"),
        AllergySeverity::Severe => ("Severe", "Serious reaction"),
        AllergySeverity::LifeThreatening => {
            ("Life-Threatening", "Emergency medical attention required")
        }
    };
    SeverityInfo {
        value: severity.as_str(),
        label,
        description,
        color: crate::severity::severity_color(severity.as_str()),
    }
}

pub fn category_labels() -> Vec<(&'static str, &'static str)> {
    FoodCategory::ALL
        .iter()
        .map(|c| (c.as_str(), c.label()))
        .collect()
}

/// A titled group of one-click suggestions and the list they are added to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuggestionGroup {
    pub title: &'static str,
    pub target: ListKind,
    pub items: &'static [&'static str],
}

pub const SUGGESTIONS: &[SuggestionGroup] = &[
    SuggestionGroup {
        title: "Comfort Foods",
        target: ListKind::Favorites,
        items: &["Chicken soup", "Mashed potatoes", "Apple pie", "Hot tea", "Oatmeal"],
    },
    SuggestionGroup {
        title: "Cultural Favorites",
        target: ListKind::Favorites,
        items: &["Rice dishes", "Pasta", "Bread", "Traditional stews", "Herbal teas"],
    },
    SuggestionGroup {
        title: "Texture Friendly",
        target: ListKind::Favorites,
        items: &["Soft foods", "Pureed vegetables", "Smooth yogurt", "Tender meats"],
    },
    SuggestionGroup {
        title: "Common Dislikes",
        target: ListKind::Dislikes,
        items: &["Spicy foods", "Raw vegetables", "Tough meats", "Very cold foods"],
    },
    SuggestionGroup {
        title: "Common Allergies",
        target: ListKind::Allergies,
        items: &["Nuts", "Dairy", "Gluten", "Shellfish", "Eggs"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids: Vec<_> = COMMON_ALLERGIES.iter().map(|c| c.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), COMMON_ALLERGIES.len());
    }

    #[test]
    fn looks_up_catalog_entries() {
        assert_eq!(common_allergy("Sesame").map(|c| c.name), Some("Sesame"));
        assert_eq!(common_allergy("wheat").map(|c| c.name), Some("Wheat/Gluten"));
        assert!(common_allergy("kiwi").is_none());
    }

    #[test]
    fn severity_metadata_matches_color_scale() {
        let info = allergy_severity_info(AllergySeverity::LifeThreatening);
        assert_eq!(info.label, "Life-Threatening");
        assert_eq!(info.color, SeverityColor::Red);
        assert_eq!(
            dislike_severity_info(DislikeSeverity::Strong).color,
            SeverityColor::Orange
        );
    }

    #[test]
    fn every_category_has_a_label() {
        let labels = category_labels();
        assert_eq!(labels.len(), 6);
        assert_eq!(labels[0], ("breakfast", "Breakfast"));
    }
}
