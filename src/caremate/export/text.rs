//! Bordered plain-text guide.

use super::{
    format_long_date, EMPTY_ALLERGIES, EMPTY_DISLIKES, EMPTY_FAVORITES, SAFETY_REMINDERS,
};
use crate::model::{AllergyIntolerance, DislikedFood, FoodCategory, FoodEntry, MealPreferences};
use chrono::NaiveDate;

const BOX_WIDTH: usize = 62;
const RULE_WIDTH: usize = 63;

const INTRO: &str = "This comprehensive meal preference guide has been carefully compiled to\n\
                     ensure safe and enjoyable dining experiences for your loved one.";

/// Footer paragraphs, separated by a blank line.
const FOOTER: &[&str] = &[
    "This document was generated by Zenaris CareMate Interface\n\
     Designed with empathy for caregivers and elderly individuals",
    "For questions or updates, please consult with healthcare providers\n\
     and update this preference guide as needed.",
];

/// Renders the full guide as plain text.
///
/// Sections always appear in the order favorites, dislikes, allergies, each with its
/// item count and a fixed empty-state line. The additional considerations block is
/// only present when the text is non-blank.
pub fn formatted_text(prefs: &MealPreferences, date: NaiveDate) -> String {
    let rule = "═".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&boxed(&["ZENARIS CAREMATE", "Meal Preferences Guide"]));
    out.push_str(&format!("\nGenerated on: {}\n\n", format_long_date(date)));
    out.push_str(INTRO);
    out.push_str("\n\n");
    out.push_str(&rule);
    out.push('\n');

    push_section(
        &mut out,
        &rule,
        "🍽️ FAVORITE FOODS",
        &prefs.favorite_foods,
        EMPTY_FAVORITES,
        |_| None,
    );
    push_section(
        &mut out,
        &rule,
        "⚠️ FOODS TO AVOID",
        &prefs.disliked_foods,
        EMPTY_DISLIKES,
        |d: &DislikedFood| Some(format!("{} DISLIKE", d.severity.as_str().to_uppercase())),
    );
    push_section(
        &mut out,
        &rule,
        "🚨 MEDICAL RESTRICTIONS",
        &prefs.allergies_intolerances,
        EMPTY_ALLERGIES,
        |a: &AllergyIntolerance| {
            Some(format!(
                "{} {}",
                a.severity.as_str().to_uppercase(),
                a.kind.as_str().to_uppercase()
            ))
        },
    );

    if !prefs.additional_considerations.trim().is_empty() {
        out.push_str(&format!("\n📝 ADDITIONAL CONSIDERATIONS\n{}\n", rule));
        out.push_str(&prefs.additional_considerations);
        out.push('\n');
    }

    out.push_str(&format!("\n{}\nIMPORTANT SAFETY REMINDERS:\n{}\n\n", rule, rule));
    for reminder in SAFETY_REMINDERS {
        out.push_str(&format!("• {}\n", reminder));
    }
    out.push_str(&format!("\n{}\n\n", rule));
    out.push_str(&FOOTER.join("\n\n"));
    out.push_str("\n\n");
    out.push_str(&rule);
    out
}

fn push_section<T: FoodEntry>(
    out: &mut String,
    rule: &str,
    heading: &str,
    items: &[T],
    empty: &str,
    badge: impl Fn(&T) -> Option<String>,
) {
    out.push_str(&format!("\n{} ({} items)\n{}\n", heading, items.len(), rule));
    if items.is_empty() {
        out.push_str(empty);
        out.push('\n');
        return;
    }
    for (i, item) in items.iter().enumerate() {
        out.push_str(&format!("{}. {}", i + 1, item.name()));
        if let Some(tag) = badge(item) {
            out.push_str(&format!(" [{}]", tag));
        }
        if let Some(category) = item.category().filter(|c| *c != FoodCategory::Other) {
            out.push_str(&format!(" ({})", category.as_str()));
        }
        out.push('\n');
        if let Some(notes) = item.notes() {
            out.push_str(&format!("   Notes: {}\n", notes));
        }
    }
}

/// Draws a double-line box with each line centered.
fn boxed(lines: &[&str]) -> String {
    let mut out = format!("╔{}╗\n", "═".repeat(BOX_WIDTH));
    for line in lines {
        let width = line.chars().count();
        let left = BOX_WIDTH.saturating_sub(width) / 2;
        let right = BOX_WIDTH.saturating_sub(width + left);
        out.push_str(&format!("║{}{}{}║\n", " ".repeat(left), line, " ".repeat(right)));
    }
    out.push_str(&format!("╚{}╝\n", "═".repeat(BOX_WIDTH)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        create_allergy_intolerance, create_disliked_food, create_food_item, AllergyKind,
        AllergySeverity, DislikeSeverity,
    };

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn populated() -> MealPreferences {
        let mut prefs = MealPreferences::new();
        prefs.favorite_foods.push(create_food_item(
            "Chicken soup",
            Some(FoodCategory::Lunch),
            Some("Warm, not hot"),
        ));
        prefs
            .favorite_foods
            .push(create_food_item("Cake", Some(FoodCategory::Other), None));
        prefs.disliked_foods.push(create_disliked_food(
            "Liver",
            DislikeSeverity::Absolute,
            None,
            None,
        ));
        prefs.allergies_intolerances.push(create_allergy_intolerance(
            "Peanuts",
            AllergySeverity::LifeThreatening,
            AllergyKind::Allergy,
            None,
            None,
        ));
        prefs
    }

    #[test]
    fn empty_preferences_show_every_empty_state() {
        let text = formatted_text(&MealPreferences::new(), date());
        assert!(text.starts_with("╔"));
        assert!(text.contains("Generated on: October 18, 2026"));
        assert!(text.contains("🍽️ FAVORITE FOODS (0 items)"));
        assert!(text.contains(EMPTY_FAVORITES));
        assert!(text.contains(EMPTY_DISLIKES));
        assert!(text.contains(EMPTY_ALLERGIES));
        assert!(!text.contains("ADDITIONAL CONSIDERATIONS"));
        assert!(text.contains("IMPORTANT SAFETY REMINDERS:"));
    }

    #[test]
    fn items_carry_category_notes_and_badges() {
        let text = formatted_text(&populated(), date());
        assert!(text.contains("1. Chicken soup (lunch)\n   Notes: Warm, not hot"));
        assert!(text.contains("2. Cake\n"));
        assert!(text.contains("1. Liver [ABSOLUTE DISLIKE]"));
        assert!(text.contains("1. Peanuts [LIFE-THREATENING ALLERGY]"));
    }

    #[test]
    fn badge_comes_before_category() {
        let mut prefs = MealPreferences::new();
        prefs.disliked_foods.push(create_disliked_food(
            "Liver",
            DislikeSeverity::Absolute,
            Some(FoodCategory::Dinner),
            Some("Texture"),
        ));
        prefs.allergies_intolerances.push(create_allergy_intolerance(
            "Milk",
            AllergySeverity::Mild,
            AllergyKind::Intolerance,
            Some(FoodCategory::Beverages),
            None,
        ));
        let text = formatted_text(&prefs, date());
        assert!(text.contains("1. Liver [ABSOLUTE DISLIKE] (dinner)\n   Notes: Texture"));
        assert!(text.contains("1. Milk [MILD INTOLERANCE] (beverages)"));
    }

    #[test]
    fn safety_block_and_footer_are_spaced_out() {
        let rule = "═".repeat(RULE_WIDTH);
        let text = formatted_text(&MealPreferences::new(), date());
        assert!(text.contains(&format!(
            "{}\nIMPORTANT SAFETY REMINDERS:\n{}\n\n• ",
            rule, rule
        )));
        assert!(text.contains(&format!(
            "needs change\n\n{}\n\nThis document was generated",
            rule
        )));
        assert!(text.contains("elderly individuals\n\nFor questions or updates"));
        assert!(text.ends_with(&format!("as needed.\n\n{}", rule)));
    }

    #[test]
    fn sections_follow_fixed_order() {
        let text = formatted_text(&populated(), date());
        let fav = text.find("FAVORITE FOODS").unwrap();
        let avoid = text.find("FOODS TO AVOID").unwrap();
        let medical = text.find("MEDICAL RESTRICTIONS").unwrap();
        assert!(fav < avoid && avoid < medical);
    }

    #[test]
    fn considerations_appear_only_when_non_blank() {
        let mut prefs = populated();
        prefs.additional_considerations = "   ".into();
        assert!(!formatted_text(&prefs, date()).contains("ADDITIONAL CONSIDERATIONS"));

        prefs.additional_considerations = "Eats slowly".into();
        let text = formatted_text(&prefs, date());
        assert!(text.contains("📝 ADDITIONAL CONSIDERATIONS"));
        assert!(text.contains("Eats slowly"));
    }

    #[test]
    fn output_is_deterministic() {
        let prefs = populated();
        assert_eq!(formatted_text(&prefs, date()), formatted_text(&prefs, date()));
    }

    #[test]
    fn box_lines_have_equal_width() {
        let header = boxed(&["ZENARIS CAREMATE", "Meal Preferences Guide"]);
        let widths: Vec<usize> = header.lines().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|w| *w == BOX_WIDTH + 2));
    }
}
