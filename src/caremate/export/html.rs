//! Standalone HTML guide rendered through a minijinja template.
//!
//! The template is registered as `guide.html`, which turns on minijinja's HTML
//! auto-escaping: every user-entered string (names, notes, considerations) is
//! escaped before it reaches the document. Line breaks in the additional
//! considerations are split here and rejoined with `<br>` by the template, so only
//! the markup we write is ever emitted unescaped.

use super::{
    format_long_date, BRAND, EMPTY_ALLERGIES, EMPTY_DISLIKES, EMPTY_FAVORITES, SAFETY_REMINDERS,
};
use crate::error::Result;
use crate::model::{FoodCategory, FoodEntry, MealPreferences, Severity};
use crate::severity::format_severity_label;
use chrono::NaiveDate;
use minijinja::{context, Environment};
use serde::Serialize;

const TEMPLATE_NAME: &str = "guide.html";
const TEMPLATE: &str = include_str!("templates/guide.html");

#[derive(Debug, Serialize)]
struct SectionView {
    icon: &'static str,
    title: &'static str,
    empty: &'static str,
    items: Vec<ItemView>,
}

#[derive(Debug, Serialize)]
struct ItemView {
    name: String,
    badge: Option<BadgeView>,
    category: Option<&'static str>,
    notes: Option<String>,
}

#[derive(Debug, Serialize)]
struct BadgeView {
    token: &'static str,
    tier: &'static str,
    label: String,
}

fn item_view<T: FoodEntry>(entry: &T, badge: Option<BadgeView>) -> ItemView {
    ItemView {
        name: entry.name().to_string(),
        badge,
        category: entry
            .category()
            .filter(|c| *c != FoodCategory::Other)
            .map(|c| c.as_str()),
        notes: entry.notes().map(str::to_string),
    }
}

/// Dislike badges spell the severity out; allergy badges keep the hyphenated token
/// and append the kind.
fn badge_for(severity: Severity, suffix: Option<&str>) -> BadgeView {
    let label = match suffix {
        Some(suffix) => format!(
            "{} {}",
            severity.token().to_uppercase(),
            suffix.to_uppercase()
        ),
        None => format_severity_label(severity.token()).to_uppercase(),
    };
    BadgeView {
        token: severity.token(),
        tier: severity.color().as_str(),
        label,
    }
}

fn sections(prefs: &MealPreferences) -> Vec<SectionView> {
    vec![
        SectionView {
            icon: "🍽️",
            title: "Favorite Foods",
            empty: EMPTY_FAVORITES,
            items: prefs
                .favorite_foods
                .iter()
                .map(|f| item_view(f, None))
                .collect(),
        },
        SectionView {
            icon: "⚠️",
            title: "Foods to Avoid",
            empty: EMPTY_DISLIKES,
            items: prefs
                .disliked_foods
                .iter()
                .map(|d| item_view(d, d.severity().map(|s| badge_for(s, None))))
                .collect(),
        },
        SectionView {
            icon: "🚨",
            title: "Medical Restrictions",
            empty: EMPTY_ALLERGIES,
            items: prefs
                .allergies_intolerances
                .iter()
                .map(|a| {
                    let badge = a.severity().map(|s| badge_for(s, Some(a.kind.as_str())));
                    item_view(a, badge)
                })
                .collect(),
        },
    ]
}

/// Renders the complete guide as a self-contained HTML document.
pub fn styled_document(prefs: &MealPreferences, date: NaiveDate) -> Result<String> {
    let mut env = Environment::new();
    env.add_template(TEMPLATE_NAME, TEMPLATE)?;
    let tmpl = env.get_template(TEMPLATE_NAME)?;

    let considerations: Vec<&str> = if prefs.additional_considerations.trim().is_empty() {
        Vec::new()
    } else {
        prefs.additional_considerations.lines().collect()
    };

    let html = tmpl.render(context! {
        brand => BRAND,
        generated => format_long_date(date),
        sections => sections(prefs),
        considerations => considerations,
        reminders => SAFETY_REMINDERS,
    })?;
    Ok(html)
}
