//! Meal planning assistant: fixed meal ideas per meal time and tips derived from the
//! current preferences.

use crate::model::{DislikeSeverity, MealPreferences};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MealTime {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealTime {
    pub const ALL: [MealTime; 4] = [
        MealTime::Breakfast,
        MealTime::Lunch,
        MealTime::Dinner,
        MealTime::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealTime::Breakfast => "breakfast",
            MealTime::Lunch => "lunch",
            MealTime::Dinner => "dinner",
            MealTime::Snack => "snack",
        }
    }
}

impl fmt::Display for MealTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealTime::Breakfast),
            "lunch" => Ok(MealTime::Lunch),
            "dinner" => Ok(MealTime::Dinner),
            "snack" | "snacks" => Ok(MealTime::Snack),
            _ => Err(format!(
                "Unknown meal time: {} (expected breakfast, lunch, dinner or snack)",
                s
            )),
        }
    }
}

pub fn meal_ideas(meal: MealTime) -> &'static [&'static str] {
    match meal {
        MealTime::Breakfast => &[
            "Oatmeal with soft fruits",
            "Scrambled eggs (soft)",
            "Toast with butter",
            "Yogurt with honey",
            "Warm milk with cereal",
        ],
        MealTime::Lunch => &[
            "Chicken soup with soft vegetables",
            "Mashed potatoes with gravy",
            "Soft pasta with mild sauce",
            "Tender fish with rice",
            "Vegetable puree",
        ],
        MealTime::Dinner => &[
            "Slow-cooked stew",
            "Baked chicken (tender)",
            "Soft rice dishes",
            "Steamed vegetables",
            "Comfort casseroles",
        ],
        MealTime::Snack => &[
            "Soft fruits",
            "Pudding or custard",
            "Warm tea with biscuits",
            "Smooth ice cream",
            "Applesauce",
        ],
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tip {
    pub icon: &'static str,
    pub title: &'static str,
    pub content: String,
}

/// Tips that apply to the current preferences. Never empty: when nothing specific
/// applies a single general tip is returned.
pub fn personalized_tips(prefs: &MealPreferences) -> Vec<Tip> {
    let mut tips = Vec::new();

    if !prefs.allergies_intolerances.is_empty() {
        let names: Vec<&str> = prefs
            .allergies_intolerances
            .iter()
            .map(|a| a.item.name.as_str())
            .collect();
        tips.push(Tip {
            icon: "🚨",
            title: "Safety First",
            content: format!(
                "Always check ingredients for {} before preparing meals.",
                names.join(", ")
            ),
        });
    }

    if prefs
        .disliked_foods
        .iter()
        .any(|d| d.severity == DislikeSeverity::Absolute)
    {
        tips.push(Tip {
            icon: "⚠️",
            title: "Avoid Completely",
            content: "Some foods are marked as \"absolutely won't eat\" - respect these preferences for better meal acceptance.".to_string(),
        });
    }

    if prefs.additional_considerations.to_lowercase().contains("soft") {
        tips.push(Tip {
            icon: "🥄",
            title: "Texture Matters",
            content: "Focus on soft, easy-to-chew foods. Consider pureeing or mashing when needed."
                .to_string(),
        });
    }

    if tips.is_empty() {
        tips.push(Tip {
            icon: "💡",
            title: "General Tip",
            content: "Keep meals colorful, nutritious, and at comfortable temperatures for the best dining experience.".to_string(),
        });
    }

    tips
}

/// Names of up to the first three favorites, shown as reminders while planning.
pub fn favorite_highlights(prefs: &MealPreferences) -> Vec<&str> {
    prefs
        .favorite_foods
        .iter()
        .take(3)
        .map(|f| f.name.as_str())
        .collect()
}
