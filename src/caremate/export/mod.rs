//! # Export Formatters
//!
//! Turns a complete [`MealPreferences`] aggregate into shareable output:
//!
//! - [`text::formatted_text`]: bordered plain-text guide for email or messaging
//! - [`html::styled_document`]: standalone HTML document with embedded styling,
//!   suitable for download or printing
//! - [`quick_summary`]: three-line count summary for a quick clipboard copy
//! - [`json_dump`]: pretty JSON of the aggregate, a debug convenience only
//!
//! Every formatter is a pure function of the aggregate and the date passed in. There
//! is no clock access here: callers supply the date, so the same inputs always give
//! byte-identical output. Delivering the output (clipboard, file) is the job of an
//! [`crate::sink::ExportSink`], never of the formatters.

use crate::error::Result;
use crate::model::MealPreferences;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

pub mod html;
pub mod text;

pub const BRAND: &str = "Zenaris CareMate";

pub const SAFETY_REMINDERS: &[&str] = &[
    "Always verify ingredients for any documented allergies or intolerances",
    "Respect food preferences to ensure meal acceptance and enjoyment",
    "Consider texture and temperature preferences for optimal dining experience",
    "Keep this guide accessible to all caregivers and meal preparers",
    "Update this information as preferences or medical needs change",
];

pub const EMPTY_FAVORITES: &str = "No specific favorite foods documented.";
pub const EMPTY_DISLIKES: &str = "No specific food dislikes documented.";
pub const EMPTY_ALLERGIES: &str = "No known allergies or intolerances documented.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Text,
    Html,
    Summary,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Text => "text",
            ExportFormat::Html => "html",
            ExportFormat::Summary => "summary",
            ExportFormat::Json => "json",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text | ExportFormat::Summary => "txt",
            ExportFormat::Html => "html",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "html" | "document" | "pdf" => Ok(ExportFormat::Html),
            "summary" => Ok(ExportFormat::Summary),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!(
                "Unknown export format: {} (expected text, html, summary or json)",
                s
            )),
        }
    }
}

/// Renders the aggregate in the requested format.
pub fn render(format: ExportFormat, prefs: &MealPreferences, date: NaiveDate) -> Result<String> {
    match format {
        ExportFormat::Text => Ok(text::formatted_text(prefs, date)),
        ExportFormat::Html => html::styled_document(prefs, date),
        ExportFormat::Summary => Ok(quick_summary(prefs)),
        ExportFormat::Json => json_dump(prefs),
    }
}

/// Short count-only summary for messaging apps.
pub fn quick_summary(prefs: &MealPreferences) -> String {
    format!(
        "Meal Preferences Summary:\n\
         • {} favorite foods\n\
         • {} foods to avoid\n\
         • {} medical restrictions\n\
         \n\
         Generated by {}",
        prefs.favorite_foods.len(),
        prefs.disliked_foods.len(),
        prefs.allergies_intolerances.len(),
        BRAND
    )
}

pub fn json_dump(prefs: &MealPreferences) -> Result<String> {
    Ok(serde_json::to_string_pretty(prefs)?)
}

/// Long US date, e.g. "October 18, 2026".
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// File name offered for a download, e.g. `meal-preferences-guide-2026-03-07.html`.
pub fn download_filename(format: ExportFormat, date: NaiveDate) -> String {
    format!(
        "meal-preferences-guide-{}.{}",
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{create_food_item, DislikeSeverity};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 7).unwrap()
    }

    #[test]
    fn formats_dates_without_padding() {
        assert_eq!(format_long_date(date()), "March 7, 2026");
        assert_eq!(
            download_filename(ExportFormat::Html, date()),
            "meal-preferences-guide-2026-03-07.html"
        );
        assert_eq!(
            download_filename(ExportFormat::Summary, date()),
            "meal-preferences-guide-2026-03-07.txt"
        );
    }

    #[test]
    fn summary_reports_counts_only() {
        let mut prefs = MealPreferences::new();
        prefs.favorite_foods.push(create_food_item("Soup", None, None));
        prefs.favorite_foods.push(create_food_item("Tea", None, None));
        prefs
            .disliked_foods
            .push(crate::model::create_disliked_food(
                "Liver",
                DislikeSeverity::Absolute,
                None,
                None,
            ));

        assert_eq!(
            quick_summary(&prefs),
            "Meal Preferences Summary:\n• 2 favorite foods\n• 1 foods to avoid\n• 0 medical restrictions\n\nGenerated by Zenaris CareMate"
        );
    }

    #[test]
    fn json_dump_is_pretty() {
        let prefs = MealPreferences::new();
        let json = json_dump(&prefs).unwrap();
        assert!(json.contains("\n  \"favoriteFoods\": []"));
    }

    #[test]
    fn parses_format_names() {
        assert_eq!("HTML".parse::<ExportFormat>(), Ok(ExportFormat::Html));
        assert_eq!("txt".parse::<ExportFormat>(), Ok(ExportFormat::Text));
        assert!("csv".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn render_dispatches_every_format() {
        let prefs = MealPreferences::new();
        for format in [
            ExportFormat::Text,
            ExportFormat::Html,
            ExportFormat::Summary,
            ExportFormat::Json,
        ] {
            let out = render(format, &prefs, date()).unwrap();
            assert!(!out.is_empty(), "{} export was empty", format);
        }
    }
}
