//! Severity display helpers.
//!
//! Dislike and allergy severities are different vocabularies but share one
//! four-tier color scale, so exports and the terminal show the same urgency
//! regardless of record kind.

use crate::model::Severity;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityColor {
    Yellow,
    Orange,
    Red,
    Gray,
}

impl SeverityColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityColor::Yellow => "yellow",
            SeverityColor::Orange => "orange",
            SeverityColor::Red => "red",
            SeverityColor::Gray => "gray",
        }
    }
}

impl fmt::Display for SeverityColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps any severity token onto the shared color scale. Unknown tokens are gray.
pub fn severity_color(token: &str) -> SeverityColor {
    match token {
        "mild" => SeverityColor::Yellow,
        "moderate" | "strong" => SeverityColor::Orange,
        "severe" | "absolute" | "life-threatening" => SeverityColor::Red,
        _ => SeverityColor::Gray,
    }
}

/// Title-cases each hyphen-separated segment: `life-threatening` -> `Life Threatening`.
pub fn format_severity_label(token: &str) -> String {
    token
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl Severity {
    pub fn color(&self) -> SeverityColor {
        severity_color(self.token())
    }

    pub fn label(&self) -> String {
        format_severity_label(self.token())
    }
}
