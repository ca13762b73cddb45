//! # Rendering Module
//!
//! Turns command results and session state into terminal text through the templates
//! in [`super::templates`]. Layout calculations (truncation, padding) stay in Rust
//! because they need Unicode-aware widths; templates only arrange lines and pick
//! styles by name.
//!
//! Every `render_*` function takes an explicit `use_color` flag so tests can compare
//! plain output.

use super::styles::{apply, names};
use super::templates::{LIST_TEMPLATE, STATUS_TEMPLATE, SUGGESTIONS_TEMPLATE, TIPS_TEMPLATE};
use caremate::catalog::{
    allergy_severity_info, dislike_severity_info, CommonAllergy, SuggestionGroup,
};
use caremate::commands::{CmdMessage, ListedEntry, ListedGroup, MessageLevel};
use caremate::error::Result;
use caremate::export::{EMPTY_ALLERGIES, EMPTY_DISLIKES, EMPTY_FAVORITES};
use caremate::grouping::ALL_KEY;
use caremate::model::{FoodCategory, ListKind, MealPreferences, Severity};
use caremate::planner::{MealTime, Tip};
use caremate::severity::SeverityColor;
use caremate::wizard::{Step, Wizard};
use colored::Colorize;
use minijinja::{Environment, Value};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const NAME_WIDTH: usize = 28;
pub const PROGRESS_WIDTH: usize = 24;
const CATALOG_ID_WIDTH: usize = 10;

fn environment(use_color: bool) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_filter("style", move |value: Value, name: String| -> String {
        if value.is_none() || value.is_undefined() {
            return String::new();
        }
        let text = value.to_string();
        if text.is_empty() {
            return text;
        }
        apply(&name, &text, use_color)
    });
    env
}

fn render_template<T: Serialize>(
    name: &'static str,
    source: &'static str,
    data: &T,
    use_color: bool,
) -> Result<String> {
    let mut env = environment(use_color);
    env.add_template(name, source)?;
    Ok(env.get_template(name)?.render(data)?)
}

// --- Listing ---

#[derive(Serialize)]
struct RowData {
    index: String,
    name: String,
    pad: String,
    badge: String,
    tier: &'static str,
    category: String,
    notes: Option<String>,
}

#[derive(Serialize)]
struct GroupData {
    label: Option<&'static str>,
    rows: Vec<RowData>,
}

#[derive(Serialize)]
struct SectionData {
    title: &'static str,
    count_label: String,
    empty: &'static str,
    groups: Vec<GroupData>,
}

#[derive(Serialize)]
struct ListData {
    sections: Vec<SectionData>,
}

fn empty_message(list: ListKind) -> &'static str {
    match list {
        ListKind::Favorites => EMPTY_FAVORITES,
        ListKind::Dislikes => EMPTY_DISLIKES,
        ListKind::Allergies => EMPTY_ALLERGIES,
    }
}

fn severity_badge(entry: &ListedEntry) -> (String, &'static str) {
    let label = match entry.severity {
        Some(Severity::Dislike(s)) => dislike_severity_info(s).label.to_string(),
        Some(Severity::Allergy(s)) => {
            let info = allergy_severity_info(s);
            match entry.kind {
                Some(kind) => format!("{} {}", info.label, kind.as_str()),
                None => info.label.to_string(),
            }
        }
        None => return (String::new(), names::MUTED),
    };
    let tier = match entry.severity.map(|s| s.color()) {
        Some(SeverityColor::Yellow) => names::YELLOW,
        Some(SeverityColor::Orange) => names::ORANGE,
        Some(SeverityColor::Red) => names::RED,
        _ => names::GRAY,
    };
    (format!(" [{}]", label), tier)
}

fn row_data(entry: &ListedEntry, show_category: bool) -> RowData {
    let name = truncate_to_width(&entry.name, NAME_WIDTH);
    let pad = " ".repeat(NAME_WIDTH.saturating_sub(name.width()));
    let (badge, tier) = severity_badge(entry);
    let category = match entry.category {
        Some(c) if show_category && c != FoodCategory::Other => format!(" ({})", c.label()),
        _ => String::new(),
    };
    RowData {
        index: format!("{:>2}.", entry.position),
        name,
        pad,
        badge,
        tier,
        category,
        notes: entry.notes.clone(),
    }
}

fn group_label(key: &str) -> Option<&'static str> {
    if key == ALL_KEY {
        return None;
    }
    key.parse::<FoodCategory>()
        .ok()
        .map(|c| c.label())
        .or(Some("Other"))
}

/// Renders the requested lists. Lists with nothing to show get their empty-state
/// line, or "No matches." while searching.
pub fn render_listing(
    lists: &[ListKind],
    groups: &[ListedGroup],
    prefs: &MealPreferences,
    searching: bool,
    use_color: bool,
) -> Result<String> {
    let sections = lists
        .iter()
        .map(|list| {
            let groups: Vec<GroupData> = groups
                .iter()
                .filter(|g| g.list == *list)
                .map(|g| {
                    let label = group_label(g.key);
                    GroupData {
                        label,
                        rows: g
                            .entries
                            .iter()
                            .map(|e| row_data(e, label.is_none()))
                            .collect(),
                    }
                })
                .collect();
            SectionData {
                title: list.title(),
                count_label: format!("({} items)", prefs.len_of(*list)),
                empty: if searching {
                    "No matches."
                } else {
                    empty_message(*list)
                },
                groups,
            }
        })
        .collect();

    render_template("list", LIST_TEMPLATE, &ListData { sections }, use_color)
}

// --- Wizard status ---

#[derive(Serialize)]
struct StepLine {
    marker: &'static str,
    title: &'static str,
    current: bool,
}

#[derive(Serialize)]
struct CountLine {
    title: &'static str,
    count: usize,
}

#[derive(Serialize)]
struct StatusData {
    step: StepHeader,
    progress: ProgressData,
    steps: Vec<StepLine>,
    counts: Vec<CountLine>,
    total: usize,
    highlights: String,
    hint: String,
}

#[derive(Serialize)]
struct StepHeader {
    title: &'static str,
    subtitle: &'static str,
    counter: String,
}

#[derive(Serialize)]
struct ProgressData {
    bar: String,
    label: String,
}

/// Usage hint for the current step.
pub fn step_hint(step: Step, quick_adds_available: usize) -> String {
    match step {
        Step::Welcome => "Type `next` to begin, or `help` for every command.".to_string(),
        Step::Favorites => {
            "add favorite <name> [--category C] [--notes N], or `suggest` for ideas".to_string()
        }
        Step::Dislikes => {
            "add dislike <name> [--severity mild|strong|absolute] [--category C] [--notes N]"
                .to_string()
        }
        Step::Allergies => format!(
            "add allergy <name> [--severity S] [--type allergy|intolerance], or quick-add <id> ({} common allergies available)",
            quick_adds_available
        ),
        Step::Notes => "notes <text> (up to 500 characters), `tips` for meal ideas".to_string(),
        Step::Done => "export text|html|summary|json [--copy] [--download]".to_string(),
    }
}

pub fn progress_bar(percent: u8) -> String {
    let filled = (PROGRESS_WIDTH * percent as usize + 50) / 100;
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(PROGRESS_WIDTH.saturating_sub(filled))
    )
}

pub fn render_status(
    wizard: &Wizard,
    prefs: &MealPreferences,
    highlights: &[&str],
    quick_adds_available: usize,
    use_color: bool,
) -> Result<String> {
    let current = wizard.current();
    let steps = Step::ALL
        .iter()
        .enumerate()
        .map(|(i, step)| StepLine {
            marker: if i < wizard.index() {
                "✓"
            } else if i == wizard.index() {
                "●"
            } else {
                "○"
            },
            title: step.title(),
            current: i == wizard.index(),
        })
        .collect();

    let data = StatusData {
        step: StepHeader {
            title: current.title(),
            subtitle: current.subtitle(),
            counter: format!("(step {} of {})", wizard.index() + 1, Step::ALL.len()),
        },
        progress: ProgressData {
            bar: progress_bar(wizard.progress_percent()),
            label: format!("{}% complete", wizard.progress_percent()),
        },
        steps,
        counts: ListKind::ALL
            .iter()
            .map(|l| CountLine {
                title: l.title(),
                count: prefs.len_of(*l),
            })
            .collect(),
        total: prefs.total_items(),
        highlights: highlights.join(", "),
        hint: step_hint(current, quick_adds_available),
    };

    render_template("status", STATUS_TEMPLATE, &data, use_color)
}

// --- Planner ---

#[derive(Serialize)]
struct TipsData<'a> {
    meal_label: String,
    ideas: &'a [&'a str],
    tips: &'a [Tip],
    highlights: String,
}

pub fn render_tips(
    meal: MealTime,
    ideas: &[&str],
    tips: &[Tip],
    highlights: &[&str],
    use_color: bool,
) -> Result<String> {
    let data = TipsData {
        meal_label: format!("({})", meal),
        ideas,
        tips,
        highlights: highlights.join(", "),
    };
    render_template("tips", TIPS_TEMPLATE, &data, use_color)
}

// --- Suggestions ---

#[derive(Serialize)]
struct SuggestionLine {
    title: &'static str,
    target_label: String,
    items: String,
}

#[derive(Serialize)]
struct CommonLine {
    id: &'static str,
    pad: String,
    name: &'static str,
}

#[derive(Serialize)]
struct SuggestionsData {
    groups: Vec<SuggestionLine>,
    common: Vec<CommonLine>,
}

pub fn render_suggestions(
    groups: &[SuggestionGroup],
    common: &[&CommonAllergy],
    use_color: bool,
) -> Result<String> {
    let data = SuggestionsData {
        groups: groups
            .iter()
            .map(|g| SuggestionLine {
                title: g.title,
                target_label: format!("(suggest <text> --to {})", g.target),
                items: g.items.join(", "),
            })
            .collect(),
        common: common
            .iter()
            .map(|c| CommonLine {
                id: c.id,
                pad: " ".repeat(CATALOG_ID_WIDTH.saturating_sub(c.id.width())),
                name: c.name,
            })
            .collect(),
    };
    render_template("suggestions", SUGGESTIONS_TEMPLATE, &data, use_color)
}

// --- Messages ---

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_error(message: impl std::fmt::Display) {
    eprintln!("{}", format!("Error: {}", message).red());
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use caremate::model::{AllergyKind, AllergySeverity, DislikeSeverity};

    fn entry(position: usize, name: &str) -> ListedEntry {
        ListedEntry {
            position,
            id: format!("id{}", position),
            name: name.to_string(),
            category: None,
            notes: None,
            severity: None,
            kind: None,
        }
    }

    #[test]
    fn truncates_by_display_width() {
        assert_eq!(truncate_to_width("Soup", 10), "Soup");
        assert_eq!(truncate_to_width("Chicken noodle soup", 8), "Chicken…");
        assert_eq!(truncate_to_width("寿司寿司寿司", 7), "寿司寿…");
    }

    #[test]
    fn empty_lists_show_empty_state() {
        let prefs = MealPreferences::new();
        let out = render_listing(&ListKind::ALL, &[], &prefs, false, false).unwrap();
        assert!(out.contains("Favorite Foods (0 items)"));
        assert!(out.contains(EMPTY_DISLIKES));
        assert!(out.contains(EMPTY_ALLERGIES));
    }

    #[test]
    fn rows_show_position_badge_and_notes() {
        let mut prefs = MealPreferences::new();
        prefs
            .disliked_foods
            .push(caremate::model::create_disliked_food(
                "Liver",
                DislikeSeverity::Absolute,
                None,
                Some("since childhood"),
            ));
        let mut row = entry(1, "Liver");
        row.severity = Some(Severity::Dislike(DislikeSeverity::Absolute));
        row.notes = Some("since childhood".into());
        let groups = vec![ListedGroup {
            list: ListKind::Dislikes,
            key: ALL_KEY,
            entries: vec![row],
        }];

        let out = render_listing(&[ListKind::Dislikes], &groups, &prefs, false, false).unwrap();
        assert!(out.contains(" 1. Liver"));
        assert!(out.contains("[Absolutely Won't Eat]"));
        assert!(out.contains("       since childhood"));
    }

    #[test]
    fn allergy_badge_includes_kind() {
        let mut row = entry(1, "Lactose");
        row.severity = Some(Severity::Allergy(AllergySeverity::Mild));
        row.kind = Some(AllergyKind::Intolerance);
        let (badge, tier) = severity_badge(&row);
        assert_eq!(badge, " [Mild intolerance]");
        assert_eq!(tier, names::YELLOW);
    }

    #[test]
    fn grouped_rows_get_category_headers() {
        let prefs = MealPreferences::new();
        let groups = vec![
            ListedGroup {
                list: ListKind::Favorites,
                key: "breakfast",
                entries: vec![entry(1, "Oatmeal")],
            },
            ListedGroup {
                list: ListKind::Favorites,
                key: "other",
                entries: vec![entry(2, "Tea")],
            },
        ];
        let out = render_listing(&[ListKind::Favorites], &groups, &prefs, false, false).unwrap();
        let breakfast = out.find("Breakfast").unwrap();
        let other = out.find("Other").unwrap();
        assert!(breakfast < out.find("Oatmeal").unwrap());
        assert!(other < out.find("Tea").unwrap());
    }

    #[test]
    fn status_shows_step_progress_and_counts() {
        let mut wizard = Wizard::new();
        wizard.next();
        let prefs = MealPreferences::new();
        let out = render_status(&wizard, &prefs, &[], 12, false).unwrap();
        assert!(out.starts_with("Foods They Love (step 2 of 6)"));
        assert!(out.contains("What brings them joy at mealtime?"));
        assert!(out.contains("33% complete"));
        assert!(out.contains("  ✓ Welcome"));
        assert!(out.contains("Total: 0"));
    }

    #[test]
    fn progress_bar_has_fixed_width() {
        for percent in [0u8, 17, 50, 100] {
            assert_eq!(progress_bar(percent).chars().count(), PROGRESS_WIDTH);
        }
        assert_eq!(progress_bar(100), "█".repeat(PROGRESS_WIDTH));
    }

    #[test]
    fn tips_list_ideas_and_tips() {
        let tips = vec![Tip {
            icon: "💡",
            title: "General Tip",
            content: "Keep meals colorful.".into(),
        }];
        let out = render_tips(
            MealTime::Snack,
            &["Applesauce"],
            &tips,
            &["Soup"],
            false,
        )
        .unwrap();
        assert!(out.contains("Meal Ideas (snack)"));
        assert!(out.contains("  • Applesauce"));
        assert!(out.contains("General Tip"));
        assert!(out.contains("Their favorites: Soup"));
    }
}
