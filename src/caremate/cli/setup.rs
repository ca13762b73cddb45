use caremate::export::ExportFormat;
use caremate::model::{AllergyKind, FoodCategory, ListKind};
use caremate::planner::MealTime;
use clap::{CommandFactory, Parser, Subcommand};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2026-10-18 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "caremate",
    bin_name = "caremate",
    version = get_version(),
    disable_help_subcommand = true
)]
#[command(
    about = "Guided meal-preference wizard for elderly care",
    long_about = "Collects favorite foods, dislikes and allergies in a guided session, \
                  then produces a shareable guide for caregivers.\n\n\
                  Without a command, reads session commands from standard input until \
                  `quit` or end of input."
)]
pub struct Cli {
    /// Run a single session command and exit
    #[command(subcommand)]
    pub command: Option<SessionCommand>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,
}

/// One line typed into an interactive session.
#[derive(Parser, Debug)]
#[command(
    name = "caremate",
    no_binary_name = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

impl SessionLine {
    pub fn parse_line(line: &str) -> std::result::Result<SessionCommand, LineError> {
        let words = split_words(line).map_err(LineError::Syntax)?;
        if words.is_empty() {
            return Err(LineError::Empty);
        }
        SessionLine::try_parse_from(words)
            .map(|parsed| parsed.command)
            .map_err(LineError::Clap)
    }
}

#[derive(Debug)]
pub enum LineError {
    Empty,
    Syntax(String),
    Clap(clap::Error),
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Add a food to a list
    #[command(alias = "a", display_order = 1)]
    Add {
        /// favorites, dislikes or allergies
        list: ListKind,

        /// Food name words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// breakfast, lunch, dinner, snacks, beverages or other
        #[arg(short, long)]
        category: Option<FoodCategory>,

        /// Free-text notes
        #[arg(short, long)]
        notes: Option<String>,

        /// Dislikes: mild, strong, absolute. Allergies: mild, moderate, severe, life-threatening
        #[arg(short, long)]
        severity: Option<String>,

        /// allergy or intolerance
        #[arg(short = 't', long = "type")]
        kind: Option<AllergyKind>,
    },

    /// Change fields of a listed food
    #[command(display_order = 2)]
    Edit {
        list: ListKind,

        /// Position shown by `list`, or the record id
        item: String,

        #[arg(long)]
        name: Option<String>,

        /// New category, or "none" to clear it
        #[arg(short, long)]
        category: Option<String>,

        /// New notes, or "" to clear them
        #[arg(short, long)]
        notes: Option<String>,

        #[arg(short, long)]
        severity: Option<String>,

        #[arg(short = 't', long = "type")]
        kind: Option<AllergyKind>,
    },

    /// Remove a food from a list
    #[command(alias = "rm", display_order = 3)]
    Delete {
        list: ListKind,

        /// Position shown by `list`, or the record id
        item: String,
    },

    /// Show the collected foods
    #[command(alias = "ls", display_order = 4)]
    List {
        /// Only this list
        list: Option<ListKind>,

        /// Group by meal category
        #[arg(short, long)]
        group: bool,

        /// Only foods whose name, category or notes contain this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Set the additional considerations (up to 500 characters)
    #[command(display_order = 5)]
    Notes {
        /// Text words (joined with spaces)
        text: Vec<String>,

        /// Clear the considerations
        #[arg(long, conflicts_with = "text")]
        clear: bool,
    },

    /// Add a common allergy in one step, or list the available ones
    #[command(display_order = 6)]
    QuickAdd {
        /// Catalog id, e.g. peanuts
        id: Option<String>,
    },

    /// Show suggestions, or add one to a list
    #[command(display_order = 7)]
    Suggest {
        /// Suggestion words (joined with spaces)
        text: Vec<String>,

        /// Target list
        #[arg(long = "to", default_value = "favorites")]
        to: ListKind,
    },

    /// Meal ideas and tips based on the collected preferences
    #[command(display_order = 8)]
    Tips {
        /// breakfast, lunch, dinner or snack
        #[arg(short, long, default_value = "breakfast")]
        meal: MealTime,
    },

    /// Produce the caregiver guide
    #[command(display_order = 9)]
    Export {
        /// text, html, summary or json
        #[arg(default_value = "text")]
        format: ExportFormat,

        /// Copy the output to the clipboard
        #[arg(long)]
        copy: bool,

        /// Save the output to the download folder
        #[arg(long)]
        download: bool,

        /// Date printed on the guide (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<chrono::NaiveDate>,
    },

    /// Go to the next step
    #[command(alias = "n", display_order = 10)]
    Next,

    /// Go to the previous step
    #[command(alias = "b", display_order = 11)]
    Back,

    /// Jump to a step (1-6), or show the current one
    #[command(display_order = 12)]
    Step {
        /// Step number
        number: Option<usize>,
    },

    /// Show the current step and progress
    #[command(display_order = 13)]
    Status,

    /// Clear everything and return to the first step
    #[command(display_order = 14)]
    StartOver {
        /// Confirm clearing
        #[arg(short, long)]
        yes: bool,
    },

    /// Print help
    #[command(display_order = 15)]
    Help { command: Option<String> },

    /// End the session
    #[command(alias = "exit", display_order = 16)]
    Quit,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Wizard,
    Foods,
    Assist,
    Share,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Wizard => "Wizard:",
            CommandGroup::Foods => "Foods:",
            CommandGroup::Assist => "Assistance:",
            CommandGroup::Share => "Sharing:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "next" | "back" | "step" | "status" | "start-over" => Some(CommandGroup::Wizard),
            "add" | "edit" | "delete" | "list" | "notes" => Some(CommandGroup::Foods),
            "quick-add" | "suggest" | "tips" => Some(CommandGroup::Assist),
            "export" => Some(CommandGroup::Share),
            "help" | "quit" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Wizard,
            CommandGroup::Foods,
            CommandGroup::Assist,
            CommandGroup::Share,
            CommandGroup::Misc,
        ]
    }
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = SessionLine::command();

    let mut output = String::new();
    output.push_str(&format!("caremate {}\n", get_version()));
    output.push_str("Guided meal-preference wizard for elderly care\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();
    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| CommandGroup::for_command(sc.get_name()) == Some(*group))
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", sc.get_name(), about));
            }
        }
    }

    output.push('\n');
    output.push_str("Run `help <command>` for the options of one command.\n");
    output
}

/// Help for one session command, or the grouped help if it does not exist.
pub fn help_for_command(name: &str) -> String {
    let mut cmd = SessionLine::command();
    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name || subcmd.get_all_aliases().any(|a| a == name) {
            return subcmd.render_help().to_string();
        }
    }
    format!("Unknown command: {}\n\n{}", name, get_grouped_help())
}

/// Splits a session line into words. Single or double quotes group words; a
/// backslash escapes the next character.
pub fn split_words(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (_, '\\') => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
                in_word = true;
            }
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("Unterminated {} quote", q));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> SessionCommand {
        SessionLine::parse_line(line).unwrap()
    }

    #[test]
    fn splits_quoted_words() {
        assert_eq!(
            split_words(r#"add favorite "Chicken soup" --notes 'very hot'"#).unwrap(),
            vec!["add", "favorite", "Chicken soup", "--notes", "very hot"]
        );
        assert_eq!(split_words(r"notes It\'s fine").unwrap(), vec!["notes", "It's", "fine"]);
        assert_eq!(split_words("edit dislike 1 --notes ''").unwrap()[4], "");
        assert!(split_words("  ").unwrap().is_empty());
        assert!(split_words("add favorite \"soup").is_err());
    }

    #[test]
    fn parses_add_with_options_after_name() {
        match parse("add allergy Tree nuts --severity life-threatening -t allergy") {
            SessionCommand::Add {
                list,
                name,
                severity,
                kind,
                ..
            } => {
                assert_eq!(list, ListKind::Allergies);
                assert_eq!(name.join(" "), "Tree nuts");
                assert_eq!(severity.as_deref(), Some("life-threatening"));
                assert_eq!(kind, Some(AllergyKind::Allergy));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn list_aliases_and_categories_parse() {
        match parse("add love Oatmeal -c breakfast") {
            SessionCommand::Add { list, category, .. } => {
                assert_eq!(list, ListKind::Favorites);
                assert_eq!(category, Some(FoodCategory::Breakfast));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(SessionLine::parse_line("add pantry Oatmeal").is_err());
    }

    #[test]
    fn export_defaults_to_text() {
        assert_eq!(
            parse("export"),
            SessionCommand::Export {
                format: ExportFormat::Text,
                copy: false,
                download: false,
                date: None,
            }
        );
        match parse("export pdf --download --date 2026-10-18") {
            SessionCommand::Export {
                format,
                download,
                date,
                ..
            } => {
                assert_eq!(format, ExportFormat::Html);
                assert!(download);
                assert_eq!(date, chrono::NaiveDate::from_ymd_opt(2026, 10, 18));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn empty_lines_and_aliases() {
        assert!(matches!(SessionLine::parse_line("   "), Err(LineError::Empty)));
        assert_eq!(parse("exit"), SessionCommand::Quit);
        assert_eq!(parse("n"), SessionCommand::Next);
        assert_eq!(parse("step 3"), SessionCommand::Step { number: Some(3) });
    }

    #[test]
    fn notes_clear_conflicts_with_text() {
        assert!(SessionLine::parse_line("notes --clear some text").is_err());
        assert_eq!(
            parse("notes --clear"),
            SessionCommand::Notes {
                text: vec![],
                clear: true
            }
        );
    }

    #[test]
    fn grouped_help_lists_every_command() {
        let help = get_grouped_help();
        for name in [
            "add", "edit", "delete", "list", "notes", "quick-add", "suggest", "tips", "export",
            "next", "back", "step", "status", "start-over", "help", "quit",
        ] {
            assert!(
                help.contains(&format!("  {:<12}", name)),
                "missing {} in help",
                name
            );
        }
        assert!(help_for_command("export").contains("--download"));
        assert!(help_for_command("frobnicate").starts_with("Unknown command"));
    }

    #[test]
    fn search_help_names_every_matched_field() {
        let help = help_for_command("ls");
        assert!(help.contains("name, category or notes"));
    }
}
