//! # CLI Layer
//!
//! This module is **one possible UI client** for caremate. The wizard, the
//! collections and the formatters live in the library; the CLI layer is the only
//! place that:
//!
//! - Reads session lines from stdin and writes to stdout/stderr
//! - Parses arguments (clap, see [`super::setup`])
//! - Reads the clock for the export date
//! - Formats output for humans (see [`super::render`])
//!
//! ## Modes
//!
//! With a command on the command line, that command runs once against a fresh
//! session and errors exit non-zero. Without one, every stdin line is a session
//! command; errors are printed and the session goes on until `quit` or end of input.
//! Lines starting with `#` are ignored so sessions can be scripted.
//!
//! ## Structure
//!
//! - `run()`: builds the context and picks the mode (called by `main.rs`)
//! - `execute()`: dispatches one parsed command
//! - `handle_*()`: per-command handlers that call the API and print results

use super::render::{
    print_error, print_messages, render_listing, render_status, render_suggestions,
    render_tips,
};
use super::setup::{get_grouped_help, help_for_command, Cli, LineError, SessionCommand, SessionLine};
use caremate::api::{CareMateApi, EntryDraft};
use caremate::catalog::SUGGESTIONS;
use caremate::commands::CmdMessage;
use caremate::config::{config_dir, CareMateConfig};
use caremate::error::{CareMateError, Result};
use caremate::export::{download_filename, ExportFormat};
use caremate::model::{AllergyKind, EntryEdit, FoodCategory, ListKind, Severity};
use caremate::planner::MealTime;
use caremate::sink::{Exporter, SystemSink};
use caremate::store::memory::InMemoryStore;
use caremate::validation::CONSIDERATIONS_MAX_LEN;
use caremate::wizard::Step;
use chrono::{Local, NaiveDate};
use clap::error::ErrorKind;
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::{debug, warn};

const PROMPT: &str = "caremate> ";

struct AppContext {
    api: CareMateApi<InMemoryStore>,
    exporter: Exporter<SystemSink>,
    config: CareMateConfig,
    use_color: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context(&cli);

    match cli.command {
        Some(command) => execute(&mut ctx, command).map(|_| ()),
        None => run_session(&mut ctx),
    }
}

fn init_context(cli: &Cli) -> AppContext {
    let config = match config_dir() {
        Some(dir) => CareMateConfig::load(&dir).unwrap_or_else(|e| {
            warn!(error = %e, dir = %dir.display(), "ignoring unreadable config");
            CareMateConfig::default()
        }),
        None => CareMateConfig::default(),
    };
    debug!(?config, "loaded config");

    let use_color = !cli.no_color && io::stdout().is_terminal();
    if !use_color {
        colored::control::set_override(false);
    }

    let sink = SystemSink::new(config.resolved_download_dir());
    AppContext {
        api: CareMateApi::new(InMemoryStore::new()),
        exporter: Exporter::new(sink),
        config,
        use_color,
    }
}

fn run_session(ctx: &mut AppContext) -> Result<()> {
    let interactive = io::stdin().is_terminal();
    if interactive {
        handle_status(ctx)?;
        prompt()?;
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim_start().starts_with('#') {
            continue;
        }

        match SessionLine::parse_line(&line) {
            Ok(command) => match execute(ctx, command) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => print_error(e),
            },
            Err(LineError::Empty) => {}
            Err(LineError::Syntax(msg)) => print_error(msg),
            Err(LineError::Clap(e)) => match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                    print!("{}", e)
                }
                _ => eprint!("{}", e),
            },
        }

        if interactive {
            prompt()?;
        }
    }
    Ok(())
}

fn prompt() -> Result<()> {
    print!("{}", PROMPT);
    io::stdout().flush()?;
    Ok(())
}

fn execute(ctx: &mut AppContext, command: SessionCommand) -> Result<Flow> {
    debug!(?command, "executing");
    match command {
        SessionCommand::Add {
            list,
            name,
            category,
            notes,
            severity,
            kind,
        } => handle_add(ctx, list, name.join(" "), category, notes, severity, kind)?,
        SessionCommand::Edit {
            list,
            item,
            name,
            category,
            notes,
            severity,
            kind,
        } => {
            let edit = build_edit(list, name, category, notes, severity, kind)?;
            handle_edit(ctx, list, &item, edit)?
        }
        SessionCommand::Delete { list, item } => handle_delete(ctx, list, &item)?,
        SessionCommand::List {
            list,
            group,
            search,
        } => handle_list(ctx, list, group, search)?,
        SessionCommand::Notes { text, clear } => handle_notes(ctx, text, clear)?,
        SessionCommand::QuickAdd { id } => handle_quick_add(ctx, id)?,
        SessionCommand::Suggest { text, to } => handle_suggest(ctx, text, to)?,
        SessionCommand::Tips { meal } => handle_tips(ctx, meal)?,
        SessionCommand::Export {
            format,
            copy,
            download,
            date,
        } => handle_export(ctx, format, copy, download, date)?,
        SessionCommand::Next => {
            ctx.api.next_step();
            handle_status(ctx)?
        }
        SessionCommand::Back => {
            ctx.api.previous_step();
            handle_status(ctx)?
        }
        SessionCommand::Step { number } => handle_step(ctx, number)?,
        SessionCommand::Status => handle_status(ctx)?,
        SessionCommand::StartOver { yes } => handle_start_over(ctx, yes)?,
        SessionCommand::Help { command } => handle_help(command),
        SessionCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn parse_severity(list: ListKind, severity: Option<String>) -> Result<Option<Severity>> {
    severity
        .map(|s| Severity::parse_for(list, &s))
        .transpose()
        .map_err(CareMateError::Api)
}

fn build_edit(
    list: ListKind,
    name: Option<String>,
    category: Option<String>,
    notes: Option<String>,
    severity: Option<String>,
    kind: Option<AllergyKind>,
) -> Result<EntryEdit> {
    let category = match category.as_deref().map(str::trim) {
        None => None,
        Some("none") | Some("") => Some(None),
        Some(other) => Some(Some(
            other.parse::<FoodCategory>().map_err(CareMateError::Api)?,
        )),
    };
    let notes = notes.map(|n| if n.trim().is_empty() { None } else { Some(n) });

    Ok(EntryEdit {
        name,
        category,
        notes,
        severity: parse_severity(list, severity)?,
        kind,
    })
}

fn handle_add(
    ctx: &mut AppContext,
    list: ListKind,
    name: String,
    category: Option<FoodCategory>,
    notes: Option<String>,
    severity: Option<String>,
    kind: Option<AllergyKind>,
) -> Result<()> {
    let draft = EntryDraft {
        name,
        category,
        notes,
        severity: parse_severity(list, severity)?,
        kind,
    };
    let result = ctx.api.add_entry(list, draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, list: ListKind, item: &str, edit: EntryEdit) -> Result<()> {
    let result = ctx.api.update_entry(list, item, edit)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, list: ListKind, item: &str) -> Result<()> {
    let result = ctx.api.delete_entry(list, item)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(
    ctx: &mut AppContext,
    list: Option<ListKind>,
    group: bool,
    search: Option<String>,
) -> Result<()> {
    let lists = match list {
        Some(list) => vec![list],
        None => ListKind::ALL.to_vec(),
    };
    let group = group || ctx.config.group_by_category;
    let result = ctx.api.list_entries(&lists, group, search.as_deref())?;

    let output = render_listing(
        &lists,
        &result.listed,
        ctx.api.preferences(),
        search.is_some(),
        ctx.use_color,
    )?;
    print!("{}", output);
    print_messages(&result.messages);
    Ok(())
}

fn handle_notes(ctx: &mut AppContext, text: Vec<String>, clear: bool) -> Result<()> {
    if text.is_empty() && !clear {
        let current = &ctx.api.preferences().additional_considerations;
        if current.trim().is_empty() {
            print_messages(&[CmdMessage::info("No additional considerations yet.")]);
        } else {
            println!("{}", current);
            print_messages(&[CmdMessage::info(format!(
                "{}/{} characters",
                current.chars().count(),
                CONSIDERATIONS_MAX_LEN
            ))]);
        }
        return Ok(());
    }

    let result = ctx.api.set_additional_considerations(&text.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_quick_add(ctx: &mut AppContext, id: Option<String>) -> Result<()> {
    match id {
        Some(id) => {
            let result = ctx.api.quick_add_common_allergy(&id)?;
            print_messages(&result.messages);
        }
        None => {
            let available = ctx.api.available_common_allergies();
            if available.is_empty() {
                print_messages(&[CmdMessage::info(
                    "Every common allergy is already listed.",
                )]);
            } else {
                print!("{}", render_suggestions(&[], &available, ctx.use_color)?);
            }
        }
    }
    Ok(())
}

fn handle_suggest(ctx: &mut AppContext, text: Vec<String>, to: ListKind) -> Result<()> {
    if text.is_empty() {
        let available = ctx.api.available_common_allergies();
        print!(
            "{}",
            render_suggestions(SUGGESTIONS, &available, ctx.use_color)?
        );
        return Ok(());
    }
    let result = ctx.api.apply_suggestion(&text.join(" "), to)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_tips(ctx: &mut AppContext, meal: MealTime) -> Result<()> {
    let output = render_tips(
        meal,
        ctx.api.meal_ideas(meal),
        &ctx.api.personalized_tips(),
        &ctx.api.favorite_highlights(),
        ctx.use_color,
    )?;
    print!("{}", output);
    Ok(())
}

fn handle_export(
    ctx: &mut AppContext,
    format: ExportFormat,
    copy: bool,
    download: bool,
    date: Option<NaiveDate>,
) -> Result<()> {
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let content = ctx.api.export(format, date)?;

    if !copy && !download {
        println!("{}", content);
    }

    if copy || ctx.config.copy_on_export {
        if ctx.exporter.copy(&content) {
            print_messages(&[CmdMessage::success("Copied to clipboard!")]);
        } else {
            print_messages(&[CmdMessage::warning(
                "Could not copy to the clipboard. Run with --verbose for details.",
            )]);
        }
    }

    if download {
        let filename = download_filename(format, date);
        match ctx.exporter.download(&content, &filename) {
            Some(path) => {
                print_messages(&[CmdMessage::success(format!("Saved {}", path.display()))])
            }
            None => print_messages(&[CmdMessage::warning(format!(
                "Could not save {} in {}. Run with --verbose for details.",
                filename,
                ctx.exporter.sink().download_dir().display()
            ))]),
        }
    }
    Ok(())
}

fn handle_step(ctx: &mut AppContext, number: Option<usize>) -> Result<()> {
    if let Some(number) = number {
        if number == 0 || number > Step::ALL.len() {
            return Err(CareMateError::Api(format!(
                "Step {} does not exist (expected 1-{})",
                number,
                Step::ALL.len()
            )));
        }
        ctx.api.go_to_step(number - 1)?;
    }
    handle_status(ctx)
}

fn handle_status(ctx: &mut AppContext) -> Result<()> {
    let output = render_status(
        ctx.api.wizard(),
        ctx.api.preferences(),
        &ctx.api.favorite_highlights(),
        ctx.api.available_common_allergies().len(),
        ctx.use_color,
    )?;
    print!("{}", output);
    Ok(())
}

fn handle_start_over(ctx: &mut AppContext, yes: bool) -> Result<()> {
    let result = ctx.api.start_over(yes)?;
    print_messages(&result.messages);
    if yes {
        handle_status(ctx)?;
    } else {
        print_messages(&[CmdMessage::info("Run `start-over --yes` to clear everything.")]);
    }
    Ok(())
}

fn handle_help(command: Option<String>) {
    match command {
        Some(name) => print!("{}", help_for_command(&name)),
        None => print!("{}", get_grouped_help()),
    }
}
