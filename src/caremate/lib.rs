//! # CareMate Architecture
//!
//! CareMate guides a family member or caregiver through recording an elderly
//! person's meal preferences (favorite foods, dislikes, allergies and intolerances,
//! free-text considerations) and turns them into a guide the care team can share.
//!
//! The crate is a library with a CLI client, not the other way round. Everything a
//! different UI would need (a web form, a kiosk app) lives behind [`api::CareMateApi`].
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Session loop, argument parsing, terminal rendering       │
//! │  - The ONLY place that reads the clock or touches stdout    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Validates user text, applies list defaults               │
//! │  - Owns the wizard position                                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Add, update, delete, list, reset over the aggregate      │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, InMemoryStore for the session           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Beside the layers sit pure helpers: [`export`] renders the aggregate as text,
//! HTML, a short summary or JSON for a given date; [`planner`] derives meal ideas and
//! tips; [`sink`] delivers export output to the clipboard or a download folder.
//!
//! ## Key Principle: No I/O in the Core
//!
//! From `api.rs` inward, code takes plain arguments and returns `Result` values. The
//! export date is always a parameter, so the same aggregate and date give the same
//! bytes. Session data never leaves memory; only [`config`] reads a file.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Collection mutations and queries
//! - [`store`]: Storage abstraction and the in-memory session store
//! - [`model`]: Food records, severities and the preferences aggregate
//! - [`validation`]: Name and considerations rules
//! - [`id`]: Record id generation
//! - [`severity`]: Severity colors and labels
//! - [`grouping`]: Category grouping and name search
//! - [`catalog`]: Common allergies, suggestions and severity metadata
//! - [`wizard`]: The six-step flow
//! - [`planner`]: Meal ideas and personalized tips
//! - [`export`]: Text, HTML, summary and JSON formatters
//! - [`sink`]: Clipboard and download delivery
//! - [`config`]: User settings
//! - [`error`]: Error types
//! - `cli`: Argument parsing and templated rendering for the binary (not part of the lib API)

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod grouping;
pub mod id;
pub mod model;
pub mod planner;
pub mod severity;
pub mod sink;
pub mod store;
pub mod validation;
pub mod wizard;
