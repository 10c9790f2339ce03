//! # tugas
//!
//! A local-first tracker for personal tasks and school homework.
//!
//! ## Architecture
//!
//! ```text
//! CLI → ItemListManager<T> → Store
//! ```
//!
//! Each list is an ordered collection held in memory by an
//! [`ItemListManager`](list::ItemListManager), written back to a
//! [`Store`](store::Store) as one JSON array after every change.
//!
//! ## Quick Start
//!
//! ```bash
//! tugas task add "Buy milk"
//! tugas homework add --subject Math --title "Chapter 3" --deadline Monday
//! tugas task list --pending
//! tugas task toggle <id>
//! ```

/// Application context and error handling.
///
/// [`AppContext`](app::AppContext) opens the configured store and hands out
/// loaded list managers.
pub mod app;

/// Command-line interface using clap.
pub mod cli;

/// Configuration loaded from `~/.config/tugas/config.toml`.
pub mod config;

/// Item schemas and validation.
///
/// - [`Task`](domain::Task): personal to-do entry
/// - [`Homework`](domain::Homework): subject/title/deadline entry
/// - [`ListItem`](domain::ListItem): the schema trait both implement
pub mod domain;

/// The list manager: load, add, edit, toggle, remove, persist.
pub mod list;

/// Key-value persistence.
///
/// - [`Store`](store::Store): async get/set trait
/// - [`SqliteStore`](store::SqliteStore): single-table SQLite engine
/// - [`FileStore`](store::FileStore): one JSON file per key
pub mod store;
