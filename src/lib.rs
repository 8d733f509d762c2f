//! # People
//!
//! A local contact manager built around CSV and JSON interchange.
//!
//! Contacts live in a SQLite database. Files exported by Google Contacts,
//! Outlook, or this tool itself are parsed, matched against stored
//! contacts, and merged without overwriting anything already recorded.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   ┌─────────────┐   ┌──────────┐
//! │  CSV / JSON │──▶│ Parse+Merge │──▶│  SQLite  │
//! │    files    │   │ people-core │   │ contacts │
//! └─────────────┘   └─────────────┘   └────┬─────┘
//!                                          │
//!                                          ▼
//!                                    ┌──────────┐
//!                                    │   CLI    │
//!                                    │ (people) │
//!                                    └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! people init                         # create database
//! people import google.csv --dry-run  # preview a merge
//! people import google.csv            # merge it
//! people export --output backup.json  # lossless backup
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`db`] | Database connection |
//! | [`migrate`] | Schema creation |
//! | [`sqlite_store`] | SQLite implementation of the contact store |
//! | [`import`] | `people import` |
//! | [`export`] | `people export` |
//! | [`get`] | `people get` |
//! | [`list`] | `people list` |
//! | [`remove`] | `people delete` and `people clear` |
//!
//! Parsing, matching, and merging live in the `people_core` crate.

pub mod config;
pub mod db;
pub mod export;
pub mod get;
pub mod import;
pub mod list;
pub mod migrate;
pub mod remove;
pub mod sqlite_store;
