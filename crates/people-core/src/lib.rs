//! # People Core
//!
//! The contact interchange engine behind People: the [`Contact`] model,
//! a quote-aware CSV reader for Google and Outlook exports, CSV/JSON
//! export, the import merge engine, and the [`ContactStore`] abstraction.
//!
//! This crate contains no sqlx, tokio, or filesystem I/O. Everything except
//! the store-facing import functions is synchronous and pure.
//!
//! ## Pipeline
//!
//! ```text
//! text ─▶ csv::lines ─▶ csv::fields ─▶ csv::headers ─▶ csv::record ─▶ merge ─▶ store
//! ```
//!
//! [`Contact`]: models::Contact
//! [`ContactStore`]: store::ContactStore

pub mod csv;
pub mod date;
pub mod export;
pub mod import;
pub mod merge;
pub mod models;
pub mod store;
