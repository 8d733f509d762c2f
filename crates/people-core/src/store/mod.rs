//! Storage abstraction for contacts.
//!
//! The [`ContactStore`] trait is everything the import pipeline needs from
//! persistence, passed in explicitly so the merge path runs against an
//! in-memory store in tests and SQLite in the CLI.
//!
//! Implementations must be `Send + Sync` to work with async runtimes.

pub mod memory;

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

use crate::models::Contact;

/// What a successful [`ContactStore::commit`] wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommitReceipt {
    /// Identifiers assigned to the additions, in input order.
    pub added_ids: Vec<i64>,
    /// Number of contacts updated in place.
    pub updated: usize,
}

/// Abstract contact storage: a key-value record store keyed by integer id.
///
/// # Operations
///
/// | Method | Purpose |
/// |--------|---------|
/// | [`read_all`](ContactStore::read_all) | Every stored contact, ids set |
/// | [`get`](ContactStore::get) | One contact by id |
/// | [`add`](ContactStore::add) | Insert, returning the new id |
/// | [`update`](ContactStore::update) | Replace the record with the same id |
/// | [`delete`](ContactStore::delete) | Remove by id |
/// | [`clear`](ContactStore::clear) | Remove everything |
/// | [`commit`](ContactStore::commit) | Atomic batch of adds and updates |
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// All stored contacts in id order.
    async fn read_all(&self) -> Result<Vec<Contact>>;

    async fn get(&self, id: i64) -> Result<Option<Contact>>;

    /// Insert `contact`, ignoring any id it carries. Returns the new id.
    async fn add(&self, contact: &Contact) -> Result<i64>;

    /// Replace the stored record with `contact.id`. Fails if the id is
    /// missing or unknown.
    async fn update(&self, contact: &Contact) -> Result<()>;

    /// Remove a contact. Returns whether it existed.
    async fn delete(&self, id: i64) -> Result<bool>;

    /// Remove every contact. Returns how many were removed.
    async fn clear(&self) -> Result<u64>;

    /// Apply `additions` and `updates` as one unit: either all of them
    /// land or none do.
    async fn commit(&self, additions: &[Contact], updates: &[Contact]) -> Result<CommitReceipt>;
}
