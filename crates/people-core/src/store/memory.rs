//! In-memory [`ContactStore`] implementation for tests and embedding.
//!
//! Uses a `BTreeMap` behind `std::sync::RwLock`. Identifiers count up
//! from 1 and are never reused.

use std::collections::BTreeMap;
use std::sync::RwLock;

use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;

use crate::models::Contact;

use super::{CommitReceipt, ContactStore};

struct Inner {
    contacts: BTreeMap<i64, Contact>,
    next_id: i64,
}

/// In-memory contact store.
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                contacts: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// A store pre-populated with `contacts`, assigned ids 1, 2, ...
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let store = Self::new();
        {
            let mut inner = store.inner.write().unwrap_or_else(|e| e.into_inner());
            for contact in contacts {
                inner.insert(contact);
            }
        }
        store
    }

    pub fn len(&self) -> usize {
        self.read().map(|inner| inner.contacts.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|_| anyhow!("contact store lock poisoned"))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|_| anyhow!("contact store lock poisoned"))
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Inner {
    fn insert(&mut self, mut contact: Contact) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        contact.id = Some(id);
        self.contacts.insert(id, contact);
        id
    }

    fn check_update(&self, contact: &Contact) -> Result<i64> {
        let Some(id) = contact.id else {
            bail!("cannot update a contact without an id");
        };
        if !self.contacts.contains_key(&id) {
            bail!("contact not found: {}", id);
        }
        Ok(id)
    }
}

#[async_trait]
impl ContactStore for InMemoryStore {
    async fn read_all(&self) -> Result<Vec<Contact>> {
        Ok(self.read()?.contacts.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Contact>> {
        Ok(self.read()?.contacts.get(&id).cloned())
    }

    async fn add(&self, contact: &Contact) -> Result<i64> {
        Ok(self.write()?.insert(contact.clone()))
    }

    async fn update(&self, contact: &Contact) -> Result<()> {
        let mut inner = self.write()?;
        let id = inner.check_update(contact)?;
        inner.contacts.insert(id, contact.clone());
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        Ok(self.write()?.contacts.remove(&id).is_some())
    }

    async fn clear(&self) -> Result<u64> {
        let mut inner = self.write()?;
        let removed = inner.contacts.len() as u64;
        inner.contacts.clear();
        Ok(removed)
    }

    async fn commit(&self, additions: &[Contact], updates: &[Contact]) -> Result<CommitReceipt> {
        let mut inner = self.write()?;

        // Validate everything before touching the map.
        let ids = updates
            .iter()
            .map(|c| inner.check_update(c))
            .collect::<Result<Vec<i64>>>()?;

        for (id, contact) in ids.into_iter().zip(updates) {
            inner.contacts.insert(id, contact.clone());
        }
        let added_ids = additions
            .iter()
            .map(|c| inner.insert(c.clone()))
            .collect();

        Ok(CommitReceipt {
            added_ids,
            updated: updates.len(),
        })
    }
}
