//! SQLite-backed [`ContactStore`] implementation.
//!
//! Each contact is one row: an autoincrement id and the JSON-serialized
//! record. The id lives only in its column; it is stripped from the body
//! on write and restored on read.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use sqlx::{Row, Sqlite, SqlitePool, Transaction};
use tracing::debug;

use people_core::models::Contact;
use people_core::store::{CommitReceipt, ContactStore};

use crate::config::Config;
use crate::db;
use crate::migrate;

/// SQLite implementation of the [`ContactStore`] trait.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to the configured database, creating the schema if needed.
    pub async fn open(config: &Config) -> Result<Self> {
        let pool = db::connect(config).await?;
        migrate::apply(&pool).await?;
        debug!(path = %config.db.path.display(), "contact store opened");
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(self) {
        self.pool.close().await;
    }
}

fn encode(contact: &Contact) -> Result<String> {
    let body = Contact {
        id: None,
        ..contact.clone()
    };
    serde_json::to_string(&body).context("Failed to serialize contact")
}

fn decode(id: i64, body: &str) -> Result<Contact> {
    let mut contact: Contact = serde_json::from_str(body)
        .with_context(|| format!("Failed to decode stored contact {}", id))?;
    contact.id = Some(id);
    Ok(contact)
}

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

async fn insert(tx: &mut Transaction<'_, Sqlite>, contact: &Contact) -> Result<i64> {
    let result = sqlx::query("INSERT INTO contacts (body, updated_at) VALUES (?, ?)")
        .bind(encode(contact)?)
        .bind(now())
        .execute(&mut **tx)
        .await?;
    Ok(result.last_insert_rowid())
}

async fn replace(tx: &mut Transaction<'_, Sqlite>, contact: &Contact) -> Result<()> {
    let Some(id) = contact.id else {
        bail!("cannot update a contact without an id");
    };
    let result = sqlx::query("UPDATE contacts SET body = ?, updated_at = ? WHERE id = ?")
        .bind(encode(contact)?)
        .bind(now())
        .bind(id)
        .execute(&mut **tx)
        .await?;
    if result.rows_affected() == 0 {
        bail!("contact not found: {}", id);
    }
    Ok(())
}

#[async_trait]
impl ContactStore for SqliteStore {
    async fn read_all(&self) -> Result<Vec<Contact>> {
        let rows = sqlx::query("SELECT id, body FROM contacts ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| {
                let id: i64 = row.get("id");
                let body: String = row.get("body");
                decode(id, &body)
            })
            .collect()
    }

    async fn get(&self, id: i64) -> Result<Option<Contact>> {
        let body: Option<String> = sqlx::query_scalar("SELECT body FROM contacts WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        body.map(|b| decode(id, &b)).transpose()
    }

    async fn add(&self, contact: &Contact) -> Result<i64> {
        let mut tx = self.pool.begin().await?;
        let id = insert(&mut tx, contact).await?;
        tx.commit().await?;
        Ok(id)
    }

    async fn update(&self, contact: &Contact) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        replace(&mut tx, contact).await?;
        tx.commit().await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn clear(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM contacts")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn commit(&self, additions: &[Contact], updates: &[Contact]) -> Result<CommitReceipt> {
        // Dropping `tx` on any error rolls the whole batch back.
        let mut tx = self.pool.begin().await?;

        for contact in updates {
            replace(&mut tx, contact).await?;
        }
        let mut added_ids = Vec::with_capacity(additions.len());
        for contact in additions {
            added_ids.push(insert(&mut tx, contact).await?);
        }

        tx.commit().await?;
        debug!(added = added_ids.len(), updated = updates.len(), "batch committed");
        Ok(CommitReceipt {
            added_ids,
            updated: updates.len(),
        })
    }
}
