//! Deleting contacts: `people delete <id>` and `people clear`.

use anyhow::{bail, Result};

use people_core::store::ContactStore;

use crate::config::Config;
use crate::sqlite_store::SqliteStore;

pub async fn run_delete(config: &Config, id: i64) -> Result<()> {
    let store = SqliteStore::open(config).await?;
    let deleted = store.delete(id).await;
    store.close().await;

    if !deleted? {
        bail!("contact not found: {}", id);
    }
    println!("Deleted contact {}.", id);
    Ok(())
}

pub async fn run_clear(config: &Config, yes: bool) -> Result<()> {
    if !yes {
        bail!("clear deletes every contact and cannot be undone; pass --yes to confirm");
    }

    let store = SqliteStore::open(config).await?;
    let removed = store.clear().await;
    store.close().await;

    println!("Deleted {} contacts.", removed?);
    Ok(())
}
