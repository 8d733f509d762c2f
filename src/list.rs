//! Contact listing for `people list`.

use anyhow::Result;

use people_core::models::Contact;
use people_core::store::ContactStore;

use crate::config::Config;
use crate::sqlite_store::SqliteStore;

/// One line of the listing: id, display name, primary phone, e-mail.
pub fn format_row(contact: &Contact) -> String {
    format!(
        "{:>5}  {:<32}  {:<18}  {}",
        contact.id.map(|id| id.to_string()).unwrap_or_default(),
        contact.display_name(),
        contact.primary_phone().unwrap_or("-"),
        contact.email_address.as_deref().unwrap_or("-"),
    )
}

pub async fn run_list(config: &Config) -> Result<()> {
    let store = SqliteStore::open(config).await?;
    let contacts = store.read_all().await;
    store.close().await;
    let contacts = contacts?;

    if contacts.is_empty() {
        println!("No contacts.");
        return Ok(());
    }

    println!("{:>5}  {:<32}  {:<18}  {}", "ID", "NAME", "PHONE", "E-MAIL");
    for contact in &contacts {
        println!("{}", format_row(contact));
    }
    println!();
    println!("{} contacts", contacts.len());

    Ok(())
}
