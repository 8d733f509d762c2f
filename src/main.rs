//! # People CLI (`people`)
//!
//! ## Usage
//!
//! ```bash
//! people --config ./config/people.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `people init` | Create the SQLite database and schema |
//! | `people import <file>` | Merge a CSV or JSON contact file into the store |
//! | `people export` | Write every contact as CSV or JSON |
//! | `people list` | One line per stored contact |
//! | `people get <id>` | Show one contact |
//! | `people delete <id>` | Delete one contact |
//! | `people clear --yes` | Delete every contact |
//!
//! ## Examples
//!
//! ```bash
//! # Preview what a Google Contacts export would change
//! people import ~/Downloads/contacts.csv --dry-run
//!
//! # Outlook export with an unusual extension
//! people import outlook.txt --format csv
//!
//! # Google-compatible CSV for re-import elsewhere
//! people export --template google --output out/google.csv
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use people::{config, export, get, import, list, migrate, remove};

/// People: a local contact manager with CSV and JSON import/export.
#[derive(Parser)]
#[command(
    name = "people",
    about = "People: a local contact manager with CSV and JSON import/export",
    version,
    long_about = "Stores contacts in SQLite and merges CSV exports from Google Contacts, \
    Outlook, and its own JSON backups without overwriting existing values."
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/people.toml`.
    #[arg(long, global = true, default_value = "./config/people.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the database schema. Idempotent.
    Init,

    /// Import contacts from a CSV or JSON file.
    ///
    /// Incoming contacts matching a stored one by e-mail, or by first name,
    /// last name and mobile phone, only fill in attributes the stored
    /// contact is missing. Everything else is added.
    Import {
        /// File to import.
        file: PathBuf,

        /// `csv` or `json`. Inferred from the file extension when omitted.
        #[arg(long)]
        format: Option<String>,

        /// Show what would be added and updated without writing.
        #[arg(long)]
        dry_run: bool,
    },

    /// Export every stored contact.
    Export {
        /// `csv` or `json`. Inferred from `--output`, else JSON.
        #[arg(long)]
        format: Option<String>,

        /// CSV column set: `full` or `google`. Defaults to `export.csv_template`.
        #[arg(long)]
        template: Option<String>,

        /// Output file. Writes to stdout when omitted.
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// List stored contacts.
    List,

    /// Show one contact.
    Get {
        /// Contact id.
        id: i64,

        /// Print the stored JSON record instead of labelled fields.
        #[arg(long)]
        json: bool,
    },

    /// Delete one contact.
    Delete {
        /// Contact id.
        id: i64,
    },

    /// Delete every contact.
    Clear {
        /// Confirm the deletion.
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays clean for exports.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Init => {
            migrate::run_migrations(&cfg).await?;
            println!("Database initialized successfully.");
        }
        Commands::Import {
            file,
            format,
            dry_run,
        } => {
            import::run_import(&cfg, &file, format.as_deref(), dry_run).await?;
        }
        Commands::Export {
            format,
            template,
            output,
        } => {
            export::run_export(
                &cfg,
                format.as_deref(),
                template.as_deref(),
                output.as_deref(),
            )
            .await?;
        }
        Commands::List => {
            list::run_list(&cfg).await?;
        }
        Commands::Get { id, json } => {
            get::run_get(&cfg, id, json).await?;
        }
        Commands::Delete { id } => {
            remove::run_delete(&cfg, id).await?;
        }
        Commands::Clear { yes } => {
            remove::run_clear(&cfg, yes).await?;
        }
    }

    Ok(())
}
