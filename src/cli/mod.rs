use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::debug;

pub mod add;
pub mod delete;
pub mod display;
pub mod list;
pub mod menu;
pub mod search;
pub mod transfer;
pub mod ui;
pub mod update;

pub use add::run_add;
pub use delete::{run_delete, run_undo};
pub use list::{run_birthdays, run_favorites, run_list};
pub use menu::run_menu;
pub use search::run_search;
pub use transfer::{run_export, run_import};
pub use update::{run_toggle_favorite, run_update};

use crate::ContactBook;

#[derive(Parser)]
#[command(name = "bookcmd")]
#[command(about = "Address book for the command line")]
#[command(version)]
pub struct Cli {
    /// CSV file the book is loaded from and saved to
    #[arg(long, global = true, value_name = "FILE")]
    pub book: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List contacts in name order
    List(ListArgs),
    /// List contacts with a birthday coming up
    Birthdays(BirthdaysArgs),
    /// Find one contact by name, phone, or email
    Search(SearchArgs),
    /// Add a new contact
    Add(AddArgs),
    /// Change a contact's phone or email
    Update(UpdateArgs),
    /// Toggle a contact's favorite flag
    Favorite(NameArg),
    /// Delete a contact by name
    Delete(DeleteArgs),
    /// Export the book to a CSV file
    Export(TransferArgs),
    /// Import contacts from a CSV file
    Import(TransferArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Show only favorites
    #[arg(short, long)]
    pub favorites: bool,
}

#[derive(Args)]
pub struct BirthdaysArgs {
    /// How many days ahead to look
    #[arg(short, long, default_value = "7")]
    pub days: i64,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Name, phone, or email to match exactly (case-insensitive)
    pub query: String,
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(short, long)]
    pub name: Option<String>,
    #[arg(short, long)]
    pub phone: Option<String>,
    #[arg(short, long)]
    pub email: Option<String>,
    #[arg(short, long)]
    pub group: Option<String>,
    /// Birthday as YYYY-MM-DD
    #[arg(short, long)]
    pub birthday: Option<String>,
}

#[derive(Args)]
pub struct UpdateArgs {
    pub name: String,
    #[arg(short, long)]
    pub phone: Option<String>,
    #[arg(short, long)]
    pub email: Option<String>,
}

#[derive(Args)]
pub struct NameArg {
    pub name: String,
}

#[derive(Args)]
pub struct DeleteArgs {
    pub name: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args)]
pub struct TransferArgs {
    /// CSV file to transfer to or from
    pub file: PathBuf,
}

impl Cli {
    pub fn book_path(&self) -> Result<PathBuf> {
        match &self.book {
            Some(path) => Ok(path.clone()),
            None => default_book_path(),
        }
    }
}

/// Default book location under the user config directory.
pub fn default_book_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("could not find config directory")?;
    Ok(config_dir.join("bookcmd").join("contacts.csv"))
}

/// Load the book from its CSV file. A missing file is an empty book
/// (first run), not an error.
pub fn load_book(path: &Path) -> Result<ContactBook> {
    let mut book = ContactBook::new();
    if path.exists() {
        let count = book
            .import_csv_path(path)
            .with_context(|| format!("failed to load book from {}", path.display()))?;
        debug!("loaded {} contacts from {}", count, path.display());
    }
    Ok(book)
}

/// Save the book back to its CSV file, creating parent directories.
pub fn save_book(book: &ContactBook, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let count = book
        .export_csv_path(path)
        .with_context(|| format!("failed to save book to {}", path.display()))?;
    debug!("saved {} contacts to {}", count, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Contact;

    #[test]
    fn load_missing_file_gives_empty_book() {
        let dir = tempfile::tempdir().unwrap();
        let book = load_book(&dir.path().join("no-such.csv")).unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("contacts.csv");

        let mut book = ContactBook::new();
        book.insert(Contact::new("Amy", "222", "amy@x").with_group("friends"));
        book.insert(Contact::new("Bob", "111", "bob@x"));
        save_book(&book, &path).unwrap();

        let loaded = load_book(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(
            loaded.find("Amy").unwrap().group.as_deref(),
            Some("friends")
        );
    }
}
