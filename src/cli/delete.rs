use anyhow::{anyhow, Result};

use crate::cli::display::print_contact;
use crate::cli::ui::confirm;
use crate::{ContactBook, StoreError};

/// Execute the delete command. Returns whether anything changed.
pub fn run_delete(book: &mut ContactBook, name: &str, force: bool) -> Result<bool> {
    let name = name.trim();
    if name.is_empty() {
        return Err(anyhow!("Name cannot be empty."));
    }

    // Show what would be deleted before asking.
    let Some(contact) = book.get(name) else {
        println!("No contact named '{}'.", name);
        return Ok(false);
    };

    if !force {
        print_contact(contact);
        println!();
        if !confirm(&format!("Delete {}?", contact.name)) {
            return Ok(false);
        }
    }

    match book.delete(name) {
        Ok(removed) => {
            println!("Deleted: {}", removed.name);
            Ok(true)
        }
        Err(StoreError::NotFound(_)) => {
            println!("No contact named '{}'.", name);
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

/// Restore the most recently deleted contact (menu only: the undo slot
/// lives in memory and cannot outlive the process).
pub fn run_undo(book: &mut ContactBook) -> Result<bool> {
    match book.undo_delete() {
        Ok(restored) => {
            println!("Restored: {}", restored.name);
            Ok(true)
        }
        Err(StoreError::EmptyUndo) => {
            println!("Nothing to restore.");
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}
