use anyhow::Result;

use crate::{ContactBook, StoreError};

/// Execute the update command. Returns whether anything changed.
pub fn run_update(
    book: &mut ContactBook,
    name: &str,
    phone: Option<&str>,
    email: Option<&str>,
) -> Result<bool> {
    if phone.is_none() && email.is_none() {
        println!("Nothing to update. Pass --phone and/or --email.");
        return Ok(false);
    }

    match book.update(name, phone, email) {
        Ok(()) => {
            println!("Updated.");
            Ok(true)
        }
        Err(StoreError::NotFound(_)) => {
            println!("No contact named '{}'.", name);
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

/// Execute the favorite command. Returns whether anything changed.
pub fn run_toggle_favorite(book: &mut ContactBook, name: &str) -> Result<bool> {
    match book.toggle_favorite(name) {
        Ok(true) => {
            println!("{} is now a favorite.", name);
            Ok(true)
        }
        Ok(false) => {
            println!("{} is no longer a favorite.", name);
            Ok(true)
        }
        Err(StoreError::NotFound(_)) => {
            println!("No contact named '{}'.", name);
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}
