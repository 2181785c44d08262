use anyhow::{anyhow, Result};

use crate::cli::display::print_contact;
use crate::ContactBook;

/// Execute the search command: exact, case-insensitive match on name,
/// phone, or email.
pub fn run_search(book: &ContactBook, query: &str) -> Result<()> {
    let query = query.trim();
    if query.is_empty() {
        return Err(anyhow!("Search query cannot be empty."));
    }

    match book.find(query) {
        Some(contact) => print_contact(contact),
        None => println!("No contact found for '{}'.", query),
    }
    Ok(())
}
