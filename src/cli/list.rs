use anyhow::Result;
use chrono::Local;

use crate::cli::display::contact_line;
use crate::ContactBook;

/// Execute the list command
pub fn run_list(book: &ContactBook) -> Result<()> {
    let contacts = book.contacts();
    if contacts.is_empty() {
        println!("No contacts.");
        return Ok(());
    }
    for contact in contacts {
        println!("{}", contact_line(contact));
    }
    Ok(())
}

/// Execute the list command restricted to favorites
pub fn run_favorites(book: &ContactBook) -> Result<()> {
    let favorites = book.favorites();
    if favorites.is_empty() {
        println!("No favorites.");
        return Ok(());
    }
    for contact in favorites {
        println!("{}", contact_line(contact));
    }
    Ok(())
}

/// Execute the birthdays command
pub fn run_birthdays(book: &ContactBook, days: i64) -> Result<()> {
    let today = Local::now().date_naive();
    let upcoming = book.upcoming_birthdays(days, today);
    if upcoming.is_empty() {
        println!("No birthdays in the next {} days.", days);
        return Ok(());
    }
    for contact in upcoming {
        if let Some(birthday) = &contact.birthday {
            println!("{} has a birthday on {}", contact.name, birthday);
        }
    }
    Ok(())
}
