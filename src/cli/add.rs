use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use crate::cli::ui::prompt_text;
use crate::models::{Contact, BIRTHDAY_FORMAT};
use crate::ContactBook;

/// Execute the add command. Falls back to interactive prompts when no
/// flags were given.
pub fn run_add(
    book: &mut ContactBook,
    name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    group: Option<String>,
    birthday: Option<String>,
) -> Result<bool> {
    let all_none = name.is_none()
        && phone.is_none()
        && email.is_none()
        && group.is_none()
        && birthday.is_none();

    let (name, phone, email, group, birthday) = if all_none {
        let fields = interactive_mode()?;
        if fields.0.is_none() {
            println!("Cancelled.");
            return Ok(false);
        }
        fields
    } else {
        (name, phone, email, group, birthday)
    };

    let name = name.map(|n| n.trim().to_string()).unwrap_or_default();
    if name.is_empty() {
        return Err(anyhow!("Name is required."));
    }

    // Catch bad dates at the door; the store would only notice them
    // during a birthday query.
    if let Some(ref b) = birthday {
        NaiveDate::parse_from_str(b, BIRTHDAY_FORMAT)
            .map_err(|_| anyhow!("Invalid birthday '{}' (expected YYYY-MM-DD).", b))?;
    }

    let mut contact = Contact::new(name.clone(), phone.unwrap_or_default(), email.unwrap_or_default());
    contact.group = group.filter(|g| !g.trim().is_empty());
    contact.birthday = birthday;
    book.insert(contact);

    println!("Added: {}", name);
    Ok(true)
}

type FieldSet = (
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
);

fn interactive_mode() -> Result<FieldSet> {
    let field = |label: &str| -> Result<Option<String>> {
        let value = prompt_text(label)?;
        Ok(if value.trim().is_empty() { None } else { Some(value) })
    };

    let name = field("name: ")?;
    if name.is_none() {
        return Ok((None, None, None, None, None));
    }
    let phone = field("phone: ")?;
    let email = field("email: ")?;
    let group = field("group: ")?;
    let birthday = field("birthday (YYYY-MM-DD): ")?;

    Ok((name, phone, email, group, birthday))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_with_flags_inserts_contact() {
        let mut book = ContactBook::new();
        let changed = run_add(
            &mut book,
            Some("Amy".into()),
            Some("222".into()),
            Some("amy@x".into()),
            None,
            Some("2000-05-20".into()),
        )
        .unwrap();

        assert!(changed);
        let c = book.find("Amy").unwrap();
        assert_eq!(c.phone, "222");
        assert_eq!(c.birthday.as_deref(), Some("2000-05-20"));
    }

    #[test]
    fn add_rejects_blank_name() {
        let mut book = ContactBook::new();
        let result = run_add(&mut book, Some("   ".into()), None, None, None, None);
        assert!(result.is_err());
        assert!(book.is_empty());
    }

    #[test]
    fn add_rejects_malformed_birthday() {
        let mut book = ContactBook::new();
        let result = run_add(
            &mut book,
            Some("Amy".into()),
            None,
            None,
            None,
            Some("20-05-2000".into()),
        );
        assert!(result.is_err());
        assert!(book.is_empty());
    }
}
