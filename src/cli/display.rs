use crate::models::Contact;

/// One-line summary used by list and search output.
pub fn contact_line(contact: &Contact) -> String {
    let mut line = format!("{}: {}, {}", contact.name, contact.phone, contact.email);
    if let Some(group) = &contact.group {
        line.push_str(&format!(" [{}]", group));
    }
    if contact.favorite {
        line.push_str(" *");
    }
    line
}

/// Full card for a single contact.
pub fn print_contact(contact: &Contact) {
    println!("{}", contact.name);
    println!("  phone: {}", contact.phone);
    println!("  email: {}", contact.email);
    if let Some(group) = &contact.group {
        println!("  group: {}", group);
    }
    if let Some(birthday) = &contact.birthday {
        println!("  birthday: {}", birthday);
    }
    if contact.favorite {
        println!("  favorite");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_shows_group_and_favorite_markers() {
        let mut c = Contact::new("Amy", "222", "amy@x").with_group("friends");
        c.favorite = true;
        assert_eq!(contact_line(&c), "Amy: 222, amy@x [friends] *");

        let plain = Contact::new("Bob", "111", "bob@x");
        assert_eq!(contact_line(&plain), "Bob: 111, bob@x");
    }
}
