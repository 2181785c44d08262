//! Read-only traversals over the tree: ordered listing, favorites, and
//! the upcoming-birthday window.

use chrono::{Datelike, Duration, NaiveDate};
use log::warn;

use super::{ContactBook, Link};
use crate::models::Contact;

impl ContactBook {
    /// All contacts in case-insensitive name order. The in-order walk is
    /// the sorted output; no separate sort step exists.
    pub fn contacts(&self) -> Vec<&Contact> {
        let mut out = Vec::new();
        in_order(&self.root, &mut out);
        out
    }

    pub fn len(&self) -> usize {
        self.contacts().len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Contacts flagged favorite, in name order.
    pub fn favorites(&self) -> Vec<&Contact> {
        self.contacts().into_iter().filter(|c| c.favorite).collect()
    }

    /// Contacts whose birthday, mapped into `today`'s year, falls within
    /// `today ..= today + days_ahead`.
    ///
    /// A birthday already past this year is not carried into next year,
    /// so a late-December birthday is never reported from an
    /// early-January `today`. Feb 29 is skipped in non-leap years. A
    /// birthday that does not parse is skipped with a warning; it never
    /// aborts the listing of other contacts.
    pub fn upcoming_birthdays(&self, days_ahead: i64, today: NaiveDate) -> Vec<&Contact> {
        let horizon = today + Duration::days(days_ahead);
        self.contacts()
            .into_iter()
            .filter(|contact| match contact.birthday_date() {
                Ok(Some(date)) => date
                    .with_year(today.year())
                    .map(|this_year| today <= this_year && this_year <= horizon)
                    .unwrap_or(false),
                Ok(None) => false,
                Err(e) => {
                    warn!("skipping birthday check: {e}");
                    false
                }
            })
            .collect()
    }
}

fn in_order<'a>(link: &'a Link, out: &mut Vec<&'a Contact>) {
    if let Some(node) = link {
        in_order(&node.left, out);
        out.push(&node.contact);
        in_order(&node.right, out);
    }
}
