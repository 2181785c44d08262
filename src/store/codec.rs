//! CSV import/export.
//!
//! The column order is fixed: `Name,Phone,Email,Group,Favorite,Birthday`.
//! Export writes contacts in in-order (name-sorted) sequence, so a round
//! trip preserves every contact and field but not the original tree shape
//! or insertion order.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ContactBook, StoreError};
use crate::models::Contact;

const HEADER: [&str; 6] = ["Name", "Phone", "Email", "Group", "Favorite", "Birthday"];

/// One CSV row. Headers are matched by name on import, so column order
/// and unknown extra columns in foreign files are tolerated.
#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Phone", default)]
    phone: String,
    #[serde(rename = "Email", default)]
    email: String,
    #[serde(rename = "Group", default, deserialize_with = "empty_string_as_none")]
    group: Option<String>,
    #[serde(rename = "Favorite", default, deserialize_with = "lenient_bool")]
    favorite: bool,
    #[serde(rename = "Birthday", default, deserialize_with = "empty_string_as_none")]
    birthday: Option<String>,
}

impl From<&Contact> for CsvRow {
    fn from(contact: &Contact) -> Self {
        Self {
            name: contact.name.clone(),
            phone: contact.phone.clone(),
            email: contact.email.clone(),
            group: contact.group.clone(),
            favorite: contact.favorite,
            birthday: contact.birthday.clone(),
        }
    }
}

impl From<CsvRow> for Contact {
    fn from(row: CsvRow) -> Self {
        Self {
            name: row.name,
            phone: row.phone,
            email: row.email,
            group: row.group,
            favorite: row.favorite,
            birthday: row.birthday,
        }
    }
}

/// Deserialize empty or whitespace-only strings as None.
fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Accept `true`/`false` in any ASCII case. Files written by the legacy
/// exporter carry Python-style `True`/`False`. Empty or missing means false.
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.is_some_and(|s| s.trim().eq_ignore_ascii_case("true")))
}

impl ContactBook {
    /// Write every contact as CSV in name order. The header row is
    /// written even when the book is empty. Returns the row count.
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<usize, StoreError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        writer.write_record(HEADER)?;

        let contacts = self.contacts();
        for contact in &contacts {
            writer.serialize(CsvRow::from(*contact))?;
        }
        writer.flush()?;
        Ok(contacts.len())
    }

    pub fn export_csv_path(&self, path: &Path) -> Result<usize, StoreError> {
        let file = File::create(path)?;
        self.export_csv(file)
    }

    /// Insert one contact per CSV row through the normal insertion path.
    /// Missing optional columns become defaults. Returns the number of
    /// contacts imported; a row that fails to parse aborts the import.
    pub fn import_csv<R: Read>(&mut self, reader: R) -> Result<usize, StoreError> {
        let mut reader = csv::Reader::from_reader(reader);
        let mut count = 0;
        for row in reader.deserialize() {
            let row: CsvRow = row?;
            self.insert(row.into());
            count += 1;
        }
        Ok(count)
    }

    pub fn import_csv_path(&mut self, path: &Path) -> Result<usize, StoreError> {
        let file = File::open(path)?;
        self.import_csv(file)
    }
}
