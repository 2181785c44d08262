use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// Date format used for birthdays everywhere (storage, CSV, prompts).
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub group: Option<String>,
    pub favorite: bool,
    /// Birthday as `YYYY-MM-DD` text. Not validated on insert; parsed
    /// when a birthday query needs it.
    pub birthday: Option<String>,
}

impl Contact {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            group: None,
            favorite: false,
            birthday: None,
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_birthday(mut self, birthday: impl Into<String>) -> Self {
        self.birthday = Some(birthday.into());
        self
    }

    /// Case-insensitive equality match against name, phone, or email.
    /// `query` must already be lowercased.
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase() == query
            || self.phone.to_lowercase() == query
            || self.email.to_lowercase() == query
    }

    /// Parse the stored birthday, if any.
    pub fn birthday_date(&self) -> Result<Option<NaiveDate>, StoreError> {
        match self.birthday.as_deref() {
            None => Ok(None),
            Some(text) => NaiveDate::parse_from_str(text, BIRTHDAY_FORMAT)
                .map(Some)
                .map_err(|_| StoreError::MalformedDate {
                    name: self.name.clone(),
                    value: text.to_string(),
                }),
        }
    }
}
