mod contact;

pub use contact::{Contact, BIRTHDAY_FORMAT};
