pub mod cli;
pub mod models;
pub mod store;

pub use store::{ContactBook, StoreError};
