use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::ContactBook;

/// Execute the export command
pub fn run_export(book: &ContactBook, file: &Path) -> Result<()> {
    let count = book
        .export_csv_path(file)
        .with_context(|| format!("failed to export to {}", file.display()))?;
    println!("Exported {} contacts to {}", count, file.display());
    Ok(())
}

/// Execute the import command. Returns whether anything changed.
pub fn run_import(book: &mut ContactBook, file: &Path) -> Result<bool> {
    if !file.exists() {
        bail!("File not found: {}", file.display());
    }

    let count = book
        .import_csv_path(file)
        .with_context(|| format!("failed to import from {}", file.display()))?;
    println!("Imported {} contacts from {}", count, file.display());
    Ok(count > 0)
}
