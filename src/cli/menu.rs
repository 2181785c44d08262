//! Interactive menu: one in-memory book for the whole session.
//!
//! The book is saved back to its CSV file after every mutation, so a
//! crash loses nothing. Undo lives here and nowhere else: the undo slot
//! is in-memory state that cannot outlive the process, so it is only
//! reachable while the menu is running.

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use inquire::Select;

use crate::cli::ui::{clear_screen, minimal_render_config, prompt_text, wait_for_continue};
use crate::cli::{
    run_add, run_birthdays, run_delete, run_export, run_favorites, run_import, run_list,
    run_search, run_toggle_favorite, run_undo, run_update, save_book,
};
use crate::ContactBook;

/// Menu options with type-safe variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    List,
    Favorites,
    Birthdays,
    Search,
    Add,
    Update,
    ToggleFavorite,
    Delete,
    Undo,
    Export,
    Import,
    Quit,
}

impl MenuOption {
    const ALL: &'static [MenuOption] = &[
        MenuOption::List,
        MenuOption::Favorites,
        MenuOption::Birthdays,
        MenuOption::Search,
        MenuOption::Add,
        MenuOption::Update,
        MenuOption::ToggleFavorite,
        MenuOption::Delete,
        MenuOption::Undo,
        MenuOption::Export,
        MenuOption::Import,
        MenuOption::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuOption::List => "List",
            MenuOption::Favorites => "Favorites",
            MenuOption::Birthdays => "Birthdays",
            MenuOption::Search => "Search",
            MenuOption::Add => "Add",
            MenuOption::Update => "Update",
            MenuOption::ToggleFavorite => "Toggle Favorite",
            MenuOption::Delete => "Delete",
            MenuOption::Undo => "Undo Delete",
            MenuOption::Export => "Export",
            MenuOption::Import => "Import",
            MenuOption::Quit => "Quit",
        }
    }

    fn from_label(s: &str) -> Option<MenuOption> {
        MenuOption::ALL.iter().find(|opt| opt.label() == s).copied()
    }

    fn mutates(self) -> bool {
        matches!(
            self,
            MenuOption::Add
                | MenuOption::Update
                | MenuOption::ToggleFavorite
                | MenuOption::Delete
                | MenuOption::Undo
                | MenuOption::Import
        )
    }
}

/// Run the interactive main menu
pub fn run_menu(book: &mut ContactBook, book_path: &Path) -> Result<()> {
    // TTY check: interactive menu requires a terminal
    if !io::stdin().is_terminal() {
        return Err(anyhow!(
            "Interactive menu requires a terminal. Use subcommands for non-interactive use:\n  \
            bookcmd list\n  \
            bookcmd search <query>\n  \
            bookcmd add --name <name>\n  \
            Run 'bookcmd --help' for all options."
        ));
    }

    let menu_labels: Vec<&str> = MenuOption::ALL.iter().map(|opt| opt.label()).collect();

    loop {
        let _ = clear_screen();

        let selection = Select::new("bookcmd", menu_labels.clone())
            .with_render_config(minimal_render_config())
            .with_page_size(menu_labels.len())
            .with_vim_mode(true)
            .prompt_skippable();

        // Ctrl+C or terminal trouble: exit gracefully
        let selection = match selection {
            Ok(sel) => sel,
            Err(_) => return Ok(()),
        };

        let Some(choice_label) = selection else {
            // User pressed Escape
            return Ok(());
        };

        let Some(choice) = MenuOption::from_label(choice_label) else {
            continue;
        };

        if choice == MenuOption::Quit {
            return Ok(());
        }

        let _ = clear_screen();

        match execute_command(book, choice) {
            Ok(changed) => {
                if changed && choice.mutates() {
                    if let Err(e) = save_book(book, book_path) {
                        eprintln!("\nError saving book: {}", e);
                    }
                }
                wait_for_continue();
            }
            Err(e) => {
                eprintln!("\nError: {}", e);
                wait_for_continue();
            }
        }
    }
}

/// Execute a menu command. Returns whether the book was mutated.
fn execute_command(book: &mut ContactBook, choice: MenuOption) -> Result<bool> {
    match choice {
        MenuOption::List => run_list(book).map(|_| false),
        MenuOption::Favorites => run_favorites(book).map(|_| false),
        MenuOption::Birthdays => {
            let days = prompt_text("days ahead (default 7): ")?
                .trim()
                .parse()
                .unwrap_or(7);
            run_birthdays(book, days).map(|_| false)
        }
        MenuOption::Search => {
            let query = prompt_text("search: ")?;
            if query.trim().is_empty() {
                return Ok(false);
            }
            run_search(book, &query).map(|_| false)
        }
        MenuOption::Add => run_add(book, None, None, None, None, None),
        MenuOption::Update => {
            let name = prompt_text("name: ")?;
            if name.trim().is_empty() {
                return Ok(false);
            }
            let phone = prompt_text("new phone (empty keeps current): ")?;
            let email = prompt_text("new email (empty keeps current): ")?;
            run_update(book, name.trim(), Some(phone.as_str()), Some(email.as_str()))
        }
        MenuOption::ToggleFavorite => {
            let name = prompt_text("name: ")?;
            if name.trim().is_empty() {
                return Ok(false);
            }
            run_toggle_favorite(book, name.trim())
        }
        MenuOption::Delete => {
            let name = prompt_text("name: ")?;
            if name.trim().is_empty() {
                return Ok(false);
            }
            run_delete(book, &name, false)
        }
        MenuOption::Undo => run_undo(book),
        MenuOption::Export => {
            let file = prompt_text("export to file: ")?;
            if file.trim().is_empty() {
                return Ok(false);
            }
            run_export(book, &PathBuf::from(file.trim())).map(|_| false)
        }
        MenuOption::Import => {
            let file = prompt_text("import from file: ")?;
            if file.trim().is_empty() {
                return Ok(false);
            }
            run_import(book, &PathBuf::from(file.trim()))
        }
        MenuOption::Quit => Ok(false),
    }
}
