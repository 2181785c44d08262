use clap::Parser;

use bookcmd::cli::{
    load_book, run_add, run_birthdays, run_delete, run_export, run_favorites, run_import,
    run_list, run_menu, run_search, run_toggle_favorite, run_update, save_book, Cli, Commands,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let book_path = cli.book_path()?;
    let mut book = load_book(&book_path)?;

    // Mutating commands report whether anything changed; the book is only
    // written back when it did.
    let changed = match cli.command {
        None => {
            // No subcommand: interactive menu, which saves as it goes.
            run_menu(&mut book, &book_path)?;
            false
        }
        Some(Commands::List(args)) => {
            if args.favorites {
                run_favorites(&book)?;
            } else {
                run_list(&book)?;
            }
            false
        }
        Some(Commands::Birthdays(args)) => {
            run_birthdays(&book, args.days)?;
            false
        }
        Some(Commands::Search(args)) => {
            run_search(&book, &args.query)?;
            false
        }
        Some(Commands::Add(args)) => run_add(
            &mut book,
            args.name,
            args.phone,
            args.email,
            args.group,
            args.birthday,
        )?,
        Some(Commands::Update(args)) => run_update(
            &mut book,
            &args.name,
            args.phone.as_deref(),
            args.email.as_deref(),
        )?,
        Some(Commands::Favorite(args)) => run_toggle_favorite(&mut book, &args.name)?,
        Some(Commands::Delete(args)) => run_delete(&mut book, &args.name, args.force)?,
        Some(Commands::Export(args)) => {
            run_export(&book, &args.file)?;
            false
        }
        Some(Commands::Import(args)) => run_import(&mut book, &args.file)?,
    };

    if changed {
        save_book(&book, &book_path)?;
    }

    Ok(())
}
