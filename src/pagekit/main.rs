use clap::Parser;
use colored::Colorize;
use pagekit::api::{CmdMessage, ListedPage, MessageLevel, PageKitApi, SitePaths};
use pagekit::config::SiteConfig;
use pagekit::error::Result;
use pagekit::store::fs::DiskStore;
use std::io::{self, Write};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: PageKitApi<DiskStore>,
    root: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Create { pages }) => handle_create(&mut ctx, &pages),
        Some(Commands::Delete { targets }) => handle_delete(&mut ctx, &targets),
        Some(Commands::Rename { old, new_name }) => handle_rename(&mut ctx, &old, &new_name),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Nav) => handle_nav(&mut ctx),
        Some(Commands::Init) => handle_init(&mut ctx),
        None => run_menu(&mut ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let root = cli.root.clone();
    let config = SiteConfig::load(&root)?;
    let paths = SitePaths::new(root.clone(), &config);
    let api = PageKitApi::new(DiskStore::new(), paths);
    Ok(AppContext { api, root })
}

fn handle_create(ctx: &mut AppContext, pages: &[String]) -> Result<()> {
    let result = ctx.api.create_pages(pages)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, targets: &[String]) -> Result<()> {
    let result = ctx.api.delete_pages(targets)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_rename(ctx: &mut AppContext, old: &str, new_name: &str) -> Result<()> {
    let result = ctx.api.rename_page(old, new_name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_pages()?;
    print_pages(&result.listed_pages);
    print_messages(&result.messages);
    Ok(())
}

fn handle_nav(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.refresh_nav()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    if !SiteConfig::exists(&ctx.root) {
        SiteConfig::default().save(&ctx.root)?;
        println!("{}", "Created pagekit.json".green());
    }
    let result = ctx.api.init_site()?;
    print_messages(&result.messages);
    Ok(())
}

const MENU: &str = "\n  1. Create page(s)\n  2. Delete page(s)\n  3. Rename a page\n  4. List pages\n  5. Regenerate navigation\n  6. Exit";

fn run_menu(ctx: &mut AppContext) -> Result<()> {
    println!("pagekit: {}", ctx.root.display());
    loop {
        println!("{}", MENU);
        let Some(choice) = prompt("Choose an option: ")? else {
            break;
        };
        let outcome = match choice.as_str() {
            "1" => menu_create(ctx),
            "2" => menu_delete(ctx),
            "3" => menu_rename(ctx),
            "4" => handle_list(ctx),
            "5" => handle_nav(ctx),
            "6" | "q" | "exit" => break,
            "" => Ok(()),
            other => {
                println!("{}", format!("Unknown option: {}", other).red());
                Ok(())
            }
        };
        // A failed command never exits the menu.
        if let Err(e) = outcome {
            eprintln!("{}", format!("Error: {}", e).red());
        }
    }
    Ok(())
}

fn menu_create(ctx: &mut AppContext) -> Result<()> {
    let Some(line) = prompt("Page name(s), space separated: ")? else {
        return Ok(());
    };
    let tokens: Vec<String> = line.split_whitespace().map(str::to_string).collect();
    if tokens.is_empty() {
        println!("{}", "Nothing to create.".dimmed());
        return Ok(());
    }
    handle_create(ctx, &tokens)
}

fn menu_delete(ctx: &mut AppContext) -> Result<()> {
    handle_list(ctx)?;
    let Some(line) = prompt("Delete (names, indices, ranges like 3-5): ")? else {
        return Ok(());
    };
    let tokens: Vec<String> = line.split_whitespace().map(str::to_string).collect();
    if tokens.is_empty() {
        println!("{}", "Nothing to delete.".dimmed());
        return Ok(());
    }
    handle_delete(ctx, &tokens)
}

fn menu_rename(ctx: &mut AppContext) -> Result<()> {
    handle_list(ctx)?;
    let Some(old) = prompt("Page to rename (name or index): ")? else {
        return Ok(());
    };
    if old.is_empty() {
        println!("{}", "Nothing to rename.".dimmed());
        return Ok(());
    }
    let Some(new_name) = prompt("New name: ")? else {
        return Ok(());
    };
    if new_name.is_empty() {
        println!("{}", "Nothing to rename.".dimmed());
        return Ok(());
    }
    handle_rename(ctx, &old, &new_name)
}

/// Reads one trimmed line from stdin. `None` means end of input.
fn prompt(message: &str) -> Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_pages(pages: &[ListedPage]) {
    if pages.is_empty() {
        println!("No pages found.");
        return;
    }

    let id_width = pages
        .iter()
        .map(|p| p.id.as_str().width())
        .max()
        .unwrap_or(0);

    for page in pages {
        let id_str = page.id.to_string();
        let padding = " ".repeat(id_width.saturating_sub(id_str.width()));
        println!(
            "  {:>3}. {}{}  {}",
            page.index,
            id_str,
            padding,
            page.id.url().dimmed()
        );
    }
}
