use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pagekit")]
#[command(about = "Page scaffolding and navigation for generated web sites", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Site root directory
    #[arg(short, long, global = true, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create one or more pages (e.g. `about reports/monthly`)
    #[command(alias = "c")]
    Create {
        /// Page identifiers
        #[arg(required = true, num_args = 1..)]
        pages: Vec<String>,
    },

    /// Delete pages by name, 1-based index, or range (e.g. `about 3 5-7`)
    #[command(alias = "d")]
    Delete {
        /// Names, indices, and inclusive ranges
        #[arg(required = true, num_args = 1..)]
        targets: Vec<String>,
    },

    /// Rename a page; the new name replaces the last path segment
    #[command(alias = "mv")]
    Rename {
        /// Name or listing index of the page to rename
        old: String,

        /// New bare name (no '/')
        new_name: String,
    },

    /// List pages
    #[command(alias = "ls")]
    List,

    /// Regenerate the navigation block from the current page set
    Nav,

    /// Seed the site skeleton (registries, base, nav, footer, home)
    Init,
}
