use clap::{ArgGroup, Parser, ValueEnum};
use std::path::PathBuf;

/// What `--get` should print.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum GetTarget {
    /// Every book in the catalog
    All,
    /// The book named by --id
    Id,
}

#[derive(Parser, Debug)]
#[command(name = "bookshelf", bin_name = "bookshelf", version)]
#[command(about = "Keep a catalog of books in a JSON file", long_about = None)]
#[command(group(
    ArgGroup::new("action")
        .args(["get", "add", "update", "delete"])
        .multiple(false)
))]
pub struct Cli {
    /// Print books: `all`, or `id` together with --id
    #[arg(long, value_enum, value_name = "all|id", help_heading = "Actions")]
    pub get: Option<GetTarget>,

    /// Add a book (needs --id, --title, --author, --price)
    #[arg(long, help_heading = "Actions")]
    pub add: bool,

    /// Update the book with --id, overwriting the given fields
    #[arg(long, help_heading = "Actions")]
    pub update: bool,

    /// Delete the book with --id
    #[arg(long, help_heading = "Actions")]
    pub delete: bool,

    /// Book ID
    #[arg(long, help_heading = "Book")]
    pub id: Option<String>,

    /// Book title
    #[arg(long, help_heading = "Book")]
    pub title: Option<String>,

    /// Book author
    #[arg(long, help_heading = "Book")]
    pub author: Option<String>,

    /// Book price, e.g. 12.50
    #[arg(long, allow_hyphen_values = true, help_heading = "Book")]
    pub price: Option<String>,

    /// Image URL of the book
    #[arg(long = "img", value_name = "URL", help_heading = "Book")]
    pub image_url: Option<String>,

    /// Catalog file (defaults to the configured file, then books.json)
    #[arg(short, long, env = "BOOKSHELF_FILE", help_heading = "Options")]
    pub file: Option<PathBuf>,

    /// Configuration file
    #[arg(long, env = "BOOKSHELF_CONFIG", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Print books as JSON
    #[arg(long, help_heading = "Options")]
    pub json: bool,

    /// Verbose output (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

/// The single operation selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Get,
    Add,
    Update,
    Delete,
}

impl Cli {
    /// Running with no action flag lists the catalog.
    pub fn action(&self) -> Action {
        match (self.get, self.add, self.update, self.delete) {
            (Some(GetTarget::Id), ..) => Action::Get,
            (Some(GetTarget::All), ..) => Action::List,
            (None, true, _, _) => Action::Add,
            (None, _, true, _) => Action::Update,
            (None, _, _, true) => Action::Delete,
            _ => Action::List,
        }
    }
}
