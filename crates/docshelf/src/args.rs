use clap::{Parser, Subcommand, ValueEnum};
use docshelfapp::model::SortMode;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "docshelf")]
#[command(about = "Group documents into collections and filter by them", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory (defaults to the platform data dir)
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new collection
    #[command(alias = "n")]
    Create {
        /// Collection name
        name: String,
    },

    /// Delete a collection (documents are not deleted)
    #[command(alias = "rm")]
    Delete {
        /// Collection name or id prefix
        collection: String,
    },

    /// Toggle a document's membership in a collection
    #[command(alias = "t")]
    Toggle {
        /// Collection name or id prefix
        collection: String,
        /// Document id
        document: String,
    },

    /// Put a document in exactly the given collections
    Assign {
        /// Document id
        document: String,
        /// Collection names or id prefixes (none means remove from all)
        collections: Vec<String>,
    },

    /// Toggle a collection in the active filter
    #[command(alias = "s")]
    Select {
        /// Collection name or id prefix
        collection: String,
    },

    /// Set the display ordering of the collections list
    Sort {
        #[arg(value_enum)]
        mode: SortArg,
    },

    /// List collections in display order
    #[command(alias = "ls")]
    List,

    /// Print the current filter label
    Label,

    /// Print which of the given document ids pass the current filter
    Filter {
        /// Document ids to test
        #[arg(required = true)]
        documents: Vec<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum SortArg {
    /// Most documents first
    Most,
    /// Fewest documents first
    Least,
    /// Alphabetical by name
    Name,
}

impl From<SortArg> for SortMode {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Most => SortMode::MostDocuments,
            SortArg::Least => SortMode::FewestDocuments,
            SortArg::Name => SortMode::Alphabetical,
        }
    }
}
