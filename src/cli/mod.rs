//! Command-line interface for bangbang
//!
//! This module defines the CLI structure using clap derive macros.
//! Each noun (board, column, card, comment) has its own submodule; every
//! subcommand is a thin adapter that parses flags, calls one engine
//! operation, and prints the result.

use clap::{Parser, Subcommand};

use crate::error::Result;

mod board;
mod card;
mod column;
mod comment;

/// bangbang - a kanban board in a text file
///
/// The board lives as YAML front matter in `.bangbang.md`; every command
/// rewrites the file through a locked, atomic load-mutate-save cycle.
#[derive(Parser, Debug)]
#[command(name = "bangbang")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the board file (defaults to current directory)
    #[arg(long, global = true, env = "BANGBANG_DIR")]
    pub dir: Option<std::path::PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the board
    Show,

    /// Rename the board
    Rename {
        /// New board title (empty is allowed)
        title: String,
    },

    /// Column management
    #[command(subcommand)]
    Column(ColumnCommands),

    /// Card management
    #[command(subcommand)]
    Card(CardCommands),

    /// Comment management
    #[command(subcommand)]
    Comment(CommentCommands),
}

/// Column subcommands
#[derive(Subcommand, Debug)]
pub enum ColumnCommands {
    /// Add a new empty column
    Add {
        /// Column title
        title: String,
    },

    /// Rename a column
    Rename {
        /// Column id
        id: String,

        /// New title
        title: String,
    },

    /// Remove a column and its cards
    Rm {
        /// Column id
        id: String,
    },

    /// Reorder the columns; the id list must cover every column exactly once
    Order {
        /// Column ids in the desired order
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

/// Card subcommands
#[derive(Subcommand, Debug)]
pub enum CardCommands {
    /// Add a card to a column
    Add {
        /// Target column id
        column: String,

        /// Card title
        title: String,

        /// Card description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Update a card's title and description
    Edit {
        /// Column id holding the card
        column: String,

        /// Card id
        id: String,

        /// New title
        title: String,

        /// New description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Remove a card from a column
    Rm {
        /// Column id holding the card
        column: String,

        /// Card id
        id: String,
    },

    /// Set a column's card list; ids held by other columns are moved in,
    /// cards omitted from the list are dropped
    Order {
        /// Target column id
        column: String,

        /// Card ids forming the column's full new membership
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

/// Comment subcommands
#[derive(Subcommand, Debug)]
pub enum CommentCommands {
    /// Add a comment to a card
    Add {
        /// Column id holding the card
        column: String,

        /// Card id
        card: String,

        /// Comment text
        text: String,
    },

    /// Remove a comment from a card
    Rm {
        /// Column id holding the card
        column: String,

        /// Card id
        card: String,

        /// Comment id
        id: String,
    },
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let ctx = Context {
            dir: self.dir,
            json: self.json,
            quiet: self.quiet,
        };

        match self.command {
            Commands::Show => board::run_show(ctx),
            Commands::Rename { title } => board::run_rename(ctx, title),
            Commands::Column(cmd) => match cmd {
                ColumnCommands::Add { title } => column::run_add(ctx, title),
                ColumnCommands::Rename { id, title } => column::run_rename(ctx, id, title),
                ColumnCommands::Rm { id } => column::run_rm(ctx, id),
                ColumnCommands::Order { ids } => column::run_order(ctx, ids),
            },
            Commands::Card(cmd) => match cmd {
                CardCommands::Add {
                    column,
                    title,
                    description,
                } => card::run_add(ctx, column, title, description),
                CardCommands::Edit {
                    column,
                    id,
                    title,
                    description,
                } => card::run_edit(ctx, column, id, title, description),
                CardCommands::Rm { column, id } => card::run_rm(ctx, column, id),
                CardCommands::Order { column, ids } => card::run_order(ctx, column, ids),
            },
            Commands::Comment(cmd) => match cmd {
                CommentCommands::Add { column, card, text } => {
                    comment::run_add(ctx, column, card, text)
                }
                CommentCommands::Rm { column, card, id } => {
                    comment::run_rm(ctx, column, card, id)
                }
            },
        }
    }
}

/// Flags shared by every subcommand.
#[derive(Debug, Clone)]
pub struct Context {
    pub dir: Option<std::path::PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

impl Context {
    /// Build the engine for the selected board directory.
    pub fn engine(&self) -> crate::engine::Engine {
        let dir = self
            .dir
            .clone()
            .unwrap_or_else(|| std::path::PathBuf::from("."));
        crate::engine::Engine::new(crate::store::BoardStore::open(dir))
    }
}
